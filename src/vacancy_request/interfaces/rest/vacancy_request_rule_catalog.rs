use crate::authorization::domain::{
    model::enums::{
        auth_predicate::AuthPredicate, authorization_domain_error::AuthorizationDomainError,
        space_role::SpaceRole,
    },
    services::rule_table::RuleTableBuilder,
};

pub const VACANCY_REQUEST_MODULE: &str = "vacancy_request";

const EDITORS: &[SpaceRole] = &[SpaceRole::Admin, SpaceRole::Manager, SpaceRole::Specialist];
const APPROVERS: &[SpaceRole] = &[SpaceRole::Admin, SpaceRole::Manager, SpaceRole::Hr];

/// Access rules for every route served by the vacancy request router.
pub fn register_vacancy_request_rules(
    builder: &mut RuleTableBuilder,
) -> Result<(), AuthorizationDomainError> {
    let module = VACANCY_REQUEST_MODULE;

    builder
        .register(module, "view", &SpaceRole::ALL, "/vacancy-requests/{id} [GET]", None)?
        .register(
            module,
            "view",
            &SpaceRole::ALL,
            "/vacancy-requests/{id}/approval-tasks [GET]",
            None,
        )?
        .register(
            module,
            "view",
            &SpaceRole::ALL,
            "/vacancy-requests/{id}/history [GET]",
            None,
        )?
        .register(module, "create", EDITORS, "/vacancy-requests [POST]", None)?
        .register(
            module,
            "edit",
            EDITORS,
            "/vacancy-requests/{id} [PUT]",
            Some(AuthPredicate::allow_self(EDITORS)),
        )?
        .register(
            module,
            "edit",
            EDITORS,
            "/vacancy-requests/{id}/approval-tasks [PUT]",
            Some(AuthPredicate::allow_self(EDITORS)),
        )?
        .register(
            module,
            "change_status",
            EDITORS,
            "/vacancy-requests/{id}/status [PUT]",
            Some(AuthPredicate::allow_self(EDITORS)),
        )?
        .register(
            module,
            "approve",
            APPROVERS,
            "/vacancy-requests/{id}/approval-tasks/{task_id}/approve [PUT]",
            Some(AuthPredicate::allow_task_assignee(APPROVERS)),
        )?
        .register(
            module,
            "approve",
            APPROVERS,
            "/vacancy-requests/{id}/approval-tasks/{task_id}/request-changes [PUT]",
            Some(AuthPredicate::allow_task_assignee(APPROVERS)),
        )?
        .register(
            module,
            "approve",
            APPROVERS,
            "/vacancy-requests/{id}/approval-tasks/{task_id}/reject [PUT]",
            Some(AuthPredicate::allow_task_assignee(APPROVERS)),
        )?
        .register(
            module,
            "create_vacancy",
            EDITORS,
            "/vacancy-requests/{id}/vacancy [POST]",
            None,
        )?;

    Ok(())
}
