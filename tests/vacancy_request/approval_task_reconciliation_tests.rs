use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;
use vacancy_approval_api::vacancy_request::domain::{
    model::{
        entities::approval_task::ApprovalTask,
        enums::vacancy_request_rejection::VacancyRequestRejection,
        value_objects::user_id::UserId,
    },
    services::approval_task_reconciliation::plan_reconciliation,
};

use crate::support::{APPROVER_A_ID, APPROVER_B_ID, APPROVER_C_ID, OUTSIDER_ID, space_id, user_id};

fn members() -> HashMap<UserId, String> {
    HashMap::from([
        (user_id(APPROVER_A_ID), "Alice Approver".to_string()),
        (user_id(APPROVER_B_ID), "Bob Approver".to_string()),
        (user_id(APPROVER_C_ID), "Carol Approver".to_string()),
    ])
}

fn tasks_for(assignees: &[&str]) -> Vec<ApprovalTask> {
    let request_id = Uuid::now_v7();
    assignees
        .iter()
        .map(|assignee| ApprovalTask::new_pending(space_id(), request_id, user_id(assignee), Utc::now()))
        .collect()
}

#[test]
fn same_assignees_produce_an_empty_plan() {
    let current = tasks_for(&[APPROVER_A_ID, APPROVER_B_ID]);

    let plan = plan_reconciliation(
        &current,
        &[user_id(APPROVER_B_ID), user_id(APPROVER_A_ID)],
        &members(),
    )
    .expect("plan");

    assert!(plan.is_noop());
    assert_eq!(plan.keep.len(), 2);
}

#[test]
fn swapping_an_assignee_keeps_the_shared_task() {
    let current = tasks_for(&[APPROVER_A_ID, APPROVER_B_ID]);

    let plan = plan_reconciliation(
        &current,
        &[user_id(APPROVER_B_ID), user_id(APPROVER_C_ID)],
        &members(),
    )
    .expect("plan");

    assert_eq!(plan.keep.len(), 1);
    assert_eq!(plan.keep[0].id(), current[1].id());
    assert_eq!(plan.add, vec![user_id(APPROVER_C_ID)]);
    assert_eq!(plan.remove.len(), 1);
    assert_eq!(plan.remove[0].id(), current[0].id());
}

#[test]
fn removals_follow_stored_order() {
    let current = tasks_for(&[APPROVER_A_ID, APPROVER_B_ID, APPROVER_C_ID]);

    let plan =
        plan_reconciliation(&current, &[user_id(APPROVER_B_ID)], &members()).expect("plan");

    let removed: Vec<_> = plan.remove.iter().map(ApprovalTask::assignee_id).collect();
    assert_eq!(removed, vec![user_id(APPROVER_A_ID), user_id(APPROVER_C_ID)]);
}

#[test]
fn empty_desired_list_is_rejected() {
    let current = tasks_for(&[APPROVER_A_ID]);

    let result = plan_reconciliation(&current, &[], &members());

    assert!(matches!(result, Err(VacancyRequestRejection::NoApprovers)));
}

#[test]
fn non_member_is_rejected() {
    let result = plan_reconciliation(&[], &[user_id(OUTSIDER_ID)], &members());

    assert!(matches!(
        result,
        Err(VacancyRequestRejection::UnknownAssignee(id)) if id == user_id(OUTSIDER_ID).value()
    ));
}

#[test]
fn duplicate_is_rejected_by_member_name() {
    let result = plan_reconciliation(
        &[],
        &[user_id(APPROVER_C_ID), user_id(APPROVER_C_ID)],
        &members(),
    );

    assert!(matches!(
        result,
        Err(VacancyRequestRejection::DuplicateAssignee(name)) if name == "Carol Approver"
    ));
}
