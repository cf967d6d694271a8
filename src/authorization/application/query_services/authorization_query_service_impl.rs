use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;

use crate::authorization::{
    domain::{
        model::{
            enums::{
                auth_predicate::AuthPredicate,
                authorization_domain_error::AuthorizationDomainError,
            },
            queries::{
                authorize_operation_query::AuthorizeOperationQuery,
                list_role_permissions_query::ListRolePermissionsQuery,
            },
            value_objects::predicate_context::{
                PredicateContext, REQUEST_ID_PARAMETER, TASK_ID_PARAMETER,
            },
        },
        services::{
            authorization_query_service::{AuthorizationDecisionResult, AuthorizationQueryService},
            rule_table::RuleTable,
        },
    },
    interfaces::acl::request_ownership_facade::RequestOwnershipFacade,
};

enum PredicateVerdict {
    Granted,
    Refused(String),
}

pub struct AuthorizationQueryServiceImpl {
    rule_table: Arc<RuleTable>,
    ownership_facade: Arc<dyn RequestOwnershipFacade>,
    default_allow: bool,
}

impl AuthorizationQueryServiceImpl {
    pub fn new(
        rule_table: Arc<RuleTable>,
        ownership_facade: Arc<dyn RequestOwnershipFacade>,
        default_allow: bool,
    ) -> Self {
        Self {
            rule_table,
            ownership_facade,
            default_allow,
        }
    }

    async fn evaluate_predicate(
        &self,
        predicate: &AuthPredicate,
        context: &PredicateContext,
    ) -> Result<PredicateVerdict, AuthorizationDomainError> {
        if !predicate.allows_role(context.caller_role) {
            return Ok(PredicateVerdict::Refused(format!(
                "role {} is not allowed",
                context.caller_role
            )));
        }

        match predicate {
            AuthPredicate::AllowRoles(_) => Ok(PredicateVerdict::Granted),
            AuthPredicate::AllowSelf(_) => {
                let Some(request_id) = context.uuid_param(REQUEST_ID_PARAMETER) else {
                    return Ok(PredicateVerdict::Refused(
                        "request id missing from path".to_string(),
                    ));
                };
                let is_author = self
                    .ownership_facade
                    .is_request_author(context.space_id, context.caller_id, request_id)
                    .await?;
                Ok(if is_author {
                    PredicateVerdict::Granted
                } else {
                    PredicateVerdict::Refused("caller is not the request author".to_string())
                })
            }
            AuthPredicate::AllowTaskAssignee(_) => {
                let (Some(request_id), Some(task_id)) = (
                    context.uuid_param(REQUEST_ID_PARAMETER),
                    context.uuid_param(TASK_ID_PARAMETER),
                ) else {
                    return Ok(PredicateVerdict::Refused(
                        "request or task id missing from path".to_string(),
                    ));
                };
                let is_assignee = self
                    .ownership_facade
                    .is_task_assignee(context.space_id, context.caller_id, request_id, task_id)
                    .await?;
                Ok(if is_assignee {
                    PredicateVerdict::Granted
                } else {
                    PredicateVerdict::Refused("caller is not the task assignee".to_string())
                })
            }
        }
    }
}

#[async_trait]
impl AuthorizationQueryService for AuthorizationQueryServiceImpl {
    async fn handle_authorize(
        &self,
        query: AuthorizeOperationQuery,
    ) -> Result<AuthorizationDecisionResult, AuthorizationDomainError> {
        let Some(resolved) = self.rule_table.resolve(query.method(), query.uri()) else {
            tracing::debug!(
                method = %query.method(),
                uri = query.uri(),
                default_allow = self.default_allow,
                "no authorization rule matched"
            );
            return Ok(AuthorizationDecisionResult {
                allowed: self.default_allow,
                reason: if self.default_allow {
                    "no rule found; default allow".to_string()
                } else {
                    "no rule found; default deny".to_string()
                },
                module: None,
                permission: None,
            });
        };

        let context = PredicateContext {
            space_id: query.space_id(),
            caller_id: query.caller_id(),
            caller_role: query.caller_role(),
            uri: query.uri().to_string(),
            path_params: resolved.path_params,
        };
        let rule = resolved.rule;

        let verdict = self.evaluate_predicate(rule.predicate(), &context).await?;
        let (allowed, reason) = match verdict {
            PredicateVerdict::Granted => (true, format!("{} matched", rule.predicate().name())),
            PredicateVerdict::Refused(reason) => (false, reason),
        };

        tracing::debug!(
            space_id = %context.space_id,
            caller_id = %context.caller_id,
            rule = %rule.declaration(),
            allowed,
            reason = reason.as_str(),
            "authorization decision"
        );

        Ok(AuthorizationDecisionResult {
            allowed,
            reason,
            module: Some(rule.module().to_string()),
            permission: Some(rule.permission().to_string()),
        })
    }

    async fn handle_list_role_permissions(
        &self,
        query: ListRolePermissionsQuery,
    ) -> Result<BTreeMap<String, Vec<String>>, AuthorizationDomainError> {
        Ok(self.rule_table.permissions_for(query.role()))
    }
}
