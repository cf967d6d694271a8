use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::authorization::domain::model::{
    enums::authorization_domain_error::AuthorizationDomainError,
    queries::{
        authorize_operation_query::AuthorizeOperationQuery,
        list_role_permissions_query::ListRolePermissionsQuery,
    },
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorizationDecisionResult {
    pub allowed: bool,
    pub reason: String,
    pub module: Option<String>,
    pub permission: Option<String>,
}

#[async_trait]
pub trait AuthorizationQueryService: Send + Sync {
    async fn handle_authorize(
        &self,
        query: AuthorizeOperationQuery,
    ) -> Result<AuthorizationDecisionResult, AuthorizationDomainError>;

    async fn handle_list_role_permissions(
        &self,
        query: ListRolePermissionsQuery,
    ) -> Result<BTreeMap<String, Vec<String>>, AuthorizationDomainError>;
}
