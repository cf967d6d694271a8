use async_trait::async_trait;
use uuid::Uuid;

use crate::authorization::domain::model::enums::authorization_domain_error::AuthorizationDomainError;

/// Workflow state the ownership predicates read. Implementations must not
/// mutate anything.
#[async_trait]
pub trait RequestOwnershipFacade: Send + Sync {
    async fn is_request_author(
        &self,
        space_id: Uuid,
        caller_id: Uuid,
        request_id: Uuid,
    ) -> Result<bool, AuthorizationDomainError>;

    async fn is_task_assignee(
        &self,
        space_id: Uuid,
        caller_id: Uuid,
        request_id: Uuid,
        task_id: Uuid,
    ) -> Result<bool, AuthorizationDomainError>;
}
