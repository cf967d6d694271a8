use async_trait::async_trait;
use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    entities::approval_history_entry::ApprovalHistoryEntry,
    enums::vacancy_request_domain_error::VacancyRequestDomainError,
    value_objects::space_id::SpaceId,
};

#[async_trait]
pub trait ApprovalHistoryRepository: Send {
    async fn append_history(
        &mut self,
        entry: &ApprovalHistoryEntry,
    ) -> Result<(), VacancyRequestDomainError>;

    async fn list_history(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
    ) -> Result<Vec<ApprovalHistoryEntry>, VacancyRequestDomainError>;
}
