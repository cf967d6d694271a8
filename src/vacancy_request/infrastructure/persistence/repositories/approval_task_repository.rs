use async_trait::async_trait;
use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    entities::approval_task::ApprovalTask,
    enums::vacancy_request_domain_error::VacancyRequestDomainError,
    value_objects::space_id::SpaceId,
};

#[async_trait]
pub trait ApprovalTaskRepository: Send {
    /// Active tasks of a request, oldest first.
    async fn list_tasks(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
    ) -> Result<Vec<ApprovalTask>, VacancyRequestDomainError>;

    async fn find_task(
        &mut self,
        space_id: SpaceId,
        task_id: Uuid,
    ) -> Result<Option<ApprovalTask>, VacancyRequestDomainError>;

    async fn insert_task(&mut self, task: &ApprovalTask) -> Result<(), VacancyRequestDomainError>;

    async fn update_task(&mut self, task: &ApprovalTask) -> Result<(), VacancyRequestDomainError>;

    async fn delete_task(
        &mut self,
        space_id: SpaceId,
        task_id: Uuid,
    ) -> Result<(), VacancyRequestDomainError>;
}
