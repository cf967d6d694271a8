use async_trait::async_trait;

use crate::vacancy_request::{
    domain::model::enums::vacancy_request_domain_error::VacancyRequestDomainError,
    infrastructure::persistence::repositories::{
        approval_history_repository::ApprovalHistoryRepository,
        approval_task_repository::ApprovalTaskRepository,
        vacancy_repository::VacancyRepository,
        vacancy_request_repository::VacancyRequestRepository,
    },
};

/// Repositories bound to one connection. Work done through a unit of work
/// obtained from [`VacancyRequestUnitOfWorkFactory::begin`] is discarded
/// unless `commit` is called.
#[async_trait]
pub trait VacancyRequestUnitOfWork:
    VacancyRequestRepository + ApprovalTaskRepository + ApprovalHistoryRepository + VacancyRepository
{
    async fn commit(self: Box<Self>) -> Result<(), VacancyRequestDomainError>;
}

#[async_trait]
pub trait VacancyRequestUnitOfWorkFactory: Send + Sync {
    /// Opens a transaction.
    async fn begin(&self) -> Result<Box<dyn VacancyRequestUnitOfWork>, VacancyRequestDomainError>;

    /// Borrows a connection without a transaction, for reads. `commit` is a
    /// no-op.
    async fn session(
        &self,
    ) -> Result<Box<dyn VacancyRequestUnitOfWork>, VacancyRequestDomainError>;
}
