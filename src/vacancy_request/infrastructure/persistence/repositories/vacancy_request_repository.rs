use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    entities::vacancy_request::VacancyRequest,
    enums::{
        vacancy_request_domain_error::VacancyRequestDomainError,
        vacancy_request_status::VacancyRequestStatus,
    },
    value_objects::space_id::SpaceId,
};

#[async_trait]
pub trait VacancyRequestRepository: Send {
    async fn find_request(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
    ) -> Result<Option<VacancyRequest>, VacancyRequestDomainError>;

    /// Loads the request and holds its row until the unit of work ends.
    async fn lock_request(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
    ) -> Result<Option<VacancyRequest>, VacancyRequestDomainError>;

    async fn insert_request(
        &mut self,
        request: &VacancyRequest,
    ) -> Result<(), VacancyRequestDomainError>;

    async fn update_request(
        &mut self,
        request: &VacancyRequest,
    ) -> Result<(), VacancyRequestDomainError>;

    /// Moves the status only when it still equals `expected`. Returns whether
    /// the row changed.
    async fn compare_and_set_status(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
        expected: VacancyRequestStatus,
        target: VacancyRequestStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, VacancyRequestDomainError>;
}
