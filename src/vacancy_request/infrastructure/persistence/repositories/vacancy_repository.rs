use async_trait::async_trait;
use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    entities::vacancy::Vacancy, enums::vacancy_request_domain_error::VacancyRequestDomainError,
    value_objects::space_id::SpaceId,
};

#[async_trait]
pub trait VacancyRepository: Send {
    async fn find_vacancy_by_request(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
    ) -> Result<Option<Vacancy>, VacancyRequestDomainError>;

    async fn insert_vacancy(&mut self, vacancy: &Vacancy) -> Result<(), VacancyRequestDomainError>;

    /// Returns how many vacancies moved to `cancelled`.
    async fn cancel_vacancies_by_request(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
    ) -> Result<u64, VacancyRequestDomainError>;
}
