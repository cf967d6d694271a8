use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    enums::vacancy_request_domain_error::VacancyRequestDomainError,
    value_objects::user_id::UserId,
};

pub fn parse_request_id(value: &str) -> Result<Uuid, VacancyRequestDomainError> {
    Uuid::parse_str(value.trim()).map_err(|_| VacancyRequestDomainError::InvalidVacancyRequestId)
}

pub fn parse_task_id(value: &str) -> Result<Uuid, VacancyRequestDomainError> {
    Uuid::parse_str(value.trim()).map_err(|_| VacancyRequestDomainError::InvalidApprovalTaskId)
}

pub fn parse_user_ids(values: Vec<String>) -> Result<Vec<UserId>, VacancyRequestDomainError> {
    values.into_iter().map(UserId::new).collect()
}
