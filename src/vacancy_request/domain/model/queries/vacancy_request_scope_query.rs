use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    enums::vacancy_request_domain_error::VacancyRequestDomainError,
    value_objects::{entity_id::parse_request_id, space_id::SpaceId},
};

/// Addresses one request within a space; used by the get, task list and
/// history list queries.
#[derive(Clone, Debug)]
pub struct VacancyRequestScopeQuery {
    space_id: SpaceId,
    request_id: Uuid,
}

impl VacancyRequestScopeQuery {
    pub fn new(space_id: String, request_id: String) -> Result<Self, VacancyRequestDomainError> {
        Ok(Self {
            space_id: SpaceId::new(space_id)?,
            request_id: parse_request_id(&request_id)?,
        })
    }

    pub fn space_id(&self) -> SpaceId {
        self.space_id
    }
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}
