use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    enums::vacancy_request_domain_error::VacancyRequestDomainError,
    value_objects::{
        entity_id::{parse_request_id, parse_user_ids},
        space_id::SpaceId,
        user_id::UserId,
        vacancy_request_details::VacancyRequestDetails,
    },
};

#[derive(Clone, Debug)]
pub struct UpdateVacancyRequestCommand {
    space_id: SpaceId,
    request_id: Uuid,
    actor_id: UserId,
    details: VacancyRequestDetails,
    assignee_ids: Vec<UserId>,
}

pub struct UpdateVacancyRequestCommandParts {
    pub space_id: String,
    pub request_id: String,
    pub actor_id: String,
    pub details: VacancyRequestDetails,
    pub assignee_ids: Vec<String>,
}

impl UpdateVacancyRequestCommand {
    pub fn new(parts: UpdateVacancyRequestCommandParts) -> Result<Self, VacancyRequestDomainError> {
        parts
            .details
            .validate()
            .map_err(VacancyRequestDomainError::InvalidRequestDetails)?;

        Ok(Self {
            space_id: SpaceId::new(parts.space_id)?,
            request_id: parse_request_id(&parts.request_id)?,
            actor_id: UserId::new(parts.actor_id)?,
            details: parts.details,
            assignee_ids: parse_user_ids(parts.assignee_ids)?,
        })
    }

    pub fn space_id(&self) -> SpaceId {
        self.space_id
    }
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
    pub fn actor_id(&self) -> UserId {
        self.actor_id
    }
    pub fn details(&self) -> &VacancyRequestDetails {
        &self.details
    }
    pub fn assignee_ids(&self) -> &[UserId] {
        &self.assignee_ids
    }
}
