use crate::vacancy_request::domain::model::{
    enums::vacancy_request_domain_error::VacancyRequestDomainError,
    value_objects::{
        entity_id::parse_user_ids, space_id::SpaceId, user_id::UserId,
        vacancy_request_details::VacancyRequestDetails,
    },
};

#[derive(Clone, Debug)]
pub struct CreateVacancyRequestCommand {
    space_id: SpaceId,
    author_id: UserId,
    details: VacancyRequestDetails,
    assignee_ids: Vec<UserId>,
    as_draft: bool,
}

pub struct CreateVacancyRequestCommandParts {
    pub space_id: String,
    pub author_id: String,
    pub details: VacancyRequestDetails,
    pub assignee_ids: Vec<String>,
    pub as_draft: bool,
}

impl CreateVacancyRequestCommand {
    pub fn new(parts: CreateVacancyRequestCommandParts) -> Result<Self, VacancyRequestDomainError> {
        parts
            .details
            .validate()
            .map_err(VacancyRequestDomainError::InvalidRequestDetails)?;

        Ok(Self {
            space_id: SpaceId::new(parts.space_id)?,
            author_id: UserId::new(parts.author_id)?,
            details: parts.details,
            assignee_ids: parse_user_ids(parts.assignee_ids)?,
            as_draft: parts.as_draft,
        })
    }

    pub fn space_id(&self) -> SpaceId {
        self.space_id
    }
    pub fn author_id(&self) -> UserId {
        self.author_id
    }
    pub fn details(&self) -> &VacancyRequestDetails {
        &self.details
    }
    pub fn assignee_ids(&self) -> &[UserId] {
        &self.assignee_ids
    }
    pub fn as_draft(&self) -> bool {
        self.as_draft
    }
}
