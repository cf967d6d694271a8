use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    enums::vacancy_request_domain_error::VacancyRequestDomainError,
    value_objects::{
        entity_id::{parse_request_id, parse_user_ids},
        space_id::SpaceId,
        user_id::UserId,
    },
};

#[derive(Clone, Debug)]
pub struct SaveApprovalTasksCommand {
    space_id: SpaceId,
    request_id: Uuid,
    actor_id: UserId,
    assignee_ids: Vec<UserId>,
}

impl SaveApprovalTasksCommand {
    pub fn new(
        space_id: String,
        request_id: String,
        actor_id: String,
        assignee_ids: Vec<String>,
    ) -> Result<Self, VacancyRequestDomainError> {
        Ok(Self {
            space_id: SpaceId::new(space_id)?,
            request_id: parse_request_id(&request_id)?,
            actor_id: UserId::new(actor_id)?,
            assignee_ids: parse_user_ids(assignee_ids)?,
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
    pub fn assignee_ids(&self) -> &[UserId] {
        &self.assignee_ids
    }
}
