use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    enums::{
        approval_decision::ApprovalDecision,
        vacancy_request_domain_error::VacancyRequestDomainError,
    },
    value_objects::{
        entity_id::{parse_request_id, parse_task_id},
        space_id::SpaceId,
        user_id::UserId,
    },
};

#[derive(Clone, Debug)]
pub struct DecideApprovalTaskCommand {
    space_id: SpaceId,
    request_id: Uuid,
    task_id: Uuid,
    actor_id: UserId,
    decision: ApprovalDecision,
    comment: Option<String>,
}

pub struct DecideApprovalTaskCommandParts {
    pub space_id: String,
    pub request_id: String,
    pub task_id: String,
    pub actor_id: String,
    pub decision: ApprovalDecision,
    pub comment: Option<String>,
}

impl DecideApprovalTaskCommand {
    pub fn new(parts: DecideApprovalTaskCommandParts) -> Result<Self, VacancyRequestDomainError> {
        Ok(Self {
            space_id: SpaceId::new(parts.space_id)?,
            request_id: parse_request_id(&parts.request_id)?,
            task_id: parse_task_id(&parts.task_id)?,
            actor_id: UserId::new(parts.actor_id)?,
            decision: parts.decision,
            comment: parts
                .comment
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        })
    }

    pub fn space_id(&self) -> SpaceId {
        self.space_id
    }
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
    pub fn task_id(&self) -> Uuid {
        self.task_id
    }
    pub fn actor_id(&self) -> UserId {
        self.actor_id
    }
    pub fn decision(&self) -> ApprovalDecision {
        self.decision
    }
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
