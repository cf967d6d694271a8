use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    enums::{
        approval_decision::ApprovalDecision, approval_state::ApprovalState,
        vacancy_request_rejection::VacancyRequestRejection,
    },
    value_objects::{space_id::SpaceId, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct ApprovalTask {
    id: Uuid,
    space_id: SpaceId,
    request_id: Uuid,
    assignee_id: UserId,
    state: ApprovalState,
    comment: Option<String>,
    decided_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

pub struct ApprovalTaskParts {
    pub id: Uuid,
    pub space_id: SpaceId,
    pub request_id: Uuid,
    pub assignee_id: UserId,
    pub state: ApprovalState,
    pub comment: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ApprovalTask {
    pub fn new_pending(
        space_id: SpaceId,
        request_id: Uuid,
        assignee_id: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            space_id,
            request_id,
            assignee_id,
            state: ApprovalState::Pending,
            comment: None,
            decided_at: None,
            created_at,
        }
    }

    pub fn restore(parts: ApprovalTaskParts) -> Self {
        Self {
            id: parts.id,
            space_id: parts.space_id,
            request_id: parts.request_id,
            assignee_id: parts.assignee_id,
            state: parts.state,
            comment: parts.comment,
            decided_at: parts.decided_at,
            created_at: parts.created_at,
        }
    }

    /// Returns the state held before the decision.
    pub fn decide(
        &mut self,
        decision: ApprovalDecision,
        comment: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<ApprovalState, VacancyRequestRejection> {
        let target = decision.target_state();
        if self.state == target {
            return Err(VacancyRequestRejection::TaskAlreadyDecided(self.state));
        }

        let previous = self.state;
        self.state = target;
        self.comment = comment;
        self.decided_at = Some(now);
        Ok(previous)
    }

    /// Puts a task that asked for changes back in the queue after the author
    /// revised the request.
    pub fn reopen(&mut self) -> Option<ApprovalState> {
        if self.state != ApprovalState::RequestChanges {
            return None;
        }
        let previous = self.state;
        self.state = ApprovalState::Pending;
        self.decided_at = None;
        Some(previous)
    }

    pub fn is_assigned_to(&self, user_id: UserId) -> bool {
        self.assignee_id == user_id
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn space_id(&self) -> SpaceId {
        self.space_id
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn assignee_id(&self) -> UserId {
        self.assignee_id
    }

    pub fn state(&self) -> ApprovalState {
        self.state
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn decided_at(&self) -> Option<DateTime<Utc>> {
        self.decided_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
