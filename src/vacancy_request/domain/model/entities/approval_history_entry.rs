use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    entities::approval_task::ApprovalTask,
    enums::approval_state::ApprovalState,
    value_objects::{field_change::FieldChange, space_id::SpaceId, user_id::UserId},
};

/// Append-only audit record. `task_id` is `None` for request-level
/// (composite) events.
#[derive(Clone, Debug)]
pub struct ApprovalHistoryEntry {
    pub id: Uuid,
    pub space_id: SpaceId,
    pub request_id: Uuid,
    pub task_id: Option<Uuid>,
    pub assignee_id: UserId,
    pub state: ApprovalState,
    pub comment: Option<String>,
    pub changes: Vec<FieldChange>,
    pub created_at: DateTime<Utc>,
}

impl ApprovalHistoryEntry {
    pub fn for_task(
        task: &ApprovalTask,
        state: ApprovalState,
        previous: Option<ApprovalState>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let comment = task
            .comment()
            .filter(|_| {
                matches!(
                    state,
                    ApprovalState::Approved
                        | ApprovalState::RequestChanges
                        | ApprovalState::Rejected
                )
            })
            .map(str::to_string);

        let mut changes = vec![FieldChange::new(
            "state",
            previous.map(|s| s.as_str().to_string()),
            Some(state.as_str().to_string()),
        )];
        if comment.is_some() {
            changes.push(FieldChange::new("comment", None, comment.clone()));
        }

        Self {
            id: Uuid::now_v7(),
            space_id: task.space_id(),
            request_id: task.request_id(),
            task_id: Some(task.id()),
            assignee_id: task.assignee_id(),
            state,
            comment,
            changes,
            created_at,
        }
    }

    pub fn composite(
        space_id: SpaceId,
        request_id: Uuid,
        actor_id: UserId,
        state: ApprovalState,
        changes: Vec<FieldChange>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            space_id,
            request_id,
            task_id: None,
            assignee_id: actor_id,
            state,
            comment: None,
            changes,
            created_at,
        }
    }

    pub fn is_composite(&self) -> bool {
        self.task_id.is_none()
    }
}
