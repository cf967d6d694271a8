use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::vacancy_request::domain::{
    model::{entities::approval_task::ApprovalTask, value_objects::field_change::FieldChange},
    services::{
        vacancy_request_command_service::ApprovalDecisionResult,
        vacancy_request_query_service::{ApprovalHistoryView, ApprovalTaskView},
    },
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ApprovalTaskResource {
    pub id: Uuid,
    pub assignee_id: Uuid,
    pub assignee_name: Option<String>,
    pub state: String,
    pub comment: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<&ApprovalTask> for ApprovalTaskResource {
    fn from(task: &ApprovalTask) -> Self {
        Self {
            id: task.id(),
            assignee_id: task.assignee_id().value(),
            assignee_name: None,
            state: task.state().as_str().to_string(),
            comment: task.comment().map(str::to_string),
            decided_at: task.decided_at(),
            created_at: task.created_at(),
        }
    }
}

impl From<ApprovalTaskView> for ApprovalTaskResource {
    fn from(view: ApprovalTaskView) -> Self {
        Self {
            id: view.id,
            assignee_id: view.assignee_id.value(),
            assignee_name: view.assignee_name,
            state: view.state.as_str().to_string(),
            comment: view.comment,
            decided_at: view.decided_at,
            created_at: view.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct FieldChangeResource {
    pub field: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl From<FieldChange> for FieldChangeResource {
    fn from(change: FieldChange) -> Self {
        Self {
            field: change.field,
            old_value: change.old_value,
            new_value: change.new_value,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ApprovalHistoryResource {
    pub id: Uuid,
    /// Absent for request-level entries.
    pub task_id: Option<Uuid>,
    pub assignee_id: Uuid,
    pub assignee_name: Option<String>,
    pub state: String,
    pub comment: Option<String>,
    pub changes: Vec<FieldChangeResource>,
    pub created_at: DateTime<Utc>,
}

impl From<ApprovalHistoryView> for ApprovalHistoryResource {
    fn from(view: ApprovalHistoryView) -> Self {
        Self {
            id: view.id,
            task_id: view.task_id,
            assignee_id: view.assignee_id.value(),
            assignee_name: view.assignee_name,
            state: view.state.as_str().to_string(),
            comment: view.comment,
            changes: view.changes.into_iter().map(Into::into).collect(),
            created_at: view.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ApprovalDecisionResponseResource {
    pub task: ApprovalTaskResource,
    pub request_status: String,
}

impl From<&ApprovalDecisionResult> for ApprovalDecisionResponseResource {
    fn from(result: &ApprovalDecisionResult) -> Self {
        Self {
            task: (&result.task).into(),
            request_status: result.request_status.as_str().to_string(),
        }
    }
}
