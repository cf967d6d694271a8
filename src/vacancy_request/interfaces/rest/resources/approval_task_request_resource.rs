use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SaveApprovalTasksRequestResource {
    pub assignee_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct ApprovalDecisionRequestResource {
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}
