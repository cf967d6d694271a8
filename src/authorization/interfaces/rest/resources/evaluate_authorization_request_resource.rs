use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct EvaluateAuthorizationRequestResource {
    #[validate(length(min = 1))]
    pub space_id: String,
    #[validate(length(min = 1))]
    pub caller_id: String,
    #[validate(length(min = 1))]
    pub caller_role: String,
    #[validate(length(min = 1))]
    pub method: String,
    #[validate(length(min = 1))]
    pub uri: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EvaluateAuthorizationResponseResource {
    pub allowed: bool,
    pub reason: String,
    pub module: Option<String>,
    pub permission: Option<String>,
}
