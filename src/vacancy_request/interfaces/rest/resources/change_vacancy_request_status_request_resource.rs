use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ChangeVacancyRequestStatusRequestResource {
    /// `created` submits a draft, `cancelled` withdraws the request.
    #[validate(length(min = 1))]
    pub status: String,
}
