use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::vacancy_request_details_resource::VacancyRequestDetailsResource;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateVacancyRequestRequestResource {
    #[validate(nested)]
    pub details: VacancyRequestDetailsResource,
    pub assignee_ids: Vec<String>,
    #[serde(default)]
    pub as_draft: bool,
}
