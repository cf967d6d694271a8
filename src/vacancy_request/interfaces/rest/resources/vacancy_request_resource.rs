use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::vacancy_request_details_resource::VacancyRequestDetailsResource;
use crate::vacancy_request::domain::model::entities::{
    vacancy::Vacancy, vacancy_request::VacancyRequest,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct VacancyRequestResource {
    pub id: Uuid,
    pub space_id: Uuid,
    pub author_id: Uuid,
    pub status: String,
    pub details: VacancyRequestDetailsResource,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&VacancyRequest> for VacancyRequestResource {
    fn from(request: &VacancyRequest) -> Self {
        Self {
            id: request.id(),
            space_id: request.space_id().value(),
            author_id: request.author_id().value(),
            status: request.status().as_str().to_string(),
            details: request.details().into(),
            created_at: request.created_at(),
            updated_at: request.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct VacancyResource {
    pub id: Uuid,
    pub space_id: Uuid,
    pub request_id: Option<Uuid>,
    pub author_id: Uuid,
    pub status: String,
    pub details: VacancyRequestDetailsResource,
    pub created_at: DateTime<Utc>,
}

impl From<&Vacancy> for VacancyResource {
    fn from(vacancy: &Vacancy) -> Self {
        Self {
            id: vacancy.id(),
            space_id: vacancy.space_id().value(),
            request_id: vacancy.request_id(),
            author_id: vacancy.author_id().value(),
            status: vacancy.status().as_str().to_string(),
            details: vacancy.details().into(),
            created_at: vacancy.created_at(),
        }
    }
}
