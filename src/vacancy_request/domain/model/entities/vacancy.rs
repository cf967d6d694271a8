use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    entities::vacancy_request::VacancyRequest,
    enums::vacancy_status::VacancyStatus,
    value_objects::{space_id::SpaceId, user_id::UserId, vacancy_request_details::VacancyRequestDetails},
};

#[derive(Clone, Debug)]
pub struct Vacancy {
    id: Uuid,
    space_id: SpaceId,
    request_id: Option<Uuid>,
    author_id: UserId,
    details: VacancyRequestDetails,
    status: VacancyStatus,
    created_at: DateTime<Utc>,
}

pub struct VacancyParts {
    pub id: Uuid,
    pub space_id: SpaceId,
    pub request_id: Option<Uuid>,
    pub author_id: UserId,
    pub details: VacancyRequestDetails,
    pub status: VacancyStatus,
    pub created_at: DateTime<Utc>,
}

impl Vacancy {
    /// Copies the request details, validated as if they were submitted for a
    /// new vacancy directly.
    pub fn from_request(
        request: &VacancyRequest,
        author_id: UserId,
        created_at: DateTime<Utc>,
    ) -> Result<Self, String> {
        let details = request.details().clone();
        details.validate()?;

        Ok(Self {
            id: Uuid::now_v7(),
            space_id: request.space_id(),
            request_id: Some(request.id()),
            author_id,
            details,
            status: VacancyStatus::Open,
            created_at,
        })
    }

    pub fn restore(parts: VacancyParts) -> Self {
        Self {
            id: parts.id,
            space_id: parts.space_id,
            request_id: parts.request_id,
            author_id: parts.author_id,
            details: parts.details,
            status: parts.status,
            created_at: parts.created_at,
        }
    }

    pub fn cancel(&mut self) -> bool {
        if self.status == VacancyStatus::Cancelled {
            return false;
        }
        self.status = VacancyStatus::Cancelled;
        true
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn space_id(&self) -> SpaceId {
        self.space_id
    }

    pub fn request_id(&self) -> Option<Uuid> {
        self.request_id
    }

    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    pub fn details(&self) -> &VacancyRequestDetails {
        &self.details
    }

    pub fn status(&self) -> VacancyStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
