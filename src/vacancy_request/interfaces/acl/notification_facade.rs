use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    enums::vacancy_request_domain_error::VacancyRequestDomainError,
    events::vacancy_request_notification_event::VacancyRequestNotificationEvent,
    value_objects::user_id::UserId,
};

#[derive(Clone, Debug, Serialize)]
pub struct NotificationPayload {
    pub kind: String,
    pub space_id: Uuid,
    pub request_id: Uuid,
    pub request_title: String,
    pub actor_id: Uuid,
    pub comment: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl From<&VacancyRequestNotificationEvent> for NotificationPayload {
    fn from(event: &VacancyRequestNotificationEvent) -> Self {
        Self {
            kind: event.kind.as_str().to_string(),
            space_id: event.space_id.value(),
            request_id: event.request_id,
            request_title: event.request_title.clone(),
            actor_id: event.actor_id.value(),
            comment: event.comment.clone(),
            occurred_at: event.occurred_at,
        }
    }
}

#[async_trait]
pub trait NotificationFacade: Send + Sync {
    async fn notify(
        &self,
        user_id: UserId,
        payload: &NotificationPayload,
    ) -> Result<(), VacancyRequestDomainError>;
}
