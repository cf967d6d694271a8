use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::vacancy_request::{
    domain::model::{
        enums::vacancy_request_domain_error::VacancyRequestDomainError,
        value_objects::user_id::UserId,
    },
    interfaces::acl::notification_facade::{NotificationFacade, NotificationPayload},
};

/// Queues notifications in the `notifications` table; a separate sender
/// delivers them.
pub struct SqlxNotificationOutboxFacadeImpl {
    pool: PgPool,
}

impl SqlxNotificationOutboxFacadeImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationFacade for SqlxNotificationOutboxFacadeImpl {
    async fn notify(
        &self,
        user_id: UserId,
        payload: &NotificationPayload,
    ) -> Result<(), VacancyRequestDomainError> {
        let body = serde_json::to_value(payload)
            .map_err(|e| VacancyRequestDomainError::InfrastructureError(e.to_string()))?;

        let statement = r#"
            INSERT INTO notifications (id, space_id, user_id, kind, payload, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        sqlx::query(statement)
            .bind(Uuid::now_v7())
            .bind(payload.space_id)
            .bind(user_id.value())
            .bind(payload.kind.as_str())
            .bind(body)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| VacancyRequestDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }
}
