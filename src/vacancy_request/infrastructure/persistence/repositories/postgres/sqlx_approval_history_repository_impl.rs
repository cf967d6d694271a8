use async_trait::async_trait;
use sqlx::{Row, types::Json};
use uuid::Uuid;

use crate::vacancy_request::{
    domain::model::{
        entities::approval_history_entry::ApprovalHistoryEntry,
        enums::vacancy_request_domain_error::VacancyRequestDomainError,
        value_objects::{field_change::FieldChange, space_id::SpaceId, user_id::UserId},
    },
    infrastructure::persistence::repositories::{
        approval_history_repository::ApprovalHistoryRepository,
        postgres::{
            sqlx_vacancy_request_row_mapper::map_infra_error,
            sqlx_vacancy_request_unit_of_work_impl::SqlxVacancyRequestUnitOfWork,
        },
    },
};

#[async_trait]
impl ApprovalHistoryRepository for SqlxVacancyRequestUnitOfWork {
    async fn append_history(
        &mut self,
        entry: &ApprovalHistoryEntry,
    ) -> Result<(), VacancyRequestDomainError> {
        let statement = r#"
            INSERT INTO approval_history (
                id,
                space_id,
                request_id,
                task_id,
                assignee_id,
                state,
                comment,
                changes,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#;

        sqlx::query(statement)
            .bind(entry.id)
            .bind(entry.space_id.value())
            .bind(entry.request_id)
            .bind(entry.task_id)
            .bind(entry.assignee_id.value())
            .bind(entry.state.as_str())
            .bind(entry.comment.as_deref())
            .bind(Json(&entry.changes))
            .bind(entry.created_at)
            .execute(self.connection())
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn list_history(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
    ) -> Result<Vec<ApprovalHistoryEntry>, VacancyRequestDomainError> {
        let statement = r#"
            SELECT id, space_id, request_id, task_id, assignee_id, state, comment, changes, created_at
            FROM approval_history
            WHERE space_id = $1
              AND request_id = $2
            ORDER BY created_at, id
        "#;

        let rows = sqlx::query(statement)
            .bind(space_id.value())
            .bind(request_id)
            .fetch_all(self.connection())
            .await
            .map_err(map_infra_error)?;

        rows.iter()
            .map(|row| {
                let Json(changes) = row
                    .try_get::<Json<Vec<FieldChange>>, _>("changes")
                    .map_err(map_infra_error)?;

                Ok(ApprovalHistoryEntry {
                    id: row.try_get("id").map_err(map_infra_error)?,
                    space_id: SpaceId::from_uuid(row.try_get("space_id").map_err(map_infra_error)?),
                    request_id: row.try_get("request_id").map_err(map_infra_error)?,
                    task_id: row.try_get("task_id").map_err(map_infra_error)?,
                    assignee_id: UserId::from_uuid(
                        row.try_get("assignee_id").map_err(map_infra_error)?,
                    ),
                    state: row
                        .try_get::<String, _>("state")
                        .map_err(map_infra_error)?
                        .parse()?,
                    comment: row.try_get("comment").map_err(map_infra_error)?,
                    changes,
                    created_at: row.try_get("created_at").map_err(map_infra_error)?,
                })
            })
            .collect()
    }
}
