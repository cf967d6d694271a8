use async_trait::async_trait;
use sqlx::{Row, postgres::PgRow};
use uuid::Uuid;

use crate::vacancy_request::{
    domain::model::{
        entities::approval_task::{ApprovalTask, ApprovalTaskParts},
        enums::vacancy_request_domain_error::VacancyRequestDomainError,
        value_objects::{space_id::SpaceId, user_id::UserId},
    },
    infrastructure::persistence::repositories::{
        approval_task_repository::ApprovalTaskRepository,
        postgres::{
            sqlx_vacancy_request_row_mapper::map_infra_error,
            sqlx_vacancy_request_unit_of_work_impl::SqlxVacancyRequestUnitOfWork,
        },
    },
};

const TASK_COLUMNS: &str =
    "id, space_id, request_id, assignee_id, state, comment, decided_at, created_at";

fn task_from_row(row: &PgRow) -> Result<ApprovalTask, VacancyRequestDomainError> {
    Ok(ApprovalTask::restore(ApprovalTaskParts {
        id: row.try_get("id").map_err(map_infra_error)?,
        space_id: SpaceId::from_uuid(row.try_get("space_id").map_err(map_infra_error)?),
        request_id: row.try_get("request_id").map_err(map_infra_error)?,
        assignee_id: UserId::from_uuid(row.try_get("assignee_id").map_err(map_infra_error)?),
        state: row
            .try_get::<String, _>("state")
            .map_err(map_infra_error)?
            .parse()?,
        comment: row.try_get("comment").map_err(map_infra_error)?,
        decided_at: row.try_get("decided_at").map_err(map_infra_error)?,
        created_at: row.try_get("created_at").map_err(map_infra_error)?,
    }))
}

#[async_trait]
impl ApprovalTaskRepository for SqlxVacancyRequestUnitOfWork {
    async fn list_tasks(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
    ) -> Result<Vec<ApprovalTask>, VacancyRequestDomainError> {
        let statement = format!(
            "SELECT {TASK_COLUMNS} FROM approval_tasks \
             WHERE space_id = $1 AND request_id = $2 \
             ORDER BY created_at, id"
        );

        let rows = sqlx::query(&statement)
            .bind(space_id.value())
            .bind(request_id)
            .fetch_all(self.connection())
            .await
            .map_err(map_infra_error)?;

        rows.iter().map(task_from_row).collect()
    }

    async fn find_task(
        &mut self,
        space_id: SpaceId,
        task_id: Uuid,
    ) -> Result<Option<ApprovalTask>, VacancyRequestDomainError> {
        let statement =
            format!("SELECT {TASK_COLUMNS} FROM approval_tasks WHERE space_id = $1 AND id = $2");

        let row = sqlx::query(&statement)
            .bind(space_id.value())
            .bind(task_id)
            .fetch_optional(self.connection())
            .await
            .map_err(map_infra_error)?;

        row.as_ref().map(task_from_row).transpose()
    }

    async fn insert_task(&mut self, task: &ApprovalTask) -> Result<(), VacancyRequestDomainError> {
        let statement = format!(
            "INSERT INTO approval_tasks ({TASK_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"
        );

        sqlx::query(&statement)
            .bind(task.id())
            .bind(task.space_id().value())
            .bind(task.request_id())
            .bind(task.assignee_id().value())
            .bind(task.state().as_str())
            .bind(task.comment())
            .bind(task.decided_at())
            .bind(task.created_at())
            .execute(self.connection())
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn update_task(&mut self, task: &ApprovalTask) -> Result<(), VacancyRequestDomainError> {
        let statement = r#"
            UPDATE approval_tasks
            SET state = $3, comment = $4, decided_at = $5
            WHERE space_id = $1
              AND id = $2
        "#;

        sqlx::query(statement)
            .bind(task.space_id().value())
            .bind(task.id())
            .bind(task.state().as_str())
            .bind(task.comment())
            .bind(task.decided_at())
            .execute(self.connection())
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn delete_task(
        &mut self,
        space_id: SpaceId,
        task_id: Uuid,
    ) -> Result<(), VacancyRequestDomainError> {
        sqlx::query("DELETE FROM approval_tasks WHERE space_id = $1 AND id = $2")
            .bind(space_id.value())
            .bind(task_id)
            .execute(self.connection())
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }
}
