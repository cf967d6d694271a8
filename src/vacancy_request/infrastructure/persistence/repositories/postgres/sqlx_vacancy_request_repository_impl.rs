use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, postgres::PgRow};
use uuid::Uuid;

use crate::vacancy_request::{
    domain::model::{
        entities::vacancy_request::{VacancyRequest, VacancyRequestParts},
        enums::{
            vacancy_request_domain_error::VacancyRequestDomainError,
            vacancy_request_status::VacancyRequestStatus,
        },
        value_objects::{space_id::SpaceId, user_id::UserId},
    },
    infrastructure::persistence::repositories::{
        postgres::{
            sqlx_vacancy_request_row_mapper::{
                DETAILS_COLUMNS, bind_details, details_assignments, details_from_row,
                details_placeholders, map_infra_error,
            },
            sqlx_vacancy_request_unit_of_work_impl::SqlxVacancyRequestUnitOfWork,
        },
        vacancy_request_repository::VacancyRequestRepository,
    },
};

fn select_statement(lock: bool) -> String {
    format!(
        "SELECT id, space_id, author_id, status, created_at, updated_at, {DETAILS_COLUMNS} \
         FROM vacancy_requests WHERE space_id = $1 AND id = $2{}",
        if lock { " FOR UPDATE" } else { "" }
    )
}

fn request_from_row(row: &PgRow) -> Result<VacancyRequest, VacancyRequestDomainError> {
    Ok(VacancyRequest::restore(VacancyRequestParts {
        id: row.try_get("id").map_err(map_infra_error)?,
        space_id: SpaceId::from_uuid(row.try_get("space_id").map_err(map_infra_error)?),
        author_id: UserId::from_uuid(row.try_get("author_id").map_err(map_infra_error)?),
        details: details_from_row(row)?,
        status: row
            .try_get::<String, _>("status")
            .map_err(map_infra_error)?
            .parse()?,
        created_at: row.try_get("created_at").map_err(map_infra_error)?,
        updated_at: row.try_get("updated_at").map_err(map_infra_error)?,
    }))
}

impl SqlxVacancyRequestUnitOfWork {
    async fn fetch_request(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
        lock: bool,
    ) -> Result<Option<VacancyRequest>, VacancyRequestDomainError> {
        let statement = select_statement(lock);
        let row = sqlx::query(&statement)
            .bind(space_id.value())
            .bind(request_id)
            .fetch_optional(self.connection())
            .await
            .map_err(map_infra_error)?;

        row.as_ref().map(request_from_row).transpose()
    }
}

#[async_trait]
impl VacancyRequestRepository for SqlxVacancyRequestUnitOfWork {
    async fn find_request(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
    ) -> Result<Option<VacancyRequest>, VacancyRequestDomainError> {
        self.fetch_request(space_id, request_id, false).await
    }

    async fn lock_request(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
    ) -> Result<Option<VacancyRequest>, VacancyRequestDomainError> {
        self.fetch_request(space_id, request_id, true).await
    }

    async fn insert_request(
        &mut self,
        request: &VacancyRequest,
    ) -> Result<(), VacancyRequestDomainError> {
        let statement = format!(
            "INSERT INTO vacancy_requests \
             (id, space_id, author_id, status, created_at, updated_at, {DETAILS_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, {})",
            details_placeholders(7)
        );

        let query = sqlx::query(&statement)
            .bind(request.id())
            .bind(request.space_id().value())
            .bind(request.author_id().value())
            .bind(request.status().as_str())
            .bind(request.created_at())
            .bind(request.updated_at());

        bind_details(query, request.details())
            .execute(self.connection())
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn update_request(
        &mut self,
        request: &VacancyRequest,
    ) -> Result<(), VacancyRequestDomainError> {
        let statement = format!(
            "UPDATE vacancy_requests SET status = $3, updated_at = $4, {} \
             WHERE space_id = $1 AND id = $2",
            details_assignments(5)
        );

        let query = sqlx::query(&statement)
            .bind(request.space_id().value())
            .bind(request.id())
            .bind(request.status().as_str())
            .bind(request.updated_at());

        bind_details(query, request.details())
            .execute(self.connection())
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn compare_and_set_status(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
        expected: VacancyRequestStatus,
        target: VacancyRequestStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, VacancyRequestDomainError> {
        let statement = r#"
            UPDATE vacancy_requests
            SET status = $4, updated_at = $5
            WHERE space_id = $1
              AND id = $2
              AND status = $3
        "#;

        let result = sqlx::query(statement)
            .bind(space_id.value())
            .bind(request_id)
            .bind(expected.as_str())
            .bind(target.as_str())
            .bind(updated_at)
            .execute(self.connection())
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() == 1)
    }
}
