use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::vacancy_request::{
    domain::model::{
        entities::vacancy::{Vacancy, VacancyParts},
        enums::{vacancy_request_domain_error::VacancyRequestDomainError, vacancy_status::VacancyStatus},
        value_objects::{space_id::SpaceId, user_id::UserId},
    },
    infrastructure::persistence::repositories::{
        postgres::{
            sqlx_vacancy_request_row_mapper::{
                DETAILS_COLUMNS, bind_details, details_from_row, details_placeholders,
                map_infra_error,
            },
            sqlx_vacancy_request_unit_of_work_impl::SqlxVacancyRequestUnitOfWork,
        },
        vacancy_repository::VacancyRepository,
    },
};

#[async_trait]
impl VacancyRepository for SqlxVacancyRequestUnitOfWork {
    async fn find_vacancy_by_request(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
    ) -> Result<Option<Vacancy>, VacancyRequestDomainError> {
        let statement = format!(
            "SELECT id, space_id, request_id, author_id, status, created_at, {DETAILS_COLUMNS} \
             FROM vacancies WHERE space_id = $1 AND request_id = $2"
        );

        let row = sqlx::query(&statement)
            .bind(space_id.value())
            .bind(request_id)
            .fetch_optional(self.connection())
            .await
            .map_err(map_infra_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Vacancy::restore(VacancyParts {
            id: row.try_get("id").map_err(map_infra_error)?,
            space_id: SpaceId::from_uuid(row.try_get("space_id").map_err(map_infra_error)?),
            request_id: row.try_get("request_id").map_err(map_infra_error)?,
            author_id: UserId::from_uuid(row.try_get("author_id").map_err(map_infra_error)?),
            details: details_from_row(&row)?,
            status: row
                .try_get::<String, _>("status")
                .map_err(map_infra_error)?
                .parse()?,
            created_at: row.try_get("created_at").map_err(map_infra_error)?,
        })))
    }

    async fn insert_vacancy(&mut self, vacancy: &Vacancy) -> Result<(), VacancyRequestDomainError> {
        let statement = format!(
            "INSERT INTO vacancies \
             (id, space_id, request_id, author_id, status, created_at, {DETAILS_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, {})",
            details_placeholders(7)
        );

        let query = sqlx::query(&statement)
            .bind(vacancy.id())
            .bind(vacancy.space_id().value())
            .bind(vacancy.request_id())
            .bind(vacancy.author_id().value())
            .bind(vacancy.status().as_str())
            .bind(vacancy.created_at());

        bind_details(query, vacancy.details())
            .execute(self.connection())
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn cancel_vacancies_by_request(
        &mut self,
        space_id: SpaceId,
        request_id: Uuid,
    ) -> Result<u64, VacancyRequestDomainError> {
        let statement = r#"
            UPDATE vacancies
            SET status = $3
            WHERE space_id = $1
              AND request_id = $2
              AND status <> $3
        "#;

        let result = sqlx::query(statement)
            .bind(space_id.value())
            .bind(request_id)
            .bind(VacancyStatus::Cancelled.as_str())
            .execute(self.connection())
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected())
    }
}
