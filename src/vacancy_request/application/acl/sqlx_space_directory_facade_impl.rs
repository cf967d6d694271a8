use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::vacancy_request::{
    domain::model::{
        enums::{
            dictionary_kind::DictionaryKind,
            vacancy_request_domain_error::VacancyRequestDomainError,
        },
        value_objects::{space_id::SpaceId, user_id::UserId},
    },
    interfaces::acl::space_directory_facade::{SpaceDirectoryFacade, SpaceMember},
};

pub struct SqlxSpaceDirectoryFacadeImpl {
    pool: PgPool,
}

impl SqlxSpaceDirectoryFacadeImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_infra_error(error: sqlx::Error) -> VacancyRequestDomainError {
    VacancyRequestDomainError::InfrastructureError(error.to_string())
}

fn dictionary_table(kind: DictionaryKind) -> &'static str {
    match kind {
        DictionaryKind::Company => "companies",
        DictionaryKind::Department => "departments",
        DictionaryKind::JobTitle => "job_titles",
        DictionaryKind::City => "cities",
        DictionaryKind::CompanyStructure => "company_structures",
    }
}

#[async_trait]
impl SpaceDirectoryFacade for SqlxSpaceDirectoryFacadeImpl {
    async fn find_member(
        &self,
        space_id: SpaceId,
        user_id: UserId,
    ) -> Result<Option<SpaceMember>, VacancyRequestDomainError> {
        let statement = r#"
            SELECT user_id, first_name, last_name, email
            FROM space_users
            WHERE space_id = $1
              AND user_id = $2
        "#;

        let row = sqlx::query(statement)
            .bind(space_id.value())
            .bind(user_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let first_name: String = row.try_get("first_name").map_err(map_infra_error)?;
        let last_name: String = row.try_get("last_name").map_err(map_infra_error)?;
        let full_name = format!("{} {}", first_name.trim(), last_name.trim())
            .trim()
            .to_string();

        Ok(Some(SpaceMember {
            user_id: UserId::from_uuid(row.try_get("user_id").map_err(map_infra_error)?),
            full_name,
            email: row.try_get("email").map_err(map_infra_error)?,
        }))
    }

    async fn dictionary_entity_exists(
        &self,
        space_id: SpaceId,
        kind: DictionaryKind,
        id: Uuid,
    ) -> Result<bool, VacancyRequestDomainError> {
        let statement = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE space_id = $1 AND id = $2)",
            dictionary_table(kind)
        );

        sqlx::query_scalar::<_, bool>(&statement)
            .bind(space_id.value())
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)
    }

    async fn find_or_create_company(
        &self,
        space_id: SpaceId,
        name: &str,
    ) -> Result<Uuid, VacancyRequestDomainError> {
        let statement = r#"
            INSERT INTO companies (id, space_id, name)
            VALUES ($1, $2, $3)
            ON CONFLICT (space_id, name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id
        "#;

        sqlx::query_scalar::<_, Uuid>(statement)
            .bind(Uuid::now_v7())
            .bind(space_id.value())
            .bind(name.trim())
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)
    }
}
