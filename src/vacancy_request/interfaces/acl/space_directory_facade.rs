use async_trait::async_trait;
use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    enums::{
        dictionary_kind::DictionaryKind, vacancy_request_domain_error::VacancyRequestDomainError,
    },
    value_objects::{space_id::SpaceId, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct SpaceMember {
    pub user_id: UserId,
    pub full_name: String,
    pub email: Option<String>,
}

/// Read access to space membership and the dictionaries a request refers to.
#[async_trait]
pub trait SpaceDirectoryFacade: Send + Sync {
    async fn find_member(
        &self,
        space_id: SpaceId,
        user_id: UserId,
    ) -> Result<Option<SpaceMember>, VacancyRequestDomainError>;

    async fn dictionary_entity_exists(
        &self,
        space_id: SpaceId,
        kind: DictionaryKind,
        id: Uuid,
    ) -> Result<bool, VacancyRequestDomainError>;

    /// Returns the id of the company with this name, creating it if needed.
    async fn find_or_create_company(
        &self,
        space_id: SpaceId,
        name: &str,
    ) -> Result<Uuid, VacancyRequestDomainError>;
}
