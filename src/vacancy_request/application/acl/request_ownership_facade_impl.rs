use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    authorization::{
        domain::model::enums::authorization_domain_error::AuthorizationDomainError,
        interfaces::acl::request_ownership_facade::RequestOwnershipFacade,
    },
    vacancy_request::{
        application::command_services::approval_task_manager::ApprovalTaskManager,
        domain::model::{
            enums::vacancy_request_domain_error::VacancyRequestDomainError,
            value_objects::{space_id::SpaceId, user_id::UserId},
        },
        infrastructure::persistence::repositories::{
            unit_of_work::VacancyRequestUnitOfWorkFactory,
            vacancy_request_repository::VacancyRequestRepository,
        },
    },
};

/// Answers the ownership predicates of the rule table from vacancy request
/// storage.
pub struct RequestOwnershipFacadeImpl {
    unit_of_work_factory: Arc<dyn VacancyRequestUnitOfWorkFactory>,
    task_manager: Arc<ApprovalTaskManager>,
}

impl RequestOwnershipFacadeImpl {
    pub fn new(
        unit_of_work_factory: Arc<dyn VacancyRequestUnitOfWorkFactory>,
        task_manager: Arc<ApprovalTaskManager>,
    ) -> Self {
        Self {
            unit_of_work_factory,
            task_manager,
        }
    }
}

fn map_domain_error(error: VacancyRequestDomainError) -> AuthorizationDomainError {
    AuthorizationDomainError::InfrastructureError(error.to_string())
}

#[async_trait]
impl RequestOwnershipFacade for RequestOwnershipFacadeImpl {
    async fn is_request_author(
        &self,
        space_id: Uuid,
        caller_id: Uuid,
        request_id: Uuid,
    ) -> Result<bool, AuthorizationDomainError> {
        let mut session = self
            .unit_of_work_factory
            .session()
            .await
            .map_err(map_domain_error)?;
        let request = session
            .find_request(SpaceId::from_uuid(space_id), request_id)
            .await
            .map_err(map_domain_error)?;

        Ok(request.is_some_and(|request| request.author_id() == UserId::from_uuid(caller_id)))
    }

    async fn is_task_assignee(
        &self,
        space_id: Uuid,
        caller_id: Uuid,
        request_id: Uuid,
        task_id: Uuid,
    ) -> Result<bool, AuthorizationDomainError> {
        let mut session = self
            .unit_of_work_factory
            .session()
            .await
            .map_err(map_domain_error)?;
        self.task_manager
            .is_task_assignee(
                session.as_mut(),
                SpaceId::from_uuid(space_id),
                UserId::from_uuid(caller_id),
                request_id,
                task_id,
            )
            .await
            .map_err(map_domain_error)
    }
}
