use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;

use crate::vacancy_request::{
    domain::{
        model::{
            entities::{approval_task::ApprovalTask, vacancy_request::VacancyRequest},
            enums::vacancy_request_domain_error::VacancyRequestDomainError,
            queries::vacancy_request_scope_query::VacancyRequestScopeQuery,
            value_objects::{space_id::SpaceId, user_id::UserId},
        },
        services::vacancy_request_query_service::{
            ApprovalHistoryView, ApprovalTaskView, VacancyRequestQueryService,
        },
    },
    infrastructure::persistence::repositories::{
        approval_history_repository::ApprovalHistoryRepository,
        approval_task_repository::ApprovalTaskRepository,
        unit_of_work::{VacancyRequestUnitOfWork, VacancyRequestUnitOfWorkFactory},
        vacancy_request_repository::VacancyRequestRepository,
    },
    interfaces::acl::space_directory_facade::SpaceDirectoryFacade,
};

pub struct VacancyRequestQueryServiceImpl {
    unit_of_work_factory: Arc<dyn VacancyRequestUnitOfWorkFactory>,
    directory_facade: Arc<dyn SpaceDirectoryFacade>,
}

impl VacancyRequestQueryServiceImpl {
    pub fn new(
        unit_of_work_factory: Arc<dyn VacancyRequestUnitOfWorkFactory>,
        directory_facade: Arc<dyn SpaceDirectoryFacade>,
    ) -> Self {
        Self {
            unit_of_work_factory,
            directory_facade,
        }
    }

    async fn load_request(
        session: &mut dyn VacancyRequestUnitOfWork,
        query: &VacancyRequestScopeQuery,
    ) -> Result<VacancyRequest, VacancyRequestDomainError> {
        session
            .find_request(query.space_id(), query.request_id())
            .await?
            .ok_or(VacancyRequestDomainError::VacancyRequestNotFound)
    }

    /// Display names of the given users; members that left the space are
    /// absent from the map.
    async fn member_names(
        &self,
        space_id: SpaceId,
        user_ids: &[UserId],
    ) -> Result<HashMap<UserId, String>, VacancyRequestDomainError> {
        let mut names = HashMap::new();
        let mut looked_up = Vec::new();
        for &user_id in user_ids {
            if looked_up.contains(&user_id) {
                continue;
            }
            looked_up.push(user_id);
            if let Some(member) = self.directory_facade.find_member(space_id, user_id).await? {
                names.insert(user_id, member.full_name);
            }
        }
        Ok(names)
    }
}

#[async_trait]
impl VacancyRequestQueryService for VacancyRequestQueryServiceImpl {
    async fn handle_get(
        &self,
        query: VacancyRequestScopeQuery,
    ) -> Result<VacancyRequest, VacancyRequestDomainError> {
        let mut session = self.unit_of_work_factory.session().await?;
        Self::load_request(session.as_mut(), &query).await
    }

    async fn handle_list_tasks(
        &self,
        query: VacancyRequestScopeQuery,
    ) -> Result<Vec<ApprovalTaskView>, VacancyRequestDomainError> {
        let tasks = {
            let mut session = self.unit_of_work_factory.session().await?;
            Self::load_request(session.as_mut(), &query).await?;
            session
                .list_tasks(query.space_id(), query.request_id())
                .await?
        };

        let assignee_ids: Vec<UserId> = tasks.iter().map(ApprovalTask::assignee_id).collect();
        let names = self.member_names(query.space_id(), &assignee_ids).await?;

        Ok(tasks
            .into_iter()
            .map(|task| ApprovalTaskView {
                id: task.id(),
                assignee_id: task.assignee_id(),
                assignee_name: names.get(&task.assignee_id()).cloned(),
                state: task.state(),
                comment: task.comment().map(str::to_string),
                decided_at: task.decided_at(),
                created_at: task.created_at(),
            })
            .collect())
    }

    async fn handle_list_history(
        &self,
        query: VacancyRequestScopeQuery,
    ) -> Result<Vec<ApprovalHistoryView>, VacancyRequestDomainError> {
        let entries = {
            let mut session = self.unit_of_work_factory.session().await?;
            Self::load_request(session.as_mut(), &query).await?;
            session
                .list_history(query.space_id(), query.request_id())
                .await?
        };

        let assignee_ids: Vec<UserId> = entries.iter().map(|entry| entry.assignee_id).collect();
        let names = self.member_names(query.space_id(), &assignee_ids).await?;

        Ok(entries
            .into_iter()
            .map(|entry| ApprovalHistoryView {
                id: entry.id,
                task_id: entry.task_id,
                assignee_name: names.get(&entry.assignee_id).cloned(),
                assignee_id: entry.assignee_id,
                state: entry.state,
                comment: entry.comment,
                changes: entry.changes,
                created_at: entry.created_at,
            })
            .collect())
    }
}
