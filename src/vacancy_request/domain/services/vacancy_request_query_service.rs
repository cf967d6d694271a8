use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    entities::vacancy_request::VacancyRequest,
    enums::{approval_state::ApprovalState, vacancy_request_domain_error::VacancyRequestDomainError},
    queries::vacancy_request_scope_query::VacancyRequestScopeQuery,
    value_objects::{field_change::FieldChange, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct ApprovalTaskView {
    pub id: Uuid,
    pub assignee_id: UserId,
    pub assignee_name: Option<String>,
    pub state: ApprovalState,
    pub comment: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct ApprovalHistoryView {
    pub id: Uuid,
    pub task_id: Option<Uuid>,
    pub assignee_id: UserId,
    pub assignee_name: Option<String>,
    pub state: ApprovalState,
    pub comment: Option<String>,
    pub changes: Vec<FieldChange>,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait VacancyRequestQueryService: Send + Sync {
    async fn handle_get(
        &self,
        query: VacancyRequestScopeQuery,
    ) -> Result<VacancyRequest, VacancyRequestDomainError>;

    async fn handle_list_tasks(
        &self,
        query: VacancyRequestScopeQuery,
    ) -> Result<Vec<ApprovalTaskView>, VacancyRequestDomainError>;

    async fn handle_list_history(
        &self,
        query: VacancyRequestScopeQuery,
    ) -> Result<Vec<ApprovalHistoryView>, VacancyRequestDomainError>;
}
