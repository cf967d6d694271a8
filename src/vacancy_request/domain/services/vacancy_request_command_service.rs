use async_trait::async_trait;

use crate::vacancy_request::domain::model::{
    commands::{
        change_vacancy_request_status_command::ChangeVacancyRequestStatusCommand,
        create_vacancy_from_request_command::CreateVacancyFromRequestCommand,
        create_vacancy_request_command::CreateVacancyRequestCommand,
        decide_approval_task_command::DecideApprovalTaskCommand,
        save_approval_tasks_command::SaveApprovalTasksCommand,
        update_vacancy_request_command::UpdateVacancyRequestCommand,
    },
    entities::{approval_task::ApprovalTask, vacancy::Vacancy, vacancy_request::VacancyRequest},
    enums::{
        command_outcome::CommandOutcome, vacancy_request_domain_error::VacancyRequestDomainError,
        vacancy_request_status::VacancyRequestStatus,
    },
};

#[derive(Clone, Debug)]
pub struct ApprovalDecisionResult {
    pub task: ApprovalTask,
    pub request_status: VacancyRequestStatus,
}

#[async_trait]
pub trait VacancyRequestCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateVacancyRequestCommand,
    ) -> Result<CommandOutcome<VacancyRequest>, VacancyRequestDomainError>;

    async fn handle_update(
        &self,
        command: UpdateVacancyRequestCommand,
    ) -> Result<CommandOutcome<VacancyRequest>, VacancyRequestDomainError>;

    async fn handle_save_approval_tasks(
        &self,
        command: SaveApprovalTasksCommand,
    ) -> Result<CommandOutcome<Vec<ApprovalTask>>, VacancyRequestDomainError>;

    async fn handle_change_status(
        &self,
        command: ChangeVacancyRequestStatusCommand,
    ) -> Result<CommandOutcome<VacancyRequest>, VacancyRequestDomainError>;

    /// Approve, request changes or reject one approval task.
    async fn handle_decide(
        &self,
        command: DecideApprovalTaskCommand,
    ) -> Result<CommandOutcome<ApprovalDecisionResult>, VacancyRequestDomainError>;

    async fn handle_create_vacancy(
        &self,
        command: CreateVacancyFromRequestCommand,
    ) -> Result<CommandOutcome<Vacancy>, VacancyRequestDomainError>;
}
