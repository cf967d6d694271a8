use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::vacancy_request::{
    application::command_services::{
        approval_task_manager::ApprovalTaskManager,
        vacancy_request_notification_dispatcher::VacancyRequestNotificationDispatcher,
    },
    domain::{
        model::{
            commands::{
                change_vacancy_request_status_command::ChangeVacancyRequestStatusCommand,
                create_vacancy_from_request_command::CreateVacancyFromRequestCommand,
                create_vacancy_request_command::CreateVacancyRequestCommand,
                decide_approval_task_command::DecideApprovalTaskCommand,
                save_approval_tasks_command::SaveApprovalTasksCommand,
                update_vacancy_request_command::UpdateVacancyRequestCommand,
            },
            entities::{
                approval_history_entry::ApprovalHistoryEntry, approval_task::ApprovalTask,
                vacancy::Vacancy, vacancy_request::VacancyRequest,
            },
            enums::{
                approval_decision::ApprovalDecision, approval_state::ApprovalState,
                command_outcome::CommandOutcome, notification_kind::NotificationKind,
                vacancy_request_domain_error::VacancyRequestDomainError,
                vacancy_request_rejection::VacancyRequestRejection,
                vacancy_request_status::VacancyRequestStatus,
            },
            events::vacancy_request_notification_event::VacancyRequestNotificationEvent,
            value_objects::{
                space_id::SpaceId, user_id::UserId,
                vacancy_request_details::VacancyRequestDetails,
            },
        },
        services::vacancy_request_command_service::{
            ApprovalDecisionResult, VacancyRequestCommandService,
        },
    },
    infrastructure::persistence::repositories::{
        approval_history_repository::ApprovalHistoryRepository,
        approval_task_repository::ApprovalTaskRepository,
        unit_of_work::{VacancyRequestUnitOfWork, VacancyRequestUnitOfWorkFactory},
        vacancy_repository::VacancyRepository,
        vacancy_request_repository::VacancyRequestRepository,
    },
    interfaces::acl::{
        notification_facade::NotificationFacade, space_directory_facade::SpaceDirectoryFacade,
    },
};

/// Unwraps a completed outcome or returns the rejection from the enclosing
/// handler. Returning early drops the unit of work uncommitted.
macro_rules! proceed {
    ($outcome:expr) => {
        match CommandOutcome::from($outcome) {
            CommandOutcome::Completed(value) => value,
            CommandOutcome::Rejected(rejection) => {
                tracing::debug!(%rejection, "vacancy request command rejected");
                return Ok(CommandOutcome::Rejected(rejection));
            }
        }
    };
}

pub struct VacancyRequestCommandServiceImpl {
    unit_of_work_factory: Arc<dyn VacancyRequestUnitOfWorkFactory>,
    directory_facade: Arc<dyn SpaceDirectoryFacade>,
    task_manager: Arc<ApprovalTaskManager>,
    notifications: VacancyRequestNotificationDispatcher,
}

impl VacancyRequestCommandServiceImpl {
    pub fn new(
        unit_of_work_factory: Arc<dyn VacancyRequestUnitOfWorkFactory>,
        directory_facade: Arc<dyn SpaceDirectoryFacade>,
        task_manager: Arc<ApprovalTaskManager>,
        notification_facade: Arc<dyn NotificationFacade>,
    ) -> Self {
        Self {
            unit_of_work_factory,
            directory_facade,
            task_manager,
            notifications: VacancyRequestNotificationDispatcher::new(notification_facade),
        }
    }

    async fn check_dictionary_references(
        &self,
        space_id: SpaceId,
        details: &VacancyRequestDetails,
    ) -> Result<CommandOutcome<()>, VacancyRequestDomainError> {
        for (kind, id) in details.dictionary_references() {
            if !self
                .directory_facade
                .dictionary_entity_exists(space_id, kind, id)
                .await?
            {
                return Ok(VacancyRequestRejection::UnknownDictionaryEntity { kind, id }.into());
            }
        }
        Ok(CommandOutcome::Completed(()))
    }

    async fn resolve_company(
        &self,
        space_id: SpaceId,
        details: &mut VacancyRequestDetails,
    ) -> Result<(), VacancyRequestDomainError> {
        if let Some(name) = details.pending_company_name() {
            let company_id = self
                .directory_facade
                .find_or_create_company(space_id, name)
                .await?;
            details.company_id = Some(company_id);
        }
        Ok(())
    }

    /// Flips the request to `approved` and writes the composite history
    /// entry. Returns `false` when another decision got there first.
    async fn approve_request(
        &self,
        uow: &mut dyn VacancyRequestUnitOfWork,
        request: &mut VacancyRequest,
        actor_id: UserId,
        now: DateTime<Utc>,
    ) -> Result<bool, VacancyRequestDomainError> {
        let expected = request.status();
        let Ok(Some(change)) = request.mark_approved(now) else {
            return Ok(false);
        };

        let swapped = uow
            .compare_and_set_status(
                request.space_id(),
                request.id(),
                expected,
                VacancyRequestStatus::Approved,
                now,
            )
            .await?;
        if !swapped {
            tracing::debug!(request_id = %request.id(), "request approval already recorded");
            return Ok(false);
        }

        uow.append_history(&ApprovalHistoryEntry::composite(
            request.space_id(),
            request.id(),
            actor_id,
            ApprovalState::Approved,
            vec![change],
            now,
        ))
        .await?;
        Ok(true)
    }

    /// Reconciliation can drop the last pending approver. Re-evaluates the
    /// request so it never stays `created` with every active task approved.
    async fn approve_if_settled(
        &self,
        uow: &mut dyn VacancyRequestUnitOfWork,
        request: &mut VacancyRequest,
        actor_id: UserId,
        now: DateTime<Utc>,
    ) -> Result<bool, VacancyRequestDomainError> {
        if request.status() != VacancyRequestStatus::Created
            || !self
                .task_manager
                .all_approved(uow, request.space_id(), request.id())
                .await?
        {
            return Ok(false);
        }
        self.approve_request(uow, request, actor_id, now).await
    }

    fn notify(
        &self,
        kind: NotificationKind,
        request: &VacancyRequest,
        actor_id: UserId,
        comment: Option<String>,
        tasks: &[ApprovalTask],
        now: DateTime<Utc>,
    ) {
        self.notifications
            .dispatch(VacancyRequestNotificationEvent::for_request(
                kind,
                request,
                actor_id,
                comment,
                tasks.iter().map(ApprovalTask::assignee_id),
                now,
            ));
    }
}

#[async_trait]
impl VacancyRequestCommandService for VacancyRequestCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateVacancyRequestCommand,
    ) -> Result<CommandOutcome<VacancyRequest>, VacancyRequestDomainError> {
        let space_id = command.space_id();
        let mut details = command.details().clone();

        proceed!(self.check_dictionary_references(space_id, &details).await?);
        let plan = proceed!(
            self.task_manager
                .prepare(space_id, &[], command.assignee_ids())
                .await?
        );
        self.resolve_company(space_id, &mut details).await?;

        let now = Utc::now();
        let request = VacancyRequest::new(
            space_id,
            command.author_id(),
            details,
            command.as_draft(),
            now,
        );

        let mut uow = self.unit_of_work_factory.begin().await?;
        uow.insert_request(&request).await?;
        let applied = self
            .task_manager
            .apply(uow.as_mut(), space_id, request.id(), plan, now)
            .await?;
        uow.commit().await?;

        tracing::info!(
            space_id = %space_id,
            request_id = %request.id(),
            status = request.status().as_str(),
            approvers = applied.added.len(),
            "vacancy request created"
        );

        if !command.as_draft() {
            self.notify(
                NotificationKind::RequestCreated,
                &request,
                command.author_id(),
                None,
                &applied.added,
                now,
            );
        }

        Ok(CommandOutcome::Completed(request))
    }

    async fn handle_update(
        &self,
        command: UpdateVacancyRequestCommand,
    ) -> Result<CommandOutcome<VacancyRequest>, VacancyRequestDomainError> {
        let space_id = command.space_id();
        let request_id = command.request_id();
        let mut details = command.details().clone();

        proceed!(self.check_dictionary_references(space_id, &details).await?);
        self.resolve_company(space_id, &mut details).await?;

        let mut uow = self.unit_of_work_factory.begin().await?;
        let mut request = uow
            .lock_request(space_id, request_id)
            .await?
            .ok_or(VacancyRequestDomainError::VacancyRequestNotFound)?;
        if !request.is_allow_change() {
            return Ok(VacancyRequestRejection::ChangeNotAllowed(request.status()).into());
        }

        let current = uow.list_tasks(space_id, request_id).await?;
        let plan = proceed!(
            self.task_manager
                .prepare(space_id, &current, command.assignee_ids())
                .await?
        );

        let now = Utc::now();
        let changes = proceed!(request.apply_edit(details, now));
        uow.update_request(&request).await?;

        let mut applied = self
            .task_manager
            .apply(uow.as_mut(), space_id, request_id, plan, now)
            .await?;
        let reopened = self
            .task_manager
            .reopen_changes_requested(uow.as_mut(), &mut applied.kept, now)
            .await?;
        let request_approved = self
            .approve_if_settled(uow.as_mut(), &mut request, command.actor_id(), now)
            .await?;
        uow.commit().await?;

        tracing::info!(
            space_id = %space_id,
            request_id = %request_id,
            changed_fields = changes.len(),
            added = applied.added.len(),
            removed = applied.removed.len(),
            reopened,
            request_status = request.status().as_str(),
            "vacancy request updated"
        );

        let active = applied.active_tasks();
        self.notify(
            NotificationKind::RequestUpdated,
            &request,
            command.actor_id(),
            None,
            &active,
            now,
        );
        if request_approved {
            self.notify(
                NotificationKind::RequestApproved,
                &request,
                command.actor_id(),
                None,
                &active,
                now,
            );
        }

        Ok(CommandOutcome::Completed(request))
    }

    async fn handle_save_approval_tasks(
        &self,
        command: SaveApprovalTasksCommand,
    ) -> Result<CommandOutcome<Vec<ApprovalTask>>, VacancyRequestDomainError> {
        let space_id = command.space_id();
        let request_id = command.request_id();

        let mut uow = self.unit_of_work_factory.begin().await?;
        let mut request = uow
            .lock_request(space_id, request_id)
            .await?
            .ok_or(VacancyRequestDomainError::VacancyRequestNotFound)?;
        if !request.is_allow_change() {
            return Ok(VacancyRequestRejection::ChangeNotAllowed(request.status()).into());
        }

        let current = uow.list_tasks(space_id, request_id).await?;
        let plan = proceed!(
            self.task_manager
                .prepare(space_id, &current, command.assignee_ids())
                .await?
        );
        if plan.is_noop() {
            return Ok(CommandOutcome::Completed(plan.keep));
        }

        let now = Utc::now();
        let applied = self
            .task_manager
            .apply(uow.as_mut(), space_id, request_id, plan, now)
            .await?;
        let request_approved = self
            .approve_if_settled(uow.as_mut(), &mut request, command.actor_id(), now)
            .await?;
        uow.commit().await?;

        tracing::info!(
            space_id = %space_id,
            request_id = %request_id,
            added = applied.added.len(),
            removed = applied.removed.len(),
            request_status = request.status().as_str(),
            "approval tasks saved"
        );

        let active = applied.active_tasks();
        if request.status() != VacancyRequestStatus::Draft {
            self.notify(
                NotificationKind::RequestUpdated,
                &request,
                command.actor_id(),
                None,
                &active,
                now,
            );
        }
        if request_approved {
            self.notify(
                NotificationKind::RequestApproved,
                &request,
                command.actor_id(),
                None,
                &active,
                now,
            );
        }

        Ok(CommandOutcome::Completed(active))
    }

    async fn handle_change_status(
        &self,
        command: ChangeVacancyRequestStatusCommand,
    ) -> Result<CommandOutcome<VacancyRequest>, VacancyRequestDomainError> {
        let space_id = command.space_id();
        let request_id = command.request_id();

        let mut uow = self.unit_of_work_factory.begin().await?;
        let mut request = uow
            .lock_request(space_id, request_id)
            .await?
            .ok_or(VacancyRequestDomainError::VacancyRequestNotFound)?;

        let now = Utc::now();
        let change = proceed!(request.change_status(command.status(), now));
        let Some(change) = change else {
            return Ok(CommandOutcome::Completed(request));
        };
        uow.update_request(&request).await?;
        let state = match request.status() {
            VacancyRequestStatus::Cancelled => ApprovalState::Cancelled,
            _ => ApprovalState::Pending,
        };
        uow.append_history(&ApprovalHistoryEntry::composite(
            space_id,
            request_id,
            command.actor_id(),
            state,
            vec![change.clone()],
            now,
        ))
        .await?;

        let cancelled_vacancies = if request.status() == VacancyRequestStatus::Cancelled {
            uow.cancel_vacancies_by_request(space_id, request_id).await?
        } else {
            0
        };
        let tasks = uow.list_tasks(space_id, request_id).await?;
        uow.commit().await?;

        tracing::info!(
            space_id = %space_id,
            request_id = %request_id,
            from = change.old_value.as_deref().unwrap_or_default(),
            to = request.status().as_str(),
            cancelled_vacancies,
            "vacancy request status changed"
        );

        let kind = match request.status() {
            VacancyRequestStatus::Cancelled => NotificationKind::RequestCancelled,
            _ => NotificationKind::RequestCreated,
        };
        self.notify(kind, &request, command.actor_id(), None, &tasks, now);

        Ok(CommandOutcome::Completed(request))
    }

    async fn handle_decide(
        &self,
        command: DecideApprovalTaskCommand,
    ) -> Result<CommandOutcome<ApprovalDecisionResult>, VacancyRequestDomainError> {
        let space_id = command.space_id();
        let request_id = command.request_id();
        let actor_id = command.actor_id();
        let decision = command.decision();

        let mut uow = self.unit_of_work_factory.begin().await?;
        let mut request = uow
            .lock_request(space_id, request_id)
            .await?
            .ok_or(VacancyRequestDomainError::VacancyRequestNotFound)?;

        let allowed = match decision {
            ApprovalDecision::Reject => request.allow_reject(),
            ApprovalDecision::Approve | ApprovalDecision::RequestChanges => request.allow_accept(),
        };
        if !allowed {
            return Ok(VacancyRequestRejection::DecisionNotAllowed(request.status()).into());
        }

        let mut task = uow
            .find_task(space_id, command.task_id())
            .await?
            .filter(|task| task.request_id() == request_id)
            .ok_or(VacancyRequestDomainError::ApprovalTaskNotFound)?;
        if !task.is_assigned_to(actor_id) {
            return Ok(VacancyRequestRejection::TaskNotAssignedToCaller.into());
        }
        if decision.requires_comment() && command.comment().is_none() {
            return Ok(VacancyRequestRejection::CommentRequired.into());
        }

        let now = Utc::now();
        let comment = command.comment().map(str::to_string);
        proceed!(
            self.task_manager
                .decide(uow.as_mut(), &mut task, decision, comment.clone(), now)
                .await?
        );

        let mut request_approved = false;
        match decision {
            ApprovalDecision::Approve => {
                if self
                    .task_manager
                    .all_approved(uow.as_mut(), space_id, request_id)
                    .await?
                {
                    request_approved = self
                        .approve_request(uow.as_mut(), &mut request, actor_id, now)
                        .await?;
                }
            }
            ApprovalDecision::RequestChanges => {
                proceed!(request.mark_changes_requested(now));
                uow.update_request(&request).await?;
            }
            ApprovalDecision::Reject => {
                proceed!(request.mark_rejected(now));
                uow.update_request(&request).await?;
            }
        }

        let tasks = uow.list_tasks(space_id, request_id).await?;
        uow.commit().await?;

        tracing::info!(
            space_id = %space_id,
            request_id = %request_id,
            task_id = %task.id(),
            state = task.state().as_str(),
            request_status = request.status().as_str(),
            "approval task decided"
        );

        self.notify(
            decision.notification_kind(),
            &request,
            actor_id,
            comment,
            &tasks,
            now,
        );
        if request_approved {
            self.notify(
                NotificationKind::RequestApproved,
                &request,
                actor_id,
                None,
                &tasks,
                now,
            );
        }

        Ok(CommandOutcome::Completed(ApprovalDecisionResult {
            task,
            request_status: request.status(),
        }))
    }

    async fn handle_create_vacancy(
        &self,
        command: CreateVacancyFromRequestCommand,
    ) -> Result<CommandOutcome<Vacancy>, VacancyRequestDomainError> {
        let space_id = command.space_id();
        let request_id = command.request_id();

        let mut uow = self.unit_of_work_factory.begin().await?;
        let request = uow
            .lock_request(space_id, request_id)
            .await?
            .ok_or(VacancyRequestDomainError::VacancyRequestNotFound)?;
        if request.status() != VacancyRequestStatus::Approved {
            return Ok(VacancyRequestRejection::RequestNotApproved.into());
        }
        if uow
            .find_vacancy_by_request(space_id, request_id)
            .await?
            .is_some()
        {
            return Ok(VacancyRequestRejection::VacancyAlreadyExists.into());
        }
        proceed!(
            self.check_dictionary_references(space_id, request.details())
                .await?
        );

        let now = Utc::now();
        let vacancy = proceed!(
            Vacancy::from_request(&request, command.actor_id(), now)
                .map_err(VacancyRequestRejection::InvalidVacancy)
        );
        uow.insert_vacancy(&vacancy).await?;
        let tasks = uow.list_tasks(space_id, request_id).await?;
        uow.commit().await?;

        tracing::info!(
            space_id = %space_id,
            request_id = %request_id,
            vacancy_id = %vacancy.id(),
            "vacancy created from request"
        );

        self.notify(
            NotificationKind::VacancyCreated,
            &request,
            command.actor_id(),
            None,
            &tasks,
            now,
        );

        Ok(CommandOutcome::Completed(vacancy))
    }
}
