use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::vacancy_request::{
    domain::{
        model::{
            entities::{approval_history_entry::ApprovalHistoryEntry, approval_task::ApprovalTask},
            enums::{
                approval_decision::ApprovalDecision, approval_state::ApprovalState,
                command_outcome::CommandOutcome,
                vacancy_request_domain_error::VacancyRequestDomainError,
            },
            value_objects::{space_id::SpaceId, user_id::UserId},
        },
        services::approval_task_reconciliation::{ReconciliationPlan, plan_reconciliation},
    },
    infrastructure::persistence::repositories::{
        approval_history_repository::ApprovalHistoryRepository,
        approval_task_repository::ApprovalTaskRepository, unit_of_work::VacancyRequestUnitOfWork,
    },
    interfaces::acl::space_directory_facade::SpaceDirectoryFacade,
};

#[derive(Clone, Debug, Default)]
pub struct AppliedReconciliation {
    pub kept: Vec<ApprovalTask>,
    pub added: Vec<ApprovalTask>,
    pub removed: Vec<ApprovalTask>,
}

impl AppliedReconciliation {
    pub fn active_tasks(&self) -> Vec<ApprovalTask> {
        self.kept.iter().chain(&self.added).cloned().collect()
    }

    pub fn active_assignees(&self) -> Vec<UserId> {
        self.kept
            .iter()
            .chain(&self.added)
            .map(ApprovalTask::assignee_id)
            .collect()
    }
}

/// Owns the approval tasks of a request: reconciles them with the desired
/// approvers, records decisions and answers who is assigned to what. Every
/// task state change writes a history entry through the same unit of work.
pub struct ApprovalTaskManager {
    directory_facade: Arc<dyn SpaceDirectoryFacade>,
}

impl ApprovalTaskManager {
    pub fn new(directory_facade: Arc<dyn SpaceDirectoryFacade>) -> Self {
        Self { directory_facade }
    }

    pub async fn prepare(
        &self,
        space_id: SpaceId,
        current: &[ApprovalTask],
        desired: &[UserId],
    ) -> Result<CommandOutcome<ReconciliationPlan>, VacancyRequestDomainError> {
        let mut members = HashMap::new();
        for assignee_id in desired {
            if members.contains_key(assignee_id) {
                continue;
            }
            if let Some(member) = self
                .directory_facade
                .find_member(space_id, *assignee_id)
                .await?
            {
                members.insert(*assignee_id, member.full_name);
            }
        }

        Ok(plan_reconciliation(current, desired, &members).into())
    }

    pub async fn apply(
        &self,
        uow: &mut dyn VacancyRequestUnitOfWork,
        space_id: SpaceId,
        request_id: Uuid,
        plan: ReconciliationPlan,
        now: DateTime<Utc>,
    ) -> Result<AppliedReconciliation, VacancyRequestDomainError> {
        for task in &plan.remove {
            uow.delete_task(space_id, task.id()).await?;
            uow.append_history(&ApprovalHistoryEntry::for_task(
                task,
                ApprovalState::Removed,
                Some(task.state()),
                now,
            ))
            .await?;
        }

        let mut added = Vec::with_capacity(plan.add.len());
        for assignee_id in plan.add {
            let task = ApprovalTask::new_pending(space_id, request_id, assignee_id, now);
            uow.insert_task(&task).await?;
            uow.append_history(&ApprovalHistoryEntry::for_task(
                &task,
                ApprovalState::Pending,
                None,
                now,
            ))
            .await?;
            added.push(task);
        }

        Ok(AppliedReconciliation {
            kept: plan.keep,
            added,
            removed: plan.remove,
        })
    }

    /// Sends tasks that asked for changes back to `pending`. Returns how many
    /// were reopened.
    pub async fn reopen_changes_requested(
        &self,
        uow: &mut dyn VacancyRequestUnitOfWork,
        tasks: &mut [ApprovalTask],
        now: DateTime<Utc>,
    ) -> Result<usize, VacancyRequestDomainError> {
        let mut reopened = 0;
        for task in tasks.iter_mut() {
            let Some(previous) = task.reopen() else {
                continue;
            };
            uow.update_task(task).await?;
            uow.append_history(&ApprovalHistoryEntry::for_task(
                task,
                ApprovalState::Pending,
                Some(previous),
                now,
            ))
            .await?;
            reopened += 1;
        }
        Ok(reopened)
    }

    pub async fn decide(
        &self,
        uow: &mut dyn VacancyRequestUnitOfWork,
        task: &mut ApprovalTask,
        decision: ApprovalDecision,
        comment: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<CommandOutcome<()>, VacancyRequestDomainError> {
        let previous = match task.decide(decision, comment, now) {
            Ok(previous) => previous,
            Err(rejection) => return Ok(CommandOutcome::Rejected(rejection)),
        };

        uow.update_task(task).await?;
        uow.append_history(&ApprovalHistoryEntry::for_task(
            task,
            task.state(),
            Some(previous),
            now,
        ))
        .await?;

        Ok(CommandOutcome::Completed(()))
    }

    /// Reads the tasks through `uow`, so decisions written earlier in the same
    /// unit of work are seen.
    pub async fn all_approved(
        &self,
        uow: &mut dyn VacancyRequestUnitOfWork,
        space_id: SpaceId,
        request_id: Uuid,
    ) -> Result<bool, VacancyRequestDomainError> {
        let tasks = uow.list_tasks(space_id, request_id).await?;
        Ok(!tasks.is_empty()
            && tasks
                .iter()
                .all(|task| task.state() == ApprovalState::Approved))
    }

    pub async fn is_task_assignee(
        &self,
        uow: &mut dyn VacancyRequestUnitOfWork,
        space_id: SpaceId,
        caller_id: UserId,
        request_id: Uuid,
        task_id: Uuid,
    ) -> Result<bool, VacancyRequestDomainError> {
        Ok(uow
            .find_task(space_id, task_id)
            .await?
            .is_some_and(|task| task.request_id() == request_id && task.is_assigned_to(caller_id)))
    }
}
