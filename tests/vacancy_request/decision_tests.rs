use uuid::Uuid;
use vacancy_approval_api::vacancy_request::domain::{
    model::enums::{
        approval_decision::ApprovalDecision, approval_state::ApprovalState,
        vacancy_request_domain_error::VacancyRequestDomainError,
        vacancy_request_rejection::VacancyRequestRejection,
        vacancy_request_status::VacancyRequestStatus,
    },
    services::vacancy_request_command_service::VacancyRequestCommandService,
};

use crate::support::{
    APPROVER_A_ID, APPROVER_B_ID, AUTHOR_ID, create_harness, decide_command, user_id,
};

#[tokio::test]
async fn request_is_approved_by_the_last_approval() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID, APPROVER_B_ID]).await;

    let first = harness
        .decide(request.id(), APPROVER_A_ID, ApprovalDecision::Approve, None)
        .await;
    assert_eq!(first.task.state(), ApprovalState::Approved);
    assert_eq!(first.request_status, VacancyRequestStatus::Created);

    let second = harness
        .decide(request.id(), APPROVER_B_ID, ApprovalDecision::Approve, None)
        .await;
    assert_eq!(second.request_status, VacancyRequestStatus::Approved);

    let state = harness.store.snapshot().await;
    assert_eq!(
        state.request(request.id()).map(|r| r.status()),
        Some(VacancyRequestStatus::Approved)
    );
    let composites: Vec<_> = state
        .history_of(request.id())
        .into_iter()
        .filter(|entry| entry.is_composite())
        .collect();
    assert_eq!(composites.len(), 1);
    assert_eq!(composites[0].assignee_id, user_id(APPROVER_B_ID));
    assert_eq!(composites[0].changes[0].field, "status");
    assert_eq!(composites[0].changes[0].old_value.as_deref(), Some("created"));
    assert_eq!(composites[0].changes[0].new_value.as_deref(), Some("approved"));
}

#[tokio::test]
async fn last_approval_notifies_author_of_approved_request() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID]).await;
    harness.notifications.settle(1).await;

    harness
        .decide(request.id(), APPROVER_A_ID, ApprovalDecision::Approve, None)
        .await;
    harness.notifications.settle(3).await;

    let approved = harness
        .notifications
        .deliveries_of_kind("vacancy_request_approved");
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].user_id, user_id(AUTHOR_ID));
    assert_eq!(
        harness
            .notifications
            .deliveries_of_kind("approval_task_approved")
            .len(),
        1
    );
}

#[tokio::test]
async fn only_the_assignee_may_decide() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID, APPROVER_B_ID]).await;
    let task = harness.task_for(request.id(), APPROVER_A_ID).await;

    let outcome = harness
        .command_service
        .handle_decide(decide_command(
            request.id(),
            task.id(),
            APPROVER_B_ID,
            ApprovalDecision::Approve,
            None,
        ))
        .await
        .expect("command handled");

    assert_eq!(
        outcome.rejection(),
        Some(&VacancyRequestRejection::TaskNotAssignedToCaller)
    );
    let task = harness.task_for(request.id(), APPROVER_A_ID).await;
    assert_eq!(task.state(), ApprovalState::Pending);
}

#[tokio::test]
async fn reject_and_request_changes_need_a_comment() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID]).await;
    let task = harness.task_for(request.id(), APPROVER_A_ID).await;

    for (decision, comment) in [
        (ApprovalDecision::Reject, None),
        (ApprovalDecision::RequestChanges, Some("   ")),
    ] {
        let outcome = harness
            .command_service
            .handle_decide(decide_command(
                request.id(),
                task.id(),
                APPROVER_A_ID,
                decision,
                comment,
            ))
            .await
            .expect("command handled");
        assert_eq!(
            outcome.rejection(),
            Some(&VacancyRequestRejection::CommentRequired)
        );
    }
}

#[tokio::test]
async fn rejection_closes_the_request_and_keeps_the_comment() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID, APPROVER_B_ID]).await;

    let result = harness
        .decide(
            request.id(),
            APPROVER_A_ID,
            ApprovalDecision::Reject,
            Some("budget frozen"),
        )
        .await;

    assert_eq!(result.request_status, VacancyRequestStatus::Rejected);
    assert_eq!(result.task.comment(), Some("budget frozen"));
    let history = harness.store.snapshot().await.history_of(request.id());
    let entry = history.last().expect("decision entry");
    assert_eq!(entry.state, ApprovalState::Rejected);
    assert_eq!(entry.comment.as_deref(), Some("budget frozen"));

    let task = harness.task_for(request.id(), APPROVER_B_ID).await;
    let outcome = harness
        .command_service
        .handle_decide(decide_command(
            request.id(),
            task.id(),
            APPROVER_B_ID,
            ApprovalDecision::Approve,
            None,
        ))
        .await
        .expect("command handled");
    assert_eq!(
        outcome.rejection(),
        Some(&VacancyRequestRejection::DecisionNotAllowed(
            VacancyRequestStatus::Rejected
        ))
    );
}

#[tokio::test]
async fn request_changes_keeps_the_request_open() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID, APPROVER_B_ID]).await;

    let result = harness
        .decide(
            request.id(),
            APPROVER_A_ID,
            ApprovalDecision::RequestChanges,
            Some("add the salary range"),
        )
        .await;

    assert_eq!(result.task.state(), ApprovalState::RequestChanges);
    assert_eq!(result.request_status, VacancyRequestStatus::Created);
}

#[tokio::test]
async fn approver_may_revise_a_change_request() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID]).await;
    harness
        .decide(
            request.id(),
            APPROVER_A_ID,
            ApprovalDecision::RequestChanges,
            Some("add the salary range"),
        )
        .await;

    let result = harness
        .decide(request.id(), APPROVER_A_ID, ApprovalDecision::Approve, None)
        .await;

    assert_eq!(result.request_status, VacancyRequestStatus::Approved);
}

#[tokio::test]
async fn repeating_a_decision_is_rejected() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID, APPROVER_B_ID]).await;
    let approved = harness
        .decide(request.id(), APPROVER_A_ID, ApprovalDecision::Approve, None)
        .await;

    let outcome = harness
        .command_service
        .handle_decide(decide_command(
            request.id(),
            approved.task.id(),
            APPROVER_A_ID,
            ApprovalDecision::Approve,
            None,
        ))
        .await
        .expect("command handled");

    assert_eq!(
        outcome.rejection(),
        Some(&VacancyRequestRejection::TaskAlreadyDecided(
            ApprovalState::Approved
        ))
    );
}

#[tokio::test]
async fn task_of_another_request_is_not_found() {
    let harness = create_harness();
    let first = harness.create_request(&[APPROVER_A_ID]).await;
    let second = harness.create_request(&[APPROVER_A_ID]).await;
    let foreign_task = harness.task_for(second.id(), APPROVER_A_ID).await;

    let result = harness
        .command_service
        .handle_decide(decide_command(
            first.id(),
            foreign_task.id(),
            APPROVER_A_ID,
            ApprovalDecision::Approve,
            None,
        ))
        .await;

    assert!(matches!(
        result,
        Err(VacancyRequestDomainError::ApprovalTaskNotFound)
    ));
}

#[tokio::test]
async fn unknown_task_is_not_found() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID]).await;

    let result = harness
        .command_service
        .handle_decide(decide_command(
            request.id(),
            Uuid::now_v7(),
            APPROVER_A_ID,
            ApprovalDecision::Approve,
            None,
        ))
        .await;

    assert!(matches!(
        result,
        Err(VacancyRequestDomainError::ApprovalTaskNotFound)
    ));
}

#[tokio::test]
async fn failed_history_write_rolls_the_decision_back() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID]).await;
    let task = harness.task_for(request.id(), APPROVER_A_ID).await;
    let commits = harness.store.commit_calls();
    harness.store.fail_history_writes(true);

    let result = harness
        .command_service
        .handle_decide(decide_command(
            request.id(),
            task.id(),
            APPROVER_A_ID,
            ApprovalDecision::Approve,
            None,
        ))
        .await;
    harness.store.fail_history_writes(false);

    assert!(matches!(
        result,
        Err(VacancyRequestDomainError::InfrastructureError(_))
    ));
    assert_eq!(harness.store.commit_calls(), commits);
    let state = harness.store.snapshot().await;
    assert_eq!(
        state.request(request.id()).map(|r| r.status()),
        Some(VacancyRequestStatus::Created)
    );
    let task = harness.task_for(request.id(), APPROVER_A_ID).await;
    assert_eq!(task.state(), ApprovalState::Pending);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_last_approvals_transition_the_request_once() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID, APPROVER_B_ID]).await;
    let task_a = harness.task_for(request.id(), APPROVER_A_ID).await;
    let task_b = harness.task_for(request.id(), APPROVER_B_ID).await;

    let service_a = harness.command_service.clone();
    let service_b = harness.command_service.clone();
    let command_a = decide_command(
        request.id(),
        task_a.id(),
        APPROVER_A_ID,
        ApprovalDecision::Approve,
        None,
    );
    let command_b = decide_command(
        request.id(),
        task_b.id(),
        APPROVER_B_ID,
        ApprovalDecision::Approve,
        None,
    );

    let (outcome_a, outcome_b) = tokio::join!(
        tokio::spawn(async move { service_a.handle_decide(command_a).await }),
        tokio::spawn(async move { service_b.handle_decide(command_b).await }),
    );
    let outcome_a = outcome_a.expect("task joined").expect("decision handled");
    let outcome_b = outcome_b.expect("task joined").expect("decision handled");

    assert!(outcome_a.is_completed());
    assert!(outcome_b.is_completed());
    let state = harness.store.snapshot().await;
    assert_eq!(
        state.request(request.id()).map(|r| r.status()),
        Some(VacancyRequestStatus::Approved)
    );
    let composites = state
        .history_of(request.id())
        .into_iter()
        .filter(|entry| entry.is_composite())
        .count();
    assert_eq!(composites, 1);
}

#[tokio::test]
async fn last_approval_tolerates_losing_the_status_swap() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID]).await;
    harness.notifications.settle(1).await;
    let task = harness.task_for(request.id(), APPROVER_A_ID).await;
    let commits = harness.store.commit_calls();
    harness.store.take_status_concurrently(true);

    let result = harness
        .command_service
        .handle_decide(decide_command(
            request.id(),
            task.id(),
            APPROVER_A_ID,
            ApprovalDecision::Approve,
            None,
        ))
        .await
        .expect("decision handled")
        .completed()
        .expect("decision completes");
    harness.store.take_status_concurrently(false);

    assert_eq!(result.task.state(), ApprovalState::Approved);
    assert_eq!(result.request_status, VacancyRequestStatus::Approved);
    assert_eq!(harness.store.commit_calls(), commits + 1);
    let state = harness.store.snapshot().await;
    assert_eq!(
        state.request(request.id()).map(|r| r.status()),
        Some(VacancyRequestStatus::Approved)
    );
    let history = state.history_of(request.id());
    assert!(history.iter().all(|entry| !entry.is_composite()));
    assert_eq!(history.last().map(|entry| entry.task_id), Some(Some(task.id())));

    harness.notifications.settle(2).await;
    assert!(
        harness
            .notifications
            .deliveries_of_kind("vacancy_request_approved")
            .is_empty()
    );
}
