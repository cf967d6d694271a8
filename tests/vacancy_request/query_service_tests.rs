use uuid::Uuid;
use vacancy_approval_api::{
    authorization::interfaces::acl::request_ownership_facade::RequestOwnershipFacade,
    vacancy_request::domain::{
        model::enums::{
            approval_decision::ApprovalDecision, approval_state::ApprovalState,
            vacancy_request_domain_error::VacancyRequestDomainError,
        },
        services::vacancy_request_query_service::VacancyRequestQueryService,
    },
};

use crate::support::{
    APPROVER_A_ID, APPROVER_B_ID, AUTHOR_ID, OTHER_SPACE_ID, SPACE_ID, create_harness,
    scope_query, space_id, user_id,
};

fn uuid(value: &str) -> Uuid {
    Uuid::parse_str(value).expect("valid uuid")
}

#[tokio::test]
async fn get_returns_the_request_of_the_space() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID]).await;

    let found = harness
        .query_service
        .handle_get(scope_query(SPACE_ID, request.id()))
        .await
        .expect("request found");

    assert_eq!(found.id(), request.id());
    assert_eq!(found.author_id(), user_id(AUTHOR_ID));
}

#[tokio::test]
async fn get_from_another_space_is_not_found() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID]).await;

    let result = harness
        .query_service
        .handle_get(scope_query(OTHER_SPACE_ID, request.id()))
        .await;

    assert!(matches!(
        result,
        Err(VacancyRequestDomainError::VacancyRequestNotFound)
    ));
}

#[tokio::test]
async fn list_tasks_carries_assignee_names() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID, APPROVER_B_ID]).await;
    harness.directory.remove_member(user_id(APPROVER_B_ID));

    let tasks = harness
        .query_service
        .handle_list_tasks(scope_query(SPACE_ID, request.id()))
        .await
        .expect("tasks listed");

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].assignee_name.as_deref(), Some("Alice Approver"));
    assert_eq!(tasks[1].assignee_id, user_id(APPROVER_B_ID));
    assert_eq!(tasks[1].assignee_name, None);
}

#[tokio::test]
async fn list_tasks_of_unknown_request_is_not_found() {
    let harness = create_harness();

    let result = harness
        .query_service
        .handle_list_tasks(scope_query(SPACE_ID, Uuid::now_v7()))
        .await;

    assert!(matches!(
        result,
        Err(VacancyRequestDomainError::VacancyRequestNotFound)
    ));
}

#[tokio::test]
async fn history_lists_task_and_request_events_in_order() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID]).await;
    harness
        .decide(request.id(), APPROVER_A_ID, ApprovalDecision::Approve, None)
        .await;

    let history = harness
        .query_service
        .handle_list_history(scope_query(SPACE_ID, request.id()))
        .await
        .expect("history listed");

    let states: Vec<_> = history.iter().map(|entry| entry.state).collect();
    assert_eq!(
        states,
        vec![
            ApprovalState::Pending,
            ApprovalState::Approved,
            ApprovalState::Approved
        ]
    );
    assert!(history[..2].iter().all(|entry| entry.task_id.is_some()));
    assert_eq!(history[2].task_id, None);
    assert!(
        history
            .iter()
            .all(|entry| entry.assignee_name.as_deref() == Some("Alice Approver"))
    );
}

#[tokio::test]
async fn ownership_facade_recognises_the_author() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID]).await;
    let space = space_id().value();

    let author = harness
        .ownership_facade
        .is_request_author(space, uuid(AUTHOR_ID), request.id())
        .await
        .expect("lookup succeeds");
    let approver = harness
        .ownership_facade
        .is_request_author(space, uuid(APPROVER_A_ID), request.id())
        .await
        .expect("lookup succeeds");
    let missing = harness
        .ownership_facade
        .is_request_author(space, uuid(AUTHOR_ID), Uuid::now_v7())
        .await
        .expect("lookup succeeds");

    assert!(author);
    assert!(!approver);
    assert!(!missing);
}

#[tokio::test]
async fn ownership_facade_recognises_the_task_assignee() {
    let harness = create_harness();
    let request = harness.create_request(&[APPROVER_A_ID]).await;
    let other = harness.create_request(&[APPROVER_A_ID]).await;
    let task = harness.task_for(request.id(), APPROVER_A_ID).await;
    let space = space_id().value();

    let assignee = harness
        .ownership_facade
        .is_task_assignee(space, uuid(APPROVER_A_ID), request.id(), task.id())
        .await
        .expect("lookup succeeds");
    let stranger = harness
        .ownership_facade
        .is_task_assignee(space, uuid(APPROVER_B_ID), request.id(), task.id())
        .await
        .expect("lookup succeeds");
    let wrong_request = harness
        .ownership_facade
        .is_task_assignee(space, uuid(APPROVER_A_ID), other.id(), task.id())
        .await
        .expect("lookup succeeds");

    assert!(assignee);
    assert!(!stranger);
    assert!(!wrong_request);
}
