use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;
use vacancy_approval_api::{
    authorization::{
        domain::model::enums::space_role::SpaceRole,
        interfaces::rest::middleware::authorization_middleware::AuthenticatedCaller,
    },
    vacancy_request::interfaces::rest::{
        controllers::vacancy_request_rest_controller::{
            VacancyRequestRestControllerState, approve_approval_task, create_vacancy_from_request,
            create_vacancy_request, get_vacancy_request, list_approval_history,
            reject_approval_task,
        },
        resources::{
            approval_task_request_resource::ApprovalDecisionRequestResource,
            create_vacancy_request_request_resource::CreateVacancyRequestRequestResource,
        },
    },
};

use crate::support::{
    APPROVER_A_ID, AUTHOR_ID, DEPARTMENT_ID, VacancyRequestHarness, create_harness, space_id,
    user_id,
};

fn controller_state(harness: VacancyRequestHarness) -> VacancyRequestRestControllerState {
    VacancyRequestRestControllerState {
        command_service: harness.command_service,
        query_service: Arc::new(harness.query_service),
    }
}

fn caller(user: &str, role: SpaceRole) -> Extension<AuthenticatedCaller> {
    Extension(AuthenticatedCaller {
        space_id: space_id().value(),
        user_id: user_id(user).value(),
        role,
    })
}

fn create_body(title: &str, urgency: &str, assignees: &[&str]) -> CreateVacancyRequestRequestResource {
    serde_json::from_value(json!({
        "details": {
            "title": title,
            "department_id": DEPARTMENT_ID,
            "urgency": urgency,
            "positions_count": 1,
            "salary_from": 3000,
            "salary_to": 3500
        },
        "assignee_ids": assignees,
    }))
    .expect("valid create body")
}

async fn create_through_endpoint(state: &VacancyRequestRestControllerState) -> Uuid {
    let (status, Json(created)) = create_vacancy_request(
        State(state.clone()),
        caller(AUTHOR_ID, SpaceRole::Specialist),
        Json(create_body("Data analyst", "urgent", &[APPROVER_A_ID])),
    )
    .await
    .expect("request created");
    assert_eq!(status, StatusCode::CREATED);
    created.id
}

#[tokio::test]
async fn create_endpoint_returns_created_resource() {
    let state = controller_state(create_harness());

    let (status, Json(created)) = create_vacancy_request(
        State(state),
        caller(AUTHOR_ID, SpaceRole::Specialist),
        Json(create_body("Data analyst", "urgent", &[APPROVER_A_ID])),
    )
    .await
    .expect("request created");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.status, "created");
    assert_eq!(created.author_id, user_id(AUTHOR_ID).value());
    assert_eq!(created.details.urgency.as_deref(), Some("urgent"));
}

#[tokio::test]
async fn create_endpoint_validates_payload() {
    let state = controller_state(create_harness());

    let (status, _) = create_vacancy_request(
        State(state),
        caller(AUTHOR_ID, SpaceRole::Specialist),
        Json(create_body("", "normal", &[APPROVER_A_ID])),
    )
    .await
    .expect_err("empty title must fail");

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_endpoint_rejects_unknown_urgency() {
    let state = controller_state(create_harness());

    let (status, _) = create_vacancy_request(
        State(state),
        caller(AUTHOR_ID, SpaceRole::Specialist),
        Json(create_body("Data analyst", "whenever", &[APPROVER_A_ID])),
    )
    .await
    .expect_err("unknown urgency must fail");

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn business_rejection_maps_to_conflict() {
    let state = controller_state(create_harness());

    let (status, Json(error)) = create_vacancy_request(
        State(state),
        caller(AUTHOR_ID, SpaceRole::Specialist),
        Json(create_body("Data analyst", "normal", &[])),
    )
    .await
    .expect_err("no approvers must fail");

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error.message, "at least one approver is required");
}

#[tokio::test]
async fn get_endpoint_maps_missing_request_to_not_found() {
    let state = controller_state(create_harness());

    let (status, _) = get_vacancy_request(
        State(state),
        caller(AUTHOR_ID, SpaceRole::Observer),
        Path(Uuid::now_v7().to_string()),
    )
    .await
    .expect_err("missing request must fail");

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_endpoint_rejects_malformed_id() {
    let state = controller_state(create_harness());

    let (status, _) = get_vacancy_request(
        State(state),
        caller(AUTHOR_ID, SpaceRole::Observer),
        Path("not-a-uuid".to_string()),
    )
    .await
    .expect_err("malformed id must fail");

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn decision_endpoints_drive_the_workflow() {
    let harness = create_harness();
    let store = harness.store.clone();
    let state = controller_state(harness);
    let request_id = create_through_endpoint(&state).await;
    let task_id = store.snapshot().await.tasks_of(request_id)[0].id();

    let (status, _) = reject_approval_task(
        State(state.clone()),
        caller(APPROVER_A_ID, SpaceRole::Hr),
        Path((request_id.to_string(), task_id.to_string())),
        Json(ApprovalDecisionRequestResource::default()),
    )
    .await
    .expect_err("reject without comment must fail");
    assert_eq!(status, StatusCode::CONFLICT);

    let Json(approved) = approve_approval_task(
        State(state.clone()),
        caller(APPROVER_A_ID, SpaceRole::Hr),
        Path((request_id.to_string(), task_id.to_string())),
        Json(ApprovalDecisionRequestResource::default()),
    )
    .await
    .expect("approval succeeds");
    assert_eq!(approved.request_status, "approved");
    assert_eq!(approved.task.state, "approved");

    let Json(history) = list_approval_history(
        State(state.clone()),
        caller(AUTHOR_ID, SpaceRole::Observer),
        Path(request_id.to_string()),
    )
    .await
    .expect("history listed");
    assert_eq!(history.len(), 3);
    assert_eq!(history[2].changes[0].new_value.as_deref(), Some("approved"));

    let (status, Json(vacancy)) = create_vacancy_from_request(
        State(state),
        caller(AUTHOR_ID, SpaceRole::Specialist),
        Path(request_id.to_string()),
    )
    .await
    .expect("vacancy created");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(vacancy.request_id, Some(request_id));
    assert_eq!(vacancy.status, "open");
}

#[tokio::test]
async fn create_vacancy_endpoint_requires_approval() {
    let state = controller_state(create_harness());
    let request_id = create_through_endpoint(&state).await;

    let (status, _) = create_vacancy_from_request(
        State(state),
        caller(AUTHOR_ID, SpaceRole::Specialist),
        Path(request_id.to_string()),
    )
    .await
    .expect_err("unapproved request must fail");

    assert_eq!(status, StatusCode::CONFLICT);
}
