use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use validator::Validate;

use crate::{
    authorization::interfaces::rest::middleware::authorization_middleware::AuthenticatedCaller,
    vacancy_request::{
        domain::{
            model::{
                commands::{
                    change_vacancy_request_status_command::ChangeVacancyRequestStatusCommand,
                    create_vacancy_from_request_command::CreateVacancyFromRequestCommand,
                    create_vacancy_request_command::{
                        CreateVacancyRequestCommand, CreateVacancyRequestCommandParts,
                    },
                    decide_approval_task_command::{
                        DecideApprovalTaskCommand, DecideApprovalTaskCommandParts,
                    },
                    save_approval_tasks_command::SaveApprovalTasksCommand,
                    update_vacancy_request_command::{
                        UpdateVacancyRequestCommand, UpdateVacancyRequestCommandParts,
                    },
                },
                enums::{
                    approval_decision::ApprovalDecision, command_outcome::CommandOutcome,
                    vacancy_request_domain_error::VacancyRequestDomainError,
                    vacancy_request_rejection::VacancyRequestRejection,
                },
                queries::vacancy_request_scope_query::VacancyRequestScopeQuery,
            },
            services::{
                vacancy_request_command_service::VacancyRequestCommandService,
                vacancy_request_query_service::VacancyRequestQueryService,
            },
        },
        interfaces::rest::resources::{
            approval_task_request_resource::{
                ApprovalDecisionRequestResource, SaveApprovalTasksRequestResource,
            },
            approval_task_resource::{
                ApprovalDecisionResponseResource, ApprovalHistoryResource, ApprovalTaskResource,
            },
            change_vacancy_request_status_request_resource::ChangeVacancyRequestStatusRequestResource,
            create_vacancy_request_request_resource::CreateVacancyRequestRequestResource,
            update_vacancy_request_request_resource::UpdateVacancyRequestRequestResource,
            vacancy_request_error_response_resource::VacancyRequestErrorResponseResource,
            vacancy_request_resource::{VacancyRequestResource, VacancyResource},
        },
    },
};

type ErrorResponse = (StatusCode, Json<VacancyRequestErrorResponseResource>);

#[derive(Clone)]
pub struct VacancyRequestRestControllerState {
    pub command_service: Arc<dyn VacancyRequestCommandService>,
    pub query_service: Arc<dyn VacancyRequestQueryService>,
}

pub fn router(state: VacancyRequestRestControllerState) -> Router {
    Router::new()
        .route("/vacancy-requests", post(create_vacancy_request))
        .route(
            "/vacancy-requests/:id",
            get(get_vacancy_request).put(update_vacancy_request),
        )
        .route(
            "/vacancy-requests/:id/status",
            put(change_vacancy_request_status),
        )
        .route(
            "/vacancy-requests/:id/approval-tasks",
            get(list_approval_tasks).put(save_approval_tasks),
        )
        .route(
            "/vacancy-requests/:id/approval-tasks/:task_id/approve",
            put(approve_approval_task),
        )
        .route(
            "/vacancy-requests/:id/approval-tasks/:task_id/request-changes",
            put(request_changes_approval_task),
        )
        .route(
            "/vacancy-requests/:id/approval-tasks/:task_id/reject",
            put(reject_approval_task),
        )
        .route("/vacancy-requests/:id/history", get(list_approval_history))
        .route(
            "/vacancy-requests/:id/vacancy",
            post(create_vacancy_from_request),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/vacancy-requests",
    tag = "vacancy-requests",
    request_body = CreateVacancyRequestRequestResource,
    responses(
        (status = 201, description = "Vacancy request created", body = VacancyRequestResource),
        (status = 400, description = "Invalid request", body = VacancyRequestErrorResponseResource),
        (status = 409, description = "Business rule not met", body = VacancyRequestErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = VacancyRequestErrorResponseResource)
    )
)]
pub async fn create_vacancy_request(
    State(state): State<VacancyRequestRestControllerState>,
    Extension(caller): Extension<AuthenticatedCaller>,
    Json(request): Json<CreateVacancyRequestRequestResource>,
) -> Result<(StatusCode, Json<VacancyRequestResource>), ErrorResponse> {
    validate(&request)?;

    let command = CreateVacancyRequestCommand::new(CreateVacancyRequestCommandParts {
        space_id: caller.space_id.to_string(),
        author_id: caller.user_id.to_string(),
        details: request.details.into_details().map_err(map_domain_error)?,
        assignee_ids: request.assignee_ids,
        as_draft: request.as_draft,
    })
    .map_err(map_domain_error)?;

    let outcome = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;
    let created = completed(outcome)?;

    Ok((StatusCode::CREATED, Json((&created).into())))
}

#[utoipa::path(
    get,
    path = "/vacancy-requests/{id}",
    tag = "vacancy-requests",
    params(("id" = String, Path, description = "Vacancy request id")),
    responses(
        (status = 200, description = "Vacancy request", body = VacancyRequestResource),
        (status = 404, description = "Not found", body = VacancyRequestErrorResponseResource)
    )
)]
pub async fn get_vacancy_request(
    State(state): State<VacancyRequestRestControllerState>,
    Extension(caller): Extension<AuthenticatedCaller>,
    Path(id): Path<String>,
) -> Result<Json<VacancyRequestResource>, ErrorResponse> {
    let query = VacancyRequestScopeQuery::new(caller.space_id.to_string(), id)
        .map_err(map_domain_error)?;

    let request = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json((&request).into()))
}

#[utoipa::path(
    put,
    path = "/vacancy-requests/{id}",
    tag = "vacancy-requests",
    params(("id" = String, Path, description = "Vacancy request id")),
    request_body = UpdateVacancyRequestRequestResource,
    responses(
        (status = 200, description = "Vacancy request updated", body = VacancyRequestResource),
        (status = 400, description = "Invalid request", body = VacancyRequestErrorResponseResource),
        (status = 404, description = "Not found", body = VacancyRequestErrorResponseResource),
        (status = 409, description = "Business rule not met", body = VacancyRequestErrorResponseResource)
    )
)]
pub async fn update_vacancy_request(
    State(state): State<VacancyRequestRestControllerState>,
    Extension(caller): Extension<AuthenticatedCaller>,
    Path(id): Path<String>,
    Json(request): Json<UpdateVacancyRequestRequestResource>,
) -> Result<Json<VacancyRequestResource>, ErrorResponse> {
    validate(&request)?;

    let command = UpdateVacancyRequestCommand::new(UpdateVacancyRequestCommandParts {
        space_id: caller.space_id.to_string(),
        request_id: id,
        actor_id: caller.user_id.to_string(),
        details: request.details.into_details().map_err(map_domain_error)?,
        assignee_ids: request.assignee_ids,
    })
    .map_err(map_domain_error)?;

    let outcome = state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;
    let updated = completed(outcome)?;

    Ok(Json((&updated).into()))
}

#[utoipa::path(
    put,
    path = "/vacancy-requests/{id}/status",
    tag = "vacancy-requests",
    params(("id" = String, Path, description = "Vacancy request id")),
    request_body = ChangeVacancyRequestStatusRequestResource,
    responses(
        (status = 200, description = "Status changed", body = VacancyRequestResource),
        (status = 400, description = "Invalid status", body = VacancyRequestErrorResponseResource),
        (status = 404, description = "Not found", body = VacancyRequestErrorResponseResource),
        (status = 409, description = "Transition not allowed", body = VacancyRequestErrorResponseResource)
    )
)]
pub async fn change_vacancy_request_status(
    State(state): State<VacancyRequestRestControllerState>,
    Extension(caller): Extension<AuthenticatedCaller>,
    Path(id): Path<String>,
    Json(request): Json<ChangeVacancyRequestStatusRequestResource>,
) -> Result<Json<VacancyRequestResource>, ErrorResponse> {
    validate(&request)?;

    let command = ChangeVacancyRequestStatusCommand::new(
        caller.space_id.to_string(),
        id,
        caller.user_id.to_string(),
        request.status,
    )
    .map_err(map_domain_error)?;

    let outcome = state
        .command_service
        .handle_change_status(command)
        .await
        .map_err(map_domain_error)?;
    let changed = completed(outcome)?;

    Ok(Json((&changed).into()))
}

#[utoipa::path(
    put,
    path = "/vacancy-requests/{id}/approval-tasks",
    tag = "vacancy-requests",
    params(("id" = String, Path, description = "Vacancy request id")),
    request_body = SaveApprovalTasksRequestResource,
    responses(
        (status = 200, description = "Active approval tasks", body = [ApprovalTaskResource]),
        (status = 404, description = "Not found", body = VacancyRequestErrorResponseResource),
        (status = 409, description = "Business rule not met", body = VacancyRequestErrorResponseResource)
    )
)]
pub async fn save_approval_tasks(
    State(state): State<VacancyRequestRestControllerState>,
    Extension(caller): Extension<AuthenticatedCaller>,
    Path(id): Path<String>,
    Json(request): Json<SaveApprovalTasksRequestResource>,
) -> Result<Json<Vec<ApprovalTaskResource>>, ErrorResponse> {
    let command = SaveApprovalTasksCommand::new(
        caller.space_id.to_string(),
        id,
        caller.user_id.to_string(),
        request.assignee_ids,
    )
    .map_err(map_domain_error)?;

    let outcome = state
        .command_service
        .handle_save_approval_tasks(command)
        .await
        .map_err(map_domain_error)?;
    let tasks = completed(outcome)?;

    Ok(Json(tasks.iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/vacancy-requests/{id}/approval-tasks",
    tag = "vacancy-requests",
    params(("id" = String, Path, description = "Vacancy request id")),
    responses(
        (status = 200, description = "Approval tasks", body = [ApprovalTaskResource]),
        (status = 404, description = "Not found", body = VacancyRequestErrorResponseResource)
    )
)]
pub async fn list_approval_tasks(
    State(state): State<VacancyRequestRestControllerState>,
    Extension(caller): Extension<AuthenticatedCaller>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ApprovalTaskResource>>, ErrorResponse> {
    let query = VacancyRequestScopeQuery::new(caller.space_id.to_string(), id)
        .map_err(map_domain_error)?;

    let tasks = state
        .query_service
        .handle_list_tasks(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/vacancy-requests/{id}/history",
    tag = "vacancy-requests",
    params(("id" = String, Path, description = "Vacancy request id")),
    responses(
        (status = 200, description = "Approval history, oldest first", body = [ApprovalHistoryResource]),
        (status = 404, description = "Not found", body = VacancyRequestErrorResponseResource)
    )
)]
pub async fn list_approval_history(
    State(state): State<VacancyRequestRestControllerState>,
    Extension(caller): Extension<AuthenticatedCaller>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ApprovalHistoryResource>>, ErrorResponse> {
    let query = VacancyRequestScopeQuery::new(caller.space_id.to_string(), id)
        .map_err(map_domain_error)?;

    let entries = state
        .query_service
        .handle_list_history(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    put,
    path = "/vacancy-requests/{id}/approval-tasks/{task_id}/approve",
    tag = "vacancy-requests",
    params(
        ("id" = String, Path, description = "Vacancy request id"),
        ("task_id" = String, Path, description = "Approval task id")
    ),
    request_body = ApprovalDecisionRequestResource,
    responses(
        (status = 200, description = "Task approved", body = ApprovalDecisionResponseResource),
        (status = 404, description = "Not found", body = VacancyRequestErrorResponseResource),
        (status = 409, description = "Decision not allowed", body = VacancyRequestErrorResponseResource)
    )
)]
pub async fn approve_approval_task(
    State(state): State<VacancyRequestRestControllerState>,
    Extension(caller): Extension<AuthenticatedCaller>,
    Path((id, task_id)): Path<(String, String)>,
    Json(request): Json<ApprovalDecisionRequestResource>,
) -> Result<Json<ApprovalDecisionResponseResource>, ErrorResponse> {
    decide(
        &state,
        &caller,
        id,
        task_id,
        ApprovalDecision::Approve,
        request,
    )
    .await
}

#[utoipa::path(
    put,
    path = "/vacancy-requests/{id}/approval-tasks/{task_id}/request-changes",
    tag = "vacancy-requests",
    params(
        ("id" = String, Path, description = "Vacancy request id"),
        ("task_id" = String, Path, description = "Approval task id")
    ),
    request_body = ApprovalDecisionRequestResource,
    responses(
        (status = 200, description = "Changes requested", body = ApprovalDecisionResponseResource),
        (status = 404, description = "Not found", body = VacancyRequestErrorResponseResource),
        (status = 409, description = "Decision not allowed", body = VacancyRequestErrorResponseResource)
    )
)]
pub async fn request_changes_approval_task(
    State(state): State<VacancyRequestRestControllerState>,
    Extension(caller): Extension<AuthenticatedCaller>,
    Path((id, task_id)): Path<(String, String)>,
    Json(request): Json<ApprovalDecisionRequestResource>,
) -> Result<Json<ApprovalDecisionResponseResource>, ErrorResponse> {
    decide(
        &state,
        &caller,
        id,
        task_id,
        ApprovalDecision::RequestChanges,
        request,
    )
    .await
}

#[utoipa::path(
    put,
    path = "/vacancy-requests/{id}/approval-tasks/{task_id}/reject",
    tag = "vacancy-requests",
    params(
        ("id" = String, Path, description = "Vacancy request id"),
        ("task_id" = String, Path, description = "Approval task id")
    ),
    request_body = ApprovalDecisionRequestResource,
    responses(
        (status = 200, description = "Request rejected", body = ApprovalDecisionResponseResource),
        (status = 404, description = "Not found", body = VacancyRequestErrorResponseResource),
        (status = 409, description = "Decision not allowed", body = VacancyRequestErrorResponseResource)
    )
)]
pub async fn reject_approval_task(
    State(state): State<VacancyRequestRestControllerState>,
    Extension(caller): Extension<AuthenticatedCaller>,
    Path((id, task_id)): Path<(String, String)>,
    Json(request): Json<ApprovalDecisionRequestResource>,
) -> Result<Json<ApprovalDecisionResponseResource>, ErrorResponse> {
    decide(
        &state,
        &caller,
        id,
        task_id,
        ApprovalDecision::Reject,
        request,
    )
    .await
}

#[utoipa::path(
    post,
    path = "/vacancy-requests/{id}/vacancy",
    tag = "vacancy-requests",
    params(("id" = String, Path, description = "Vacancy request id")),
    responses(
        (status = 201, description = "Vacancy created", body = VacancyResource),
        (status = 404, description = "Not found", body = VacancyRequestErrorResponseResource),
        (status = 409, description = "Request not approved or vacancy exists", body = VacancyRequestErrorResponseResource)
    )
)]
pub async fn create_vacancy_from_request(
    State(state): State<VacancyRequestRestControllerState>,
    Extension(caller): Extension<AuthenticatedCaller>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<VacancyResource>), ErrorResponse> {
    let command = CreateVacancyFromRequestCommand::new(
        caller.space_id.to_string(),
        id,
        caller.user_id.to_string(),
    )
    .map_err(map_domain_error)?;

    let outcome = state
        .command_service
        .handle_create_vacancy(command)
        .await
        .map_err(map_domain_error)?;
    let vacancy = completed(outcome)?;

    Ok((StatusCode::CREATED, Json((&vacancy).into())))
}

async fn decide(
    state: &VacancyRequestRestControllerState,
    caller: &AuthenticatedCaller,
    request_id: String,
    task_id: String,
    decision: ApprovalDecision,
    request: ApprovalDecisionRequestResource,
) -> Result<Json<ApprovalDecisionResponseResource>, ErrorResponse> {
    validate(&request)?;

    let command = DecideApprovalTaskCommand::new(DecideApprovalTaskCommandParts {
        space_id: caller.space_id.to_string(),
        request_id,
        task_id,
        actor_id: caller.user_id.to_string(),
        decision,
        comment: request.comment,
    })
    .map_err(map_domain_error)?;

    let outcome = state
        .command_service
        .handle_decide(command)
        .await
        .map_err(map_domain_error)?;
    let result = completed(outcome)?;

    Ok(Json((&result).into()))
}

fn validate(request: &impl Validate) -> Result<(), ErrorResponse> {
    request.validate().map_err(|validation_error| {
        (
            StatusCode::BAD_REQUEST,
            Json(VacancyRequestErrorResponseResource {
                message: validation_error.to_string(),
            }),
        )
    })
}

fn completed<T>(outcome: CommandOutcome<T>) -> Result<T, ErrorResponse> {
    match outcome {
        CommandOutcome::Completed(value) => Ok(value),
        CommandOutcome::Rejected(rejection) => Err(map_rejection(rejection)),
    }
}

fn map_rejection(rejection: VacancyRequestRejection) -> ErrorResponse {
    (
        StatusCode::CONFLICT,
        Json(VacancyRequestErrorResponseResource {
            message: rejection.to_string(),
        }),
    )
}

fn map_domain_error(error: VacancyRequestDomainError) -> ErrorResponse {
    let status = match error {
        VacancyRequestDomainError::InvalidSpaceId
        | VacancyRequestDomainError::InvalidUserId
        | VacancyRequestDomainError::InvalidVacancyRequestId
        | VacancyRequestDomainError::InvalidApprovalTaskId
        | VacancyRequestDomainError::InvalidRequestDetails(_)
        | VacancyRequestDomainError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
        VacancyRequestDomainError::VacancyRequestNotFound
        | VacancyRequestDomainError::ApprovalTaskNotFound => StatusCode::NOT_FOUND,
        VacancyRequestDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(VacancyRequestErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
