use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::authorization::{
    domain::{
        model::{
            enums::authorization_domain_error::AuthorizationDomainError,
            queries::{
                authorize_operation_query::{AuthorizeOperationQuery, AuthorizeOperationQueryParts},
                list_role_permissions_query::ListRolePermissionsQuery,
            },
        },
        services::authorization_query_service::AuthorizationQueryService,
    },
    interfaces::rest::resources::{
        authorization_error_response_resource::AuthorizationErrorResponseResource,
        evaluate_authorization_request_resource::{
            EvaluateAuthorizationRequestResource, EvaluateAuthorizationResponseResource,
        },
        role_permissions_resource::RolePermissionsResource,
    },
};

#[derive(Clone)]
pub struct AuthorizationRestControllerState {
    pub query_service: Arc<dyn AuthorizationQueryService>,
}

pub fn router(state: AuthorizationRestControllerState) -> Router {
    Router::new()
        .route(
            "/authorization/roles/:role/permissions",
            get(list_role_permissions),
        )
        .route(
            "/authorization/decisions/evaluate",
            post(evaluate_authorization),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/authorization/roles/{role}/permissions",
    tag = "authorization",
    params(("role" = String, Path, description = "Space role")),
    responses(
        (status = 200, description = "Permission matrix of the role", body = RolePermissionsResource),
        (status = 400, description = "Unknown role", body = AuthorizationErrorResponseResource)
    )
)]
pub async fn list_role_permissions(
    State(state): State<AuthorizationRestControllerState>,
    Path(role): Path<String>,
) -> Result<Json<RolePermissionsResource>, (StatusCode, Json<AuthorizationErrorResponseResource>)>
{
    let query = ListRolePermissionsQuery::new(role).map_err(map_domain_error)?;
    let role = query.role();

    let permissions = state
        .query_service
        .handle_list_role_permissions(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(RolePermissionsResource {
        role: role.as_str().to_string(),
        permissions,
    }))
}

#[utoipa::path(
    post,
    path = "/authorization/decisions/evaluate",
    tag = "authorization",
    request_body = EvaluateAuthorizationRequestResource,
    responses(
        (status = 200, description = "Authorization decision", body = EvaluateAuthorizationResponseResource),
        (status = 400, description = "Invalid request", body = AuthorizationErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = AuthorizationErrorResponseResource)
    )
)]
pub async fn evaluate_authorization(
    State(state): State<AuthorizationRestControllerState>,
    Json(request): Json<EvaluateAuthorizationRequestResource>,
) -> Result<
    Json<EvaluateAuthorizationResponseResource>,
    (StatusCode, Json<AuthorizationErrorResponseResource>),
> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(AuthorizationErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let query = AuthorizeOperationQuery::new(AuthorizeOperationQueryParts {
        space_id: request.space_id,
        caller_id: request.caller_id,
        caller_role: request.caller_role,
        method: request.method,
        uri: request.uri,
    })
    .map_err(map_domain_error)?;

    let decision = state
        .query_service
        .handle_authorize(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EvaluateAuthorizationResponseResource {
        allowed: decision.allowed,
        reason: decision.reason,
        module: decision.module,
        permission: decision.permission,
    }))
}

pub(crate) fn map_domain_error(
    error: AuthorizationDomainError,
) -> (StatusCode, Json<AuthorizationErrorResponseResource>) {
    let status = match error {
        AuthorizationDomainError::InvalidSpaceId
        | AuthorizationDomainError::InvalidCallerId
        | AuthorizationDomainError::InvalidRole(_)
        | AuthorizationDomainError::InvalidHttpMethod(_)
        | AuthorizationDomainError::InvalidRuleDeclaration(_)
        | AuthorizationDomainError::DuplicateRule(_) => StatusCode::BAD_REQUEST,
        AuthorizationDomainError::AccessDenied(_) => StatusCode::FORBIDDEN,
        AuthorizationDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(AuthorizationErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
