use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::authorization::{
    domain::{
        model::{
            enums::{authorization_domain_error::AuthorizationDomainError, space_role::SpaceRole},
            queries::authorize_operation_query::{
                AuthorizeOperationQuery, AuthorizeOperationQueryParts,
            },
        },
        services::authorization_query_service::AuthorizationQueryService,
    },
    interfaces::rest::{
        controllers::authorization_rest_controller::map_domain_error,
        resources::authorization_error_response_resource::AuthorizationErrorResponseResource,
    },
};

pub const SPACE_ID_HEADER: &str = "x-space-id";
pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Identity of an authorized caller, as forwarded by the gateway. Inserted
/// into the request extensions once the call is allowed.
#[derive(Clone, Debug)]
pub struct AuthenticatedCaller {
    pub space_id: Uuid,
    pub user_id: Uuid,
    pub role: SpaceRole,
}

#[derive(Clone)]
pub struct AuthorizationMiddlewareState {
    pub query_service: Arc<dyn AuthorizationQueryService>,
}

fn header_value(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub async fn authorize_request(
    State(state): State<AuthorizationMiddlewareState>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<AuthorizationErrorResponseResource>)> {
    let query = AuthorizeOperationQuery::new(AuthorizeOperationQueryParts {
        space_id: header_value(request.headers(), SPACE_ID_HEADER),
        caller_id: header_value(request.headers(), USER_ID_HEADER),
        caller_role: header_value(request.headers(), USER_ROLE_HEADER),
        method: request.method().as_str().to_string(),
        uri: request.uri().path().to_string(),
    })
    .map_err(|error| match error {
        AuthorizationDomainError::InvalidSpaceId
        | AuthorizationDomainError::InvalidCallerId
        | AuthorizationDomainError::InvalidRole(_) => (
            StatusCode::UNAUTHORIZED,
            Json(AuthorizationErrorResponseResource {
                message: error.to_string(),
            }),
        ),
        AuthorizationDomainError::InvalidHttpMethod(_) => (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(AuthorizationErrorResponseResource {
                message: error.to_string(),
            }),
        ),
        other => map_domain_error(other),
    })?;

    let caller = AuthenticatedCaller {
        space_id: query.space_id(),
        user_id: query.caller_id(),
        role: query.caller_role(),
    };
    let method = query.method();

    let decision = state
        .query_service
        .handle_authorize(query)
        .await
        .map_err(map_domain_error)?;

    if !decision.allowed {
        tracing::info!(
            space_id = %caller.space_id,
            user_id = %caller.user_id,
            role = %caller.role,
            method = %method,
            path = request.uri().path(),
            reason = decision.reason.as_str(),
            "request denied"
        );
        return Err(map_domain_error(AuthorizationDomainError::AccessDenied(
            decision.reason,
        )));
    }

    request.extensions_mut().insert(caller);
    Ok(next.run(request).await)
}
