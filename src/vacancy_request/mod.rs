use axum::{Router, middleware};

use crate::{
    authorization::interfaces::rest::middleware::authorization_middleware::{
        AuthorizationMiddlewareState, authorize_request,
    },
    shared::app_context::AppContext,
    vacancy_request::interfaces::rest::controllers::vacancy_request_rest_controller::{
        VacancyRequestRestControllerState, router,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Every route is resolved through the rule table before its handler runs.
pub fn build_vacancy_request_router(context: &AppContext) -> Router {
    router(VacancyRequestRestControllerState {
        command_service: context.vacancy_request_command_service.clone(),
        query_service: context.vacancy_request_query_service.clone(),
    })
    .route_layer(middleware::from_fn_with_state(
        AuthorizationMiddlewareState {
            query_service: context.authorization_query_service.clone(),
        },
        authorize_request,
    ))
}
