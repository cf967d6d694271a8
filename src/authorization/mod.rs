use axum::Router;

use crate::{
    authorization::interfaces::rest::controllers::authorization_rest_controller::{
        AuthorizationRestControllerState, router,
    },
    shared::app_context::AppContext,
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_authorization_router(context: &AppContext) -> Router {
    router(AuthorizationRestControllerState {
        query_service: context.authorization_query_service.clone(),
    })
}
