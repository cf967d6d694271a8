use std::sync::Arc;

use vacancy_approval_api::{
    authorization::application::query_services::authorization_query_service_impl::AuthorizationQueryServiceImpl,
    shared::app_context::build_rule_table,
};

use super::{fakes::FakeRequestOwnershipFacade, fixtures::widget_rule_table};

pub struct AuthorizationHarness {
    pub ownership_facade: Arc<FakeRequestOwnershipFacade>,
    pub service: Arc<AuthorizationQueryServiceImpl>,
}

pub fn create_harness(default_allow: bool) -> AuthorizationHarness {
    let ownership_facade = Arc::new(FakeRequestOwnershipFacade::new());
    let service = Arc::new(AuthorizationQueryServiceImpl::new(
        Arc::new(widget_rule_table()),
        ownership_facade.clone(),
        default_allow,
    ));

    AuthorizationHarness {
        ownership_facade,
        service,
    }
}

/// Harness over the rule table the application serves.
pub fn create_catalog_harness() -> AuthorizationHarness {
    let ownership_facade = Arc::new(FakeRequestOwnershipFacade::new());
    let rule_table = build_rule_table().expect("catalog rules register");
    let service = Arc::new(AuthorizationQueryServiceImpl::new(
        Arc::new(rule_table),
        ownership_facade.clone(),
        false,
    ));

    AuthorizationHarness {
        ownership_facade,
        service,
    }
}
