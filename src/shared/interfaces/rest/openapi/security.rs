use utoipa::{
    Modify,
    openapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};

use crate::authorization::interfaces::rest::middleware::authorization_middleware::{
    SPACE_ID_HEADER, USER_ID_HEADER, USER_ROLE_HEADER,
};

/// Documents the identity headers the gateway forwards on every API call.
pub struct GatewayHeadersSecurityAddon;

impl Modify for GatewayHeadersSecurityAddon {
    fn modify(&self, openapi: &mut OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        for (name, header) in [
            ("space_id", SPACE_ID_HEADER),
            ("user_id", USER_ID_HEADER),
            ("user_role", USER_ROLE_HEADER),
        ] {
            components.add_security_scheme(
                name,
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(header))),
            );
        }
    }
}
