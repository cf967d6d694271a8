use uuid::Uuid;

use crate::authorization::domain::model::enums::{
    authorization_domain_error::AuthorizationDomainError, http_method::HttpMethod,
    space_role::SpaceRole,
};

#[derive(Clone, Debug)]
pub struct AuthorizeOperationQuery {
    space_id: Uuid,
    caller_id: Uuid,
    caller_role: SpaceRole,
    method: HttpMethod,
    uri: String,
}

pub struct AuthorizeOperationQueryParts {
    pub space_id: String,
    pub caller_id: String,
    pub caller_role: String,
    pub method: String,
    pub uri: String,
}

impl AuthorizeOperationQuery {
    pub fn new(parts: AuthorizeOperationQueryParts) -> Result<Self, AuthorizationDomainError> {
        let space_id = Uuid::parse_str(parts.space_id.trim())
            .map_err(|_| AuthorizationDomainError::InvalidSpaceId)?;
        let caller_id = Uuid::parse_str(parts.caller_id.trim())
            .map_err(|_| AuthorizationDomainError::InvalidCallerId)?;

        Ok(Self {
            space_id,
            caller_id,
            caller_role: parts.caller_role.parse()?,
            method: parts.method.parse()?,
            uri: parts.uri,
        })
    }

    pub fn space_id(&self) -> Uuid {
        self.space_id
    }
    pub fn caller_id(&self) -> Uuid {
        self.caller_id
    }
    pub fn caller_role(&self) -> SpaceRole {
        self.caller_role
    }
    pub fn method(&self) -> HttpMethod {
        self.method
    }
    pub fn uri(&self) -> &str {
        &self.uri
    }
}
