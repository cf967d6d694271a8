use crate::authorization::domain::model::enums::{
    authorization_domain_error::AuthorizationDomainError, space_role::SpaceRole,
};

#[derive(Clone, Debug)]
pub struct ListRolePermissionsQuery {
    role: SpaceRole,
}

impl ListRolePermissionsQuery {
    pub fn new(role: String) -> Result<Self, AuthorizationDomainError> {
        Ok(Self { role: role.parse()? })
    }

    pub fn role(&self) -> SpaceRole {
        self.role
    }
}
