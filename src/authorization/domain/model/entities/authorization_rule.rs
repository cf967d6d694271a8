use std::collections::BTreeSet;

use crate::authorization::domain::model::{
    enums::{auth_predicate::AuthPredicate, http_method::HttpMethod, space_role::SpaceRole},
    value_objects::route_pattern::RoutePattern,
};

#[derive(Clone, Debug)]
pub struct AuthorizationRule {
    module: String,
    permission: String,
    roles: BTreeSet<SpaceRole>,
    method: HttpMethod,
    pattern: RoutePattern,
    predicate: AuthPredicate,
}

impl AuthorizationRule {
    pub fn new(
        module: impl Into<String>,
        permission: impl Into<String>,
        roles: BTreeSet<SpaceRole>,
        method: HttpMethod,
        pattern: RoutePattern,
        predicate: Option<AuthPredicate>,
    ) -> Self {
        let predicate = predicate.unwrap_or_else(|| AuthPredicate::AllowRoles(roles.clone()));
        Self {
            module: module.into(),
            permission: permission.into(),
            roles,
            method,
            pattern,
            predicate,
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn permission(&self) -> &str {
        &self.permission
    }

    pub fn roles(&self) -> &BTreeSet<SpaceRole> {
        &self.roles
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn predicate(&self) -> &AuthPredicate {
        &self.predicate
    }

    pub fn declaration(&self) -> String {
        format!("{} [{}]", self.pattern.path(), self.method)
    }
}
