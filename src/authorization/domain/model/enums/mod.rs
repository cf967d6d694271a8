pub mod auth_predicate;
pub mod authorization_domain_error;
pub mod http_method;
pub mod space_role;
