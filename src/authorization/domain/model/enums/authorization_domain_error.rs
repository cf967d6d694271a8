use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthorizationDomainError {
    #[error("space id is invalid")]
    InvalidSpaceId,

    #[error("caller id is invalid")]
    InvalidCallerId,

    #[error("role is invalid: {0}")]
    InvalidRole(String),

    #[error("http method is invalid: {0}")]
    InvalidHttpMethod(String),

    #[error("rule declaration is invalid: {0}")]
    InvalidRuleDeclaration(String),

    #[error("rule already registered: {0}")]
    DuplicateRule(String),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
