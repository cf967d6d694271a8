use thiserror::Error;

use crate::authorization::domain::model::enums::authorization_domain_error::AuthorizationDomainError;

#[derive(Debug, Error)]
pub enum AppContextError {
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("rule catalog is invalid: {0}")]
    RuleCatalog(#[from] AuthorizationDomainError),
}
