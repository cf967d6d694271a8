use thiserror::Error;

#[derive(Debug, Error)]
pub enum VacancyRequestDomainError {
    #[error("space id is invalid")]
    InvalidSpaceId,

    #[error("user id is invalid")]
    InvalidUserId,

    #[error("vacancy request id is invalid")]
    InvalidVacancyRequestId,

    #[error("approval task id is invalid")]
    InvalidApprovalTaskId,

    #[error("vacancy request details are invalid: {0}")]
    InvalidRequestDetails(String),

    #[error("status is invalid: {0}")]
    InvalidStatus(String),

    #[error("vacancy request not found")]
    VacancyRequestNotFound,

    #[error("approval task not found")]
    ApprovalTaskNotFound,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
