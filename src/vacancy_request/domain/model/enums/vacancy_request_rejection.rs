use thiserror::Error;
use uuid::Uuid;

use super::{
    approval_state::ApprovalState, dictionary_kind::DictionaryKind,
    vacancy_request_status::VacancyRequestStatus,
};

/// Business preconditions that were false when the operation ran. Returned as
/// values; state is left untouched.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum VacancyRequestRejection {
    #[error("at least one approver is required")]
    NoApprovers,

    #[error("approver {0} is not a member of this space")]
    UnknownAssignee(Uuid),

    #[error("approver {0} is listed more than once")]
    DuplicateAssignee(String),

    #[error("{kind} {id} not found in this space")]
    UnknownDictionaryEntity { kind: DictionaryKind, id: Uuid },

    #[error("vacancy request in status {0} cannot be changed")]
    ChangeNotAllowed(VacancyRequestStatus),

    #[error("vacancy request in status {0} does not accept approval decisions")]
    DecisionNotAllowed(VacancyRequestStatus),

    #[error("status cannot change from {from} to {to}")]
    StatusTransitionNotAllowed {
        from: VacancyRequestStatus,
        to: VacancyRequestStatus,
    },

    #[error("approval task is assigned to another member")]
    TaskNotAssignedToCaller,

    #[error("approval task is already {0}")]
    TaskAlreadyDecided(ApprovalState),

    #[error("a comment is required for this decision")]
    CommentRequired,

    #[error("vacancy request must be approved before a vacancy is created")]
    RequestNotApproved,

    #[error("a vacancy already exists for this request")]
    VacancyAlreadyExists,

    #[error("vacancy is invalid: {0}")]
    InvalidVacancy(String),
}
