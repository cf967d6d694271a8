pub mod approval_decision;
pub mod approval_state;
pub mod command_outcome;
pub mod dictionary_kind;
pub mod notification_kind;
pub mod request_urgency;
pub mod selection_type;
pub mod vacancy_request_domain_error;
pub mod vacancy_request_rejection;
pub mod vacancy_request_status;
pub mod vacancy_status;
