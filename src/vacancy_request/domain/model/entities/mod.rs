pub mod approval_history_entry;
pub mod approval_task;
pub mod vacancy;
pub mod vacancy_request;
