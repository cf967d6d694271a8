pub mod approval_task_reconciliation;
pub mod vacancy_request_command_service;
pub mod vacancy_request_query_service;
