pub mod approval_history_repository;
pub mod approval_task_repository;
pub mod postgres;
pub mod unit_of_work;
pub mod vacancy_repository;
pub mod vacancy_request_repository;
