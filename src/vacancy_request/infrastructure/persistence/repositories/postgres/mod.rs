pub mod sqlx_approval_history_repository_impl;
pub mod sqlx_approval_task_repository_impl;
pub mod sqlx_vacancy_repository_impl;
pub mod sqlx_vacancy_request_repository_impl;
pub mod sqlx_vacancy_request_row_mapper;
pub mod sqlx_vacancy_request_unit_of_work_impl;
