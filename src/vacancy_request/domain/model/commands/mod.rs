pub mod change_vacancy_request_status_command;
pub mod create_vacancy_from_request_command;
pub mod create_vacancy_request_command;
pub mod decide_approval_task_command;
pub mod save_approval_tasks_command;
pub mod update_vacancy_request_command;
