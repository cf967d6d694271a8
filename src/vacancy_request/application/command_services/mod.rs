pub mod approval_task_manager;
pub mod vacancy_request_command_service_impl;
pub mod vacancy_request_notification_dispatcher;
