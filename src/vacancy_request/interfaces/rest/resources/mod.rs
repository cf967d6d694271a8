pub mod approval_task_request_resource;
pub mod approval_task_resource;
pub mod change_vacancy_request_status_request_resource;
pub mod create_vacancy_request_request_resource;
pub mod update_vacancy_request_request_resource;
pub mod vacancy_request_details_resource;
pub mod vacancy_request_error_response_resource;
pub mod vacancy_request_resource;
