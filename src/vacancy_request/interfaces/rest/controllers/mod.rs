pub mod vacancy_request_rest_controller;
