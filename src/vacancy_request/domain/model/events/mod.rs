pub mod vacancy_request_notification_event;
