pub mod entity_id;
pub mod field_change;
pub mod space_id;
pub mod user_id;
pub mod vacancy_request_details;
