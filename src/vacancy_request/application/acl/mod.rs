pub mod request_ownership_facade_impl;
pub mod sqlx_notification_outbox_facade_impl;
pub mod sqlx_space_directory_facade_impl;
