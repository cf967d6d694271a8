pub mod notification_facade;
pub mod space_directory_facade;
