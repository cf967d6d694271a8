pub mod authorization;
pub mod config;
pub mod shared;
pub mod vacancy_request;
