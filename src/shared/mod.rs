pub mod app_context;
pub mod app_context_error;
pub mod interfaces;
