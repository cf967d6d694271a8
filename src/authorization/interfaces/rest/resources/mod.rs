pub mod authorization_error_response_resource;
pub mod evaluate_authorization_request_resource;
pub mod role_permissions_resource;
