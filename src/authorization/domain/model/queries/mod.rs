pub mod authorize_operation_query;
pub mod list_role_permissions_query;
