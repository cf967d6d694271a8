use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RolePermissionsResource {
    pub role: String,
    /// Module name to granted permissions.
    pub permissions: BTreeMap<String, Vec<String>>,
}
