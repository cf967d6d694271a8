use std::collections::HashMap;

use uuid::Uuid;

use crate::authorization::domain::model::enums::space_role::SpaceRole;

pub const REQUEST_ID_PARAMETER: &str = "id";
pub const TASK_ID_PARAMETER: &str = "task_id";

#[derive(Clone, Debug)]
pub struct PredicateContext {
    pub space_id: Uuid,
    pub caller_id: Uuid,
    pub caller_role: SpaceRole,
    pub uri: String,
    pub path_params: HashMap<String, String>,
}

impl PredicateContext {
    /// `None` when the parameter is absent or not a UUID.
    pub fn uuid_param(&self, name: &str) -> Option<Uuid> {
        self.path_params
            .get(name)
            .and_then(|value| Uuid::parse_str(value).ok())
    }
}
