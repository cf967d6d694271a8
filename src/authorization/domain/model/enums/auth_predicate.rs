use std::collections::BTreeSet;

use super::space_role::SpaceRole;

/// Access check attached to a rule. Every variant requires the caller's role
/// to be in its set; the ownership variants additionally consult workflow
/// state through the path parameters of the matched route.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuthPredicate {
    AllowRoles(BTreeSet<SpaceRole>),
    /// Caller must be the author of the request named by `{id}`.
    AllowSelf(BTreeSet<SpaceRole>),
    /// Caller must be the assignee of the task named by `{task_id}` on `{id}`.
    AllowTaskAssignee(BTreeSet<SpaceRole>),
}

impl AuthPredicate {
    pub fn allow_roles(roles: &[SpaceRole]) -> Self {
        Self::AllowRoles(roles.iter().copied().collect())
    }

    pub fn allow_self(roles: &[SpaceRole]) -> Self {
        Self::AllowSelf(roles.iter().copied().collect())
    }

    pub fn allow_task_assignee(roles: &[SpaceRole]) -> Self {
        Self::AllowTaskAssignee(roles.iter().copied().collect())
    }

    pub fn roles(&self) -> &BTreeSet<SpaceRole> {
        match self {
            Self::AllowRoles(roles) | Self::AllowSelf(roles) | Self::AllowTaskAssignee(roles) => {
                roles
            }
        }
    }

    pub fn allows_role(&self, role: SpaceRole) -> bool {
        self.roles().contains(&role)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AllowRoles(_) => "allow_roles",
            Self::AllowSelf(_) => "allow_self",
            Self::AllowTaskAssignee(_) => "allow_task_assignee",
        }
    }
}
