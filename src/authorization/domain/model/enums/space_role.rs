use std::{fmt, str::FromStr};

use super::authorization_domain_error::AuthorizationDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum SpaceRole {
    Admin,
    Manager,
    Specialist,
    Hr,
    Observer,
}

impl SpaceRole {
    pub const ALL: [SpaceRole; 5] = [
        Self::Admin,
        Self::Manager,
        Self::Specialist,
        Self::Hr,
        Self::Observer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Specialist => "specialist",
            Self::Hr => "hr",
            Self::Observer => "observer",
        }
    }
}

impl fmt::Display for SpaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceRole {
    type Err = AuthorizationDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "specialist" => Ok(Self::Specialist),
            "hr" => Ok(Self::Hr),
            "observer" => Ok(Self::Observer),
            _ => Err(AuthorizationDomainError::InvalidRole(value.to_string())),
        }
    }
}
