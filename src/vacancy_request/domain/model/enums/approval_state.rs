use std::{fmt, str::FromStr};

use super::vacancy_request_domain_error::VacancyRequestDomainError;

/// `Removed` and `Cancelled` only ever appear in history entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ApprovalState {
    Pending,
    Approved,
    RequestChanges,
    Rejected,
    Removed,
    Cancelled,
}

impl ApprovalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::RequestChanges => "request_changes",
            Self::Rejected => "rejected",
            Self::Removed => "removed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ApprovalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalState {
    type Err = VacancyRequestDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "request_changes" => Ok(Self::RequestChanges),
            "rejected" => Ok(Self::Rejected),
            "removed" => Ok(Self::Removed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(VacancyRequestDomainError::InvalidStatus(value.to_string())),
        }
    }
}
