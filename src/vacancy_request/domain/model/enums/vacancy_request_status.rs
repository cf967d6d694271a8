use std::{fmt, str::FromStr};

use super::vacancy_request_domain_error::VacancyRequestDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum VacancyRequestStatus {
    Draft,
    Created,
    Approved,
    Rejected,
    Cancelled,
}

impl VacancyRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Created => "created",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for VacancyRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VacancyRequestStatus {
    type Err = VacancyRequestDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "draft" => Ok(Self::Draft),
            "created" => Ok(Self::Created),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(VacancyRequestDomainError::InvalidStatus(value.to_string())),
        }
    }
}
