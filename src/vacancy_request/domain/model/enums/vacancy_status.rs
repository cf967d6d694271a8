use std::str::FromStr;

use super::vacancy_request_domain_error::VacancyRequestDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VacancyStatus {
    Open,
    Closed,
    Cancelled,
}

impl VacancyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for VacancyStatus {
    type Err = VacancyRequestDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(VacancyRequestDomainError::InvalidStatus(value.to_string())),
        }
    }
}
