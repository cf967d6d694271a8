use std::str::FromStr;

use super::vacancy_request_domain_error::VacancyRequestDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum RequestUrgency {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl RequestUrgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl FromStr for RequestUrgency {
    type Err = VacancyRequestDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(VacancyRequestDomainError::InvalidRequestDetails(format!(
                "unknown urgency `{value}`"
            ))),
        }
    }
}
