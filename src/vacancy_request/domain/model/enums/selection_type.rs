use std::str::FromStr;

use super::vacancy_request_domain_error::VacancyRequestDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum SelectionType {
    #[default]
    Individual,
    Mass,
}

impl SelectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Mass => "mass",
        }
    }
}

impl FromStr for SelectionType {
    type Err = VacancyRequestDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "individual" => Ok(Self::Individual),
            "mass" => Ok(Self::Mass),
            _ => Err(VacancyRequestDomainError::InvalidRequestDetails(format!(
                "unknown selection type `{value}`"
            ))),
        }
    }
}
