use std::fmt;

use uuid::Uuid;

use crate::vacancy_request::domain::model::enums::vacancy_request_domain_error::VacancyRequestDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(value: String) -> Result<Self, VacancyRequestDomainError> {
        let parsed =
            Uuid::parse_str(value.trim()).map_err(|_| VacancyRequestDomainError::InvalidUserId)?;
        Ok(Self(parsed))
    }

    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
