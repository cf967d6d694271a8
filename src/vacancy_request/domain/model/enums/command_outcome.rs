use super::vacancy_request_rejection::VacancyRequestRejection;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommandOutcome<T> {
    Completed(T),
    Rejected(VacancyRequestRejection),
}

impl<T> CommandOutcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&VacancyRequestRejection> {
        match self {
            Self::Completed(_) => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

impl<T> From<VacancyRequestRejection> for CommandOutcome<T> {
    fn from(rejection: VacancyRequestRejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl<T> From<Result<T, VacancyRequestRejection>> for CommandOutcome<T> {
    fn from(result: Result<T, VacancyRequestRejection>) -> Self {
        match result {
            Ok(value) => Self::Completed(value),
            Err(rejection) => Self::Rejected(rejection),
        }
    }
}
