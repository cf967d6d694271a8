#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
    RequestCreated,
    RequestUpdated,
    TaskApproved,
    ChangesRequested,
    RequestRejected,
    RequestApproved,
    RequestCancelled,
    VacancyCreated,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestCreated => "vacancy_request_created",
            Self::RequestUpdated => "vacancy_request_updated",
            Self::TaskApproved => "approval_task_approved",
            Self::ChangesRequested => "approval_task_request_changes",
            Self::RequestRejected => "vacancy_request_rejected",
            Self::RequestApproved => "vacancy_request_approved",
            Self::RequestCancelled => "vacancy_request_cancelled",
            Self::VacancyCreated => "vacancy_created",
        }
    }
}
