use super::{approval_state::ApprovalState, notification_kind::NotificationKind};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApprovalDecision {
    Approve,
    RequestChanges,
    Reject,
}

impl ApprovalDecision {
    pub fn target_state(&self) -> ApprovalState {
        match self {
            Self::Approve => ApprovalState::Approved,
            Self::RequestChanges => ApprovalState::RequestChanges,
            Self::Reject => ApprovalState::Rejected,
        }
    }

    pub fn requires_comment(&self) -> bool {
        !matches!(self, Self::Approve)
    }

    pub fn notification_kind(&self) -> NotificationKind {
        match self {
            Self::Approve => NotificationKind::TaskApproved,
            Self::RequestChanges => NotificationKind::ChangesRequested,
            Self::Reject => NotificationKind::RequestRejected,
        }
    }
}
