use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    enums::{
        vacancy_request_rejection::VacancyRequestRejection,
        vacancy_request_status::VacancyRequestStatus,
    },
    value_objects::{
        field_change::FieldChange, space_id::SpaceId, user_id::UserId,
        vacancy_request_details::VacancyRequestDetails,
    },
};

#[derive(Clone, Debug)]
pub struct VacancyRequest {
    id: Uuid,
    space_id: SpaceId,
    author_id: UserId,
    details: VacancyRequestDetails,
    status: VacancyRequestStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

pub struct VacancyRequestParts {
    pub id: Uuid,
    pub space_id: SpaceId,
    pub author_id: UserId,
    pub details: VacancyRequestDetails,
    pub status: VacancyRequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VacancyRequest {
    pub fn new(
        space_id: SpaceId,
        author_id: UserId,
        details: VacancyRequestDetails,
        as_draft: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            space_id,
            author_id,
            details,
            status: if as_draft {
                VacancyRequestStatus::Draft
            } else {
                VacancyRequestStatus::Created
            },
            created_at,
            updated_at: created_at,
        }
    }

    pub fn restore(parts: VacancyRequestParts) -> Self {
        Self {
            id: parts.id,
            space_id: parts.space_id,
            author_id: parts.author_id,
            details: parts.details,
            status: parts.status,
            created_at: parts.created_at,
            updated_at: parts.updated_at,
        }
    }

    pub fn is_allow_change(&self) -> bool {
        matches!(
            self.status,
            VacancyRequestStatus::Draft | VacancyRequestStatus::Created
        )
    }

    pub fn allow_accept(&self) -> bool {
        self.status == VacancyRequestStatus::Created
    }

    pub fn allow_reject(&self) -> bool {
        self.status == VacancyRequestStatus::Created
    }

    pub fn allow_cancel(&self) -> bool {
        matches!(
            self.status,
            VacancyRequestStatus::Created | VacancyRequestStatus::Approved
        )
    }

    /// Replaces the details and returns what changed. A draft is submitted by
    /// the edit.
    pub fn apply_edit(
        &mut self,
        details: VacancyRequestDetails,
        now: DateTime<Utc>,
    ) -> Result<Vec<FieldChange>, VacancyRequestRejection> {
        if !self.is_allow_change() {
            return Err(VacancyRequestRejection::ChangeNotAllowed(self.status));
        }

        let mut changes = self.details.diff(&details);
        if let Some(change) = self.enter(VacancyRequestStatus::Created) {
            changes.push(change);
        }
        self.details = details;
        self.updated_at = now;
        Ok(changes)
    }

    /// `Approved`/`Rejected` are reached through decisions only.
    pub fn change_status(
        &mut self,
        target: VacancyRequestStatus,
        now: DateTime<Utc>,
    ) -> Result<Option<FieldChange>, VacancyRequestRejection> {
        let allowed = match target {
            VacancyRequestStatus::Created => self.is_allow_change(),
            VacancyRequestStatus::Cancelled => self.allow_cancel(),
            _ => false,
        };
        if !allowed {
            return Err(VacancyRequestRejection::StatusTransitionNotAllowed {
                from: self.status,
                to: target,
            });
        }

        let change = self.enter(target);
        self.updated_at = now;
        Ok(change)
    }

    /// Idempotent: `Ok(None)` when the request is already approved.
    pub fn mark_approved(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<Option<FieldChange>, VacancyRequestRejection> {
        match self.status {
            VacancyRequestStatus::Approved => Ok(None),
            VacancyRequestStatus::Created => {
                self.updated_at = now;
                Ok(self.enter(VacancyRequestStatus::Approved))
            }
            from => Err(VacancyRequestRejection::StatusTransitionNotAllowed {
                from,
                to: VacancyRequestStatus::Approved,
            }),
        }
    }

    pub fn mark_rejected(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<Option<FieldChange>, VacancyRequestRejection> {
        if !self.allow_reject() {
            return Err(VacancyRequestRejection::StatusTransitionNotAllowed {
                from: self.status,
                to: VacancyRequestStatus::Rejected,
            });
        }
        self.updated_at = now;
        Ok(self.enter(VacancyRequestStatus::Rejected))
    }

    /// The request stays `Created` so the author can revise and resubmit.
    pub fn mark_changes_requested(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<(), VacancyRequestRejection> {
        if !self.allow_accept() {
            return Err(VacancyRequestRejection::DecisionNotAllowed(self.status));
        }
        self.updated_at = now;
        Ok(())
    }

    fn enter(&mut self, target: VacancyRequestStatus) -> Option<FieldChange> {
        if self.status == target {
            return None;
        }
        let change = FieldChange::new(
            "status",
            Some(self.status.as_str().to_string()),
            Some(target.as_str().to_string()),
        );
        self.status = target;
        Some(change)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn space_id(&self) -> SpaceId {
        self.space_id
    }

    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    pub fn details(&self) -> &VacancyRequestDetails {
        &self.details
    }

    pub fn status(&self) -> VacancyRequestStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
