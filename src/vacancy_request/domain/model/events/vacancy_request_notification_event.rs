use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    entities::vacancy_request::VacancyRequest,
    enums::notification_kind::NotificationKind,
    value_objects::{space_id::SpaceId, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct VacancyRequestNotificationEvent {
    pub kind: NotificationKind,
    pub space_id: SpaceId,
    pub request_id: Uuid,
    pub request_title: String,
    pub actor_id: UserId,
    pub comment: Option<String>,
    pub recipients: Vec<UserId>,
    pub occurred_at: DateTime<Utc>,
}

impl VacancyRequestNotificationEvent {
    pub fn for_request(
        kind: NotificationKind,
        request: &VacancyRequest,
        actor_id: UserId,
        comment: Option<String>,
        assignee_ids: impl IntoIterator<Item = UserId>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            space_id: request.space_id(),
            request_id: request.id(),
            request_title: request.details().title.clone(),
            actor_id,
            comment,
            recipients: Self::recipients_for(request.author_id(), assignee_ids, actor_id),
            occurred_at,
        }
    }

    /// Recipients are the author plus every distinct assignee, minus the
    /// actor, in first-seen order.
    pub fn recipients_for(
        author_id: UserId,
        assignee_ids: impl IntoIterator<Item = UserId>,
        actor_id: UserId,
    ) -> Vec<UserId> {
        let mut recipients = Vec::new();
        for user_id in std::iter::once(author_id).chain(assignee_ids) {
            if user_id != actor_id && !recipients.contains(&user_id) {
                recipients.push(user_id);
            }
        }
        recipients
    }
}
