use std::sync::Arc;

use crate::vacancy_request::{
    domain::model::events::vacancy_request_notification_event::VacancyRequestNotificationEvent,
    interfaces::acl::notification_facade::{NotificationFacade, NotificationPayload},
};

/// Delivers events after the unit of work that produced them has committed.
/// Delivery runs on a spawned task; failures are logged and never reach the
/// caller.
#[derive(Clone)]
pub struct VacancyRequestNotificationDispatcher {
    notification_facade: Arc<dyn NotificationFacade>,
}

impl VacancyRequestNotificationDispatcher {
    pub fn new(notification_facade: Arc<dyn NotificationFacade>) -> Self {
        Self {
            notification_facade,
        }
    }

    pub fn dispatch(&self, event: VacancyRequestNotificationEvent) {
        if event.recipients.is_empty() {
            return;
        }

        let facade = self.notification_facade.clone();
        tokio::spawn(async move {
            let payload = NotificationPayload::from(&event);
            for recipient in &event.recipients {
                if let Err(error) = facade.notify(*recipient, &payload).await {
                    tracing::warn!(
                        kind = payload.kind.as_str(),
                        request_id = %event.request_id,
                        recipient = %recipient,
                        error = %error,
                        "notification delivery failed"
                    );
                }
            }
        });
    }
}
