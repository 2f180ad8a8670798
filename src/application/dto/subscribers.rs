use crate::domain::subscriber::{Subscriber, SubscriberStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The unsubscribe token is a credential and deliberately not part of this
/// view; subscribers only ever receive it inside their own notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriberDto {
    pub email: String,
    pub status: String,
    pub subscribed_at: DateTime<Utc>,
}

fn status_label(status: SubscriberStatus) -> &'static str {
    match status {
        SubscriberStatus::Active => "active",
        SubscriberStatus::Inactive => "inactive",
        SubscriberStatus::Unsubscribed => "unsubscribed",
    }
}

impl From<Subscriber> for SubscriberDto {
    fn from(subscriber: Subscriber) -> Self {
        Self {
            email: subscriber.email.to_string(),
            status: status_label(subscriber.status).to_string(),
            subscribed_at: subscriber.subscribed_at,
        }
    }
}
