// src/domain/subscriber/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_lowercase();
        if value.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }
        // Shape check only; real deliverability is the mail transport's
        // problem.
        let mut parts = value.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(DomainError::Validation(format!(
                "'{value}' is not a valid email address"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque per-subscriber unsubscribe credential: 32 random bytes,
/// hex-encoded, minted at subscription time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsubscribeToken(String);

impl UnsubscribeToken {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "unsubscribe token cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, supplied: &str) -> bool {
        !supplied.is_empty() && self.0 == supplied
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriberStatus {
    Active,
    Inactive,
    Unsubscribed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberPreferences {
    pub new_articles: bool,
    pub article_updates: bool,
}

impl Default for SubscriberPreferences {
    fn default() -> Self {
        Self {
            new_articles: true,
            article_updates: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Subscriber {
    pub email: EmailAddress,
    pub status: SubscriberStatus,
    pub unsubscribe_token: UnsubscribeToken,
    pub preferences: SubscriberPreferences,
    pub subscribed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub email: EmailAddress,
    pub unsubscribe_token: UnsubscribeToken,
    pub preferences: SubscriberPreferences,
    pub subscribed_at: DateTime<Utc>,
}
