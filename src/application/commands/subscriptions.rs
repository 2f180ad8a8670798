// src/application/commands/subscriptions.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::SubscriberDto,
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::TokenGenerator},
    },
    domain::subscriber::{
        EmailAddress, NewSubscriber, SubscriberPreferences, SubscriberStatus, UnsubscribeToken,
        repository::SubscriberRepository,
    },
};

pub struct SubscribeCommand {
    pub email: String,
}

pub struct UnsubscribeCommand {
    pub email: String,
    pub token: String,
}

pub struct SubscriptionService {
    subscribers: Arc<dyn SubscriberRepository>,
    tokens: Arc<dyn TokenGenerator>,
    clock: Arc<dyn Clock>,
}

impl SubscriptionService {
    pub fn new(
        subscribers: Arc<dyn SubscriberRepository>,
        tokens: Arc<dyn TokenGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            subscribers,
            tokens,
            clock,
        }
    }

    /// Subscribe an address, minting its unsubscribe credential. An address
    /// that subscribed before is reactivated and keeps its existing token,
    /// so previously sent unsubscribe links stay valid.
    pub async fn subscribe(&self, command: SubscribeCommand) -> ApplicationResult<SubscriberDto> {
        let email = EmailAddress::new(command.email)?;
        let subscriber = NewSubscriber {
            email: email.clone(),
            unsubscribe_token: UnsubscribeToken::new(self.tokens.generate())?,
            preferences: SubscriberPreferences::default(),
            subscribed_at: self.clock.now(),
        };

        match self.subscribers.insert_if_absent(subscriber).await? {
            Some(created) => {
                tracing::info!(email = %created.email, "subscriber added");
                Ok(created.into())
            }
            None => {
                let reactivated = self
                    .subscribers
                    .set_status(&email, SubscriberStatus::Active)
                    .await?;
                tracing::info!(email = %email, "subscriber reactivated");
                Ok(reactivated.into())
            }
        }
    }

    /// Requires the subscriber's email plus the exact stored token; a missing
    /// or mismatched token is rejected without touching the record.
    pub async fn unsubscribe(&self, command: UnsubscribeCommand) -> ApplicationResult<()> {
        let email = EmailAddress::new(command.email)?;
        let subscriber = self
            .subscribers
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("no subscription for {email}")))?;

        if !subscriber.unsubscribe_token.matches(command.token.trim()) {
            return Err(ApplicationError::forbidden("invalid unsubscribe token"));
        }

        self.subscribers
            .set_status(&email, SubscriberStatus::Unsubscribed)
            .await?;
        tracing::info!(email = %email, "subscriber unsubscribed");
        Ok(())
    }
}
