// src/application/services/notifications.rs
use std::sync::Arc;

use tokio::{sync::Semaphore, task::JoinSet};

use crate::{
    application::{
        dto::NotificationResult,
        ports::mail::{Mailer, OutboundMessage},
    },
    domain::{
        article::Article,
        subscriber::{Subscriber, SubscriberStatus},
    },
};

/// Fans out change notifications to active subscribers.
///
/// Dispatch is settle-all: every send is attempted, one failure never
/// cancels the others, and the caller gets a tally instead of an error.
/// In-flight sends are capped so a large subscriber list cannot exhaust
/// the transport.
pub struct NotificationDispatcher {
    mailer: Arc<dyn Mailer>,
    site_url: String,
    max_in_flight: usize,
}

impl NotificationDispatcher {
    pub fn new(mailer: Arc<dyn Mailer>, site_url: String, max_in_flight: usize) -> Self {
        Self {
            mailer,
            site_url,
            max_in_flight: max_in_flight.max(1),
        }
    }

    pub async fn notify(
        &self,
        article: &Article,
        subscribers: Vec<Subscriber>,
        is_update: bool,
    ) -> NotificationResult {
        let active: Vec<Subscriber> = subscribers
            .into_iter()
            .filter(|subscriber| subscriber.status == SubscriberStatus::Active)
            .collect();
        let total = active.len();
        if active.is_empty() {
            return NotificationResult::default();
        }

        let semaphore = Arc::new(Semaphore::new(self.max_in_flight));
        let mut sends = JoinSet::new();
        for subscriber in active {
            let message = self.render(article, &subscriber, is_update);
            let mailer = Arc::clone(&self.mailer);
            let semaphore = Arc::clone(&semaphore);
            sends.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                let recipient = message.to.clone();
                mailer.send(&message).await.map_err(|err| (recipient, err))
            });
        }

        let mut successful = 0;
        let mut failed = 0;
        while let Some(joined) = sends.join_next().await {
            match joined {
                Ok(Ok(())) => successful += 1,
                Ok(Err((recipient, err))) => {
                    failed += 1;
                    tracing::warn!(
                        recipient = %recipient,
                        slug = %article.slug,
                        error = %err,
                        "notification delivery failed"
                    );
                }
                Err(err) => {
                    failed += 1;
                    tracing::warn!(error = %err, "notification send task aborted");
                }
            }
        }

        tracing::info!(
            slug = %article.slug,
            successful,
            failed,
            total,
            "notification dispatch settled"
        );
        NotificationResult {
            successful,
            failed,
            total,
        }
    }

    /// One personalized plain-text message, carrying the recipient's own
    /// unsubscribe credential.
    fn render(&self, article: &Article, subscriber: &Subscriber, is_update: bool) -> OutboundMessage {
        let subject = if is_update {
            format!("Updated: {}", article.title)
        } else {
            format!("New article: {}", article.title)
        };

        let lead = if is_update {
            "An article you may have read has been updated."
        } else {
            "A new article has just been published."
        };

        let body = format!(
            "{lead}\n\n\
             {title}\n\
             by {author}\n\n\
             Read it here: {site}/articles/{slug}\n\n\
             --\n\
             To stop receiving these notifications, visit:\n\
             {site}/unsubscribe?email={email}&token={token}\n",
            title = article.title,
            author = article.author,
            site = self.site_url,
            slug = article.slug,
            email = subscriber.email,
            token = subscriber.unsubscribe_token.as_str(),
        );

        OutboundMessage {
            to: subscriber.email.to_string(),
            subject,
            body,
        }
    }
}
