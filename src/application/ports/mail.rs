// src/application/ports/mail.rs
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
#[error("mail delivery failed: {0}")]
pub struct MailerError(pub String);

/// External message-sending collaborator. Delivery is at-most-once; the
/// dispatcher counts failures but never retries them.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailerError>;
}
