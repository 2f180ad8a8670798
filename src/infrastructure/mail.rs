//! Outbound mail transports behind the `Mailer` port.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::application::ports::mail::{Mailer, MailerError, OutboundMessage};
use crate::config::SmtpConfig;

/// SMTP delivery via lettre.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_email: String,
}

impl SmtpMailer {
    /// `encryption` selects the transport mode:
    /// - `"starttls"` (default): opportunistic STARTTLS
    /// - `"tls"`: implicit TLS (SMTPS)
    /// - `"none"`: unencrypted, local development only
    pub fn new(config: &SmtpConfig) -> Result<Self, MailerError> {
        let mut builder = match config.encryption.as_str() {
            "tls" => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|err| MailerError(format!("smtp relay setup failed: {err}")))?
                .port(config.port),
            "none" => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .port(config.port),
            _ => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|err| MailerError(format!("smtp starttls setup failed: {err}")))?
                .port(config.port),
        };

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from_email: config.from_email.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailerError> {
        let email = Message::builder()
            .from(
                self.from_email
                    .parse()
                    .map_err(|err| MailerError(format!("invalid from address: {err}")))?,
            )
            .to(message
                .to
                .parse()
                .map_err(|err| MailerError(format!("invalid recipient address: {err}")))?)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|err| MailerError(format!("could not build message: {err}")))?;

        self.transport
            .send(email)
            .await
            .map_err(|err| MailerError(err.to_string()))?;
        Ok(())
    }
}

/// Stand-in transport for installations without SMTP configured: logs each
/// message instead of sending it, and always reports success.
#[derive(Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailerError> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            "smtp not configured, logging notification instead of sending"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smtp_config(encryption: &str, port: u16) -> SmtpConfig {
        SmtpConfig {
            host: "smtp.invalid".into(),
            port,
            username: None,
            password: None,
            encryption: encryption.into(),
            from_email: "news@example.com".into(),
        }
    }

    // Transport construction is lazy; no connection is made here.
    #[test]
    fn supports_all_encryption_modes() {
        assert!(SmtpMailer::new(&smtp_config("starttls", 587)).is_ok());
        assert!(SmtpMailer::new(&smtp_config("tls", 465)).is_ok());
        assert!(SmtpMailer::new(&smtp_config("none", 25)).is_ok());
    }
}
