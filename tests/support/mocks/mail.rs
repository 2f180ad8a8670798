// tests/support/mocks/mail.rs
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use pressroom_core::application::ports::mail::{Mailer, MailerError, OutboundMessage};

/// Records every attempted send; optionally fails for chosen recipients.
/// Failed attempts are recorded too, since the dispatcher's contract is
/// "attempted", not "delivered".
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundMessage>>,
    fail_for: Mutex<HashSet<String>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_for(&self, recipient: &str) {
        self.fail_for.lock().unwrap().insert(recipient.to_string());
    }

    pub fn attempts(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempted_recipients(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|message| message.to.clone())
            .collect()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailerError> {
        self.sent.lock().unwrap().push(message.clone());
        if self.fail_for.lock().unwrap().contains(&message.to) {
            return Err(MailerError(format!("simulated bounce for {}", message.to)));
        }
        Ok(())
    }
}
