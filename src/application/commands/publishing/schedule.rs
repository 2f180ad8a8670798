// src/application/commands/publishing/schedule.rs
use super::service::PublishingService;
use crate::{
    application::{
        dto::PublishOutcome,
        error::{ApplicationError, ApplicationResult},
    },
    domain::draft::DraftId,
};
use chrono::{DateTime, Utc};

pub struct ScheduleCommand {
    pub draft_id: String,
    pub publish_at: DateTime<Utc>,
}

impl PublishingService {
    /// Schedule a draft, or publish it immediately when the requested
    /// timestamp is already due.
    ///
    /// The boundary rule is the same one the sweeper uses: a timestamp is due
    /// unless it is strictly in the future. `publish_at == now` publishes
    /// immediately rather than parking the draft for the next sweep.
    pub async fn schedule(&self, command: ScheduleCommand) -> ApplicationResult<PublishOutcome> {
        let id = DraftId::new(command.draft_id)?;
        let draft = self
            .drafts
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("draft '{id}' not found")))?;

        let now = self.clock.now();
        if command.publish_at > now {
            let scheduled = self
                .drafts
                .mark_scheduled(&id, command.publish_at, now)
                .await?;
            tracing::info!(
                draft_id = %id,
                publish_at = %command.publish_at,
                "draft scheduled"
            );
            return Ok(PublishOutcome::Scheduled {
                draft: scheduled.into(),
            });
        }

        let receipt = self.publish_draft_inner(draft).await?;
        Ok(PublishOutcome::Published {
            article: receipt.article,
            notified: receipt.notified,
        })
    }
}
