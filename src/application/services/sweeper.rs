// src/application/services/sweeper.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::publishing::PublishingService,
        dto::{SweepItemOutcome, SweepReport},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::draft::repository::DraftRepository,
};

/// Batch-publishes due scheduled drafts on behalf of an external time-based
/// trigger.
///
/// Items are processed sequentially and in isolation: one failure is
/// recorded and the run moves on. Before any per-item work, the draft is
/// claimed by an atomic status flip, so an overlapping trigger skips items
/// this run already owns instead of double-publishing them.
pub struct SweepService {
    drafts: Arc<dyn DraftRepository>,
    publishing: Arc<PublishingService>,
    clock: Arc<dyn Clock>,
}

impl SweepService {
    pub fn new(
        drafts: Arc<dyn DraftRepository>,
        publishing: Arc<PublishingService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            drafts,
            publishing,
            clock,
        }
    }

    pub async fn run(&self) -> ApplicationResult<SweepReport> {
        let now = self.clock.now();
        let due = self.drafts.list_due(now).await?;
        tracing::info!(due = due.len(), "sweep started");

        let mut results = Vec::with_capacity(due.len());
        let mut published_count = 0;

        for draft in due {
            let id = draft.id.clone();
            let Some(claimed) = self.drafts.claim_for_publishing(&id).await? else {
                tracing::debug!(draft_id = %id, "draft claimed by a concurrent sweep, skipping");
                continue;
            };
            let title = claimed.title.to_string();

            match self.publishing.publish_claimed(claimed).await {
                Ok(receipt) => {
                    published_count += 1;
                    results.push(SweepItemOutcome::Published {
                        id: id.to_string(),
                        slug: receipt.article.slug,
                        title,
                        notified: receipt.notified.successful,
                    });
                }
                Err(err) => {
                    tracing::warn!(draft_id = %id, error = %err, "scheduled publish failed");
                    // Put the draft back so a later sweep retries it.
                    if let Err(release_err) = self.drafts.release_claim(&id).await {
                        tracing::error!(
                            draft_id = %id,
                            error = %release_err,
                            "could not release sweep claim"
                        );
                    }
                    results.push(SweepItemOutcome::Failed {
                        id: id.to_string(),
                        error: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(published_count, total = results.len(), "sweep finished");
        Ok(SweepReport {
            published_count,
            results,
        })
    }
}
