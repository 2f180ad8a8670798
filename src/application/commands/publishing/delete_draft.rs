// src/application/commands/publishing/delete_draft.rs
use super::service::PublishingService;
use crate::{application::error::ApplicationResult, domain::draft::DraftId};

impl PublishingService {
    /// Idempotent: deleting a draft that is already gone succeeds.
    pub async fn delete_draft(&self, draft_id: String) -> ApplicationResult<()> {
        let id = DraftId::new(draft_id)?;
        self.drafts.delete(&id).await?;
        Ok(())
    }
}
