// src/application/commands/publishing/save_draft.rs
use super::service::PublishingService;
use crate::{
    application::{dto::DraftDto, error::ApplicationResult},
    domain::{
        article::{AuthorName, Title},
        draft::{DraftId, DraftUpdate},
    },
};

/// Autosave and explicit save share this command; omitted fields keep their
/// stored value.
pub struct SaveDraftCommand {
    pub id: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

impl PublishingService {
    pub async fn save_draft(&self, command: SaveDraftCommand) -> ApplicationResult<DraftDto> {
        let id = DraftId::new(command.id)?;
        let title = command.title.map(Title::new).transpose()?;
        let author = command.author.map(AuthorName::new).transpose()?;

        let updated = self
            .drafts
            .update(DraftUpdate {
                id,
                title,
                author,
                category: command.category,
                content: command.content,
                image: command.image,
                last_saved: self.clock.now(),
            })
            .await?;

        Ok(updated.into())
    }
}
