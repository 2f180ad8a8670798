// src/application/commands/publishing/create_draft.rs
use super::service::PublishingService;
use crate::{
    application::{dto::DraftDto, error::ApplicationResult},
    domain::{
        article::{AuthorName, Title},
        draft::NewDraft,
    },
};

pub struct CreateDraftCommand {
    pub title: String,
    pub author: String,
    pub category: String,
    pub content: String,
    pub image: Option<String>,
    pub original_article_slug: Option<String>,
}

impl PublishingService {
    /// Validates required fields before any store write; an invalid payload
    /// leaves the store untouched.
    pub async fn create_draft(&self, command: CreateDraftCommand) -> ApplicationResult<DraftDto> {
        let title = Title::new(command.title)?;
        let author = AuthorName::new(command.author)?;
        let now = self.clock.now();

        let created = self
            .drafts
            .insert(NewDraft {
                title,
                author,
                category: command.category,
                content: command.content,
                image: command.image,
                original_article_slug: command.original_article_slug,
                created_at: now,
            })
            .await?;

        tracing::debug!(draft_id = %created.id, "draft created");
        Ok(created.into())
    }
}
