// src/application/commands/publishing/publish.rs
use super::service::PublishingService;
use crate::{
    application::{
        dto::{NotificationResult, PublishReceipt},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleContentUpdate, ArticleSlug, AuthorName, NewArticle, Title},
        draft::{Draft, DraftId},
    },
};

/// Content for one publication, detached from any draft.
#[derive(Debug, Clone)]
pub struct PublishPayload {
    pub title: String,
    pub author: String,
    pub category: String,
    pub content: String,
    pub image: Option<String>,
}

impl From<&Draft> for PublishPayload {
    fn from(draft: &Draft) -> Self {
        Self {
            title: draft.title.as_str().to_string(),
            author: draft.author.as_str().to_string(),
            category: draft.category.clone(),
            content: draft.content.clone(),
            image: draft.image.clone(),
        }
    }
}

impl PublishingService {
    /// Publish a draft right now, consuming it on success.
    pub async fn publish_draft(&self, draft_id: String) -> ApplicationResult<PublishReceipt> {
        let id = DraftId::new(draft_id)?;
        let draft = self
            .drafts
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("draft '{id}' not found")))?;
        self.publish_draft_inner(draft).await
    }

    /// Publish a draft the sweeper has already claimed. The claim replaced
    /// the usual lookup, so this goes straight to the shared path.
    pub async fn publish_claimed(&self, draft: Draft) -> ApplicationResult<PublishReceipt> {
        self.publish_draft_inner(draft).await
    }

    pub(super) async fn publish_draft_inner(
        &self,
        draft: Draft,
    ) -> ApplicationResult<PublishReceipt> {
        let payload = PublishPayload::from(&draft);
        let existing_slug = draft.original_article_slug.clone();
        let receipt = self.publish_now(payload, existing_slug).await?;

        // Consumed on success. The article write has already committed, so a
        // failure here must surface rather than undo the publish.
        self.drafts.delete(&draft.id).await?;
        tracing::info!(
            draft_id = %draft.id,
            slug = %receipt.article.slug,
            "draft consumed by publish"
        );
        Ok(receipt)
    }

    /// Publish `payload`, either replacing the article at `existing_slug` or
    /// claiming a fresh slug.
    ///
    /// The replacement path writes a full document built from the current
    /// one: content fields overwritten, views/comments/view history carried
    /// verbatim. History never resets on republish.
    pub async fn publish_now(
        &self,
        payload: PublishPayload,
        existing_slug: Option<String>,
    ) -> ApplicationResult<PublishReceipt> {
        let title = Title::new(payload.title)?;
        let author = AuthorName::new(payload.author)?;
        let now = self.clock.now();

        let (article, is_update) = match existing_slug {
            Some(raw) => {
                let slug = ArticleSlug::new(raw)?;
                let update = ArticleContentUpdate {
                    title,
                    author,
                    category: payload.category,
                    content: payload.content,
                    image: payload.image,
                };
                let article = self
                    .articles
                    .modify(&slug, Box::new(move |current| current.republish(update, now)))
                    .await?;
                (article, true)
            }
            None => {
                let category = payload.category;
                let content = payload.content;
                let image = payload.image;
                let article = self
                    .slug_allocator
                    .claim(title.as_str(), |slug| NewArticle {
                        slug,
                        title: title.clone(),
                        author: author.clone(),
                        category: category.clone(),
                        content: content.clone(),
                        image: image.clone(),
                        published_at: now,
                    })
                    .await?;
                (article, false)
            }
        };

        tracing::info!(slug = %article.slug, is_update, "article published");
        let notified = self.dispatch_notifications(&article, is_update).await;
        Ok(PublishReceipt {
            article: article.into(),
            notified,
        })
    }

    /// Fan out change notifications. Publish success is already decided by
    /// the time this runs; any failure here is logged and tallied, never
    /// bubbled to the publish caller.
    async fn dispatch_notifications(
        &self,
        article: &Article,
        is_update: bool,
    ) -> NotificationResult {
        let subscribers = match self.subscribers.list_all().await {
            Ok(subscribers) => subscribers,
            Err(err) => {
                tracing::warn!(
                    slug = %article.slug,
                    error = %err,
                    "could not load subscribers, skipping notifications"
                );
                return NotificationResult::default();
            }
        };

        self.dispatcher.notify(article, subscribers, is_update).await
    }
}
