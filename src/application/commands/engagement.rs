// src/application/commands/engagement.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::article::{ArticleSlug, Comment, repository::ArticleRepository},
};

/// Reader-side mutations on published articles: comments and view counting.
/// Both append to the article's history fields through the store's atomic
/// read-modify-write, so they survive any later republish untouched.
pub struct EngagementService {
    articles: Arc<dyn ArticleRepository>,
    clock: Arc<dyn Clock>,
}

pub struct AddCommentCommand {
    pub slug: String,
    pub author: String,
    pub body: String,
}

impl EngagementService {
    pub fn new(articles: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { articles, clock }
    }

    pub async fn add_comment(&self, command: AddCommentCommand) -> ApplicationResult<CommentDto> {
        if command.author.trim().is_empty() {
            return Err(ApplicationError::validation("comment author cannot be empty"));
        }
        if command.body.trim().is_empty() {
            return Err(ApplicationError::validation("comment body cannot be empty"));
        }

        let slug = ArticleSlug::new(command.slug)?;
        let comment = Comment {
            id: uuid::Uuid::new_v4().to_string(),
            author: command.author,
            body: command.body,
            posted_at: self.clock.now(),
        };
        let appended = comment.clone();

        self.articles
            .modify(&slug, Box::new(move |article| article.with_comment(appended)))
            .await?;

        Ok(comment.into())
    }

    /// Returns the new total view count.
    pub async fn record_view(&self, slug: String) -> ApplicationResult<u64> {
        let slug = ArticleSlug::new(slug)?;
        let now = self.clock.now();
        let article = self
            .articles
            .modify(&slug, Box::new(move |article| article.with_view(now)))
            .await?;
        Ok(article.views)
    }
}
