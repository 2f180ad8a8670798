// src/application/queries/articles.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleSlug, repository::ArticleRepository},
};

pub struct ArticleQueryService {
    articles: Arc<dyn ArticleRepository>,
}

impl ArticleQueryService {
    pub fn new(articles: Arc<dyn ArticleRepository>) -> Self {
        Self { articles }
    }

    pub async fn get_by_slug(&self, slug: String) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(slug)?;
        self.articles
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("article '{slug}' not found")))
    }

    /// Newest first.
    pub async fn list(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let mut articles = self.articles.list().await?;
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
