use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::repository::{ArticleMutation, ArticleRepository};
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
pub struct MemoryArticleRepository {
    inner: Mutex<HashMap<String, Article>>,
}

impl MemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleRepository for MemoryArticleRepository {
    async fn create_if_absent(&self, article: NewArticle) -> DomainResult<Option<Article>> {
        let mut map = self.inner.lock().unwrap();
        let key = article.slug.as_str().to_string();
        if map.contains_key(&key) {
            return Ok(None);
        }
        let created = Article {
            slug: article.slug,
            title: article.title,
            author: article.author,
            category: article.category,
            content: article.content,
            image: article.image,
            published_at: article.published_at,
            views: 0,
            comments: Vec::new(),
            view_history: Vec::new(),
        };
        map.insert(key, created.clone());
        Ok(Some(created))
    }

    async fn modify(&self, slug: &ArticleSlug, mutation: ArticleMutation) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();
        let current = map
            .get(slug.as_str())
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("article '{slug}' not found")))?;
        let next = mutation(current);
        map.insert(slug.as_str().to_string(), next.clone());
        Ok(next)
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(slug.as_str()).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let map = self.inner.lock().unwrap();
        Ok(map.values().cloned().collect())
    }
}
