// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::application::ports::util::SlugGenerator;
use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::repository::ArticleRepository;
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::DomainResult;

/// Domain service that derives a URL-safe slug from a title and claims a
/// unique key for it in the article store.
pub struct SlugAllocator {
    articles: Arc<dyn ArticleRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl SlugAllocator {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            articles,
            generator,
            clock,
        }
    }

    /// Claim a unique slug derived from `title` and insert the document built
    /// by `build` under it, in one atomic step per candidate.
    ///
    /// Candidates are probed as `base`, `base-1`, `base-2`, … and each probe
    /// is an atomic create-if-absent, so two concurrent claims for colliding
    /// titles can never both win the same slug; the loser simply moves on to
    /// the next suffix.
    pub async fn claim<F>(&self, title: &str, build: F) -> DomainResult<Article>
    where
        F: Fn(ArticleSlug) -> NewArticle,
    {
        let base = self.generator.slugify(title);
        let base = if base.is_empty() {
            // Titles with no sluggable characters still need a stable key.
            format!("article-{}", self.clock.now().timestamp())
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut counter = 1u64;

        loop {
            let slug = ArticleSlug::new(candidate)?;
            if let Some(created) = self.articles.create_if_absent(build(slug)).await? {
                return Ok(created);
            }
            candidate = format!("{base}-{counter}");
            counter += 1;
        }
    }
}
