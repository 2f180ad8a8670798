use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Mutation applied inside a single serializable store transaction.
pub type ArticleMutation = Box<dyn FnOnce(Article) -> Article + Send>;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Atomically claim the slug: the insert succeeds only when no document
    /// occupies the key. Returns `None` when the slug is already taken.
    /// This is the store-level primitive behind race-safe slug allocation;
    /// a separate exists-check followed by a write is not equivalent.
    async fn create_if_absent(&self, article: NewArticle) -> DomainResult<Option<Article>>;

    /// Read-modify-write the document at `slug` as one transaction.
    /// Fails with `NotFound` when the slug resolves to nothing.
    async fn modify(&self, slug: &ArticleSlug, mutation: ArticleMutation) -> DomainResult<Article>;

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;

    async fn list(&self) -> DomainResult<Vec<Article>>;
}
