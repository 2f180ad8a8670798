// src/application/commands/publishing/service.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, services::notifications::NotificationDispatcher},
    domain::{
        article::{repository::ArticleRepository, services::SlugAllocator},
        draft::repository::DraftRepository,
        subscriber::repository::SubscriberRepository,
    },
};

/// Owns the draft -> scheduled -> published transitions. Publication writes
/// go through the article store's atomic primitives; notification fan-out
/// happens strictly after the write and never feeds back into its outcome.
pub struct PublishingService {
    pub(super) drafts: Arc<dyn DraftRepository>,
    pub(super) articles: Arc<dyn ArticleRepository>,
    pub(super) subscribers: Arc<dyn SubscriberRepository>,
    pub(super) slug_allocator: Arc<SlugAllocator>,
    pub(super) dispatcher: Arc<NotificationDispatcher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PublishingService {
    pub fn new(
        drafts: Arc<dyn DraftRepository>,
        articles: Arc<dyn ArticleRepository>,
        subscribers: Arc<dyn SubscriberRepository>,
        slug_allocator: Arc<SlugAllocator>,
        dispatcher: Arc<NotificationDispatcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            drafts,
            articles,
            subscribers,
            slug_allocator,
            dispatcher,
            clock,
        }
    }
}
