// src/application/services/mod.rs
pub mod notifications;
pub mod rate_limiter;
pub mod sweeper;

use std::sync::Arc;

use crate::{
    application::{
        commands::{
            engagement::EngagementService, publishing::PublishingService,
            subscriptions::SubscriptionService,
        },
        ports::{
            mail::Mailer,
            time::Clock,
            util::{SlugGenerator, TokenGenerator},
        },
        queries::{articles::ArticleQueryService, drafts::DraftQueryService},
        services::{
            notifications::NotificationDispatcher,
            rate_limiter::{RateLimitPolicy, RateLimiterService},
            sweeper::SweepService,
        },
    },
    domain::{
        article::{repository::ArticleRepository, services::SlugAllocator},
        draft::repository::DraftRepository,
        rate_limit::repository::RateLimitCounterStore,
        subscriber::repository::SubscriberRepository,
    },
};

/// Runtime knobs that don't belong to any single repository.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Base URL embedded in notification links.
    pub site_url: String,
    /// Cap on concurrent outbound notification sends.
    pub notify_max_in_flight: usize,
    pub rate_limit: RateLimitPolicy,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            site_url: "http://localhost:8080".into(),
            notify_max_in_flight: 16,
            rate_limit: RateLimitPolicy::default(),
        }
    }
}

pub struct ApplicationServices {
    pub publishing: Arc<PublishingService>,
    pub sweeper: Arc<SweepService>,
    pub rate_limiter: Arc<RateLimiterService>,
    pub subscriptions: Arc<SubscriptionService>,
    pub engagement: Arc<EngagementService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub draft_queries: Arc<DraftQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        draft_repo: Arc<dyn DraftRepository>,
        article_repo: Arc<dyn ArticleRepository>,
        subscriber_repo: Arc<dyn SubscriberRepository>,
        counter_store: Arc<dyn RateLimitCounterStore>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        tokens: Arc<dyn TokenGenerator>,
        settings: ServiceSettings,
    ) -> Self {
        let slug_allocator = Arc::new(SlugAllocator::new(
            Arc::clone(&article_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let dispatcher = Arc::new(NotificationDispatcher::new(
            Arc::clone(&mailer),
            settings.site_url.clone(),
            settings.notify_max_in_flight,
        ));

        let publishing = Arc::new(PublishingService::new(
            Arc::clone(&draft_repo),
            Arc::clone(&article_repo),
            Arc::clone(&subscriber_repo),
            slug_allocator,
            dispatcher,
            Arc::clone(&clock),
        ));

        let sweeper = Arc::new(SweepService::new(
            Arc::clone(&draft_repo),
            Arc::clone(&publishing),
            Arc::clone(&clock),
        ));

        let rate_limiter = Arc::new(RateLimiterService::new(
            counter_store,
            Arc::clone(&clock),
            settings.rate_limit,
        ));

        let subscriptions = Arc::new(SubscriptionService::new(
            subscriber_repo,
            tokens,
            Arc::clone(&clock),
        ));

        let engagement = Arc::new(EngagementService::new(
            Arc::clone(&article_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(article_repo));
        let draft_queries = Arc::new(DraftQueryService::new(draft_repo));

        Self {
            publishing,
            sweeper,
            rate_limiter,
            subscriptions,
            engagement,
            article_queries,
            draft_queries,
        }
    }
}
