// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{RecordingMailer, SteppingClock};

use pressroom_core::application::ports::{
    mail::Mailer,
    time::Clock,
    util::{SlugGenerator, TokenGenerator},
};
use pressroom_core::application::services::rate_limiter::RateLimitPolicy;
use pressroom_core::application::services::{ApplicationServices, ServiceSettings};
use pressroom_core::domain::{
    article::repository::ArticleRepository, draft::repository::DraftRepository,
    rate_limit::repository::RateLimitCounterStore, subscriber::repository::SubscriberRepository,
};
use pressroom_core::infrastructure::repositories::{
    MemoryArticleRepository, MemoryDraftRepository, MemoryRateLimitStore,
    MemorySubscriberRepository,
};
use pressroom_core::infrastructure::util::{DefaultSlugGenerator, HexTokenGenerator};
use pressroom_core::presentation::http::{routes::build_router, state::HttpState};

pub const TEST_CRON_KEY: &str = "test-cron-key";
pub const TEST_SITE_URL: &str = "http://test.local";

/// Full service graph over in-memory stores, with handles kept so tests can
/// look behind the public API.
pub struct TestHarness {
    pub services: Arc<ApplicationServices>,
    pub drafts: Arc<MemoryDraftRepository>,
    pub articles: Arc<MemoryArticleRepository>,
    pub subscribers: Arc<MemorySubscriberRepository>,
    pub counters: Arc<MemoryRateLimitStore>,
    pub clock: Arc<SteppingClock>,
    pub mailer: Arc<RecordingMailer>,
}

pub fn build_harness() -> TestHarness {
    build_harness_with_policy(RateLimitPolicy::default())
}

pub fn build_harness_with_policy(rate_limit: RateLimitPolicy) -> TestHarness {
    let drafts = Arc::new(MemoryDraftRepository::new());
    let articles = Arc::new(MemoryArticleRepository::new());
    let subscribers = Arc::new(MemorySubscriberRepository::new());
    let counters = Arc::new(MemoryRateLimitStore::new());
    let clock = Arc::new(SteppingClock::new());
    let mailer = Arc::new(RecordingMailer::new());

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&drafts) as Arc<dyn DraftRepository>,
        Arc::clone(&articles) as Arc<dyn ArticleRepository>,
        Arc::clone(&subscribers) as Arc<dyn SubscriberRepository>,
        Arc::clone(&counters) as Arc<dyn RateLimitCounterStore>,
        Arc::clone(&mailer) as Arc<dyn Mailer>,
        Arc::clone(&clock) as Arc<dyn Clock>,
        Arc::new(DefaultSlugGenerator) as Arc<dyn SlugGenerator>,
        Arc::new(HexTokenGenerator) as Arc<dyn TokenGenerator>,
        ServiceSettings {
            site_url: TEST_SITE_URL.into(),
            notify_max_in_flight: 4,
            rate_limit,
        },
    ));

    TestHarness {
        services,
        drafts,
        articles,
        subscribers,
        counters,
        clock,
        mailer,
    }
}

pub fn make_test_router(harness: &TestHarness) -> axum::Router {
    build_router(HttpState {
        services: Arc::clone(&harness.services),
        cron_key: TEST_CRON_KEY.into(),
    })
}
