// tests/rate_limiting.rs
use std::sync::Arc;

use chrono::Duration;

mod support;

use pressroom_core::application::error::ApplicationError;
use pressroom_core::application::services::rate_limiter::{RateLimitPolicy, RateLimiterService};
use pressroom_core::domain::rate_limit::repository::RateLimitCounterStore;
use pressroom_core::infrastructure::repositories::MemoryRateLimitStore;

use support::SteppingClock;

const IDENTIFIER: &str = "comment:203.0.113.4";

fn window() -> Duration {
    Duration::minutes(15)
}

fn build_limiter() -> (Arc<RateLimiterService>, Arc<MemoryRateLimitStore>, Arc<SteppingClock>) {
    let store = Arc::new(MemoryRateLimitStore::new());
    let clock = Arc::new(SteppingClock::new());
    let limiter = Arc::new(RateLimiterService::new(
        Arc::clone(&store) as Arc<dyn RateLimitCounterStore>,
        clock.clone(),
        RateLimitPolicy::default(),
    ));
    (limiter, store, clock)
}

#[tokio::test]
async fn limit_requests_pass_then_the_next_is_denied() {
    let (limiter, _, _) = build_limiter();

    for _ in 0..5 {
        let decision = limiter
            .check_and_increment(IDENTIFIER, 5, window())
            .await
            .unwrap();
        assert!(decision.allowed);
    }

    let denied = limiter
        .check_and_increment(IDENTIFIER, 5, window())
        .await
        .unwrap();
    assert!(!denied.allowed);
    assert!(denied.retry_after_seconds > 0);
}

#[tokio::test]
async fn window_expiry_restarts_the_count_at_one() {
    let (limiter, store, clock) = build_limiter();

    for _ in 0..6 {
        limiter
            .check_and_increment(IDENTIFIER, 5, window())
            .await
            .unwrap();
    }

    clock.advance(window() + Duration::seconds(1));
    let decision = limiter
        .check_and_increment(IDENTIFIER, 5, window())
        .await
        .unwrap();
    assert!(decision.allowed);

    let counter = store.peek(IDENTIFIER).await.unwrap().expect("counter exists");
    assert_eq!(counter.count, 1);
    assert_eq!(counter.blocked_attempts, 0);
}

#[tokio::test]
async fn denials_accumulate_blocked_attempts() {
    let (limiter, store, _) = build_limiter();

    for _ in 0..3 {
        limiter
            .check_and_increment(IDENTIFIER, 1, window())
            .await
            .unwrap();
    }

    let counter = store.peek(IDENTIFIER).await.unwrap().expect("counter exists");
    assert_eq!(counter.count, 1);
    assert_eq!(counter.blocked_attempts, 2);
}

#[tokio::test]
async fn reset_clears_the_counter() {
    let (limiter, store, _) = build_limiter();

    for _ in 0..2 {
        limiter
            .check_and_increment(IDENTIFIER, 1, window())
            .await
            .unwrap();
    }
    limiter.reset(IDENTIFIER).await.unwrap();
    assert!(store.peek(IDENTIFIER).await.unwrap().is_none());

    let decision = limiter
        .check_and_increment(IDENTIFIER, 1, window())
        .await
        .unwrap();
    assert!(decision.allowed);
}

#[tokio::test]
async fn ban_overrides_any_caller_limit_until_expiry() {
    let (limiter, _, clock) = build_limiter();

    limiter.ban(IDENTIFIER, Duration::hours(1)).await.unwrap();

    let denied = limiter
        .check_and_increment(IDENTIFIER, 1_000_000, window())
        .await
        .unwrap();
    assert!(!denied.allowed);

    clock.advance(Duration::hours(2));
    let allowed = limiter
        .check_and_increment(IDENTIFIER, 5, window())
        .await
        .unwrap();
    assert!(allowed.allowed);
}

#[tokio::test]
async fn enforce_maps_denial_to_rate_limited_error() {
    let (limiter, _, _) = build_limiter();

    // Default policy: 5 per window.
    for _ in 0..5 {
        limiter.enforce("comment", "203.0.113.4").await.unwrap();
    }
    let err = limiter
        .enforce("comment", "203.0.113.4")
        .await
        .expect_err("sixth attempt must be limited");
    assert!(matches!(
        err,
        ApplicationError::RateLimited {
            retry_after_seconds
        } if retry_after_seconds > 0
    ));

    // A different action for the same client has its own counter.
    limiter.enforce("subscribe", "203.0.113.4").await.unwrap();
}

#[tokio::test]
async fn concurrent_checks_admit_exactly_the_limit() {
    let (limiter, _, _) = build_limiter();

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..20 {
        let limiter = Arc::clone(&limiter);
        tasks.spawn(async move {
            limiter
                .check_and_increment(IDENTIFIER, 10, Duration::minutes(15))
                .await
                .unwrap()
        });
    }

    let mut admitted = 0;
    while let Some(decision) = tasks.join_next().await {
        if decision.unwrap().allowed {
            admitted += 1;
        }
    }
    // The whole read-modify-write is one transaction, so oversubscription
    // cannot sneak past the limit.
    assert_eq!(admitted, 10);
}
