// src/application/services/rate_limiter.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::rate_limit::{RateLimitDecision, repository::RateLimitCounterStore, window},
};

/// Default policy applied when a caller does not supply its own limits.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitPolicy {
    pub max_requests: u64,
    pub window: Duration,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        // 5 requests per 15-minute window per action.
        Self {
            max_requests: 5,
            window: Duration::minutes(15),
        }
    }
}

/// Transactional fixed-window limiter over the counter store.
///
/// Every check is one serializable read-modify-write; two concurrent callers
/// can never both observe `count < limit` and both slip past it.
pub struct RateLimiterService {
    store: Arc<dyn RateLimitCounterStore>,
    clock: Arc<dyn Clock>,
    policy: RateLimitPolicy,
}

impl RateLimiterService {
    pub fn new(
        store: Arc<dyn RateLimitCounterStore>,
        clock: Arc<dyn Clock>,
        policy: RateLimitPolicy,
    ) -> Self {
        Self {
            store,
            clock,
            policy,
        }
    }

    /// Identifiers follow the `"<action>:<client-key>"` convention, e.g.
    /// `"comment:203.0.113.4"`.
    pub async fn check_and_increment(
        &self,
        identifier: &str,
        limit: u64,
        window: Duration,
    ) -> ApplicationResult<RateLimitDecision> {
        let now = self.clock.now();
        let decision = self
            .store
            .transact(
                identifier,
                Box::new(move |existing| window::check(existing, limit, window, now)),
            )
            .await?;

        if !decision.allowed {
            tracing::debug!(
                identifier,
                retry_after_seconds = decision.retry_after_seconds,
                "rate limit exceeded"
            );
        }
        Ok(decision)
    }

    /// Check `action` for `client_key` under the default policy and convert
    /// a denial into `ApplicationError::RateLimited`.
    pub async fn enforce(&self, action: &str, client_key: &str) -> ApplicationResult<()> {
        let identifier = format!("{action}:{client_key}");
        let decision = self
            .check_and_increment(&identifier, self.policy.max_requests, self.policy.window)
            .await?;
        if decision.allowed {
            Ok(())
        } else {
            Err(ApplicationError::RateLimited {
                retry_after_seconds: decision.retry_after_seconds,
            })
        }
    }

    /// Drop the counter entirely; the next check starts a fresh window.
    pub async fn reset(&self, identifier: &str) -> ApplicationResult<()> {
        self.store.remove(identifier).await?;
        Ok(())
    }

    /// Deny every check for `identifier` until the ban window expires,
    /// regardless of the limit callers pass.
    pub async fn ban(&self, identifier: &str, duration: Duration) -> ApplicationResult<()> {
        let now = self.clock.now();
        self.store
            .transact(identifier, Box::new(move |_| window::ban(duration, now)))
            .await?;
        tracing::info!(identifier, until = %(now + duration), "identifier banned");
        Ok(())
    }
}
