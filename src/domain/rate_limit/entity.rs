// src/domain/rate_limit/entity.rs
use chrono::{DateTime, Utc};

/// Fixed-window counter, keyed by `"<action>:<client-key>"`. A counter whose
/// `reset_time` has passed is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitCounter {
    pub count: u64,
    pub reset_time: DateTime<Utc>,
    pub last_attempt: DateTime<Utc>,
    /// Diagnostic tally of denied requests in the current window.
    pub blocked_attempts: u64,
    pub banned: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub retry_after_seconds: u64,
}

impl RateLimitDecision {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            retry_after_seconds: 0,
        }
    }

    pub fn denied(retry_after_seconds: u64) -> Self {
        Self {
            allowed: false,
            retry_after_seconds,
        }
    }
}
