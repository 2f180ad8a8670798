// src/domain/rate_limit/window.rs
//! Pure fixed-window transitions. The store applies these inside a single
//! serializable transaction; nothing here touches I/O.
//!
//! Fixed window means a client can land up to 2x the limit clustered around
//! a window boundary. That is a documented characteristic of this limiter,
//! not a bug.

use crate::domain::rate_limit::entity::{RateLimitCounter, RateLimitDecision};
use crate::domain::rate_limit::repository::{CounterCommit, CounterStep};
use chrono::{DateTime, Duration, Utc};

/// Count far above any realistic limit. A banned identifier carries this
/// count so every check in the ban window denies regardless of the
/// caller-supplied limit.
pub const BAN_SENTINEL_COUNT: u64 = 999_999_999;

/// Steps 1-4 of the check: absent or expired resets to count=1; at the limit
/// the attempt is denied and tallied; otherwise the count increments.
pub fn check(
    existing: Option<RateLimitCounter>,
    limit: u64,
    window: Duration,
    now: DateTime<Utc>,
) -> CounterStep {
    match existing {
        // An existing window is live until reset_time has passed.
        Some(counter) if counter.reset_time >= now => {
            if counter.count >= limit {
                let decision =
                    RateLimitDecision::denied(retry_after_seconds(counter.reset_time, now));
                let next = RateLimitCounter {
                    blocked_attempts: counter.blocked_attempts + 1,
                    last_attempt: now,
                    ..counter
                };
                CounterStep {
                    commit: CounterCommit::Put(next),
                    decision,
                }
            } else {
                let next = RateLimitCounter {
                    count: counter.count + 1,
                    last_attempt: now,
                    ..counter
                };
                CounterStep {
                    commit: CounterCommit::Put(next),
                    decision: RateLimitDecision::allowed(),
                }
            }
        }
        _ => CounterStep {
            commit: CounterCommit::Put(fresh(now, window)),
            decision: RateLimitDecision::allowed(),
        },
    }
}

/// Force-set the sentinel count for `duration`, replacing whatever state the
/// identifier held.
pub fn ban(duration: Duration, now: DateTime<Utc>) -> CounterStep {
    let reset_time = now + duration;
    CounterStep {
        commit: CounterCommit::Put(RateLimitCounter {
            count: BAN_SENTINEL_COUNT,
            reset_time,
            last_attempt: now,
            blocked_attempts: 0,
            banned: true,
        }),
        decision: RateLimitDecision::denied(retry_after_seconds(reset_time, now)),
    }
}

fn fresh(now: DateTime<Utc>, window: Duration) -> RateLimitCounter {
    RateLimitCounter {
        count: 1,
        reset_time: now + window,
        last_attempt: now,
        blocked_attempts: 0,
        banned: false,
    }
}

fn retry_after_seconds(reset_time: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let millis = (reset_time - now).num_milliseconds().max(0) as u64;
    millis.div_ceil(1000)
}
