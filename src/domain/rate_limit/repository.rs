use crate::domain::errors::DomainResult;
use crate::domain::rate_limit::entity::{RateLimitCounter, RateLimitDecision};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterCommit {
    Put(RateLimitCounter),
    Remove,
}

/// Result of one counter transition: the state to commit plus the decision
/// to hand back to the caller.
#[derive(Debug, Clone)]
pub struct CounterStep {
    pub commit: CounterCommit,
    pub decision: RateLimitDecision,
}

pub type CounterTransition = Box<dyn FnOnce(Option<RateLimitCounter>) -> CounterStep + Send>;

#[async_trait]
pub trait RateLimitCounterStore: Send + Sync {
    /// Run `transition` against the counter for `identifier` as one
    /// serializable read-modify-write. Concurrent callers for the same
    /// identifier are serialized by the store; the read and the commit can
    /// never interleave with another caller's. This is the property the whole
    /// limiter stands on.
    async fn transact(
        &self,
        identifier: &str,
        transition: CounterTransition,
    ) -> DomainResult<RateLimitDecision>;

    async fn remove(&self, identifier: &str) -> DomainResult<()>;

    /// Read-only snapshot for diagnostics and tests.
    async fn peek(&self, identifier: &str) -> DomainResult<Option<RateLimitCounter>>;
}
