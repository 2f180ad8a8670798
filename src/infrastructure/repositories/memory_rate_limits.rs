use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::rate_limit::entity::{RateLimitCounter, RateLimitDecision};
use crate::domain::rate_limit::repository::{
    CounterCommit, CounterTransition, RateLimitCounterStore,
};

/// The map lock spans the whole transition: read, apply, commit. That is
/// what makes each `transact` call serializable against concurrent callers.
#[derive(Default)]
pub struct MemoryRateLimitStore {
    inner: Mutex<HashMap<String, RateLimitCounter>>,
}

impl MemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateLimitCounterStore for MemoryRateLimitStore {
    async fn transact(
        &self,
        identifier: &str,
        transition: CounterTransition,
    ) -> DomainResult<RateLimitDecision> {
        let mut map = self.inner.lock().unwrap();
        let step = transition(map.get(identifier).cloned());
        match step.commit {
            CounterCommit::Put(counter) => {
                map.insert(identifier.to_string(), counter);
            }
            CounterCommit::Remove => {
                map.remove(identifier);
            }
        }
        Ok(step.decision)
    }

    async fn remove(&self, identifier: &str) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(identifier);
        Ok(())
    }

    async fn peek(&self, identifier: &str) -> DomainResult<Option<RateLimitCounter>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(identifier).cloned())
    }
}
