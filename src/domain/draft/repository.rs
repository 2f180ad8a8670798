use crate::domain::draft::entity::{Draft, DraftUpdate, NewDraft};
use crate::domain::draft::value_objects::DraftId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait DraftRepository: Send + Sync {
    /// Insert a new draft under a store-generated id.
    async fn insert(&self, draft: NewDraft) -> DomainResult<Draft>;

    /// Apply a partial content update. Fails with `NotFound` for unknown ids.
    async fn update(&self, update: DraftUpdate) -> DomainResult<Draft>;

    /// Flip the draft to scheduled with the given publication timestamp.
    async fn mark_scheduled(
        &self,
        id: &DraftId,
        publish_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> DomainResult<Draft>;

    async fn find_by_id(&self, id: &DraftId) -> DomainResult<Option<Draft>>;

    async fn list(&self) -> DomainResult<Vec<Draft>>;

    /// Scheduled drafts whose timestamp is due at `now`. Drafts already
    /// claimed by a concurrent sweep (status Publishing) are excluded.
    async fn list_due(&self, now: DateTime<Utc>) -> DomainResult<Vec<Draft>>;

    /// Atomically flip a Scheduled draft to the transient Publishing marker.
    /// Returns `None` when the draft is gone or no longer Scheduled, which is
    /// how an overlapping sweep invocation loses the claim race.
    async fn claim_for_publishing(&self, id: &DraftId) -> DomainResult<Option<Draft>>;

    /// Put a claimed draft back to Scheduled after a failed publish so a
    /// later sweep retries it.
    async fn release_claim(&self, id: &DraftId) -> DomainResult<()>;

    /// Idempotent: deleting an absent draft is not an error.
    async fn delete(&self, id: &DraftId) -> DomainResult<()>;
}
