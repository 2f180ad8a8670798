use crate::domain::errors::DomainResult;
use crate::domain::subscriber::entity::{EmailAddress, NewSubscriber, Subscriber, SubscriberStatus};
use async_trait::async_trait;

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Atomic create-if-absent keyed by email. Returns `None` when the
    /// address is already subscribed (in any status).
    async fn insert_if_absent(&self, subscriber: NewSubscriber) -> DomainResult<Option<Subscriber>>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Subscriber>>;

    async fn list_all(&self) -> DomainResult<Vec<Subscriber>>;

    async fn set_status(
        &self,
        email: &EmailAddress,
        status: SubscriberStatus,
    ) -> DomainResult<Subscriber>;
}
