use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::subscriber::entity::{
    EmailAddress, NewSubscriber, Subscriber, SubscriberStatus,
};
use crate::domain::subscriber::repository::SubscriberRepository;

#[derive(Default)]
pub struct MemorySubscriberRepository {
    inner: Mutex<HashMap<String, Subscriber>>,
}

impl MemorySubscriberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriberRepository for MemorySubscriberRepository {
    async fn insert_if_absent(
        &self,
        subscriber: NewSubscriber,
    ) -> DomainResult<Option<Subscriber>> {
        let mut map = self.inner.lock().unwrap();
        let key = subscriber.email.as_str().to_string();
        if map.contains_key(&key) {
            return Ok(None);
        }
        let created = Subscriber {
            email: subscriber.email,
            status: SubscriberStatus::Active,
            unsubscribe_token: subscriber.unsubscribe_token,
            preferences: subscriber.preferences,
            subscribed_at: subscriber.subscribed_at,
        };
        map.insert(key, created.clone());
        Ok(Some(created))
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Subscriber>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(email.as_str()).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Subscriber>> {
        let map = self.inner.lock().unwrap();
        Ok(map.values().cloned().collect())
    }

    async fn set_status(
        &self,
        email: &EmailAddress,
        status: SubscriberStatus,
    ) -> DomainResult<Subscriber> {
        let mut map = self.inner.lock().unwrap();
        let subscriber = map
            .get_mut(email.as_str())
            .ok_or_else(|| DomainError::NotFound(format!("no subscription for {email}")))?;
        subscriber.status = status;
        Ok(subscriber.clone())
    }
}
