use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::draft::entity::{Draft, DraftStatus, DraftUpdate, NewDraft};
use crate::domain::draft::repository::DraftRepository;
use crate::domain::draft::value_objects::DraftId;
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
pub struct MemoryDraftRepository {
    inner: Mutex<HashMap<String, Draft>>,
}

impl MemoryDraftRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DraftRepository for MemoryDraftRepository {
    async fn insert(&self, draft: NewDraft) -> DomainResult<Draft> {
        let mut map = self.inner.lock().unwrap();
        let id = DraftId::new(Uuid::new_v4().to_string())?;
        let created = Draft {
            id: id.clone(),
            title: draft.title,
            author: draft.author,
            category: draft.category,
            content: draft.content,
            image: draft.image,
            status: DraftStatus::Draft,
            scheduled_for: None,
            original_article_slug: draft.original_article_slug,
            created_at: draft.created_at,
            last_saved: draft.created_at,
        };
        map.insert(id.as_str().to_string(), created.clone());
        Ok(created)
    }

    async fn update(&self, update: DraftUpdate) -> DomainResult<Draft> {
        let mut map = self.inner.lock().unwrap();
        let draft = map
            .get_mut(update.id.as_str())
            .ok_or_else(|| DomainError::NotFound(format!("draft '{}' not found", update.id)))?;

        if let Some(title) = update.title {
            draft.title = title;
        }
        if let Some(author) = update.author {
            draft.author = author;
        }
        if let Some(category) = update.category {
            draft.category = category;
        }
        if let Some(content) = update.content {
            draft.content = content;
        }
        if let Some(image) = update.image {
            draft.image = Some(image);
        }
        draft.last_saved = update.last_saved;
        Ok(draft.clone())
    }

    async fn mark_scheduled(
        &self,
        id: &DraftId,
        publish_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> DomainResult<Draft> {
        let mut map = self.inner.lock().unwrap();
        let draft = map
            .get_mut(id.as_str())
            .ok_or_else(|| DomainError::NotFound(format!("draft '{id}' not found")))?;
        draft.schedule(publish_at, now);
        Ok(draft.clone())
    }

    async fn find_by_id(&self, id: &DraftId) -> DomainResult<Option<Draft>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(id.as_str()).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Draft>> {
        let map = self.inner.lock().unwrap();
        Ok(map.values().cloned().collect())
    }

    async fn list_due(&self, now: DateTime<Utc>) -> DomainResult<Vec<Draft>> {
        let map = self.inner.lock().unwrap();
        let mut due: Vec<Draft> = map.values().filter(|d| d.is_due(now)).cloned().collect();
        // Oldest schedule first, so a backlog drains in order.
        due.sort_by_key(|d| d.scheduled_for);
        Ok(due)
    }

    async fn claim_for_publishing(&self, id: &DraftId) -> DomainResult<Option<Draft>> {
        let mut map = self.inner.lock().unwrap();
        match map.get_mut(id.as_str()) {
            Some(draft) if draft.status == DraftStatus::Scheduled => {
                draft.status = DraftStatus::Publishing;
                Ok(Some(draft.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn release_claim(&self, id: &DraftId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        if let Some(draft) = map.get_mut(id.as_str()) {
            if draft.status == DraftStatus::Publishing {
                draft.status = DraftStatus::Scheduled;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: &DraftId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(id.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{AuthorName, Title};
    use chrono::Duration;

    async fn scheduled_draft(repo: &MemoryDraftRepository, now: DateTime<Utc>) -> Draft {
        let draft = repo
            .insert(NewDraft {
                title: Title::new("t").unwrap(),
                author: AuthorName::new("a").unwrap(),
                category: String::new(),
                content: String::new(),
                image: None,
                original_article_slug: None,
                created_at: now,
            })
            .await
            .unwrap();
        repo.mark_scheduled(&draft.id, now + Duration::minutes(5), now)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn claim_succeeds_exactly_once() {
        let repo = MemoryDraftRepository::new();
        let now = Utc::now();
        let draft = scheduled_draft(&repo, now).await;

        let first = repo.claim_for_publishing(&draft.id).await.unwrap();
        assert!(first.is_some());
        // A second (concurrent) sweep loses the race.
        let second = repo.claim_for_publishing(&draft.id).await.unwrap();
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn release_puts_claim_back() {
        let repo = MemoryDraftRepository::new();
        let now = Utc::now();
        let draft = scheduled_draft(&repo, now).await;

        repo.claim_for_publishing(&draft.id).await.unwrap();
        repo.release_claim(&draft.id).await.unwrap();
        assert!(repo.claim_for_publishing(&draft.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = MemoryDraftRepository::new();
        let id = DraftId::new("missing").unwrap();
        assert!(repo.delete(&id).await.is_ok());
        assert!(repo.delete(&id).await.is_ok());
    }

    #[tokio::test]
    async fn claimed_drafts_are_not_listed_as_due() {
        let repo = MemoryDraftRepository::new();
        let now = Utc::now();
        let draft = scheduled_draft(&repo, now).await;
        let later = now + Duration::hours(1);

        assert_eq!(repo.list_due(later).await.unwrap().len(), 1);
        repo.claim_for_publishing(&draft.id).await.unwrap();
        assert!(repo.list_due(later).await.unwrap().is_empty());
    }
}
