// src/domain/draft/entity.rs
use crate::domain::article::value_objects::{AuthorName, Title};
use crate::domain::draft::value_objects::DraftId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStatus {
    Draft,
    Scheduled,
    /// Transient marker set while a sweep is publishing the draft, so a
    /// concurrent sweep cannot pick it up a second time.
    Publishing,
}

#[derive(Debug, Clone)]
pub struct Draft {
    pub id: DraftId,
    pub title: Title,
    pub author: AuthorName,
    pub category: String,
    pub content: String,
    pub image: Option<String>,
    pub status: DraftStatus,
    /// Present iff status is Scheduled or Publishing.
    pub scheduled_for: Option<DateTime<Utc>>,
    /// Back-reference to a previously published article being edited.
    /// A plain foreign-key-style string, resolved by lookup at publish time.
    pub original_article_slug: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_saved: DateTime<Utc>,
}

impl Draft {
    pub fn schedule(&mut self, publish_at: DateTime<Utc>, now: DateTime<Utc>) {
        self.status = DraftStatus::Scheduled;
        self.scheduled_for = Some(publish_at);
        self.last_saved = now;
    }

    /// A scheduled draft is due once its timestamp is no longer strictly in
    /// the future. The same rule decides immediate-publish routing in
    /// `schedule`, so the two paths can never disagree on the boundary.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == DraftStatus::Scheduled
            && self.scheduled_for.is_some_and(|at| at <= now)
    }
}

#[derive(Debug, Clone)]
pub struct NewDraft {
    pub title: Title,
    pub author: AuthorName,
    pub category: String,
    pub content: String,
    pub image: Option<String>,
    pub original_article_slug: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial update applied by autosave or an explicit save. Fields left as
/// `None` keep their stored value.
#[derive(Debug, Clone)]
pub struct DraftUpdate {
    pub id: DraftId,
    pub title: Option<Title>,
    pub author: Option<AuthorName>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub last_saved: DateTime<Utc>,
}
