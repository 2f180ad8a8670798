use crate::domain::draft::{Draft, DraftStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub content: String,
    pub image: Option<String>,
    pub status: String,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub original_article_slug: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_saved: DateTime<Utc>,
}

fn status_label(status: DraftStatus) -> &'static str {
    match status {
        DraftStatus::Draft => "draft",
        DraftStatus::Scheduled => "scheduled",
        DraftStatus::Publishing => "publishing",
    }
}

impl From<Draft> for DraftDto {
    fn from(draft: Draft) -> Self {
        Self {
            id: draft.id.into(),
            title: draft.title.into(),
            author: draft.author.into(),
            category: draft.category,
            content: draft.content,
            image: draft.image,
            status: status_label(draft.status).to_string(),
            scheduled_for: draft.scheduled_for,
            original_article_slug: draft.original_article_slug,
            created_at: draft.created_at,
            last_saved: draft.last_saved,
        }
    }
}
