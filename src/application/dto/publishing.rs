use crate::application::dto::{ArticleDto, DraftDto};
use serde::{Deserialize, Serialize};

/// Tally of one notification fan-out. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResult {
    pub successful: usize,
    pub failed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishReceipt {
    pub article: ArticleDto,
    pub notified: NotificationResult,
}

/// What a schedule request actually did. Callers branch on the tag instead
/// of probing the payload for a slug field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PublishOutcome {
    Scheduled { draft: DraftDto },
    Published { article: ArticleDto, notified: NotificationResult },
}

/// Per-item result of one sweep run. A failed item never aborts its
/// siblings, so both shapes appear side by side in the same report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SweepItemOutcome {
    Published {
        id: String,
        slug: String,
        title: String,
        notified: usize,
    },
    Failed {
        id: String,
        error: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub published_count: usize,
    pub results: Vec<SweepItemOutcome>,
}
