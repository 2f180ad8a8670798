// src/application/queries/drafts.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::DraftDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::draft::{DraftId, repository::DraftRepository},
};

pub struct DraftQueryService {
    drafts: Arc<dyn DraftRepository>,
}

impl DraftQueryService {
    pub fn new(drafts: Arc<dyn DraftRepository>) -> Self {
        Self { drafts }
    }

    pub async fn get(&self, id: String) -> ApplicationResult<DraftDto> {
        let id = DraftId::new(id)?;
        self.drafts
            .find_by_id(&id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("draft '{id}' not found")))
    }

    /// Most recently saved first.
    pub async fn list(&self) -> ApplicationResult<Vec<DraftDto>> {
        let mut drafts = self.drafts.list().await?;
        drafts.sort_by(|a, b| b.last_saved.cmp(&a.last_saved));
        Ok(drafts.into_iter().map(Into::into).collect())
    }
}
