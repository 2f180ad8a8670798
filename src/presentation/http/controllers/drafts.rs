// src/presentation/http/controllers/drafts.rs
use crate::application::commands::publishing::{
    CreateDraftCommand, SaveDraftCommand, ScheduleCommand,
};
use crate::application::dto::{DraftDto, PublishOutcome, PublishReceipt};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateDraftRequest {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub original_article_slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveDraftRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub publish_at: DateTime<Utc>,
}

pub async fn create_draft(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateDraftRequest>,
) -> HttpResult<Json<DraftDto>> {
    state
        .services
        .publishing
        .create_draft(CreateDraftCommand {
            title: payload.title,
            author: payload.author,
            category: payload.category,
            content: payload.content,
            image: payload.image,
            original_article_slug: payload.original_article_slug,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_drafts(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<DraftDto>>> {
    state.services.draft_queries.list().await.into_http().map(Json)
}

pub async fn get_draft(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<DraftDto>> {
    state.services.draft_queries.get(id).await.into_http().map(Json)
}

pub async fn save_draft(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<SaveDraftRequest>,
) -> HttpResult<Json<DraftDto>> {
    state
        .services
        .publishing
        .save_draft(SaveDraftCommand {
            id,
            title: payload.title,
            author: payload.author,
            category: payload.category,
            content: payload.content,
            image: payload.image,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_draft(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .publishing
        .delete_draft(id)
        .await
        .into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn schedule_draft(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<ScheduleRequest>,
) -> HttpResult<Json<PublishOutcome>> {
    state
        .services
        .publishing
        .schedule(ScheduleCommand {
            draft_id: id,
            publish_at: payload.publish_at,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn publish_draft(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<PublishReceipt>> {
    state
        .services
        .publishing
        .publish_draft(id)
        .await
        .into_http()
        .map(Json)
}
