// src/presentation/http/controllers/articles.rs
use crate::application::commands::engagement::AddCommentCommand;
use crate::application::dto::{ArticleDto, CommentDto};
use crate::presentation::http::client_key::client_key;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::HeaderMap,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    pub author: String,
    pub body: String,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_by_slug(slug)
        .await
        .into_http()
        .map(Json)
}

pub async fn record_view(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    let views = state
        .services
        .engagement
        .record_view(slug)
        .await
        .into_http()?;
    Ok(Json(json!({ "views": views })))
}

pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<AddCommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .rate_limiter
        .enforce("comment", &client_key(&headers))
        .await
        .into_http()?;

    state
        .services
        .engagement
        .add_comment(AddCommentCommand {
            slug,
            author: payload.author,
            body: payload.body,
        })
        .await
        .into_http()
        .map(Json)
}
