// src/presentation/http/controllers/subscribers.rs
use crate::application::commands::subscriptions::{SubscribeCommand, UnsubscribeCommand};
use crate::application::dto::SubscriberDto;
use crate::presentation::http::client_key::client_key;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::HeaderMap};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UnsubscribeRequest {
    pub email: String,
    #[serde(default)]
    pub token: String,
}

pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    headers: HeaderMap,
    Json(payload): Json<SubscribeRequest>,
) -> HttpResult<Json<SubscriberDto>> {
    state
        .services
        .rate_limiter
        .enforce("subscribe", &client_key(&headers))
        .await
        .into_http()?;

    state
        .services
        .subscriptions
        .subscribe(SubscribeCommand {
            email: payload.email,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn unsubscribe(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<UnsubscribeRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .subscriptions
        .unsubscribe(UnsubscribeCommand {
            email: payload.email,
            token: payload.token,
        })
        .await
        .into_http()?;
    Ok(Json(json!({ "status": "unsubscribed" })))
}
