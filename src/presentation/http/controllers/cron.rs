// src/presentation/http/controllers/cron.rs
use crate::application::dto::SweepItemOutcome;
use crate::application::error::ApplicationError;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::HeaderMap};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub message: String,
    pub results: Vec<SweepItemOutcome>,
    pub published_count: usize,
}

/// Trigger for the scheduled-publication sweep. The external scheduler
/// authenticates with a shared secret; no request body.
pub async fn publish_scheduled(
    Extension(state): Extension<HttpState>,
    headers: HeaderMap,
) -> HttpResult<Json<SweepResponse>> {
    let supplied = headers
        .get("x-cron-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if supplied.is_empty() || supplied != state.cron_key {
        return Err(HttpError::from_error(ApplicationError::unauthorized(
            "invalid cron key",
        )));
    }

    let report = state.services.sweeper.run().await.into_http()?;
    Ok(Json(SweepResponse {
        message: format!("published {} scheduled draft(s)", report.published_count),
        results: report.results,
        published_count: report.published_count,
    }))
}
