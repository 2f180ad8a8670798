// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, cron, drafts, subscribers};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/drafts",
            get(drafts::list_drafts).post(drafts::create_draft),
        )
        .route(
            "/api/v1/drafts/{id}",
            get(drafts::get_draft)
                .put(drafts::save_draft)
                .delete(drafts::delete_draft),
        )
        .route("/api/v1/drafts/{id}/schedule", post(drafts::schedule_draft))
        .route("/api/v1/drafts/{id}/publish", post(drafts::publish_draft))
        .route("/api/v1/articles", get(articles::list_articles))
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route("/api/v1/articles/{slug}/views", post(articles::record_view))
        .route(
            "/api/v1/articles/{slug}/comments",
            post(articles::add_comment),
        )
        .route("/api/v1/subscribers", post(subscribers::subscribe))
        .route(
            "/api/v1/subscribers/unsubscribe",
            post(subscribers::unsubscribe),
        )
        .route(
            "/api/v1/cron/publish-scheduled",
            post(cron::publish_scheduled),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
