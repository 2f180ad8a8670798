// tests/e2e_http.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use chrono::Duration;
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

use pressroom_core::application::services::rate_limiter::RateLimitPolicy;
use support::{TEST_CRON_KEY, build_harness, build_harness_with_policy, fixed_now};

fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_returns_ok() {
    let harness = build_harness();
    let app = support::make_test_router(&harness);

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn draft_can_be_created_published_and_read_back() {
    let harness = build_harness();
    let app = support::make_test_router(&harness);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/drafts",
            &json!({ "title": "Hello World Launch", "author": "ada", "content": "body" }),
        ))
        .await
        .unwrap();
    let (status, draft) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(draft["status"], "draft");
    let id = draft["id"].as_str().unwrap().to_string();

    // A schedule request whose timestamp is already due publishes right away.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/drafts/{id}/schedule"),
            &json!({ "publish_at": fixed_now().to_rfc3339() }),
        ))
        .await
        .unwrap();
    let (status, outcome) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["kind"], "published");
    assert_eq!(outcome["article"]["slug"], "hello-world-launch");

    let response = app
        .clone()
        .oneshot(empty_request(
            "GET",
            "/api/v1/articles/by-slug/hello-world-launch",
        ))
        .await
        .unwrap();
    let (status, article) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(article["views"], 0);

    // The draft was consumed by the publish.
    let response = app
        .oneshot(empty_request("GET", &format!("/api/v1/drafts/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_draft_payload_is_a_bad_request() {
    let harness = build_harness();
    let app = support::make_test_router(&harness);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/drafts",
            &json!({ "title": " ", "author": "ada" }),
        ))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn comments_are_rate_limited_with_a_retry_hint() {
    let harness = build_harness_with_policy(RateLimitPolicy {
        max_requests: 2,
        window: Duration::minutes(15),
    });
    let app = support::make_test_router(&harness);

    // Publish something to comment on.
    harness
        .services
        .publishing
        .publish_now(
            pressroom_core::application::commands::publishing::PublishPayload {
                title: "Open Thread".into(),
                author: "ada".into(),
                category: "news".into(),
                content: "body".into(),
                image: None,
            },
            None,
        )
        .await
        .unwrap();

    let comment = |n: u32| {
        let mut request = json_request(
            "POST",
            "/api/v1/articles/open-thread/comments",
            &json!({ "author": "reader", "body": format!("comment {n}") }),
        );
        request
            .headers_mut()
            .insert("x-forwarded-for", "203.0.113.4".parse().unwrap());
        request
    };

    for n in 0..2 {
        let response = app.clone().oneshot(comment(n)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.clone().oneshot(comment(2)).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("retry-after"));
    let (_, body) = read_json(response).await;
    assert!(body["retry_after_seconds"].as_u64().unwrap() > 0);

    // A different client is unaffected.
    let mut request = json_request(
        "POST",
        "/api/v1/articles/open-thread/comments",
        &json!({ "author": "reader", "body": "other client" }),
    );
    request
        .headers_mut()
        .insert("x-forwarded-for", "198.51.100.7".parse().unwrap());
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn cron_endpoint_requires_the_shared_secret() {
    let harness = build_harness();
    let app = support::make_test_router(&harness);

    let response = app
        .clone()
        .oneshot(empty_request("POST", "/api/v1/cron/publish-scheduled"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let mut request = empty_request("POST", "/api/v1/cron/publish-scheduled");
    request
        .headers_mut()
        .insert("x-cron-key", "wrong-key".parse().unwrap());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let mut request = empty_request("POST", "/api/v1/cron/publish-scheduled");
    request
        .headers_mut()
        .insert("x-cron-key", TEST_CRON_KEY.parse().unwrap());
    let response = app.oneshot(request).await.unwrap();
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["published_count"], 0);
    assert!(body["results"].as_array().unwrap().is_empty());
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn views_accumulate_through_the_api() {
    let harness = build_harness();
    let app = support::make_test_router(&harness);

    harness
        .services
        .publishing
        .publish_now(
            pressroom_core::application::commands::publishing::PublishPayload {
                title: "Counted".into(),
                author: "ada".into(),
                category: "news".into(),
                content: "body".into(),
                image: None,
            },
            None,
        )
        .await
        .unwrap();

    for expected in 1..=3 {
        let response = app
            .clone()
            .oneshot(empty_request("POST", "/api/v1/articles/counted/views"))
            .await
            .unwrap();
        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["views"], expected);
    }
}
