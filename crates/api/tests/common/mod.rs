//! Shared harness for API integration tests.
//!
//! Builds the application router through the same [`build_app_router`]
//! used by `main.rs`, so tests exercise the production middleware stack
//! (CORS, request ID, timeout, tracing, panic recovery).

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use marvelous_api::config::ServerConfig;
use marvelous_api::router::build_app_router;
use marvelous_api::state::AppState;
use marvelous_events::EventBus;
use marvelous_store::{NotificationStore, ProjectStore, SeasonStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the application router plus the state behind it, so tests can
/// seed or inspect the stores directly.
pub fn build_test_app() -> (Router, AppState) {
    let config = test_config();
    let event_bus = Arc::new(EventBus::default());

    let state = AppState {
        config: Arc::new(config.clone()),
        projects: Arc::new(ProjectStore::new(Arc::clone(&event_bus))),
        seasons: Arc::new(SeasonStore::new()),
        notifications: Arc::new(NotificationStore::new()),
        event_bus,
    };

    (build_app_router(state.clone(), &config), state)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// Issue a request with a JSON body.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// Issue a bodyless request with the given method.
pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// Collect a response body as parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// Collect a response body as a UTF-8 string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is UTF-8")
}

/// Create a wedding project through the API and return its JSON.
pub async fn create_wedding(app: &Router, formula_id: &str, date: &str) -> serde_json::Value {
    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/v1/projects",
        serde_json::json!({
            "type": "wedding",
            "client": "Alice & Bob",
            "date": date,
            "email": "alice@example.com",
            "country": "fr",
            "delivery_days": 80,
            "wedding_type": "french",
            "location": "Paris",
            "formula_id": formula_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
