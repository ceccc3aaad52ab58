//! Integration tests for `/notifications` and `/seasons`.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get, send, send_json};
use marvelous_store::NotificationKind;

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inbox_lifecycle() {
    let (app, state) = common::build_test_app();

    // Empty inbox to start with.
    let json = body_json(get(app.clone(), "/api/v1/notifications").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    // Seed two notifications directly through the store.
    let first = state.notifications.push(
        "Nouveau projet".into(),
        "Projet créé avec succès".into(),
        NotificationKind::Info,
        Some("/projects/1".into()),
    );
    state.notifications.push(
        "Projet en retard".into(),
        "Le projet Alice & Bob a des tâches en retard".into(),
        NotificationKind::Warning,
        None,
    );

    // Newest first.
    let json = body_json(get(app.clone(), "/api/v1/notifications").await).await;
    assert_eq!(json["data"][0]["title"], "Projet en retard");
    assert_eq!(json["data"][1]["link"], "/projects/1");

    let json = body_json(get(app.clone(), "/api/v1/notifications/unread-count").await).await;
    assert_eq!(json["data"]["count"], 2);

    // Mark one read, list unread only.
    let response = send(
        app.clone(),
        Method::POST,
        &format!("/api/v1/notifications/{}/read", first.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(app.clone(), "/api/v1/notifications?unread_only=true").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Read-all reports the remaining count.
    let json = body_json(send(app.clone(), Method::POST, "/api/v1/notifications/read-all").await)
        .await;
    assert_eq!(json["data"]["marked_read"], 1);

    // Delete one; deleting again is a 404.
    let uri = format!("/api/v1/notifications/{}", first.id);
    let response = send(app.clone(), Method::DELETE, &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = send(app, Method::DELETE, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn marking_an_unknown_notification_is_404() {
    let (app, _state) = common::build_test_app();
    let response = send(app, Method::POST, "/api/v1/notifications/ghost/read").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Seasons
// ---------------------------------------------------------------------------

#[tokio::test]
async fn season_activation_is_exclusive() {
    let (app, _state) = common::build_test_app();

    // Seeded with the current season, already active.
    let json = body_json(get(app.clone(), "/api/v1/seasons/active").await).await;
    assert_eq!(json["data"]["name"], "Saison 2024");

    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/v1/seasons",
        serde_json::json!({ "name": "Saison hiver" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let winter = body_json(response).await;
    assert_eq!(winter["active"], false);

    // Activate the new season; the seeded one is deactivated.
    let response = send_json(
        app.clone(),
        Method::PUT,
        "/api/v1/seasons/active",
        serde_json::json!({ "season_id": winter["id"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let seasons = body_json(get(app.clone(), "/api/v1/seasons").await).await;
    let active: Vec<_> = seasons
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["active"] == true)
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["name"], "Saison hiver");

    // Clearing leaves no active season.
    let response = send_json(
        app.clone(),
        Method::PUT,
        "/api/v1/seasons/active",
        serde_json::json!({ "season_id": null }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let json = body_json(get(app.clone(), "/api/v1/seasons/active").await).await;
    assert!(json["data"].is_null());

    // Unknown ids are rejected without changing anything.
    let response = send_json(
        app,
        Method::PUT,
        "/api/v1/seasons/active",
        serde_json::json!({ "season_id": "ghost" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
