//! Integration tests for the `/projects` resource.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, create_wedding, get, send, send_json};

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_wedding_generates_schedule() {
    let (app, _state) = common::build_test_app();
    let project = create_wedding(&app, "photo", "2024-06-01").await;

    assert_eq!(project["type"], "wedding");
    assert_eq!(project["status"], "en_cours");
    assert_eq!(project["formula"]["name"], "photo");

    let tasks = project["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 5);
    // First task: anchor + 10 days, project-scoped id.
    assert_eq!(tasks[0]["due_date"], "2024-06-11");
    assert_eq!(tasks[0]["id"], format!("{}-task-0", project["id"]));
    // Last task: anchor + 70 days.
    assert_eq!(tasks[4]["due_date"], "2024-08-10");
}

#[tokio::test]
async fn create_with_unknown_formula_is_rejected() {
    let (app, _state) = common::build_test_app();

    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/v1/projects",
        serde_json::json!({
            "type": "wedding",
            "client": "Alice & Bob",
            "date": "2024-06-01",
            "country": "fr",
            "wedding_type": "french",
            "formula_id": "drone_only",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNKNOWN_FORMULA");

    // Nothing was persisted.
    let list = body_json(get(app, "/api/v1/projects").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_studio_with_price_override() {
    let (app, _state) = common::build_test_app();

    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/v1/projects",
        serde_json::json!({
            "type": "studio",
            "client": "Claire",
            "date": "2024-09-15",
            "country": "cm",
            "session_type": "portrait",
            "package_id": "standard",
            "price_override": 90000,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let project = body_json(response).await;
    // Standard package in Cameroon lists at 125000; the override replaces it.
    assert_eq!(project["price"], 90000);
    assert_eq!(project["package"]["name"], "Standard Studio");
}

#[tokio::test]
async fn create_corporate_portrait_without_override_is_rejected() {
    let (app, _state) = common::build_test_app();

    let response = send_json(
        app,
        Method::POST,
        "/api/v1/projects",
        serde_json::json!({
            "type": "corporate",
            "client": "Acme",
            "date": "2024-10-01",
            "country": "fr",
            "event_type": "corporate_portrait",
            "company": { "name": "Acme", "contact": "Jean", "position": "RH" },
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Read / update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_by_id_and_missing_id() {
    let (app, _state) = common::build_test_app();
    let project = create_wedding(&app, "photo", "2024-06-01").await;
    let id = project["id"].as_i64().unwrap();

    let response = get(app.clone(), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["client"], "Alice & Bob");

    let response = get(app, "/api/v1/projects/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    // Errors use the { "error", "code" } envelope.
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_merges_fields_and_appends_activity() {
    let (app, _state) = common::build_test_app();
    let project = create_wedding(&app, "photo", "2024-06-01").await;
    let id = project["id"].as_i64().unwrap();

    let response = send_json(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/projects/{id}"),
        serde_json::json!({ "notes": "Acompte reçu", "tags": ["vip"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["notes"], "Acompte reçu");
    assert_eq!(updated["tags"][0], "vip");
    // Untouched fields survive.
    assert_eq!(updated["client"], "Alice & Bob");

    let log = updated["activity_log"].as_array().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0]["type"], "update");
    assert_eq!(log[0]["details"]["notes"], "Acompte reçu");
}

#[tokio::test]
async fn delete_removes_the_project() {
    let (app, _state) = common::build_test_app();
    let project = create_wedding(&app, "photo", "2024-06-01").await;
    let id = project["id"].as_i64().unwrap();

    let response = send(app.clone(), Method::DELETE, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting twice is a 404, not a silent success.
    let response = send(app, Method::DELETE, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Listing and filtering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_filters_by_search_and_tag() {
    let (app, _state) = common::build_test_app();
    create_wedding(&app, "photo", "2024-06-01").await;

    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/v1/projects",
        serde_json::json!({
            "type": "wedding",
            "client": "Chantal & Paul",
            "date": "2024-07-20",
            "country": "cm",
            "wedding_type": "cameroonian",
            "formula_id": "complete",
        }),
    )
    .await;
    let second = body_json(response).await;
    let second_id = second["id"].as_i64().unwrap();

    // Case-insensitive substring search on the client label.
    let list = body_json(get(app.clone(), "/api/v1/projects?search=chantal").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["client"], "Chantal & Paul");

    // Tag the second project, then filter on the tag.
    send_json(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/projects/{second_id}"),
        serde_json::json!({ "tags": ["vip"] }),
    )
    .await;
    let list = body_json(get(app.clone(), "/api/v1/projects?tag=vip").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    // An invalid enum token in a filter is a 400, not an empty result.
    let response = get(app, "/api/v1/projects?status=bogus").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[tokio::test]
async fn progress_endpoint_reports_completion() {
    let (app, _state) = common::build_test_app();
    let project = create_wedding(&app, "photo", "2024-06-01").await;
    let id = project["id"].as_i64().unwrap();
    let task_id = project["tasks"][0]["id"].as_str().unwrap().to_string();

    let json = body_json(get(app.clone(), &format!("/api/v1/projects/{id}/progress")).await).await;
    assert_eq!(json["data"]["progress"], 0);

    send_json(
        app.clone(),
        Method::POST,
        &format!("/api/v1/projects/{id}/tasks/{task_id}/status"),
        serde_json::json!({ "status": "completed" }),
    )
    .await;

    // 1 of 5 tasks -> 20%.
    let json = body_json(get(app, &format!("/api/v1/projects/{id}/progress")).await).await;
    assert_eq!(json["data"]["progress"], 20);
}
