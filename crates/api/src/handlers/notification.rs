//! Handlers for the `/notifications` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use marvelous_store::Notification;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// If `true`, return only unread notifications. Defaults to `false`.
    pub unread_only: Option<bool>,
}

/// GET /api/v1/notifications
///
/// List notifications newest-first with optional unread filtering.
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> Json<DataResponse<Vec<Notification>>> {
    let unread_only = params.unread_only.unwrap_or(false);
    Json(DataResponse {
        data: state.notifications.list(unread_only),
    })
}

/// POST /api/v1/notifications/{id}/read
///
/// Mark a single notification as read. Returns 204 No Content on success,
/// or 404 if the notification does not exist.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !state.notifications.mark_read(&id) {
        return Err(AppError::not_found("Notification", &id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/notifications/read-all
///
/// Mark all notifications as read. Returns the number that were marked.
pub async fn mark_all_read(State(state): State<AppState>) -> Json<serde_json::Value> {
    let count = state.notifications.mark_all_read();
    Json(serde_json::json!({
        "data": { "marked_read": count }
    }))
}

/// GET /api/v1/notifications/unread-count
pub async fn unread_count(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "data": { "count": state.notifications.unread_count() }
    }))
}

/// DELETE /api/v1/notifications/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if state.notifications.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Notification", &id))
    }
}
