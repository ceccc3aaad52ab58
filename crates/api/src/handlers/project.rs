//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use marvelous_core::project::Project;
use marvelous_core::search::ProjectFilter;
use marvelous_core::types::ProjectId;
use marvelous_store::{CreateProject, UpdateProject};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /projects`.
///
/// List criteria (`status`, `wedding_type`, ...) are comma-separated to
/// stay friendly to plain query strings.
#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    /// Case-insensitive substring match on the client label.
    pub search: Option<String>,
    pub status: Option<String>,
    pub wedding_type: Option<String>,
    pub formula: Option<String>,
    pub priority: Option<String>,
    pub tag: Option<String>,
    pub season_id: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Parse a comma-separated list of snake_case enum tokens (or plain
/// strings) into typed filter values.
fn parse_list<T: DeserializeOwned>(raw: Option<&str>, what: &str) -> AppResult<Vec<T>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            serde_json::from_value(serde_json::Value::String(s.to_string()))
                .map_err(|_| AppError::BadRequest(format!("Invalid {what}: {s}")))
        })
        .collect()
}

impl ListProjectsQuery {
    fn into_filter(self) -> AppResult<ProjectFilter> {
        Ok(ProjectFilter {
            search: self.search.unwrap_or_default(),
            statuses: parse_list(self.status.as_deref(), "status")?,
            wedding_types: parse_list(self.wedding_type.as_deref(), "wedding_type")?,
            formulas: parse_list(self.formula.as_deref(), "formula")?,
            priorities: parse_list(self.priority.as_deref(), "priority")?,
            tags: parse_list(self.tag.as_deref(), "tag")?,
            season_id: self.season_id,
            date_from: self.date_from,
            date_to: self.date_to,
        })
    }
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = state.projects.create(input)?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsQuery>,
) -> AppResult<Json<Vec<Project>>> {
    let filter = params.into_filter()?;
    Ok(Json(state.projects.search(&filter)))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> AppResult<Json<Project>> {
    let project = state
        .projects
        .get(id)
        .ok_or_else(|| AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = state
        .projects
        .update(id, input)
        .ok_or_else(|| AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> AppResult<StatusCode> {
    if state.projects.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Project", id))
    }
}

/// GET /api/v1/projects/{id}/progress
pub async fn progress(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> AppResult<Json<serde_json::Value>> {
    let progress = state
        .projects
        .progress(id)
        .ok_or_else(|| AppError::not_found("Project", id))?;
    Ok(Json(serde_json::json!({
        "data": { "progress": progress }
    })))
}
