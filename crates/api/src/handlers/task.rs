//! Handlers for task subroutes under `/projects/{id}/tasks`.
//!
//! Tasks only exist embedded in a wedding project; every route addresses
//! them through the owning project id. Requests against studio or
//! corporate projects (which have no checklist) yield 404.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use marvelous_core::project::Project;
use marvelous_core::task::{Comment, SubTask, Task, TaskStatus};
use marvelous_core::types::ProjectId;
use marvelous_store::UpdateTask;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body for status-change endpoints (tasks and sub-tasks).
#[derive(Debug, Deserialize)]
pub struct SetStatus {
    pub status: TaskStatus,
}

/// Body for `POST .../comments`.
#[derive(Debug, Deserialize)]
pub struct NewComment {
    pub author: String,
    pub text: String,
}

/// Body for `POST .../tags`.
#[derive(Debug, Deserialize)]
pub struct NewTag {
    pub tag: String,
}

/// Body for `POST .../subtasks`.
#[derive(Debug, Deserialize)]
pub struct NewSubTask {
    pub title: String,
}

/// POST /api/v1/projects/{id}/tasks/{task_id}/status
///
/// Changes the task status and returns the whole updated project, since
/// the project's derived status may have changed with it.
pub async fn set_status(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(ProjectId, String)>,
    Json(input): Json<SetStatus>,
) -> AppResult<Json<Project>> {
    let project = state
        .projects
        .update_task_status(project_id, &task_id, input.status)
        .ok_or_else(|| AppError::not_found("Task", &task_id))?;
    Ok(Json(project))
}

/// PATCH /api/v1/projects/{id}/tasks/{task_id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(ProjectId, String)>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    let task = state
        .projects
        .update_task(project_id, &task_id, input)
        .ok_or_else(|| AppError::not_found("Task", &task_id))?;
    Ok(Json(task))
}

/// POST /api/v1/projects/{id}/tasks/{task_id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(ProjectId, String)>,
    Json(input): Json<NewComment>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let comment = state
        .projects
        .add_comment(project_id, &task_id, input.author, input.text)
        .ok_or_else(|| AppError::not_found("Task", &task_id))?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// POST /api/v1/projects/{id}/tasks/{task_id}/tags
pub async fn add_tag(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(ProjectId, String)>,
    Json(input): Json<NewTag>,
) -> AppResult<Json<Task>> {
    let task = state
        .projects
        .add_task_tag(project_id, &task_id, input.tag)
        .ok_or_else(|| AppError::not_found("Task", &task_id))?;
    Ok(Json(task))
}

/// POST /api/v1/projects/{id}/tasks/{task_id}/subtasks
pub async fn add_sub_task(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(ProjectId, String)>,
    Json(input): Json<NewSubTask>,
) -> AppResult<(StatusCode, Json<SubTask>)> {
    let sub_task = state
        .projects
        .add_sub_task(project_id, &task_id, input.title)
        .ok_or_else(|| AppError::not_found("Task", &task_id))?;
    Ok((StatusCode::CREATED, Json(sub_task)))
}

/// PUT /api/v1/projects/{id}/tasks/{task_id}/subtasks/{sub_id}/status
pub async fn set_sub_task_status(
    State(state): State<AppState>,
    Path((project_id, task_id, sub_id)): Path<(ProjectId, String, String)>,
    Json(input): Json<SetStatus>,
) -> AppResult<Json<SubTask>> {
    let sub_task = state
        .projects
        .set_sub_task_status(project_id, &task_id, &sub_id, input.status)
        .ok_or_else(|| AppError::not_found("SubTask", &sub_id))?;
    Ok(Json(sub_task))
}
