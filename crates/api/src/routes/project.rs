//! Route definitions for the `/projects` resource and its task subroutes.

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::{project, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/progress", get(project::progress))
        // Task subroutes. Tasks are embedded in their project; there is no
        // standalone /tasks resource.
        .route("/{id}/tasks/{task_id}", patch(task::update))
        .route("/{id}/tasks/{task_id}/status", post(task::set_status))
        .route("/{id}/tasks/{task_id}/comments", post(task::add_comment))
        .route("/{id}/tasks/{task_id}/tags", post(task::add_tag))
        .route("/{id}/tasks/{task_id}/subtasks", post(task::add_sub_task))
        .route(
            "/{id}/tasks/{task_id}/subtasks/{sub_id}/status",
            put(task::set_sub_task_status),
        )
}
