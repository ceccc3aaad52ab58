pub mod dashboard;
pub mod export;
pub mod formula;
pub mod health;
pub mod notification;
pub mod project;
pub mod season;
pub mod staff;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/progress                          completion percentage
/// /projects/{id}/tasks/{task_id}                   partial task update (PATCH)
/// /projects/{id}/tasks/{task_id}/status            change task status (POST)
/// /projects/{id}/tasks/{task_id}/comments          add comment (POST)
/// /projects/{id}/tasks/{task_id}/tags              add tag (POST)
/// /projects/{id}/tasks/{task_id}/subtasks          add sub-task (POST)
/// /projects/{id}/tasks/{task_id}/subtasks/{sub_id}/status  change sub-task status (PUT)
///
/// /seasons                                         list, create
/// /seasons/active                                  get, set (PUT)
///
/// /formulas                                        list catalog
/// /formulas/{id}                                   get one formula
///
/// /staff                                           list staff catalog
///
/// /notifications                                   list (?unread_only=true)
/// /notifications/read-all                          mark all read (POST)
/// /notifications/unread-count                      unread count
/// /notifications/{id}/read                         mark one read (POST)
/// /notifications/{id}                              delete
///
/// /export/projects                                 CSV or JSON dump (?format=)
///
/// /dashboard/summary                               aggregate counters
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/seasons", season::router())
        .nest("/formulas", formula::router())
        .nest("/staff", staff::router())
        .nest("/notifications", notification::router())
        .nest("/export", export::router())
        .nest("/dashboard", dashboard::router())
}
