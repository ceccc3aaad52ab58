//! Handlers for the `/dashboard` resource.

use axum::extract::State;
use axum::Json;

use marvelous_core::project::{ProjectKind, ProjectStatus};
use marvelous_core::task::TaskStatus;

use crate::state::AppState;

/// GET /api/v1/dashboard/summary
///
/// Aggregate counters over the whole store, computed on the fly. The
/// store is in-memory, so there is no point caching these.
pub async fn summary(State(state): State<AppState>) -> Json<serde_json::Value> {
    let projects = state.projects.list();

    let mut a_venir = 0usize;
    let mut en_cours = 0usize;
    let mut en_retard = 0usize;
    let mut termine = 0usize;
    let mut weddings = 0usize;
    let mut studio = 0usize;
    let mut corporate = 0usize;
    let mut tasks_total = 0usize;
    let mut tasks_completed = 0usize;
    let mut progress_sum = 0u32;

    for project in &projects {
        match project.status {
            ProjectStatus::AVenir => a_venir += 1,
            ProjectStatus::EnCours => en_cours += 1,
            ProjectStatus::EnRetard => en_retard += 1,
            ProjectStatus::Termine => termine += 1,
        }
        match project.kind {
            ProjectKind::Wedding(_) => weddings += 1,
            ProjectKind::Studio(_) => studio += 1,
            ProjectKind::Corporate(_) => corporate += 1,
        }
        tasks_total += project.tasks().len();
        tasks_completed += project
            .tasks()
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        progress_sum += u32::from(project.progress());
    }

    let average_progress = if projects.is_empty() {
        0
    } else {
        progress_sum / projects.len() as u32
    };

    Json(serde_json::json!({
        "data": {
            "total_projects": projects.len(),
            "by_status": {
                "a_venir": a_venir,
                "en_cours": en_cours,
                "en_retard": en_retard,
                "termine": termine,
            },
            "by_type": {
                "wedding": weddings,
                "studio": studio,
                "corporate": corporate,
            },
            "tasks": {
                "total": tasks_total,
                "completed": tasks_completed,
            },
            "average_progress": average_progress,
            "active_season": state.seasons.active(),
            "unread_notifications": state.notifications.unread_count(),
        }
    }))
}
