//! Project status derivation.
//!
//! The project-level status is a pure function of the task list and the
//! current instant; it is recomputed by the store after every task-status
//! mutation rather than cached. Completeness takes precedence over
//! lateness: a project whose tasks are all completed is `termine` even if
//! some of them were finished past their due date.

use crate::project::ProjectStatus;
use crate::task::{Task, TaskStatus};
use crate::types::Timestamp;

/// Derive a project's status from its tasks at instant `now`.
///
/// - no tasks            -> `en_cours` (neutral default)
/// - all completed       -> `termine`
/// - any open task whose due date is strictly past -> `en_retard`
/// - otherwise           -> `en_cours`
///
/// Due dates have calendar-day precision; a task is late once `now` has
/// passed midnight UTC of its due date.
pub fn derive_status(tasks: &[Task], now: Timestamp) -> ProjectStatus {
    if tasks.is_empty() {
        return ProjectStatus::EnCours;
    }

    if tasks.iter().all(|t| t.status == TaskStatus::Completed) {
        return ProjectStatus::Termine;
    }

    let overdue = tasks.iter().any(|t| {
        t.status != TaskStatus::Completed
            && t.due_date
                .and_hms_opt(0, 0, 0)
                .map(|midnight| midnight.and_utc() < now)
                .unwrap_or(false)
    });

    if overdue {
        ProjectStatus::EnRetard
    } else {
        ProjectStatus::EnCours
    }
}
