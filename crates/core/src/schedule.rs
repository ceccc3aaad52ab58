//! Schedule generator: expands a formula into a concrete dated task list.
//!
//! For each template line, produces one task due `anchor + day_offset`
//! calendar days, pending, assigned to the template's default assignee.
//! Output order is template order; offsets are never re-sorted, even when a
//! template author wrote them out of date order.

use chrono::{Days, NaiveDate};

use crate::formula::FormulaTemplate;
use crate::task::{Task, TaskStatus};
use crate::types::ProjectId;

/// Expand `template` for the project anchored at `anchor`.
///
/// Task ids are `"{project_id}-task-{index}"`: unique within the project and
/// across projects, since project ids are store-assigned and never reused.
pub fn generate(template: &FormulaTemplate, anchor: NaiveDate, project_id: ProjectId) -> Vec<Task> {
    template
        .tasks
        .iter()
        .enumerate()
        .map(|(index, line)| {
            // Offsets are validated non-negative at catalog level.
            let due_date = anchor
                .checked_add_days(Days::new(line.day_offset as u64))
                .unwrap_or(anchor);
            Task {
                id: format!("{project_id}-task-{index}"),
                title: line.title.clone(),
                due_date,
                status: TaskStatus::Pending,
                completed_date: None,
                assigned_to: vec![line.default_assignee.clone()],
                priority: line.priority.unwrap_or_default(),
                estimated_time: 0,
                actual_time: 0,
                tags: Vec::new(),
                dependencies: Vec::new(),
                comments: Vec::new(),
                sub_tasks: Vec::new(),
            }
        })
        .collect()
}
