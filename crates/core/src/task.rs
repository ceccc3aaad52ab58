//! Task model and per-task state machine.
//!
//! A task belongs to exactly one project and carries its own comments,
//! sub-tasks, tags and time tracking. Status transitions are unrestricted
//! (any state is reachable from any other); the only side effect is the
//! `completed_date` stamp, set on entering `completed` and cleared on
//! leaving it.
//!
//! Status changes do NOT recompute the owning project's derived status;
//! that is the caller's job (see [`crate::status`]).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Lifecycle state of a task or sub-task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

/// Task priority. Defaults to medium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A comment on a task. Mentions are extracted from `@handle` tokens in the
/// text at creation time and stored raw, without checking that they resolve
/// to real staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: String,
    pub created_at: Timestamp,
    pub mentions: Vec<String>,
}

/// A sub-task. Its status is independent of the parent task's status; there
/// is no propagation in either direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubTask {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub assigned_to: Vec<String>,
    /// Estimated time in minutes.
    pub estimated_time: u32,
    /// Actual time spent in minutes.
    pub actual_time: u32,
}

/// A dated checklist task owned by a single project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the owning project (`"{project_id}-task-{index}"`).
    pub id: String,
    pub title: String,
    /// Calendar-day precision; no time-of-day component.
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    /// Set only while the task is completed.
    pub completed_date: Option<Timestamp>,
    pub assigned_to: Vec<String>,
    pub priority: Priority,
    /// Estimated time in minutes.
    pub estimated_time: u32,
    /// Actual time spent in minutes.
    pub actual_time: u32,
    pub tags: Vec<String>,
    /// Advisory only: referenced task ids are not validated and completion
    /// is never blocked on them.
    pub dependencies: Vec<String>,
    pub comments: Vec<Comment>,
    pub sub_tasks: Vec<SubTask>,
}

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[\w-]+").expect("mention regex is valid"));

/// Extract `@handle` mentions from free text, without the leading `@`.
pub fn extract_mentions(text: &str) -> Vec<String> {
    MENTION_RE
        .find_iter(text)
        .map(|m| m.as_str()[1..].to_string())
        .collect()
}

impl Task {
    /// Change the task's status.
    ///
    /// Entering `completed` stamps `completed_date = now`; any transition
    /// out of `completed` clears it. All transitions are allowed.
    pub fn set_status(&mut self, status: TaskStatus, now: Timestamp) {
        self.status = status;
        self.completed_date = match status {
            TaskStatus::Completed => Some(now),
            _ => None,
        };
    }

    /// Append a comment, extracting mentions from its text.
    pub fn add_comment(
        &mut self,
        id: String,
        text: String,
        author: String,
        now: Timestamp,
    ) -> &Comment {
        let mentions = extract_mentions(&text);
        self.comments.push(Comment {
            id,
            text,
            author,
            created_at: now,
            mentions,
        });
        self.comments.last().expect("comment was just pushed")
    }

    /// Append a sub-task with default state (pending, unassigned, zero time).
    pub fn add_sub_task(&mut self, id: String, title: String) -> &SubTask {
        self.sub_tasks.push(SubTask {
            id,
            title,
            status: TaskStatus::Pending,
            assigned_to: Vec::new(),
            estimated_time: 0,
            actual_time: 0,
        });
        self.sub_tasks.last().expect("sub-task was just pushed")
    }

    /// Add a tag. Tags behave as a set: adding an existing tag is a no-op.
    /// Returns whether the tag was newly added.
    pub fn add_tag(&mut self, tag: String) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Change one sub-task's status. Returns `false` if the id is unknown.
    /// The parent task's status is left untouched.
    pub fn set_sub_task_status(&mut self, sub_task_id: &str, status: TaskStatus) -> bool {
        match self.sub_tasks.iter_mut().find(|s| s.id == sub_task_id) {
            Some(sub) => {
                sub.status = status;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task() -> Task {
        Task {
            id: "1-task-0".into(),
            title: "Envoi photos brutes pour sélection".into(),
            due_date: NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
            status: TaskStatus::Pending,
            completed_date: None,
            assigned_to: vec!["damien".into()],
            priority: Priority::Medium,
            estimated_time: 0,
            actual_time: 0,
            tags: Vec::new(),
            dependencies: Vec::new(),
            comments: Vec::new(),
            sub_tasks: Vec::new(),
        }
    }

    // -- status transitions --

    #[test]
    fn completing_stamps_completed_date() {
        let mut t = task();
        let now = Utc::now();
        t.set_status(TaskStatus::Completed, now);
        assert_eq!(t.status, TaskStatus::Completed);
        assert_eq!(t.completed_date, Some(now));
    }

    #[test]
    fn reopening_clears_completed_date() {
        let mut t = task();
        t.set_status(TaskStatus::Completed, Utc::now());
        t.set_status(TaskStatus::Pending, Utc::now());
        assert_eq!(t.status, TaskStatus::Pending);
        assert_eq!(t.completed_date, None);
    }

    #[test]
    fn any_transition_is_allowed() {
        // No forward-only enforcement: completed -> in_progress is legal.
        let mut t = task();
        t.set_status(TaskStatus::Completed, Utc::now());
        t.set_status(TaskStatus::InProgress, Utc::now());
        assert_eq!(t.status, TaskStatus::InProgress);
        assert_eq!(t.completed_date, None);
    }

    // -- mentions --

    #[test]
    fn extracts_mentions_from_comment_text() {
        assert_eq!(
            extract_mentions("Check with @damien and @luc"),
            vec!["damien".to_string(), "luc".to_string()]
        );
    }

    #[test]
    fn mentions_allow_hyphenated_handles() {
        assert_eq!(
            extract_mentions("ping @jean-marc"),
            vec!["jean-marc".to_string()]
        );
    }

    #[test]
    fn text_without_mentions_yields_empty_list() {
        assert!(extract_mentions("rien à signaler").is_empty());
    }

    #[test]
    fn add_comment_stores_extracted_mentions() {
        let mut t = task();
        let c = t.add_comment(
            "c1".into(),
            "Relance @marvel".into(),
            "damien".into(),
            Utc::now(),
        );
        assert_eq!(c.mentions, vec!["marvel".to_string()]);
        assert_eq!(t.comments.len(), 1);
    }

    // -- sub-tasks --

    #[test]
    fn new_sub_task_has_default_state() {
        let mut t = task();
        let s = t.add_sub_task("s1".into(), "Trier les raw".into());
        assert_eq!(s.status, TaskStatus::Pending);
        assert!(s.assigned_to.is_empty());
        assert_eq!(s.estimated_time, 0);
        assert_eq!(s.actual_time, 0);
    }

    #[test]
    fn sub_task_status_does_not_touch_parent() {
        let mut t = task();
        t.add_sub_task("s1".into(), "Trier les raw".into());
        assert!(t.set_sub_task_status("s1", TaskStatus::Completed));
        assert_eq!(t.status, TaskStatus::Pending);
        assert_eq!(t.sub_tasks[0].status, TaskStatus::Completed);
    }

    #[test]
    fn unknown_sub_task_id_is_reported() {
        let mut t = task();
        assert!(!t.set_sub_task_status("missing", TaskStatus::Completed));
    }

    // -- tags --

    #[test]
    fn duplicate_tag_is_not_added_twice() {
        let mut t = task();
        assert!(t.add_tag("urgent".into()));
        assert!(!t.add_tag("urgent".into()));
        assert_eq!(t.tags, vec!["urgent".to_string()]);
    }
}
