//! In-app notification inbox.
//!
//! Notifications are pushed by the event router (see the API crate) and
//! kept newest-first. Reading is per-notification or in bulk; deletion is
//! permanent.

use std::sync::RwLock;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use marvelous_core::types::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: Timestamp,
    /// Optional in-app route the notification points at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

pub struct NotificationStore {
    inner: RwLock<Vec<Notification>>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Push a new unread notification to the front of the inbox.
    pub fn push(
        &self,
        title: String,
        message: String,
        kind: NotificationKind,
        link: Option<String>,
    ) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            title,
            message,
            kind,
            read: false,
            created_at: Utc::now(),
            link,
        };
        self.inner
            .write()
            .expect("notification store lock poisoned")
            .insert(0, notification.clone());
        notification
    }

    /// Notifications newest-first, optionally restricted to unread ones.
    pub fn list(&self, unread_only: bool) -> Vec<Notification> {
        self.inner
            .read()
            .expect("notification store lock poisoned")
            .iter()
            .filter(|n| !unread_only || !n.read)
            .cloned()
            .collect()
    }

    /// Mark one notification read. Unknown id is a no-op returning `false`.
    pub fn mark_read(&self, id: &str) -> bool {
        let mut inbox = self.inner.write().expect("notification store lock poisoned");
        match inbox.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    /// Mark every notification read. Returns how many were newly marked.
    pub fn mark_all_read(&self) -> usize {
        let mut inbox = self.inner.write().expect("notification store lock poisoned");
        let mut marked = 0;
        for n in inbox.iter_mut().filter(|n| !n.read) {
            n.read = true;
            marked += 1;
        }
        marked
    }

    /// Delete one notification. Unknown id is a no-op returning `false`.
    pub fn remove(&self, id: &str) -> bool {
        let mut inbox = self.inner.write().expect("notification store lock poisoned");
        let before = inbox.len();
        inbox.retain(|n| n.id != id);
        inbox.len() != before
    }

    pub fn unread_count(&self) -> usize {
        self.inner
            .read()
            .expect("notification store lock poisoned")
            .iter()
            .filter(|n| !n.read)
            .count()
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}
