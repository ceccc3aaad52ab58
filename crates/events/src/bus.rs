//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the central publish/subscribe hub for [`StudioEvent`]s.
//! It is shared via `Arc<EventBus>` across the application; the store
//! publishes, the notification router subscribes.

use chrono::{DateTime, Utc};
use marvelous_core::types::ProjectId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Well-known event type names.
pub mod event_types {
    pub const PROJECT_CREATED: &str = "project.created";
    pub const PROJECT_UPDATED: &str = "project.updated";
    pub const PROJECT_DELETED: &str = "project.deleted";
    pub const PROJECT_STATUS_CHANGED: &str = "project.status_changed";
    pub const TASK_STATUS_CHANGED: &str = "task.status_changed";
    pub const COMMENT_ADDED: &str = "comment.added";
}

/// A domain event emitted by a store mutation.
///
/// Constructed via [`StudioEvent::new`] and enriched with
/// [`with_project`](StudioEvent::with_project) and
/// [`with_payload`](StudioEvent::with_payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioEvent {
    /// Dot-separated event name, e.g. `"project.created"`.
    pub event_type: String,

    /// The project the event concerns, when there is one.
    pub project_id: Option<ProjectId>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl StudioEvent {
    /// Create a new event with only the required `event_type`.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            project_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Attach the source project to the event.
    pub fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Set the JSON payload for the event.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`StudioEvent`].
pub struct EventBus {
    sender: broadcast::Sender<StudioEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed messages are dropped
    /// and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// the core state change has already been applied by then.
    pub fn publish(&self, event: StudioEvent) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Create a new subscription receiving every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<StudioEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
