use std::sync::Arc;

use marvelous_events::EventBus;
use marvelous_store::{NotificationStore, ProjectStore, SeasonStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Project repository.
    pub projects: Arc<ProjectStore>,
    /// Season registry.
    pub seasons: Arc<SeasonStore>,
    /// In-app notification inbox.
    pub notifications: Arc<NotificationStore>,
    /// Centralized event bus for publishing domain events.
    pub event_bus: Arc<EventBus>,
}
