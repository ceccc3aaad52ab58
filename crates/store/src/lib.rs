//! In-memory repository layer for the studio backend.
//!
//! Owns the project collection, seasons and notifications behind explicit
//! store objects; callers never touch ambient state. All mutations are
//! synchronous, apply as atomic whole-record replacements under a single
//! lock, and publish a [`marvelous_events::StudioEvent`] once applied.
//!
//! Concurrent callers race with last-write-wins semantics on the merged
//! field set; there is no optimistic versioning.

pub mod notifications;
pub mod projects;
pub mod seasons;

pub use notifications::{Notification, NotificationKind, NotificationStore};
pub use projects::{
    CreateCorporate, CreateProject, CreateProjectKind, CreateStudio, CreateWedding, ProjectStore,
    UpdateProject, UpdateTask,
};
pub use seasons::{Season, SeasonStore};
