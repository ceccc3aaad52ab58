//! Notification routing infrastructure.
//!
//! The [`NotificationRouter`] subscribes to the event bus and turns domain
//! events into in-app notifications.

pub mod router;

pub use router::NotificationRouter;
