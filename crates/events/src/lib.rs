//! In-process event infrastructure for the studio backend.
//!
//! - [`EventBus`] — publish/subscribe hub backed by `tokio::sync::broadcast`.
//! - [`StudioEvent`] — the canonical domain event envelope emitted by the
//!   store on every mutation; consumed by the notification router.

pub mod bus;

pub use bus::{event_types, EventBus, StudioEvent};
