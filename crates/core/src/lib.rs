//! Marvelous Studio domain core.
//!
//! Pure, synchronous business logic for the studio's delivery pipeline:
//! the formula catalog, the task-schedule generator, the per-task state
//! machine, project status derivation, pricing tables, filtering predicates
//! and export rendering.
//!
//! This crate has zero internal deps and performs no I/O so it can be used
//! by the store/API layer and any future CLI tooling alike. Persistence and
//! transport live in the sibling crates.

pub mod error;
pub mod export;
pub mod formula;
pub mod pricing;
pub mod project;
pub mod schedule;
pub mod search;
pub mod staff;
pub mod status;
pub mod task;
pub mod types;
