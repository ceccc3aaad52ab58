//! Handlers for the read-only `/staff` catalog.

use axum::Json;

use marvelous_core::staff::{Staff, STAFF};

/// GET /api/v1/staff
pub async fn list() -> Json<&'static [Staff]> {
    Json(STAFF)
}
