//! Route definitions for the read-only `/staff` catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::staff;
use crate::state::AppState;

/// Routes mounted at `/staff`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(staff::list))
}
