//! Route definitions for the read-only `/formulas` catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::formula;
use crate::state::AppState;

/// Routes mounted at `/formulas`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(formula::list))
        .route("/{id}", get(formula::get_by_id))
}
