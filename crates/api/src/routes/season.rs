//! Route definitions for the `/seasons` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::season;
use crate::state::AppState;

/// Routes mounted at `/seasons`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(season::list).post(season::create))
        .route("/active", get(season::active).put(season::set_active))
}
