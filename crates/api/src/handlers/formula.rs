//! Handlers for the read-only `/formulas` catalog.

use axum::extract::{Path, State};
use axum::Json;

use marvelous_core::formula::FormulaTemplate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/formulas
pub async fn list(State(state): State<AppState>) -> Json<Vec<FormulaTemplate>> {
    Json(state.projects.catalog().all().to_vec())
}

/// GET /api/v1/formulas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<FormulaTemplate>> {
    let formula = state
        .projects
        .catalog()
        .find(&id)
        .ok_or_else(|| AppError::not_found("Formula", &id))?;
    Ok(Json(formula.clone()))
}
