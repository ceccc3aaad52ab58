//! Handlers for the `/seasons` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use marvelous_store::Season;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /seasons`.
#[derive(Debug, Deserialize)]
pub struct CreateSeason {
    pub name: String,
}

/// Body for `PUT /seasons/active`. A `null` (or absent) `season_id`
/// clears the active season.
#[derive(Debug, Deserialize)]
pub struct SetActiveSeason {
    #[serde(default)]
    pub season_id: Option<String>,
}

/// GET /api/v1/seasons
pub async fn list(State(state): State<AppState>) -> Json<Vec<Season>> {
    Json(state.seasons.list())
}

/// POST /api/v1/seasons
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSeason>,
) -> (StatusCode, Json<Season>) {
    let season = state.seasons.create(input.name);
    (StatusCode::CREATED, Json(season))
}

/// GET /api/v1/seasons/active
///
/// Returns `{ "data": null }` when no season is active.
pub async fn active(State(state): State<AppState>) -> Json<DataResponse<Option<Season>>> {
    Json(DataResponse {
        data: state.seasons.active(),
    })
}

/// PUT /api/v1/seasons/active
pub async fn set_active(
    State(state): State<AppState>,
    Json(input): Json<SetActiveSeason>,
) -> AppResult<StatusCode> {
    if state.seasons.set_active(input.season_id.as_deref()) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(
            "Season",
            input.season_id.unwrap_or_default(),
        ))
    }
}
