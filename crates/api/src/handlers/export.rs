//! Handlers for the `/export` resource.

use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use marvelous_core::export;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Export format selector.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

/// Query parameters for `GET /export/projects`.
#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

/// GET /api/v1/export/projects?format=csv|json
///
/// CSV covers wedding projects only (the spreadsheet layout has formula
/// and checklist columns); JSON dumps every project as-is.
pub async fn projects(
    State(state): State<AppState>,
    Query(params): Query<ExportQuery>,
) -> AppResult<Response> {
    let projects = state.projects.list();

    match params.format {
        ExportFormat::Csv => {
            let body = export::weddings_csv(&projects);
            Ok((
                [
                    (CONTENT_TYPE, "text/csv; charset=utf-8"),
                    (
                        CONTENT_DISPOSITION,
                        "attachment; filename=\"projects.csv\"",
                    ),
                ],
                body,
            )
                .into_response())
        }
        ExportFormat::Json => {
            let body = export::projects_json(&projects)
                .map_err(|e| AppError::InternalError(format!("JSON export failed: {e}")))?;
            Ok((
                [
                    (CONTENT_TYPE, "application/json"),
                    (
                        CONTENT_DISPOSITION,
                        "attachment; filename=\"projects.json\"",
                    ),
                ],
                body,
            )
                .into_response())
        }
    }
}
