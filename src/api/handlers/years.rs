//! Handler for the available year range.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// Year bounds available in the store, both `null` when no financial
/// records exist yet.
#[derive(Debug, Serialize)]
pub struct YearRangeResponse {
    pub min_year: Option<i64>,
    pub max_year: Option<i64>,
}

/// Returns the minimum and maximum year across all financial records.
///
/// # Endpoint
///
/// `GET /api/years`
///
/// The dashboard seeds its year inputs from this; an empty store yields
/// nulls the UI must handle, not an error.
pub async fn year_range_handler(
    State(state): State<AppState>,
) -> Result<Json<YearRangeResponse>, AppError> {
    let range = state.analytics_service.year_range().await?;

    Ok(Json(YearRangeResponse {
        min_year: range.map(|r| r.min_year),
        max_year: range.map(|r| r.max_year),
    }))
}
