//! JSON API handlers.

pub mod auth;
pub mod companies;
pub mod sectors;
pub mod years;

pub use auth::{login_handler, logout_handler, profile_handler, register_handler};
pub use companies::{
    compare_handler, comparison_handler, history_handler, snapshot_handler,
};
pub use sectors::{
    companies_in_sector_handler, hidden_gems_handler, sector_health_handler,
    sector_list_handler, sector_trends_handler,
};
pub use years::year_range_handler;

use serde_json::json;

use crate::api::dto::filters::YearFilterParams;
use crate::domain::repositories::YearSpan;
use crate::domain::sectors as sector_table;
use crate::error::AppError;
use crate::state::AppState;

/// Maps a sector path segment (code or full name) to a code.
///
/// Unknown full names are a 404, per the reverse-mapping contract; unmapped
/// single-letter codes pass through and match nothing.
pub(crate) fn resolve_sector(input: &str) -> Result<String, AppError> {
    sector_table::resolve(input)
        .map_err(|e| AppError::not_found(e.to_string(), json!({ "sector": input })))
}

/// Resolves year filter params against the store's available range.
///
/// `Ok(None)` means a bound is missing and the store is empty: the caller
/// should answer with an empty result set.
pub(crate) async fn resolve_span(
    state: &AppState,
    params: &YearFilterParams,
) -> Result<Option<YearSpan>, AppError> {
    let available = state.analytics_service.year_range().await?;
    Ok(params.resolve(available.as_ref()))
}
