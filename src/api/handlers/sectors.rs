//! Handlers for sector-scoped aggregations.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::api::dto::filters::YearFilterParams;
use crate::api::dto::sectors::{SectorInfo, SectorListResponse};
use crate::api::handlers::{resolve_sector, resolve_span};
use crate::domain::entities::CompanySummary;
use crate::domain::repositories::{HiddenGem, YearlyHealth, YearlyTrend};
use crate::domain::sectors::SECTORS;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the fixed sector table.
///
/// # Endpoint
///
/// `GET /api/sectors`
///
/// Selection widgets are populated from this, which is why reverse-mapping
/// a selected name can only fail on a hand-crafted request.
pub async fn sector_list_handler() -> Json<SectorListResponse> {
    Json(SectorListResponse {
        sectors: SECTORS
            .iter()
            .map(|(code, name)| SectorInfo { code, name })
            .collect(),
    })
}

/// Companies registered in a sector, ascending by name.
///
/// # Endpoint
///
/// `GET /api/sectors/{sector}/companies`
///
/// `{sector}` is a one-letter code or a full sector name. No matches is an
/// empty list, not an error.
pub async fn companies_in_sector_handler(
    State(state): State<AppState>,
    Path(sector): Path<String>,
) -> Result<Json<Vec<CompanySummary>>, AppError> {
    let code = resolve_sector(&sector)?;
    let companies = state.analytics_service.companies_in_sector(&code).await?;
    Ok(Json(companies))
}

/// Average profit/loss and equity per year for a sector.
///
/// # Endpoint
///
/// `GET /api/sectors/{sector}/trends?from=&to=`
///
/// Missing bounds default to the store's full year range. Years without
/// records are omitted from the sequence, not zero-filled.
pub async fn sector_trends_handler(
    State(state): State<AppState>,
    Path(sector): Path<String>,
    Query(params): Query<YearFilterParams>,
) -> Result<Json<Vec<YearlyTrend>>, AppError> {
    let code = resolve_sector(&sector)?;
    let Some(span) = resolve_span(&state, &params).await? else {
        return Ok(Json(Vec::new()));
    };

    let trends = state.analytics_service.sector_trends(&code, span).await?;
    Ok(Json(trends))
}

/// Average ROA, ROI and solvency ratio per year for a sector.
///
/// # Endpoint
///
/// `GET /api/sectors/{sector}/health?from=&to=`
pub async fn sector_health_handler(
    State(state): State<AppState>,
    Path(sector): Path<String>,
    Query(params): Query<YearFilterParams>,
) -> Result<Json<Vec<YearlyHealth>>, AppError> {
    let code = resolve_sector(&sector)?;
    let Some(span) = resolve_span(&state, &params).await? else {
        return Ok(Json(Vec::new()));
    };

    let health = state.analytics_service.sector_health(&code, span).await?;
    Ok(Json(health))
}

/// The hidden-gems screen for a sector.
///
/// # Endpoint
///
/// `GET /api/sectors/{sector}/hidden-gems?from=&to=`
///
/// Every returned company has at least five distinct years of records in
/// range, a latest-in-range solvency ratio above 0.2 and a latest-in-range
/// loss; ordered most negative profit first.
pub async fn hidden_gems_handler(
    State(state): State<AppState>,
    Path(sector): Path<String>,
    Query(params): Query<YearFilterParams>,
) -> Result<Json<Vec<HiddenGem>>, AppError> {
    let code = resolve_sector(&sector)?;
    let Some(span) = resolve_span(&state, &params).await? else {
        return Ok(Json(Vec::new()));
    };

    let gems = state.analytics_service.hidden_gems(&code, span).await?;
    Ok(Json(gems))
}
