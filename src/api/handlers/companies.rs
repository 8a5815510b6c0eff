//! Handlers for company-scoped queries.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::json;

use crate::api::dto::companies::{CompareParams, ComparisonParams};
use crate::api::dto::filters::YearFilterParams;
use crate::api::handlers::{resolve_sector, resolve_span};
use crate::application::services::analytics_service::{CompanySnapshot, SectorComparison};
use crate::domain::repositories::{CompanyLatest, HistoryPoint};
use crate::error::AppError;
use crate::state::AppState;

/// Company snapshot: registry attributes plus latest financials.
///
/// # Endpoint
///
/// `GET /api/companies/{cvr}`
///
/// 404 for an unknown CVR; a known company with no financials answers with
/// `latest: null` and the UI renders placeholders per field.
pub async fn snapshot_handler(
    State(state): State<AppState>,
    Path(cvr): Path<i64>,
) -> Result<Json<CompanySnapshot>, AppError> {
    let snapshot = state.analytics_service.company_snapshot(cvr).await?;
    Ok(Json(snapshot))
}

/// One company's financial history, ascending by year.
///
/// # Endpoint
///
/// `GET /api/companies/{cvr}/history?from=&to=`
pub async fn history_handler(
    State(state): State<AppState>,
    Path(cvr): Path<i64>,
    Query(params): Query<YearFilterParams>,
) -> Result<Json<Vec<HistoryPoint>>, AppError> {
    let Some(span) = resolve_span(&state, &params).await? else {
        return Ok(Json(Vec::new()));
    };

    let history = state.analytics_service.company_history(cvr, span).await?;
    Ok(Json(history))
}

/// Company-vs-sector comparison, inner-joined on year.
///
/// # Endpoint
///
/// `GET /api/companies/{cvr}/comparison?sector=&from=&to=`
///
/// `sector` (code or name) defaults to the company's own sector. Years
/// present in only one of the two series are dropped.
pub async fn comparison_handler(
    State(state): State<AppState>,
    Path(cvr): Path<i64>,
    Query(params): Query<ComparisonParams>,
) -> Result<Json<SectorComparison>, AppError> {
    let sector_code = params
        .sector
        .as_deref()
        .map(resolve_sector)
        .transpose()?;

    let Some(span) = resolve_span(&state, &params.year_filter()).await? else {
        // Still a company lookup: an unknown CVR stays a 404 even when the
        // store has no financials to compare against.
        let snapshot = state.analytics_service.company_snapshot(cvr).await?;
        return Ok(Json(SectorComparison {
            cvr,
            sector_code: sector_code
                .or(snapshot.company.industry_sector)
                .unwrap_or_default(),
            points: Vec::new(),
        }));
    };

    let comparison = state
        .analytics_service
        .sector_comparison(cvr, sector_code.as_deref(), span)
        .await?;
    Ok(Json(comparison))
}

/// Multi-company comparison: latest-in-range row per requested company.
///
/// # Endpoint
///
/// `GET /api/companies/compare?cvr=101,102&from=&to=`
///
/// Returns at most one row per id; ids without records in range are absent.
pub async fn compare_handler(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> Result<Json<Vec<CompanyLatest>>, AppError> {
    let cvrs = params
        .cvr_list()
        .map_err(|e| AppError::bad_request(e, json!({ "cvr": params.cvr })))?;

    let Some(span) = resolve_span(&state, &params.year_filter()).await? else {
        return Ok(Json(Vec::new()));
    };

    let rows = state
        .analytics_service
        .multi_company_snapshot(&cvrs, span)
        .await?;
    Ok(Json(rows))
}
