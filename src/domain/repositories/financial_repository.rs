//! Repository trait for financial aggregation queries.
//!
//! Every operation is a stateless, idempotent read. Averages are computed by
//! SQL `AVG`, which excludes nulls from both the sum and the count. A span
//! with `start > end` matches no rows and yields an empty sequence, not an
//! error. Years with no matching records are omitted, never zero-filled.

use crate::error::AppError;
use async_trait::async_trait;
use serde::Serialize;

/// Inclusive year interval used to scope every aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSpan {
    pub start: i64,
    pub end: i64,
}

impl YearSpan {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// Minimum and maximum year present in the `financials` table.
#[derive(Debug, Clone, Copy, Serialize, sqlx::FromRow)]
pub struct YearRange {
    pub min_year: i64,
    pub max_year: i64,
}

/// Per-year sector averages of profit/loss and equity.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct YearlyTrend {
    pub year: i64,
    pub avg_profit_loss: Option<f64>,
    pub avg_equity: Option<f64>,
}

/// Per-year sector averages of the three health ratios.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct YearlyHealth {
    pub year: i64,
    pub avg_return_on_assets: Option<f64>,
    pub avg_return_on_investment: Option<f64>,
    pub avg_solvency_ratio: Option<f64>,
}

/// One year of a single company's history, no aggregation.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct HistoryPoint {
    pub year: i64,
    pub profit_loss: Option<f64>,
    pub equity: Option<f64>,
    pub return_on_assets: Option<f64>,
}

/// Per-year sector-wide averages aligned with [`HistoryPoint`] for
/// company-vs-sector comparison.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SectorAverages {
    pub year: i64,
    pub avg_profit_loss: Option<f64>,
    pub avg_equity: Option<f64>,
    pub avg_return_on_assets: Option<f64>,
}

/// A company's most recent financial row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LatestFinancials {
    pub year: i64,
    pub profit_loss: Option<f64>,
    pub equity: Option<f64>,
    pub return_on_assets: Option<f64>,
    pub solvency_ratio: Option<f64>,
}

/// Latest-in-range row for one company in a multi-company comparison.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CompanyLatest {
    pub cvr: i64,
    pub year: i64,
    pub profit_loss: Option<f64>,
    pub equity: Option<f64>,
    pub return_on_assets: Option<f64>,
}

/// A hidden-gem screen hit: sustained history, solvent balance sheet,
/// most recent result a loss.
///
/// `profit_loss` and `solvency_ratio` are non-optional because the screen's
/// strict inequalities already exclude null values in SQL.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct HiddenGem {
    pub cvr: i64,
    pub name: Option<String>,
    pub latest_year: i64,
    pub profit_loss: f64,
    pub equity: Option<f64>,
    pub solvency_ratio: f64,
}

/// Repository interface for the financial query & aggregation layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteFinancialRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FinancialRepository: Send + Sync {
    /// Minimum and maximum year across all financial records.
    ///
    /// Returns `Ok(None)` when the `financials` table is empty; the caller
    /// must handle the absence of any year range.
    async fn year_range(&self) -> Result<Option<YearRange>, AppError>;

    /// Average profit/loss and equity per year for a sector, grouped by year,
    /// ordered ascending. Years with no matching companies are omitted.
    async fn sector_trends(
        &self,
        sector_code: &str,
        span: YearSpan,
    ) -> Result<Vec<YearlyTrend>, AppError>;

    /// Average ROA, ROI and solvency ratio per year for a sector, same
    /// grouping and ordering as [`Self::sector_trends`].
    async fn sector_health(
        &self,
        sector_code: &str,
        span: YearSpan,
    ) -> Result<Vec<YearlyHealth>, AppError>;

    /// One company's records in the span, ascending by year.
    async fn company_history(
        &self,
        cvr: i64,
        span: YearSpan,
    ) -> Result<Vec<HistoryPoint>, AppError>;

    /// The single most recent financial row for a company, across all years.
    async fn latest_for_company(&self, cvr: i64) -> Result<Option<LatestFinancials>, AppError>;

    /// Sector-wide yearly averages used as the comparison baseline.
    async fn sector_yearly_averages(
        &self,
        sector_code: &str,
        span: YearSpan,
    ) -> Result<Vec<SectorAverages>, AppError>;

    /// For each given CVR, only its maximum year inside the span
    /// (latest-per-company, not a full history dump). At most one row per id.
    async fn latest_per_company(
        &self,
        cvrs: &[i64],
        span: YearSpan,
    ) -> Result<Vec<CompanyLatest>, AppError>;

    /// The hidden-gems screen: companies in the sector with at least five
    /// distinct years of records in the span whose latest-in-range row has
    /// `solvency_ratio > 0.2` and `profit_loss < 0`, ordered ascending by
    /// profit/loss (most negative first).
    async fn hidden_gems(
        &self,
        sector_code: &str,
        span: YearSpan,
    ) -> Result<Vec<HiddenGem>, AppError>;
}
