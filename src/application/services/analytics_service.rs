//! The financial query & aggregation layer.
//!
//! Translates filter parameters (sector, year range, company ids) into the
//! ordered result sets the dashboard renders. Every operation is a stateless
//! read; calling one twice against an unchanged store yields identical rows.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use crate::domain::entities::{Company, CompanySummary};
use crate::domain::repositories::{
    CompanyLatest, CompanyRepository, FinancialRepository, HiddenGem, HistoryPoint,
    LatestFinancials, YearRange, YearSpan, YearlyHealth, YearlyTrend,
};
use crate::error::AppError;

/// Registry attributes plus the most recent financial row for one company.
///
/// `latest` being `None` means "found but no financials", which is distinct
/// from the company itself being unknown (a [`AppError::NotFound`]). Each
/// missing field inside `latest` is rendered with a placeholder downstream.
#[derive(Debug, Clone, Serialize)]
pub struct CompanySnapshot {
    #[serde(flatten)]
    pub company: Company,
    pub sector_name: &'static str,
    pub latest: Option<LatestFinancials>,
}

/// One aligned year of a company-vs-sector comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonPoint {
    pub year: i64,
    pub company_profit_loss: Option<f64>,
    pub company_equity: Option<f64>,
    pub company_return_on_assets: Option<f64>,
    pub sector_avg_profit_loss: Option<f64>,
    pub sector_avg_equity: Option<f64>,
    pub sector_avg_return_on_assets: Option<f64>,
}

/// Company series joined with sector-wide averages on year.
#[derive(Debug, Clone, Serialize)]
pub struct SectorComparison {
    pub cvr: i64,
    pub sector_code: String,
    pub points: Vec<ComparisonPoint>,
}

/// Service exposing the dashboard's aggregation operations over the
/// financial and company repositories.
pub struct AnalyticsService<F: FinancialRepository, C: CompanyRepository> {
    financials: Arc<F>,
    companies: Arc<C>,
}

impl<F: FinancialRepository, C: CompanyRepository> AnalyticsService<F, C> {
    pub fn new(financials: Arc<F>, companies: Arc<C>) -> Self {
        Self {
            financials,
            companies,
        }
    }

    /// Minimum and maximum year across all financial records, `None` when
    /// the store holds no financials at all.
    pub async fn year_range(&self) -> Result<Option<YearRange>, AppError> {
        self.financials.year_range().await
    }

    /// `(cvr, name)` pairs for one sector, ascending by name.
    pub async fn companies_in_sector(
        &self,
        sector_code: &str,
    ) -> Result<Vec<CompanySummary>, AppError> {
        self.companies.companies_in_sector(sector_code).await
    }

    /// Average profit/loss and equity per year for a sector. Sparse year
    /// sequences are valid output; absent years are omitted, not zero-filled.
    pub async fn sector_trends(
        &self,
        sector_code: &str,
        span: YearSpan,
    ) -> Result<Vec<YearlyTrend>, AppError> {
        self.financials.sector_trends(sector_code, span).await
    }

    /// Average ROA, ROI and solvency ratio per year for a sector.
    pub async fn sector_health(
        &self,
        sector_code: &str,
        span: YearSpan,
    ) -> Result<Vec<YearlyHealth>, AppError> {
        self.financials.sector_health(sector_code, span).await
    }

    /// One company's yearly records within the span, ascending by year.
    pub async fn company_history(
        &self,
        cvr: i64,
        span: YearSpan,
    ) -> Result<Vec<HistoryPoint>, AppError> {
        self.financials.company_history(cvr, span).await
    }

    /// Static company attributes plus its most recent financial row.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`] when the CVR is not in the registry. A company
    /// with no financials is still `Ok`, with `latest: None`.
    pub async fn company_snapshot(&self, cvr: i64) -> Result<CompanySnapshot, AppError> {
        let company = self
            .companies
            .find_by_cvr(cvr)
            .await?
            .ok_or_else(|| AppError::not_found("Company not found", json!({ "cvr": cvr })))?;

        let latest = self.financials.latest_for_company(cvr).await?;
        let sector_name = company.sector_name();

        Ok(CompanySnapshot {
            company,
            sector_name,
            latest,
        })
    }

    /// Company series vs sector-wide yearly averages, inner-joined on year.
    ///
    /// Years present in only one of the two series are dropped. That is the
    /// contract, not an accident: a comparison point is only meaningful when
    /// both sides reported for that year.
    ///
    /// When `sector_code` is `None` the company's own sector is used.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`] for an unknown CVR; [`AppError::Validation`]
    /// when no sector code is given and the company has none on record.
    pub async fn sector_comparison(
        &self,
        cvr: i64,
        sector_code: Option<&str>,
        span: YearSpan,
    ) -> Result<SectorComparison, AppError> {
        let company = self
            .companies
            .find_by_cvr(cvr)
            .await?
            .ok_or_else(|| AppError::not_found("Company not found", json!({ "cvr": cvr })))?;

        let sector_code = match sector_code {
            Some(code) => code.to_string(),
            None => company.industry_sector.clone().ok_or_else(|| {
                AppError::bad_request(
                    "Company has no sector on record; pass one explicitly",
                    json!({ "cvr": cvr }),
                )
            })?,
        };

        let company_series = self.financials.company_history(cvr, span).await?;
        let sector_series = self
            .financials
            .sector_yearly_averages(&sector_code, span)
            .await?;

        // Both inputs are ordered ascending by year, so a single merge pass
        // keeps the inner-join output ordered as well.
        let mut points = Vec::new();
        let mut sector_iter = sector_series.into_iter().peekable();
        for own in company_series {
            while sector_iter.peek().is_some_and(|s| s.year < own.year) {
                sector_iter.next();
            }
            if let Some(avg) = sector_iter.peek() {
                if avg.year == own.year {
                    points.push(ComparisonPoint {
                        year: own.year,
                        company_profit_loss: own.profit_loss,
                        company_equity: own.equity,
                        company_return_on_assets: own.return_on_assets,
                        sector_avg_profit_loss: avg.avg_profit_loss,
                        sector_avg_equity: avg.avg_equity,
                        sector_avg_return_on_assets: avg.avg_return_on_assets,
                    });
                }
            }
        }

        Ok(SectorComparison {
            cvr,
            sector_code,
            points,
        })
    }

    /// For each requested company, only its most recent year inside the
    /// span. Returns at most one row per id; ids without records in range
    /// produce no row.
    pub async fn multi_company_snapshot(
        &self,
        cvrs: &[i64],
        span: YearSpan,
    ) -> Result<Vec<CompanyLatest>, AppError> {
        if cvrs.is_empty() {
            return Ok(Vec::new());
        }
        self.financials.latest_per_company(cvrs, span).await
    }

    /// The compound hidden-gems screen: sustained history, solvent balance
    /// sheet, latest-in-range result a loss.
    pub async fn hidden_gems(
        &self,
        sector_code: &str,
        span: YearSpan,
    ) -> Result<Vec<HiddenGem>, AppError> {
        self.financials.hidden_gems(sector_code, span).await
    }
}
