//! SQLite implementation of the financial aggregation repository.

use async_trait::async_trait;
use sqlx::{QueryBuilder, SqlitePool};
use std::sync::Arc;

use crate::domain::repositories::{
    CompanyLatest, FinancialRepository, HiddenGem, HistoryPoint, LatestFinancials, SectorAverages,
    YearRange, YearSpan, YearlyHealth, YearlyTrend,
};
use crate::error::AppError;

/// SQLite repository for the `financials` table.
///
/// All queries are parameterized; the variable-length CVR lists of the
/// multi-company comparison go through [`QueryBuilder`] placeholders, never
/// string interpolation.
pub struct SqliteFinancialRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteFinancialRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FinancialRepository for SqliteFinancialRepository {
    async fn year_range(&self) -> Result<Option<YearRange>, AppError> {
        // MIN/MAX over an empty table yield a single all-NULL row.
        let row: (Option<i64>, Option<i64>) =
            sqlx::query_as("SELECT MIN(year), MAX(year) FROM financials")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(match row {
            (Some(min_year), Some(max_year)) => Some(YearRange { min_year, max_year }),
            _ => None,
        })
    }

    async fn sector_trends(
        &self,
        sector_code: &str,
        span: YearSpan,
    ) -> Result<Vec<YearlyTrend>, AppError> {
        let rows = sqlx::query_as::<_, YearlyTrend>(
            r#"
            SELECT f.year,
                   AVG(f.profit_loss) AS avg_profit_loss,
                   AVG(f.equity) AS avg_equity
            FROM financials f
            JOIN company c ON f.cvr = c.cvr_number
            WHERE c.industry_sector = ? AND f.year BETWEEN ? AND ?
            GROUP BY f.year
            ORDER BY f.year
            "#,
        )
        .bind(sector_code)
        .bind(span.start)
        .bind(span.end)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn sector_health(
        &self,
        sector_code: &str,
        span: YearSpan,
    ) -> Result<Vec<YearlyHealth>, AppError> {
        let rows = sqlx::query_as::<_, YearlyHealth>(
            r#"
            SELECT f.year,
                   AVG(f.return_on_assets) AS avg_return_on_assets,
                   AVG(f.return_on_investment) AS avg_return_on_investment,
                   AVG(f.solvency_ratio) AS avg_solvency_ratio
            FROM financials f
            JOIN company c ON f.cvr = c.cvr_number
            WHERE c.industry_sector = ? AND f.year BETWEEN ? AND ?
            GROUP BY f.year
            ORDER BY f.year
            "#,
        )
        .bind(sector_code)
        .bind(span.start)
        .bind(span.end)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn company_history(
        &self,
        cvr: i64,
        span: YearSpan,
    ) -> Result<Vec<HistoryPoint>, AppError> {
        let rows = sqlx::query_as::<_, HistoryPoint>(
            r#"
            SELECT year, profit_loss, equity, return_on_assets
            FROM financials
            WHERE cvr = ? AND year BETWEEN ? AND ?
            ORDER BY year
            "#,
        )
        .bind(cvr)
        .bind(span.start)
        .bind(span.end)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn latest_for_company(&self, cvr: i64) -> Result<Option<LatestFinancials>, AppError> {
        let row = sqlx::query_as::<_, LatestFinancials>(
            r#"
            SELECT year, profit_loss, equity, return_on_assets, solvency_ratio
            FROM financials
            WHERE cvr = ?
            ORDER BY year DESC
            LIMIT 1
            "#,
        )
        .bind(cvr)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn sector_yearly_averages(
        &self,
        sector_code: &str,
        span: YearSpan,
    ) -> Result<Vec<SectorAverages>, AppError> {
        let rows = sqlx::query_as::<_, SectorAverages>(
            r#"
            SELECT f.year,
                   AVG(f.profit_loss) AS avg_profit_loss,
                   AVG(f.equity) AS avg_equity,
                   AVG(f.return_on_assets) AS avg_return_on_assets
            FROM financials f
            JOIN company c ON f.cvr = c.cvr_number
            WHERE c.industry_sector = ? AND f.year BETWEEN ? AND ?
            GROUP BY f.year
            ORDER BY f.year
            "#,
        )
        .bind(sector_code)
        .bind(span.start)
        .bind(span.end)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn latest_per_company(
        &self,
        cvrs: &[i64],
        span: YearSpan,
    ) -> Result<Vec<CompanyLatest>, AppError> {
        if cvrs.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::new(
            "SELECT f.cvr, f.year, f.profit_loss, f.equity, f.return_on_assets \
             FROM financials f \
             JOIN (SELECT cvr, MAX(year) AS latest_year \
                   FROM financials \
                   WHERE year BETWEEN ",
        );
        query.push_bind(span.start);
        query.push(" AND ");
        query.push_bind(span.end);
        query.push(" AND cvr IN (");
        let mut ids = query.separated(", ");
        for cvr in cvrs {
            ids.push_bind(*cvr);
        }
        query.push(
            ") GROUP BY cvr) latest \
             ON f.cvr = latest.cvr AND f.year = latest.latest_year \
             ORDER BY f.cvr",
        );

        let rows = query
            .build_query_as::<CompanyLatest>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn hidden_gems(
        &self,
        sector_code: &str,
        span: YearSpan,
    ) -> Result<Vec<HiddenGem>, AppError> {
        // The screen evaluates each company's latest-in-range row, so the
        // inner query pins (cvr, latest year) before the threshold filters.
        let rows = sqlx::query_as::<_, HiddenGem>(
            r#"
            SELECT f.cvr,
                   c.name,
                   f.year AS latest_year,
                   f.profit_loss,
                   f.equity,
                   f.solvency_ratio
            FROM financials f
            JOIN company c ON f.cvr = c.cvr_number
            JOIN (
                SELECT f2.cvr AS cvr, MAX(f2.year) AS latest_year
                FROM financials f2
                JOIN company c2 ON f2.cvr = c2.cvr_number
                WHERE c2.industry_sector = ? AND f2.year BETWEEN ? AND ?
                GROUP BY f2.cvr
                HAVING COUNT(DISTINCT f2.year) >= 5
            ) latest ON f.cvr = latest.cvr AND f.year = latest.latest_year
            WHERE f.solvency_ratio > 0.2 AND f.profit_loss < 0
            ORDER BY f.profit_loss
            "#,
        )
        .bind(sector_code)
        .bind(span.start)
        .bind(span.end)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
