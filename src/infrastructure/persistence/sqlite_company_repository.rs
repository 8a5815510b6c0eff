//! SQLite implementation of the company registry repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Company, CompanySummary};
use crate::domain::repositories::CompanyRepository;
use crate::error::AppError;

/// Read-only SQLite repository for the `company` table.
pub struct SqliteCompanyRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCompanyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for SqliteCompanyRepository {
    async fn companies_in_sector(
        &self,
        sector_code: &str,
    ) -> Result<Vec<CompanySummary>, AppError> {
        let rows = sqlx::query_as::<_, CompanySummary>(
            r#"
            SELECT cvr_number, name
            FROM company
            WHERE industry_sector = ?
            ORDER BY name
            "#,
        )
        .bind(sector_code)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_cvr(&self, cvr: i64) -> Result<Option<Company>, AppError> {
        let row = sqlx::query_as::<_, Company>(
            r#"
            SELECT cvr_number, name, industry_sector, email, phone_number,
                   establishment_date, purpose
            FROM company
            WHERE cvr_number = ?
            "#,
        )
        .bind(cvr)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }
}
