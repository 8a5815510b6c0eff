//! Repository trait for company registry lookups.

use crate::domain::entities::{Company, CompanySummary};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the `company` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCompanyRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Companies whose `industry_sector` equals the given code, sorted
    /// ascending by name. No matches is an empty vec, not an error.
    async fn companies_in_sector(
        &self,
        sector_code: &str,
    ) -> Result<Vec<CompanySummary>, AppError>;

    /// Full registry row for one company, or `None` when the CVR is unknown.
    async fn find_by_cvr(&self, cvr: i64) -> Result<Option<Company>, AppError>;
}
