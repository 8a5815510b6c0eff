//! Repository trait definitions for the domain layer.
//!
//! Traits define the data-access contracts; concrete implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service unit tests.

pub mod company_repository;
pub mod financial_repository;
pub mod user_repository;

pub use company_repository::CompanyRepository;
pub use financial_repository::{
    CompanyLatest, FinancialRepository, HiddenGem, HistoryPoint, LatestFinancials, SectorAverages,
    YearRange, YearSpan, YearlyHealth, YearlyTrend,
};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use company_repository::MockCompanyRepository;
#[cfg(test)]
pub use financial_repository::MockFinancialRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
