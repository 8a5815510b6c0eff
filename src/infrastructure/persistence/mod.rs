//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits over
//! `sqlx::SqlitePool` using the runtime query API.
//!
//! # Repositories
//!
//! - [`SqliteFinancialRepository`] - financial aggregation queries
//! - [`SqliteCompanyRepository`] - company registry lookups
//! - [`SqliteUserRepository`] - user credential storage

pub mod sqlite_company_repository;
pub mod sqlite_financial_repository;
pub mod sqlite_user_repository;

pub use sqlite_company_repository::SqliteCompanyRepository;
pub use sqlite_financial_repository::SqliteFinancialRepository;
pub use sqlite_user_repository::SqliteUserRepository;
