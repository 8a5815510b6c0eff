//! # CVR Insight
//!
//! A business-intelligence dashboard over Danish company registry (CVR)
//! and financial statement data, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Analytics and auth orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML dashboard pages
//!
//! ## Features
//!
//! - Sector-level trend, health, and hidden-gem analytics
//! - Per-company financial history and sector benchmarking
//! - Username/password accounts with signed session tokens
//! - Year-window filtering across every aggregation
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export DATABASE_URL="sqlite:cvr_database.db"
//! export SESSION_SIGNING_SECRET="change-me"
//!
//! # Start the service (migrations run on boot)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AnalyticsService, AuthService};
    pub use crate::domain::entities::{Company, NewUser, User};
    pub use crate::domain::session::{SessionEvent, SessionState};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
