//! Application layer services implementing business logic.
//!
//! Services consume repository traits from the domain layer and provide a
//! clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::analytics_service::AnalyticsService`] - the financial
//!   query & aggregation layer behind every dashboard view
//! - [`services::auth_service::AuthService`] - credentials and sessions

pub mod services;
