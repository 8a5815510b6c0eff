//! Business logic services for the application layer.

pub mod analytics_service;
pub mod auth_service;

pub use analytics_service::AnalyticsService;
pub use auth_service::AuthService;
