//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, AuthService};
use crate::infrastructure::persistence::{
    SqliteCompanyRepository, SqliteFinancialRepository, SqliteUserRepository,
};

/// The analytics service wired to the SQLite repositories.
pub type DashboardAnalytics = AnalyticsService<SqliteFinancialRepository, SqliteCompanyRepository>;

/// The auth service wired to the SQLite user repository.
pub type DashboardAuth = AuthService<SqliteUserRepository>;

#[derive(Clone)]
pub struct AppState {
    pub analytics_service: Arc<DashboardAnalytics>,
    pub auth_service: Arc<DashboardAuth>,
}

impl AppState {
    pub fn new(
        analytics_service: Arc<DashboardAnalytics>,
        auth_service: Arc<DashboardAuth>,
    ) -> Self {
        Self {
            analytics_service,
            auth_service,
        }
    }
}
