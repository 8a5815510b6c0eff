//! API route configuration.
//!
//! Everything except the auth endpoints requires a Bearer session token via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    compare_handler, companies_in_sector_handler, comparison_handler, hidden_gems_handler,
    history_handler, login_handler, logout_handler, profile_handler, register_handler,
    sector_health_handler, sector_list_handler, sector_trends_handler, snapshot_handler,
    year_range_handler,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Routes protected by Bearer session authentication.
///
/// # Endpoints
///
/// - `GET /years`                          - available year range
/// - `GET /sectors`                        - the fixed sector table
/// - `GET /sectors/{sector}/companies`     - companies in a sector
/// - `GET /sectors/{sector}/trends`        - yearly profit/equity averages
/// - `GET /sectors/{sector}/health`        - yearly ROA/ROI/solvency averages
/// - `GET /sectors/{sector}/hidden-gems`   - the hidden-gems screen
/// - `GET /companies/compare`              - latest-per-company comparison
/// - `GET /companies/{cvr}`                - company snapshot
/// - `GET /companies/{cvr}/history`        - company yearly history
/// - `GET /companies/{cvr}/comparison`     - company vs sector averages
/// - `GET /auth/me`                        - authenticated profile
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/years", get(year_range_handler))
        .route("/sectors", get(sector_list_handler))
        .route(
            "/sectors/{sector}/companies",
            get(companies_in_sector_handler),
        )
        .route("/sectors/{sector}/trends", get(sector_trends_handler))
        .route("/sectors/{sector}/health", get(sector_health_handler))
        .route("/sectors/{sector}/hidden-gems", get(hidden_gems_handler))
        .route("/companies/compare", get(compare_handler))
        .route("/companies/{cvr}", get(snapshot_handler))
        .route("/companies/{cvr}/history", get(history_handler))
        .route("/companies/{cvr}/comparison", get(comparison_handler))
        .route("/auth/me", get(profile_handler))
}

/// Public auth routes.
///
/// # Endpoints
///
/// - `POST /auth/register`
/// - `POST /auth/login`
/// - `POST /auth/logout`
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/logout", post(logout_handler))
}
