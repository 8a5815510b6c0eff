//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, landing_handler, login_handler};
use axum::{routing::get, Router};

/// Protected dashboard routes requiring an authenticated session cookie.
///
/// # Endpoints
///
/// - `GET /app` - dashboard shell
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/app", get(dashboard_handler))
}

/// Public dashboard routes without authentication.
///
/// # Endpoints
///
/// - `GET /` - landing page
/// - `GET /login` - login/register page
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_handler))
        .route("/login", get(login_handler))
}
