//! Dashboard shell page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{response::IntoResponse, Extension};

use crate::application::services::auth_service::SessionClaims;
use crate::domain::sectors::SECTORS;

/// Template for the dashboard shell.
///
/// Renders `templates/dashboard.html` with the sector filter pre-populated;
/// the page loads charts and tables via JavaScript from the `/api` endpoints.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    username: String,
    sectors: &'static [(&'static str, &'static str)],
}

/// Renders the dashboard shell for an authenticated session.
///
/// # Endpoint
///
/// `GET /app`
pub async fn dashboard_handler(Extension(claims): Extension<SessionClaims>) -> impl IntoResponse {
    DashboardTemplate {
        username: claims.sub,
        sectors: &SECTORS,
    }
}
