//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the public landing page.
///
/// Renders `templates/landing.html`: the platform pitch and the
/// "Get Started" button that moves the flow to the auth page.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
struct LandingTemplate {}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn landing_handler() -> impl IntoResponse {
    LandingTemplate {}
}
