//! Login/register page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::domain::sectors::SECTORS;

/// Template for the combined login/register page.
///
/// Renders `templates/login.html` with:
/// - Login form (username, password)
/// - Register form (username, password, sectors of interest), toggled
///   client-side
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    /// Sector names offered by the registration multi-select.
    sectors: &'static [(&'static str, &'static str)],
}

/// Renders the auth page.
///
/// # Endpoint
///
/// `GET /login`
///
/// The forms submit to `/api/auth/login` and `/api/auth/register`; a
/// successful response sets the `session` cookie and the page redirects to
/// the dashboard.
pub async fn login_handler() -> impl IntoResponse {
    LoginTemplate { sectors: &SECTORS }
}
