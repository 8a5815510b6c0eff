//! Cookie-based session middleware for the web dashboard.

use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;

/// Authenticates dashboard page requests using the `session` cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: session=<signed token>
/// ```
///
/// Unlike the API middleware, which answers `401 Unauthorized`, failures
/// here redirect the browser to the login page.
///
/// On success the verified claims are inserted into request extensions so
/// page handlers can greet the user by name.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let token = req
        .headers()
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some("session"), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        });

    let Some(token) = token else {
        return Err(Redirect::to("/dashboard/login"));
    };

    match st.auth_service.verify_session(&token) {
        Ok(claims) if claims.state.is_authenticated() => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        _ => Err(Redirect::to("/dashboard/login")),
    }
}
