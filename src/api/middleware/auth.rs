//! Bearer session-token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::COOKIE,
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Pulls the session token from the `session` cookie, if present.
///
/// Lets the dashboard pages call the API with the cookie set at login,
/// without round-tripping the token through client-side storage.
fn session_cookie_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut kv = cookie.trim().splitn(2, '=');
                match (kv.next(), kv.next()) {
                    (Some("session"), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        })
}

/// Authenticates API requests using the session token.
///
/// # Credential Sources
///
/// Checked in order:
///
/// ```text
/// Authorization: Bearer <session token>
/// Cookie: session=<session token>
/// ```
///
/// On success the verified [`crate::application::services::auth_service::SessionClaims`]
/// are inserted into request extensions for handlers that need the username.
///
/// # Errors
///
/// Returns `401 Unauthorized` if no credential is present, the signature or
/// expiry check fails, or the session has not reached the dashboard state.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = match AuthBearer::from_request_parts(&mut parts, &()).await {
        Ok(AuthBearer(token)) => token,
        Err(_) => session_cookie_token(&parts).ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "No session token in Authorization header or session cookie"}),
            )
        })?,
    };

    let claims = st.auth_service.verify_session(&token)?;
    if !claims.state.is_authenticated() {
        return Err(AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Session is not logged in"}),
        ));
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
