//! Authentication handlers: register, login, logout, profile.

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
    Extension, Json,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, ProfileResponse, RegisterRequest, SessionResponse};
use crate::application::services::auth_service::SessionClaims;
use crate::domain::sectors;
use crate::domain::session::{SessionEvent, SessionState};
use crate::error::AppError;
use crate::state::AppState;

/// The session token is sent both in the JSON body (for API clients) and as
/// an HttpOnly cookie (for the web dashboard).
fn session_cookie(token: &str) -> String {
    format!("session={token}; Path=/; HttpOnly; SameSite=Lax")
}

fn cleared_session_cookie() -> String {
    "session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0".to_string()
}

/// Creates a new account and logs it straight in.
///
/// # Endpoint
///
/// `POST /api/auth/register`
///
/// Sector names are checked against the fixed sector table before storage.
///
/// # Errors
///
/// - 400 on validation failure or an unknown sector name
/// - 409 when the username is already taken (a reportable outcome, surfaced
///   by the store's uniqueness constraint, never a crash)
pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    request
        .validate()
        .map_err(|e| AppError::bad_request("Invalid registration data", json!(e)))?;

    for name in &request.sectors {
        sectors::code_for_name(name)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({ "sector": name })))?;
    }

    let Some(user) = state
        .auth_service
        .register(&request.username, &request.password, request.sectors)
        .await?
    else {
        return Err(AppError::conflict(
            "Username already exists",
            json!({ "username": request.username }),
        ));
    };

    let session_state = SessionState::Authenticating.apply(SessionEvent::RegisterSucceeded);
    let token = state.auth_service.issue_session(&user.username, session_state);

    let body = SessionResponse {
        token: token.clone(),
        username: user.username.clone(),
        state: session_state,
        sectors_of_interest: user
            .sectors_of_interest()
            .into_iter()
            .map(String::from)
            .collect(),
    };

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&token))]),
        Json(body),
    ))
}

/// Checks credentials and issues a session.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Errors
///
/// 401 for a wrong password or an unknown username; the two are deliberately
/// indistinguishable.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    request
        .validate()
        .map_err(|e| AppError::bad_request("Invalid login data", json!(e)))?;

    let Some(user) = state
        .auth_service
        .login(&request.username, &request.password)
        .await?
    else {
        return Err(AppError::unauthorized(
            "Invalid username or password",
            json!({}),
        ));
    };

    let session_state = SessionState::Authenticating.apply(SessionEvent::LoginSucceeded);
    let token = state.auth_service.issue_session(&user.username, session_state);

    let body = SessionResponse {
        token: token.clone(),
        username: user.username.clone(),
        state: session_state,
        sectors_of_interest: user
            .sectors_of_interest()
            .into_iter()
            .map(String::from)
            .collect(),
    };

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&token))]),
        Json(body),
    ))
}

/// Ends the session by clearing the cookie.
///
/// # Endpoint
///
/// `POST /api/auth/logout`
///
/// Tokens are stateless, so logout is purely client-side: the cookie is
/// cleared and the flow returns to the landing state.
pub async fn logout_handler() -> impl IntoResponse {
    let landing = SessionState::Dashboard.apply(SessionEvent::Logout);
    (
        AppendHeaders([(SET_COOKIE, cleared_session_cookie())]),
        Json(json!({ "state": landing })),
    )
}

/// The authenticated user's profile.
///
/// # Endpoint
///
/// `GET /api/auth/me`
///
/// Echoes the sectors-of-interest list captured at signup. It is stored and
/// displayed, nothing more; no dashboard query filters on it.
pub async fn profile_handler(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = state
        .auth_service
        .find_user(&claims.sub)
        .await?
        .ok_or_else(|| AppError::not_found("User not found", json!({ "username": claims.sub })))?;

    Ok(Json(ProfileResponse {
        username: user.username.clone(),
        sectors_of_interest: user
            .sectors_of_interest()
            .into_iter()
            .map(String::from)
            .collect(),
    }))
}
