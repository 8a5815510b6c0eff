//! DTOs for authentication endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::session::SessionState;

/// Request to create a new account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be 3-64 characters"))]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Full sector names the user is interested in. Stored verbatim;
    /// unknown names are rejected against the fixed sector table.
    #[serde(default)]
    pub sectors: Vec<String>,
}

/// Request to log in with existing credentials.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login/registration response carrying the session token.
///
/// The token doubles as the `session` cookie value for the web dashboard and
/// the Bearer token for the API.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub username: String,
    pub state: SessionState,
    pub sectors_of_interest: Vec<String>,
}

/// Response for the authenticated profile endpoint.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub sectors_of_interest: Vec<String>,
}
