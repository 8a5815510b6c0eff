//! Authentication: password hashing, login/registration, session tokens.
//!
//! Passwords are stored as PBKDF2-HMAC-SHA256 strings carrying their own
//! iteration count and salt. Sessions are stateless HMAC-SHA256-signed tokens
//! holding the username, the session state machine position and an expiry;
//! the server keeps no per-session storage.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::domain::session::SessionState;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

const HASH_SCHEME: &str = "pbkdf2-sha256";
const PBKDF2_ITERATIONS: u32 = 600_000;
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Claims carried by a signed session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Username the session belongs to.
    pub sub: String,
    /// Position in the landing → auth → dashboard flow.
    pub state: SessionState,
    /// Unix timestamp after which the token is rejected.
    pub exp: i64,
}

/// Service for credential management and session token issuance.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    signing_secret: String,
    session_ttl_seconds: i64,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// `signing_secret` keys the session-token MAC; rotating it invalidates
    /// every outstanding session.
    pub fn new(repository: Arc<R>, signing_secret: String, session_ttl_seconds: i64) -> Self {
        Self {
            repository,
            signing_secret,
            session_ttl_seconds,
        }
    }

    /// Hashes a password for storage.
    ///
    /// Output format: `pbkdf2-sha256$<iterations>$<b64 salt>$<b64 key>`.
    pub fn hash_password(password: &str) -> String {
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt);

        let mut key = [0u8; KEY_LEN];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, PBKDF2_ITERATIONS, &mut key);

        format!(
            "{HASH_SCHEME}${PBKDF2_ITERATIONS}${}${}",
            STANDARD.encode(salt),
            STANDARD.encode(key)
        )
    }

    /// Verifies a password against a stored hash string.
    ///
    /// A malformed stored hash verifies as `false` rather than erroring; the
    /// caller cannot distinguish it from a wrong password, which is the
    /// behavior login wants anyway.
    pub fn verify_password(stored: &str, password: &str) -> bool {
        let mut parts = stored.split('$');
        let (Some(scheme), Some(iterations), Some(salt), Some(key)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        if scheme != HASH_SCHEME || parts.next().is_some() {
            return false;
        }
        let Ok(iterations) = iterations.parse::<u32>() else {
            return false;
        };
        let (Ok(salt), Ok(expected)) = (STANDARD.decode(salt), STANDARD.decode(key)) else {
            return false;
        };

        let mut key = vec![0u8; expected.len()];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, iterations, &mut key);

        // Compare MACs of both values so the comparison time does not depend
        // on the position of the first differing byte.
        let mac_of = |bytes: &[u8]| {
            let mut mac = HmacSha256::new_from_slice(b"password-compare")
                .expect("HMAC accepts any key length");
            mac.update(bytes);
            mac.finalize().into_bytes()
        };
        mac_of(&key) == mac_of(&expected)
    }

    /// Registers a new user with hashed credentials.
    ///
    /// Returns `Ok(None)` when the username is already taken: a reportable
    /// outcome, not a fault. The uniqueness check is the `users` primary key,
    /// so concurrent registrations of the same name are serialized by the
    /// store itself.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        sectors: Vec<String>,
    ) -> Result<Option<User>, AppError> {
        let new_user = NewUser {
            username: username.to_string(),
            password_hash: Self::hash_password(password),
            sectors,
        };

        match self.repository.create(new_user).await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::Conflict { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Checks a username/password pair.
    ///
    /// Returns `Ok(None)` for an unknown user or a wrong password; the two
    /// cases are deliberately indistinguishable to the caller.
    pub async fn login(&self, username: &str, password: &str) -> Result<Option<User>, AppError> {
        let Some(user) = self.repository.find_by_username(username).await? else {
            return Ok(None);
        };

        if Self::verify_password(&user.password, password) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Loads a user's stored record, for profile display.
    pub async fn find_user(&self, username: &str) -> Result<Option<User>, AppError> {
        self.repository.find_by_username(username).await
    }

    /// Issues a signed session token for a username in the given state.
    pub fn issue_session(&self, username: &str, state: SessionState) -> String {
        let claims = SessionClaims {
            sub: username.to_string(),
            state,
            exp: Utc::now().timestamp() + self.session_ttl_seconds,
        };
        self.encode(&claims)
    }

    /// Validates a session token's signature and expiry.
    ///
    /// # Errors
    ///
    /// [`AppError::Unauthorized`] on a malformed token, a bad signature or an
    /// expired session.
    pub fn verify_session(&self, token: &str) -> Result<SessionClaims, AppError> {
        let rejected = || AppError::unauthorized("Invalid session", json!({}));

        let (payload, signature) = token.split_once('.').ok_or_else(rejected)?;
        if self.sign(payload) != signature {
            return Err(rejected());
        }

        let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|_| rejected())?;
        let claims: SessionClaims = serde_json::from_slice(&bytes).map_err(|_| rejected())?;

        if claims.exp < Utc::now().timestamp() {
            return Err(AppError::unauthorized(
                "Session expired",
                json!({ "expired_at": claims.exp }),
            ));
        }

        Ok(claims)
    }

    fn encode(&self, claims: &SessionClaims) -> String {
        let payload = URL_SAFE_NO_PAD
            .encode(serde_json::to_vec(claims).expect("claims serialize to JSON"));
        let signature = self.sign(&payload);
        format!("{payload}.{signature}")
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}
