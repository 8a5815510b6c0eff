//! Explicit session state machine for the browser flow.
//!
//! The flow is landing page → auth page → dashboard. State is carried inside
//! the signed session token per request instead of ambient mutable flags, so
//! each request context owns its position in the flow.

use serde::{Deserialize, Serialize};

/// Where a session currently is in the landing → auth → dashboard flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Public landing page; nothing submitted yet.
    Landing,
    /// On the login/register page, not yet authenticated.
    Authenticating,
    /// Authenticated; dashboard routes are accessible.
    Dashboard,
}

/// Discrete events that move a session between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    GetStarted,
    LoginSucceeded,
    RegisterSucceeded,
    AuthFailed,
    Logout,
}

impl SessionState {
    /// Applies an event, returning the next state.
    ///
    /// Events that make no sense in the current state leave it unchanged;
    /// there is no error path, a stray event is simply a no-op.
    pub fn apply(self, event: SessionEvent) -> SessionState {
        use SessionEvent::*;
        use SessionState::*;

        match (self, event) {
            (Landing, GetStarted) => Authenticating,
            (Authenticating, LoginSucceeded | RegisterSucceeded) => Dashboard,
            (Authenticating, AuthFailed) => Authenticating,
            (_, Logout) => Landing,
            (state, _) => state,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == SessionState::Dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::SessionEvent::*;
    use super::SessionState::*;

    #[test]
    fn happy_path_reaches_dashboard() {
        let state = Landing.apply(GetStarted).apply(LoginSucceeded);
        assert_eq!(state, Dashboard);
        assert!(state.is_authenticated());
    }

    #[test]
    fn registration_also_logs_in() {
        assert_eq!(Authenticating.apply(RegisterSucceeded), Dashboard);
    }

    #[test]
    fn failed_auth_stays_on_auth_page() {
        assert_eq!(Authenticating.apply(AuthFailed), Authenticating);
        assert!(!Authenticating.is_authenticated());
    }

    #[test]
    fn logout_resets_from_anywhere() {
        assert_eq!(Dashboard.apply(Logout), Landing);
        assert_eq!(Authenticating.apply(Logout), Landing);
        assert_eq!(Landing.apply(Logout), Landing);
    }

    #[test]
    fn stray_events_are_noops() {
        assert_eq!(Landing.apply(LoginSucceeded), Landing);
        assert_eq!(Dashboard.apply(GetStarted), Dashboard);
    }
}
