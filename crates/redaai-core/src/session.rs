//! Authentication session domain model.

use serde::{Deserialize, Serialize};

/// Client-side authentication session state.
///
/// Holds the credential form fields, the in-flight flag, and the last
/// failure message. `auth_token` is the only field that outlives the
/// process, via the token repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Bearer token. Present iff the user is authenticated.
    pub auth_token: Option<String>,
    /// Email form field, normalized to contain no whitespace.
    pub auth_email: String,
    /// Password form field.
    pub password: String,
    /// Password confirmation form field (sign-up form only).
    pub confirm_password: String,
    /// Display name form field (sign-up form only).
    pub name: String,
    /// True exactly while a login/sign-up call is outstanding.
    pub is_loading: bool,
    /// Last failure message, cleared at the start of each new attempt.
    pub error: Option<String>,
}

impl SessionState {
    /// Creates a new session state with empty defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Returns the state to its defaults (logout semantics).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unauthenticated() {
        let state = SessionState::new();
        assert!(!state.is_authenticated());
        assert!(state.auth_email.is_empty());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_authenticated_iff_token_present() {
        let mut state = SessionState::new();
        state.auth_token = Some("token".to_string());
        assert!(state.is_authenticated());

        state.auth_token = None;
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = SessionState {
            auth_token: Some("token".to_string()),
            auth_email: "a@b.co".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
            name: "Ana".to_string(),
            is_loading: true,
            error: Some("boom".to_string()),
        };
        state.clear();
        assert_eq!(state, SessionState::default());
    }
}
