//! Session store: login, sign-up, and logout orchestration.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

use redaai_api::auth::{AuthApi, LoginCredentials, SignUpCredentials};
use redaai_api::problem::ApiProblem;
use redaai_core::repository::TokenRepository;
use redaai_core::session::SessionState;
use redaai_core::validation;

use crate::event::SessionEvent;
use crate::loading::LoadingGuard;
use crate::publisher::EventPublisher;
use crate::user_store::UserStore;

pub const MSG_INVALID_CREDENTIALS: &str = "Email ou senha inválidos";
pub const MSG_LOGIN_FAILED: &str = "Erro ao fazer login";
pub const MSG_SIGNUP_FAILED: &str = "Erro ao criar conta";
pub const MSG_FORGOT_PASSWORD_FAILED: &str = "Erro ao recuperar senha";

/// Observable authentication session store.
///
/// Owns the credential form fields and the login/sign-up/logout
/// orchestration. Collaborators are injected at construction: the auth
/// API client, the token repository it persists the token through, and
/// the user profile store it populates on login.
///
/// Actions return plain values; every failure is absorbed into the
/// `error` field at the action boundary, nothing is rethrown. A second
/// action while one is in flight is rejected without touching state.
pub struct SessionStore {
    state: Mutex<SessionState>,
    auth: Arc<dyn AuthApi>,
    tokens: Arc<dyn TokenRepository>,
    users: Arc<UserStore>,
    events: EventPublisher<SessionEvent>,
}

impl SessionStore {
    pub fn new(
        auth: Arc<dyn AuthApi>,
        tokens: Arc<dyn TokenRepository>,
        users: Arc<UserStore>,
    ) -> Self {
        Self {
            state: Mutex::new(SessionState::new()),
            auth,
            tokens,
            users,
            events: EventPublisher::new(),
        }
    }

    /// Subscribes to state-change events.
    pub fn subscribe(&self) -> UnboundedReceiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    // ------------------------------------------------------------------
    // Form fields
    // ------------------------------------------------------------------

    /// Stores the email with all whitespace stripped.
    pub fn set_auth_email(&self, value: &str) {
        self.lock().auth_email = validation::normalize_email(value);
        self.events.publish(SessionEvent::FieldsChanged);
    }

    pub fn set_password(&self, value: &str) {
        self.lock().password = value.to_string();
        self.events.publish(SessionEvent::FieldsChanged);
    }

    pub fn set_confirm_password(&self, value: &str) {
        self.lock().confirm_password = value.to_string();
        self.events.publish(SessionEvent::FieldsChanged);
    }

    pub fn set_name(&self, value: &str) {
        self.lock().name = value.to_string();
        self.events.publish(SessionEvent::FieldsChanged);
    }

    // ------------------------------------------------------------------
    // Derived validation
    // ------------------------------------------------------------------

    /// Sign-up form validation over the current fields.
    pub fn validation_error(&self) -> Option<&'static str> {
        let state = self.lock();
        validation::signup_validation_error(
            &state.auth_email,
            &state.name,
            &state.password,
            &state.confirm_password,
        )
    }

    /// Login form validation over the current fields.
    pub fn login_validation_error(&self) -> Option<&'static str> {
        let state = self.lock();
        validation::login_validation_error(&state.auth_email, &state.password)
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Attempts to log in with the current form fields.
    ///
    /// A validation failure sets `error` and returns `false` without a
    /// network call. On success the token is persisted, the session is
    /// marked authenticated, and the user profile store is populated.
    pub async fn login(&self) -> bool {
        let credentials = {
            let mut state = self.lock();
            if state.is_loading {
                warn!("login ignored, another attempt is in flight");
                return false;
            }
            if let Some(message) =
                validation::login_validation_error(&state.auth_email, &state.password)
            {
                state.error = Some(message.to_string());
                drop(state);
                self.events.publish(SessionEvent::ErrorChanged {
                    error: Some(message.to_string()),
                });
                return false;
            }
            state.is_loading = true;
            state.error = None;
            LoginCredentials {
                email: state.auth_email.trim().to_string(),
                password: state.password.trim().to_string(),
            }
        };
        self.events
            .publish(SessionEvent::LoadingChanged { loading: true });
        let _guard = LoadingGuard::new(|| self.finish_loading());

        info!(email = %credentials.email, "logging in");
        match self.auth.login(credentials).await {
            Ok(payload) => {
                if let Err(e) = self.tokens.store(&payload.token).await {
                    // The in-memory session still works; only durability
                    // is lost, and the next login rewrites the token.
                    warn!(error = %e, "failed to persist auth token");
                }
                self.lock().auth_token = Some(payload.token);
                self.users.set_user(&payload.user);
                self.events.publish(SessionEvent::Authenticated {
                    email: payload.user.email,
                });
                true
            }
            Err(ApiProblem::Unauthorized) => {
                self.set_error(MSG_INVALID_CREDENTIALS);
                false
            }
            Err(problem) => {
                warn!(%problem, "login failed");
                self.set_error(MSG_LOGIN_FAILED);
                false
            }
        }
    }

    /// Registers a new account with the current form fields.
    ///
    /// Validation is the caller's responsibility (`validation_error`);
    /// the action itself only reports transport outcomes. Success does
    /// not authenticate the session.
    pub async fn sign_up(&self) -> bool {
        let credentials = {
            let mut state = self.lock();
            if state.is_loading {
                warn!("sign-up ignored, another attempt is in flight");
                return false;
            }
            state.is_loading = true;
            state.error = None;
            SignUpCredentials {
                name: state.name.trim().to_string(),
                email: state.auth_email.trim().to_string(),
                password: state.password.trim().to_string(),
            }
        };
        self.events
            .publish(SessionEvent::LoadingChanged { loading: true });
        let _guard = LoadingGuard::new(|| self.finish_loading());

        info!(email = %credentials.email, "registering account");
        match self.auth.sign_up(credentials).await {
            Ok(_) => true,
            Err(problem) => {
                warn!(%problem, "sign-up failed");
                self.set_error(MSG_SIGNUP_FAILED);
                false
            }
        }
    }

    /// Requests a password recovery email for the current email field.
    pub async fn forgot_password(&self) -> bool {
        let email = {
            let mut state = self.lock();
            if state.is_loading {
                warn!("password recovery ignored, another attempt is in flight");
                return false;
            }
            state.is_loading = true;
            state.error = None;
            state.auth_email.trim().to_string()
        };
        self.events
            .publish(SessionEvent::LoadingChanged { loading: true });
        let _guard = LoadingGuard::new(|| self.finish_loading());

        match self.auth.forgot_password(&email).await {
            Ok(()) => true,
            Err(problem) => {
                warn!(%problem, "password recovery failed");
                self.set_error(MSG_FORGOT_PASSWORD_FAILED);
                false
            }
        }
    }

    /// Clears the session locally: persisted token, form fields, and
    /// the user profile. No server call is made.
    pub async fn logout(&self) {
        if let Err(e) = self.tokens.clear().await {
            warn!(error = %e, "failed to clear persisted token");
        }
        self.lock().clear();
        self.users.reset();
        self.events.publish(SessionEvent::LoggedOut);
        info!("logged out");
    }

    // ------------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().expect("session state poisoned")
    }

    fn set_error(&self, message: &str) {
        self.lock().error = Some(message.to_string());
        self.events.publish(SessionEvent::ErrorChanged {
            error: Some(message.to_string()),
        });
    }

    fn finish_loading(&self) {
        let mut state = self.lock();
        if state.is_loading {
            state.is_loading = false;
            drop(state);
            self.events
                .publish(SessionEvent::LoadingChanged { loading: false });
        }
    }
}
