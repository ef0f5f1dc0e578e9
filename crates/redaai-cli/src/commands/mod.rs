use std::sync::Arc;

use anyhow::Result;

use redaai_api::{ApiClient, ApiConfig, HttpAuthApi, HttpEssayApi};
use redaai_api::auth::AuthApi;
use redaai_api::essay::EssayApi;
use redaai_application::{EssayStore, SessionStore, UserStore};
use redaai_core::repository::{PreferenceRepository, TokenRepository};
use redaai_infrastructure::{
    AppPaths, JsonKvStore, JsonPreferenceRepository, JsonTokenRepository,
};

pub mod essay;
pub mod session;
pub mod theme;

/// Wired-up stores and repositories shared by all subcommands.
pub struct AppContext {
    pub session: Arc<SessionStore>,
    pub essays: Arc<EssayStore>,
    pub users: Arc<UserStore>,
    pub tokens: Arc<dyn TokenRepository>,
    pub preferences: Arc<dyn PreferenceRepository>,
}

impl AppContext {
    /// Builds the full dependency graph: paths → key-value stores →
    /// repositories → API clients → stores.
    pub fn new() -> Result<Self> {
        let paths = AppPaths::new()?;

        let session_kv = Arc::new(JsonKvStore::new(paths.session_file()));
        let preferences_kv = Arc::new(JsonKvStore::new(paths.preferences_file()));
        let tokens: Arc<dyn TokenRepository> = Arc::new(JsonTokenRepository::new(session_kv));
        let preferences: Arc<dyn PreferenceRepository> =
            Arc::new(JsonPreferenceRepository::new(preferences_kv));

        let api = Arc::new(ApiClient::new(ApiConfig::from_env(), tokens.clone())?);
        let auth: Arc<dyn AuthApi> = Arc::new(HttpAuthApi::new(api.clone()));
        let essay_api: Arc<dyn EssayApi> = Arc::new(HttpEssayApi::new(api));

        let users = Arc::new(UserStore::new());
        let session = Arc::new(SessionStore::new(auth, tokens.clone(), users.clone()));
        let essays = Arc::new(EssayStore::new(essay_api, users.clone()));

        Ok(Self {
            session,
            essays,
            users,
            tokens,
            preferences,
        })
    }
}
