//! Persistence traits implemented by the infrastructure crate.

use async_trait::async_trait;

use crate::error::Result;

/// Repository for the persisted authentication token.
///
/// The session store is the sole writer of the token; the HTTP layer
/// only reads it.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Loads the persisted token, if any.
    async fn load(&self) -> Result<Option<String>>;

    /// Persists the token, replacing any previous value.
    async fn store(&self, token: &str) -> Result<()>;

    /// Removes the persisted token.
    async fn clear(&self) -> Result<()>;
}

/// Repository for persisted UI preferences.
///
/// The theme flag lives in its own namespace, separate from the
/// session token.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Loads the dark-theme flag, if it was ever set.
    async fn is_dark(&self) -> Result<Option<bool>>;

    /// Persists the dark-theme flag.
    async fn set_dark(&self, value: bool) -> Result<()>;
}
