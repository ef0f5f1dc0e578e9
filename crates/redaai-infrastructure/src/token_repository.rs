//! Token repository over the JSON key-value store.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use redaai_core::error::{RedaaiError, Result};
use redaai_core::repository::TokenRepository;

use crate::kv_store::JsonKvStore;

/// Key under which the auth token is persisted in the session namespace.
const AUTH_TOKEN_KEY: &str = "authToken";

/// File-backed [`TokenRepository`].
///
/// File I/O is blocking, so every operation runs through
/// `spawn_blocking`.
pub struct JsonTokenRepository {
    store: Arc<JsonKvStore>,
}

impl JsonTokenRepository {
    pub fn new(store: Arc<JsonKvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TokenRepository for JsonTokenRepository {
    async fn load(&self) -> Result<Option<String>> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.get_string(AUTH_TOKEN_KEY))
            .await
            .map_err(|e| RedaaiError::internal(format!("Failed to join task: {}", e)))?
            .map_err(RedaaiError::from)
    }

    async fn store(&self, token: &str) -> Result<()> {
        let store = self.store.clone();
        let value = json!(token);
        tokio::task::spawn_blocking(move || store.set(AUTH_TOKEN_KEY, value))
            .await
            .map_err(|e| RedaaiError::internal(format!("Failed to join task: {}", e)))?
            .map_err(RedaaiError::from)
    }

    async fn clear(&self) -> Result<()> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.remove(AUTH_TOKEN_KEY))
            .await
            .map_err(|e| RedaaiError::internal(format!("Failed to join task: {}", e)))?
            .map_err(RedaaiError::from)?;
        Ok(())
    }
}
