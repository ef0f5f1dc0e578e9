//! Preference repository over the JSON key-value store.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use redaai_core::error::{RedaaiError, Result};
use redaai_core::repository::PreferenceRepository;

use crate::kv_store::JsonKvStore;

/// Key under which the dark-theme flag is persisted in the preferences
/// namespace.
const IS_DARK_KEY: &str = "isDark";

/// File-backed [`PreferenceRepository`].
pub struct JsonPreferenceRepository {
    store: Arc<JsonKvStore>,
}

impl JsonPreferenceRepository {
    pub fn new(store: Arc<JsonKvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PreferenceRepository for JsonPreferenceRepository {
    async fn is_dark(&self) -> Result<Option<bool>> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.get_bool(IS_DARK_KEY))
            .await
            .map_err(|e| RedaaiError::internal(format!("Failed to join task: {}", e)))?
            .map_err(RedaaiError::from)
    }

    async fn set_dark(&self, value: bool) -> Result<()> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.set(IS_DARK_KEY, json!(value)))
            .await
            .map_err(|e| RedaaiError::internal(format!("Failed to join task: {}", e)))?
            .map_err(RedaaiError::from)
    }
}
