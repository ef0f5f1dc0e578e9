//! API configuration.
//!
//! Build-time defaults with environment-variable overrides. The API key
//! is a fixed gateway header value in this deployment, not a secret.

use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://ztcy5n54eb.execute-api.us-east-2.amazonaws.com";
const DEFAULT_API_KEY: &str = "5G7M64vftt5Ti3kRgkN664NDYL9bxrcT2IojLjgX";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Transport configuration for the backend gateway.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads the configuration with environment overrides.
    ///
    /// Recognized variables: `REDAAI_API_URL`, `REDAAI_API_KEY`,
    /// `REDAAI_TIMEOUT_MS`. An unparsable timeout falls back to the
    /// default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("REDAAI_API_URL") {
            config.base_url = url;
        }
        if let Ok(key) = env::var("REDAAI_API_KEY") {
            config.api_key = key;
        }
        if let Ok(raw) = env::var("REDAAI_TIMEOUT_MS")
            && let Ok(ms) = raw.parse::<u64>()
        {
            config.timeout = Duration::from_millis(ms);
        }
        config
    }
}
