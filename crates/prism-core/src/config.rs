//! Configuration types for Prism

use serde::{Deserialize, Serialize};

/// Upstream aggregation API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// API base URL
    pub base_url: String,

    /// Bearer credential for authenticated endpoints
    #[serde(default)]
    pub api_key: String,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.1inch.dev".to_string(),
            api_key: String::new(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream API settings
    pub aggregator: AggregatorConfig,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

fn default_api_port() -> u16 {
    19071
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            aggregator: AggregatorConfig::default(),
            api_port: default_api_port(),
        }
    }
}

impl AppConfig {
    /// Build configuration from the environment.
    ///
    /// Reads `ONEINCH_API_KEY` and optionally `PRISM_API_PORT`. A missing
    /// credential does not fail construction: clients are still built and
    /// upstream calls surface authorization errors instead.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        match std::env::var("ONEINCH_API_KEY") {
            Ok(key) if !key.is_empty() => config.aggregator.api_key = key,
            _ => {
                tracing::warn!(
                    "ONEINCH_API_KEY not set; upstream calls will fail with authorization errors"
                );
            }
        }

        if let Ok(port) = std::env::var("PRISM_API_PORT") {
            match port.parse() {
                Ok(port) => config.api_port = port,
                Err(_) => tracing::warn!("Ignoring unparseable PRISM_API_PORT: {}", port),
            }
        }

        config
    }
}
