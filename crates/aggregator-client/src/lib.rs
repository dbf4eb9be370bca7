//! aggregator-client: wrapper around the upstream aggregation REST API
//!
//! Owns the reqwest client, bearer credential, per-request timeout and error
//! classification. Protocol crates issue requests through this wrapper so
//! that transport errors are normalized in exactly one place.

pub mod retry;

use std::time::Duration;

use prism_core::AggregatorConfig;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use retry::RetryPolicy;

/// Timeout for every upstream call (10 seconds). Expiry counts as a
/// transient failure for the retry policy.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from upstream API calls
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request timed out after {}s", REQUEST_TIMEOUT.as_secs())]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for failures worth retrying: connection-level problems, timeouts
    /// and server-side 5xx. Client errors (4xx) are never transient.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout | Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Decode(_) => false,
        }
    }
}

/// Result type for upstream API calls
pub type Result<T> = std::result::Result<T, ApiError>;

/// Authenticated client for the aggregation API
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(config: &AggregatorConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("prism")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client construction cannot fail with static options");

        if config.api_key.is_empty() {
            tracing::warn!("Aggregation API credential missing; requests will be rejected upstream");
        }

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` with query parameters, decoding the JSON response into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let request = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .bearer_auth(&self.api_key)
            .header("accept", "application/json");

        let response = request.send().await.map_err(classify)?;
        decode(response).await
    }

    /// POST a JSON body to `path`, decoding the JSON response into `T`.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let request = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .header("accept", "application/json")
            .json(body);

        let response = request.send().await.map_err(classify)?;
        decode(response).await
    }

    /// POST a JSON body expecting an empty (or ignorable) success response.
    ///
    /// The relayer's submit endpoints reply 201/202 with no body; decoding
    /// into a type would fail, so only the status is checked.
    pub async fn post_expect_accepted(&self, path: &str, body: &serde_json::Value) -> Result<()> {
        let request = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .header("accept", "application/json")
            .json(body);

        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

/// Map a reqwest error onto the transport taxonomy.
fn classify(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(err.to_string())
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await.map_err(classify)?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::Timeout.is_transient());
        assert!(ApiError::Transport("connection reset".into()).is_transient());
        assert!(ApiError::Status {
            status: 503,
            body: String::new()
        }
        .is_transient());
        assert!(!ApiError::Status {
            status: 400,
            body: String::new()
        }
        .is_transient());
        assert!(!ApiError::Decode("eof".into()).is_transient());
    }

    #[test]
    fn test_base_url_normalized() {
        let client = ApiClient::new(&AggregatorConfig {
            base_url: "https://api.example.dev/".to_string(),
            api_key: "key".to_string(),
        });
        assert_eq!(client.base_url(), "https://api.example.dev");
    }
}
