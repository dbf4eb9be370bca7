//! Data Transfer Objects for API requests and responses

use fusion::{ChainConfig, FusionOrder};
use prism_core::ChainId;
use serde::{Deserialize, Serialize};

fn default_chain_id() -> ChainId {
    1
}

fn default_slippage() -> f64 {
    1.0
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }
}

/// Classic quote query parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteQuery {
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
    pub src: String,
    pub dst: String,
    /// Base-unit integer string
    pub amount: String,
}

/// Classic swap query parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuery {
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
    pub src: String,
    pub dst: String,
    pub amount: String,
    pub from: String,
    #[serde(default = "default_slippage")]
    pub slippage: f64,
}

/// Allowance query parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceQuery {
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
    pub token_address: String,
    pub wallet_address: String,
}

/// Approval transaction query parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveQuery {
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
    pub token_address: String,
    #[serde(default)]
    pub amount: Option<String>,
}

/// Live-order submission request (pre-signing relayer path)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderRequest {
    pub order: FusionOrder,
    pub quote_id: String,
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
}

/// Signed-order submission request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSignedRequest {
    /// The order as transported through the browser (value-only)
    pub order: serde_json::Value,
    pub signature: String,
    pub quote_id: String,
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
}

/// Cross-chain signed-order submission request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossSubmitSignedRequest {
    pub order: serde_json::Value,
    pub signature: String,
    pub quote_id: String,
    pub src_chain_id: ChainId,
    pub dst_chain_id: ChainId,
}

/// Order status query parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
    pub order_hash: String,
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
}

/// Supported-chain listing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub chain_id: ChainId,
    pub name: String,
    pub wrapped_native: String,
    pub rpc_url: String,
}

impl From<&ChainConfig> for ChainInfo {
    fn from(chain: &ChainConfig) -> Self {
        Self {
            chain_id: chain.chain_id,
            name: chain.name.to_string(),
            wrapped_native: chain.wrapped_native.to_string(),
            rpc_url: chain.rpc_url.to_string(),
        }
    }
}

/// Token list query parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensQuery {
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
}

/// Portfolio query parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioQuery {
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
    /// Comma-separated wallet addresses
    pub addresses: String,
}

/// Spot price query parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricesQuery {
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
    /// Comma-separated token addresses
    pub addresses: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Limit-order listing query parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrdersQuery {
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub statuses: Option<String>,
    #[serde(default)]
    pub maker_asset: Option<String>,
    #[serde(default)]
    pub taker_asset: Option<String>,
    #[serde(default)]
    pub maker: Option<String>,
    #[serde(default)]
    pub taker: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    100
}

/// Limit-order creation request: the chain plus the upstream order body,
/// forwarded unmodified.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderCreateRequest {
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
    #[serde(flatten)]
    pub order: serde_json::Value,
}

/// Route comparison response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesResponse {
    pub routes: Vec<routing::Route>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_query_defaults_chain_to_mainnet() {
        let query: QuoteQuery =
            serde_json::from_str(r#"{"src": "0xaa", "dst": "0xbb", "amount": "1"}"#).unwrap();
        assert_eq!(query.chain_id, 1);
    }

    #[test]
    fn submit_signed_request_shape() {
        let json = serde_json::json!({
            "order": {"salt": "1"},
            "signature": "0xsig",
            "quoteId": "q-1",
            "chainId": 137
        });
        let request: SubmitSignedRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.quote_id, "q-1");
        assert_eq!(request.chain_id, 137);
    }

    #[test]
    fn limit_orders_query_defaults() {
        let query: LimitOrdersQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 100);
        assert!(query.statuses.is_none());
    }
}
