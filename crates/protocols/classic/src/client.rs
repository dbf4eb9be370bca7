//! Classic swap endpoint calls
//!
//! Reads (quote, allowance) retry on transient failures; transaction
//! construction (swap, approve) never retries since the upstream may have
//! partially processed the request.

use std::sync::Arc;

use aggregator_client::{ApiClient, ApiError, RetryPolicy};
use prism_core::{ChainId, QuoteError};

use crate::types::{Allowance, ApprovalTransaction, ClassicQuote, SwapResponse};

/// Client for the classic instant-swap protocol
#[derive(Clone)]
pub struct ClassicClient {
    api: Arc<ApiClient>,
    retry: RetryPolicy,
}

impl ClassicClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            retry: RetryPolicy::standard(),
        }
    }

    /// Fetch a swap quote.
    pub async fn get_quote(
        &self,
        chain_id: ChainId,
        src: &str,
        dst: &str,
        amount: &str,
    ) -> Result<ClassicQuote, QuoteError> {
        let path = format!("/swap/v6.0/{chain_id}/quote");
        let query = quote_query(src, dst, amount);

        self.retry
            .run(ApiError::is_transient, || {
                self.api.get_json::<ClassicQuote>(&path, &query)
            })
            .await
            .map_err(|e| {
                tracing::warn!(chain_id, src, dst, "Classic quote failed: {}", e);
                QuoteError::Unavailable {
                    message: e.to_string(),
                }
            })
    }

    /// Build a ready-to-sign swap transaction. Not retried.
    pub async fn get_swap_transaction(
        &self,
        chain_id: ChainId,
        src: &str,
        dst: &str,
        amount: &str,
        from: &str,
        slippage: f64,
    ) -> Result<SwapResponse, QuoteError> {
        let path = format!("/swap/v6.0/{chain_id}/swap");
        let query = swap_query(src, dst, amount, from, slippage);

        self.api
            .get_json::<SwapResponse>(&path, &query)
            .await
            .map_err(|e| {
                tracing::warn!(chain_id, src, dst, "Swap transaction build failed: {}", e);
                QuoteError::Unavailable {
                    message: e.to_string(),
                }
            })
    }

    /// Read the router allowance for (token, wallet).
    pub async fn get_allowance(
        &self,
        chain_id: ChainId,
        token_address: &str,
        wallet_address: &str,
    ) -> Result<Allowance, QuoteError> {
        let path = format!("/swap/v6.0/{chain_id}/approve/allowance");
        let query = vec![
            ("tokenAddress".to_string(), token_address.to_string()),
            ("walletAddress".to_string(), wallet_address.to_string()),
        ];

        self.retry
            .run(ApiError::is_transient, || {
                self.api.get_json::<Allowance>(&path, &query)
            })
            .await
            .map_err(|e| QuoteError::Unavailable {
                message: e.to_string(),
            })
    }

    /// Build an approval transaction. Not retried.
    pub async fn get_approval_transaction(
        &self,
        chain_id: ChainId,
        token_address: &str,
        amount: Option<&str>,
    ) -> Result<ApprovalTransaction, QuoteError> {
        let path = format!("/swap/v6.0/{chain_id}/approve/transaction");
        let mut query = vec![("tokenAddress".to_string(), token_address.to_string())];
        if let Some(amount) = amount {
            query.push(("amount".to_string(), amount.to_string()));
        }

        self.api
            .get_json::<ApprovalTransaction>(&path, &query)
            .await
            .map_err(|e| QuoteError::Unavailable {
                message: e.to_string(),
            })
    }
}

/// Query parameters for the quote endpoint.
fn quote_query(src: &str, dst: &str, amount: &str) -> Vec<(String, String)> {
    vec![
        ("src".to_string(), src.to_string()),
        ("dst".to_string(), dst.to_string()),
        ("amount".to_string(), amount.to_string()),
        ("includeTokensInfo".to_string(), "true".to_string()),
        ("includeProtocols".to_string(), "true".to_string()),
        ("includeGas".to_string(), "true".to_string()),
    ]
}

/// Query parameters for the swap endpoint.
fn swap_query(
    src: &str,
    dst: &str,
    amount: &str,
    from: &str,
    slippage: f64,
) -> Vec<(String, String)> {
    vec![
        ("src".to_string(), src.to_string()),
        ("dst".to_string(), dst.to_string()),
        ("amount".to_string(), amount.to_string()),
        ("from".to_string(), from.to_string()),
        ("slippage".to_string(), slippage.to_string()),
        ("includeTokensInfo".to_string(), "true".to_string()),
    ]
}
