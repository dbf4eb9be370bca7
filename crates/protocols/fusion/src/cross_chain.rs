//! Cross-chain intent protocol client
//!
//! The parallel client for orders whose settlement spans two chains: the
//! same contract as [`crate::client::FusionService`] plus a destination
//! chain. The cross-chain quoter and relayer are single endpoints (the
//! chain pair travels in the request), so no per-chain registry is needed;
//! order-cache semantics are shared with the same-chain path.

use std::sync::Arc;

use aggregator_client::{ApiClient, ApiError, RetryPolicy};
use prism_core::{ChainId, OrderError, QuoteError, DEFAULT_CHAIN_ID};

use crate::constants::{chain_config, wrapped_or_self, ChainConfig};
use crate::order::FusionOrder;
use crate::order_cache::{OrderCache, Resolution};
use crate::types::{CreatedOrder, FusionQuote, OrderParams, QuoteParams, QuoterResponse, SubmittedOrder};

/// Entry point for the cross-chain intent protocol
pub struct CrossChainService {
    api: Arc<ApiClient>,
    cache: OrderCache,
    retry: RetryPolicy,
}

impl CrossChainService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            cache: OrderCache::new(),
            retry: RetryPolicy::standard(),
        }
    }

    /// Resolve and validate the (source, destination) chain pair. The
    /// cross-chain path services exactly the requests the same-chain path
    /// rejects: a missing or equal destination chain is refused here.
    fn chain_pair(
        params: &QuoteParams,
    ) -> Result<(&'static ChainConfig, &'static ChainConfig), QuoteError> {
        let src_chain_id = params.src_chain_id.unwrap_or(DEFAULT_CHAIN_ID);
        let dst_chain_id = params.dst_chain_id.ok_or_else(|| QuoteError::Unavailable {
            message: "cross-chain quote requires a destination chain".to_string(),
        })?;
        if dst_chain_id == src_chain_id {
            return Err(QuoteError::Unavailable {
                message: format!(
                    "cross-chain quote requires distinct chains, got {src_chain_id} on both sides"
                ),
            });
        }

        let src = chain_config(src_chain_id).ok_or_else(|| QuoteError::Unavailable {
            message: format!("Unsupported source chain id: {src_chain_id}"),
        })?;
        let dst = chain_config(dst_chain_id).ok_or_else(|| QuoteError::Unavailable {
            message: format!("Unsupported destination chain id: {dst_chain_id}"),
        })?;
        Ok((src, dst))
    }

    /// Fetch a cross-chain quote.
    pub async fn get_quote(&self, params: &QuoteParams) -> Result<FusionQuote, QuoteError> {
        let (src_chain, dst_chain) = Self::chain_pair(params)?;
        let query = quote_query(src_chain, dst_chain, params);

        let raw = self
            .retry
            .run(ApiError::is_transient, || {
                self.api
                    .get_json::<QuoterResponse>("/fusion-plus/quoter/v1.0/quote/receive", &query)
            })
            .await
            .map_err(|e| QuoteError::Unavailable {
                message: e.to_string(),
            })?;

        let preset = raw
            .recommended()
            .cloned()
            .ok_or_else(|| QuoteError::Unavailable {
                message: format!(
                    "quote {} has no preset named {:?}",
                    raw.quote_id, raw.recommended_preset
                ),
            })?;

        Ok(FusionQuote {
            dst_amount: preset.auction_start_amount.clone(),
            src_token: raw.src_token,
            dst_token: raw.dst_token,
            gas: raw.gas,
            quote_id: raw.quote_id,
            recommended_preset: raw.recommended_preset,
            preset,
            is_cross_chain: true,
        })
    }

    /// Create an unsigned cross-chain order. Same contract as the
    /// same-chain variant: fresh quote, wrapped substitution per side,
    /// cache under the fresh quote id, placeholder hash.
    pub async fn create_order(&self, params: &OrderParams) -> Result<CreatedOrder, prism_core::Error> {
        let (src_chain, dst_chain) = Self::chain_pair(&params.quote)?;
        let quote = self.get_quote(&params.quote).await?;

        let order = FusionOrder::from_quote(params, &quote, src_chain, dst_chain);
        self.cache
            .store(&quote.quote_id, order.clone(), params.clone())
            .await;

        tracing::info!(
            quote_id = %quote.quote_id,
            src_chain = src_chain.chain_id,
            dst_chain = dst_chain.chain_id,
            "Created cross-chain intent order"
        );

        Ok(CreatedOrder {
            order_hash: String::new(),
            order,
            quote_id: quote.quote_id,
        })
    }

    /// Submit a signed cross-chain order, resolving the submittable object
    /// through the cache exactly like the same-chain path.
    pub async fn submit_signed_order(
        &self,
        signature: &str,
        quote_id: &str,
        src_chain_id: ChainId,
        dst_chain_id: ChainId,
    ) -> Result<SubmittedOrder, OrderError> {
        let order = match self.cache.take(quote_id).await? {
            Resolution::Regenerate(params) => {
                tracing::info!(quote_id, "Regenerating cross-chain order from creation parameters");
                let (src_chain, dst_chain) =
                    Self::chain_pair(&params.quote).map_err(submission_failed)?;
                let quote = self.get_quote(&params.quote).await.map_err(submission_failed)?;
                FusionOrder::from_quote(&params, &quote, src_chain, dst_chain)
            }
            Resolution::Live(order) => *order,
        };

        order.validate_submittable()?;

        let mut body = order.submission_body(Some(signature), quote_id);
        body["srcChainId"] = src_chain_id.into();
        body["dstChainId"] = dst_chain_id.into();

        self.api
            .post_expect_accepted("/fusion-plus/relayer/v1.0/order/submit", &body)
            .await
            .map_err(|e| OrderError::SubmissionFailed {
                message: e.to_string(),
            })?;

        let order_hash = order_signing::order_hash(&order.flat_fields(), src_chain_id)?;
        tracing::info!(quote_id, %order_hash, "Submitted signed cross-chain order");
        Ok(SubmittedOrder {
            order_hash,
            status: "submitted".to_string(),
        })
    }
}

fn submission_failed(err: QuoteError) -> OrderError {
    OrderError::SubmissionFailed {
        message: format!("order regeneration failed: {err}"),
    }
}

/// Cross-chain quoter query: the chain pair plus per-side wrapped
/// substitution.
fn quote_query(
    src_chain: &ChainConfig,
    dst_chain: &ChainConfig,
    params: &QuoteParams,
) -> Vec<(String, String)> {
    vec![
        ("srcChain".to_string(), src_chain.chain_id.to_string()),
        ("dstChain".to_string(), dst_chain.chain_id.to_string()),
        (
            "srcTokenAddress".to_string(),
            wrapped_or_self(src_chain, &params.from_token_address),
        ),
        (
            "dstTokenAddress".to_string(),
            wrapped_or_self(dst_chain, &params.to_token_address),
        ),
        ("amount".to_string(), params.amount.clone()),
        ("walletAddress".to_string(), params.wallet_address.clone()),
        ("enableEstimate".to_string(), "true".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{AggregatorConfig, NATIVE_ASSET_ADDRESS};

    fn test_service() -> CrossChainService {
        let api = Arc::new(ApiClient::new(&AggregatorConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: "test".to_string(),
        }));
        CrossChainService::new(api)
    }

    fn quote_params(src: Option<ChainId>, dst: Option<ChainId>) -> QuoteParams {
        QuoteParams {
            from_token_address: NATIVE_ASSET_ADDRESS.to_string(),
            to_token_address: NATIVE_ASSET_ADDRESS.to_string(),
            amount: "1000000000000000000".to_string(),
            wallet_address: "0x70997970c51812dc3a010c7d01b50e0d17dc79c8".to_string(),
            src_chain_id: src,
            dst_chain_id: dst,
        }
    }

    #[tokio::test]
    async fn same_chain_request_is_rejected() {
        let service = test_service();
        let result = service.get_quote(&quote_params(Some(1), Some(1))).await;
        match result {
            Err(QuoteError::Unavailable { message }) => {
                assert!(message.contains("distinct chains"));
            }
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_destination_chain_is_rejected() {
        let service = test_service();
        let result = service.get_quote(&quote_params(Some(1), None)).await;
        assert!(matches!(result, Err(QuoteError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn unsupported_destination_chain_is_rejected() {
        let service = test_service();
        let result = service.get_quote(&quote_params(Some(1), Some(999))).await;
        match result {
            Err(QuoteError::Unavailable { message }) => {
                assert!(message.contains("destination chain"));
            }
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn query_wraps_each_side_against_its_own_chain() {
        let src_chain = chain_config(1).unwrap();
        let dst_chain = chain_config(137).unwrap();
        let query = quote_query(src_chain, dst_chain, &quote_params(Some(1), Some(137)));

        let get = |key: &str| &query.iter().find(|(k, _)| k == key).unwrap().1;
        // Native on Ethereum becomes WETH, native on Polygon becomes the
        // Polygon wrapped asset
        assert_eq!(get("srcTokenAddress"), src_chain.wrapped_native);
        assert_eq!(get("dstTokenAddress"), dst_chain.wrapped_native);
        assert_eq!(get("srcChain"), "1");
        assert_eq!(get("dstChain"), "137");
    }
}
