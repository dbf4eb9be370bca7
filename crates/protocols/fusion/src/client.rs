//! Same-chain intent protocol client
//!
//! One [`FusionClient`] per target chain, created lazily on first use and
//! cached for the process lifetime: the binding (network config, credential)
//! is read-only, so rebuilding per request would be pure waste.

use std::collections::HashMap;
use std::sync::Arc;

use aggregator_client::{ApiClient, ApiError, RetryPolicy};
use prism_core::{ChainId, OrderError, QuoteError, StatusError, DEFAULT_CHAIN_ID};
use tokio::sync::RwLock;

use crate::constants::{chain_config, wrapped_or_self, ChainConfig};
use crate::order::FusionOrder;
use crate::order_cache::{OrderCache, Resolution};
use crate::types::{
    CreatedOrder, FusionQuote, OrderParams, OrderStatus, QuoteParams, QuoterResponse,
    SubmittedOrder,
};

/// Client bound to a single chain
pub struct FusionClient {
    chain: &'static ChainConfig,
    api: Arc<ApiClient>,
    retry: RetryPolicy,
}

impl FusionClient {
    fn new(chain: &'static ChainConfig, api: Arc<ApiClient>) -> Self {
        Self {
            chain,
            api,
            retry: RetryPolicy::standard(),
        }
    }

    pub fn chain(&self) -> &'static ChainConfig {
        self.chain
    }

    /// Fetch a quote and normalize it around the recommended preset.
    async fn get_quote(&self, params: &QuoteParams) -> Result<FusionQuote, QuoteError> {
        let path = format!("/fusion/quoter/v1.0/{}/quote/receive", self.chain.chain_id);
        let query = quote_query(self.chain, params);

        let raw = self
            .retry
            .run(ApiError::is_transient, || {
                self.api.get_json::<QuoterResponse>(&path, &query)
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
            is_cross_chain: false,
        })
    }

    /// POST an order body to the relayer. Never retried: a duplicate submit
    /// places a duplicate order.
    async fn submit(&self, body: &serde_json::Value) -> Result<(), OrderError> {
        let path = format!("/fusion/relayer/v1.0/{}/order/submit", self.chain.chain_id);
        self.api
            .post_expect_accepted(&path, body)
            .await
            .map_err(|e| OrderError::SubmissionFailed {
                message: e.to_string(),
            })
    }

    async fn order_status(&self, order_hash: &str) -> Result<OrderStatus, StatusError> {
        let path = format!(
            "/fusion/orders/v1.0/{}/order/status/{}",
            self.chain.chain_id, order_hash
        );
        self.api
            .get_json::<OrderStatus>(&path, &[])
            .await
            .map_err(|e| StatusError::Unavailable {
                message: e.to_string(),
            })
    }
}

/// Entry point for the same-chain intent protocol
pub struct FusionService {
    api: Arc<ApiClient>,
    clients: RwLock<HashMap<ChainId, Arc<FusionClient>>>,
    cache: OrderCache,
}

impl FusionService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            clients: RwLock::new(HashMap::new()),
            cache: OrderCache::new(),
        }
    }

    /// Get or create the client for a chain.
    async fn client_for(&self, chain_id: ChainId) -> Result<Arc<FusionClient>, QuoteError> {
        {
            let clients = self.clients.read().await;
            if let Some(client) = clients.get(&chain_id) {
                return Ok(client.clone());
            }
        }

        let chain = chain_config(chain_id).ok_or_else(|| QuoteError::Unavailable {
            message: format!("Unsupported chain id: {chain_id}"),
        })?;

        let mut clients = self.clients.write().await;
        // Double-check after acquiring the write lock
        if let Some(client) = clients.get(&chain_id) {
            return Ok(client.clone());
        }

        tracing::info!(chain_id, chain = chain.name, "Creating intent protocol client");
        let client = Arc::new(FusionClient::new(chain, self.api.clone()));
        clients.insert(chain_id, client.clone());
        Ok(client)
    }

    /// Fetch an intent quote. Cross-chain requests are rejected up front so
    /// the caller can redirect to the cross-chain path.
    pub async fn get_quote(&self, params: &QuoteParams) -> Result<FusionQuote, QuoteError> {
        let src_chain_id = params.src_chain_id.unwrap_or(DEFAULT_CHAIN_ID);
        if let Some(dst_chain_id) = params.dst_chain_id {
            if dst_chain_id != src_chain_id {
                return Err(QuoteError::CrossChainUnsupported {
                    src_chain_id,
                    dst_chain_id,
                });
            }
        }

        let client = self.client_for(src_chain_id).await?;
        client.get_quote(params).await
    }

    /// Create an unsigned order.
    ///
    /// Always re-derives a quote so the order binds current market
    /// conditions; a caller-supplied quote id is never trusted here. The
    /// live order and its creation parameters go into the cache under the
    /// fresh quote id.
    pub async fn create_order(&self, params: &OrderParams) -> Result<CreatedOrder, prism_core::Error> {
        let src_chain_id = params.quote.src_chain_id.unwrap_or(DEFAULT_CHAIN_ID);
        let quote = self.get_quote(&params.quote).await?;
        let client = self.client_for(src_chain_id).await?;

        let order = FusionOrder::from_quote(params, &quote, client.chain(), client.chain());
        self.cache
            .store(&quote.quote_id, order.clone(), params.clone())
            .await;

        tracing::info!(
            quote_id = %quote.quote_id,
            chain_id = src_chain_id,
            maker = %order.maker,
            "Created intent order"
        );

        Ok(CreatedOrder {
            // The true hash is only known after successful submission
            order_hash: String::new(),
            order,
            quote_id: quote.quote_id,
        })
    }

    /// Submit a live order object.
    pub async fn submit_order(
        &self,
        order: &FusionOrder,
        quote_id: &str,
        chain_id: ChainId,
    ) -> Result<SubmittedOrder, OrderError> {
        let client = self.relayer_client(chain_id).await?;
        client.submit(&order.submission_body(None, quote_id)).await?;

        let order_hash = order_signing::order_hash(&order.flat_fields(), chain_id)?;
        tracing::info!(quote_id, %order_hash, "Submitted intent order");
        Ok(SubmittedOrder {
            order_hash,
            status: "submitted".to_string(),
        })
    }

    /// Submit a signed order.
    ///
    /// The transported order is a value-only serialization and is never
    /// submitted as-is; a submittable object is resolved from the cache —
    /// regenerated from creation parameters when possible, the cached live
    /// object otherwise — then validated before the relayer call.
    pub async fn submit_signed_order(
        &self,
        transported_order: &serde_json::Value,
        signature: &str,
        quote_id: &str,
        chain_id: ChainId,
    ) -> Result<SubmittedOrder, OrderError> {
        tracing::debug!(
            quote_id,
            maker = transported_order
                .get("maker")
                .and_then(|m| m.as_str())
                .unwrap_or("?"),
            "Resolving signed order for submission"
        );

        let order = match self.cache.take(quote_id).await? {
            Resolution::Regenerate(params) => {
                tracing::info!(quote_id, "Regenerating order from creation parameters");
                let quote = self.get_quote(&params.quote).await.map_err(|e| {
                    OrderError::SubmissionFailed {
                        message: format!("order regeneration failed: {e}"),
                    }
                })?;
                let client = self.relayer_client(chain_id).await?;
                FusionOrder::from_quote(&params, &quote, client.chain(), client.chain())
            }
            Resolution::Live(order) => *order,
        };

        order.validate_submittable()?;

        let client = self.relayer_client(chain_id).await?;
        client
            .submit(&order.submission_body(Some(signature), quote_id))
            .await?;

        let order_hash = order_signing::order_hash(&order.flat_fields(), chain_id)?;
        tracing::info!(quote_id, %order_hash, "Submitted signed intent order");
        Ok(SubmittedOrder {
            order_hash,
            status: "submitted".to_string(),
        })
    }

    /// Read the status of a submitted order.
    pub async fn get_order_status(
        &self,
        order_hash: &str,
        chain_id: ChainId,
    ) -> Result<OrderStatus, StatusError> {
        let client =
            self.client_for(chain_id)
                .await
                .map_err(|e| StatusError::Unavailable {
                    message: e.to_string(),
                })?;
        client.order_status(order_hash).await
    }

    /// Diagnostics: number of orders awaiting submission.
    pub async fn pending_orders(&self) -> usize {
        self.cache.len().await
    }

    async fn relayer_client(&self, chain_id: ChainId) -> Result<Arc<FusionClient>, OrderError> {
        self.client_for(chain_id)
            .await
            .map_err(|e| OrderError::SubmissionFailed {
                message: e.to_string(),
            })
    }
}

/// Quoter query parameters, with the native sentinel substituted.
fn quote_query(chain: &ChainConfig, params: &QuoteParams) -> Vec<(String, String)> {
    vec![
        (
            "src".to_string(),
            wrapped_or_self(chain, &params.from_token_address),
        ),
        (
            "dst".to_string(),
            wrapped_or_self(chain, &params.to_token_address),
        ),
        ("amount".to_string(), params.amount.clone()),
        ("from".to_string(), params.wallet_address.clone()),
        ("enableEstimate".to_string(), "true".to_string()),
        ("includeTokensInfo".to_string(), "true".to_string()),
    ]
}
