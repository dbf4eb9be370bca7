//! Order object cache
//!
//! An order created for signing cannot be rebuilt from the JSON the caller
//! holds: the auction extension and fill behavior never cross the signing
//! boundary. The cache keeps the live order and its creation parameters
//! keyed by quote id until the one submission that consumes them.

use std::collections::HashMap;

use prism_core::OrderError;
use tokio::sync::Mutex;

use crate::order::FusionOrder;
use crate::types::OrderParams;

/// How a submittable order was resolved
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Creation parameters were found; the caller re-invokes order
    /// construction for a structurally fresh object (preferred path).
    Regenerate(OrderParams),
    /// Only the live object was found; use it directly.
    Live(Box<FusionOrder>),
}

#[derive(Default)]
struct CacheInner {
    orders: HashMap<String, FusionOrder>,
    params: HashMap<String, OrderParams>,
}

/// Process-lifetime cache mapping quote ids to live orders and creation
/// parameters. Entries are evicted on resolution (at-most-once consumption);
/// an entry never submitted lives until process exit, an accepted bound
/// given order lifetimes of seconds to minutes.
#[derive(Default)]
pub struct OrderCache {
    inner: Mutex<CacheInner>,
}

impl OrderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly created order under its quote id.
    pub async fn store(&self, quote_id: &str, order: FusionOrder, params: OrderParams) {
        let mut inner = self.inner.lock().await;
        inner.orders.insert(quote_id.to_string(), order);
        inner.params.insert(quote_id.to_string(), params);
        tracing::debug!(quote_id, entries = inner.params.len(), "Cached order");
    }

    /// Resolve and consume the entry for `quote_id`.
    ///
    /// Both maps are cleared for the id regardless of which path resolves,
    /// so a second submission attempt fails with `NotReconstructable`
    /// instead of reusing a stale order.
    pub async fn take(&self, quote_id: &str) -> Result<Resolution, OrderError> {
        let mut inner = self.inner.lock().await;
        let params = inner.params.remove(quote_id);
        let order = inner.orders.remove(quote_id);

        match (params, order) {
            (Some(params), _) => Ok(Resolution::Regenerate(params)),
            (None, Some(order)) => Ok(Resolution::Live(Box::new(order))),
            (None, None) => Err(OrderError::NotReconstructable {
                quote_id: quote_id.to_string(),
            }),
        }
    }

    /// Number of live entries (diagnostics only).
    pub async fn len(&self) -> usize {
        self.inner.lock().await.params.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::chain_config;
    use crate::types::{FusionQuote, Preset, QuoteParams};

    fn test_params(wallet: &str) -> OrderParams {
        OrderParams {
            quote: QuoteParams {
                from_token_address: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".to_string(),
                to_token_address: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(),
                amount: "1000000000000000000".to_string(),
                wallet_address: wallet.to_string(),
                src_chain_id: Some(1),
                dst_chain_id: None,
            },
            receiver: None,
            permit: None,
        }
    }

    fn test_order(params: &OrderParams) -> FusionOrder {
        let quote = FusionQuote {
            dst_amount: "1000000".to_string(),
            src_token: None,
            dst_token: None,
            gas: 0,
            quote_id: "q-1".to_string(),
            recommended_preset: "fast".to_string(),
            preset: Preset {
                auction_start_amount: "1000000".to_string(),
                auction_end_amount: "990000".to_string(),
                auction_duration: 180,
                start_auction_in: 12,
                allow_partial_fills: true,
                allow_multiple_fills: false,
            },
            is_cross_chain: false,
        };
        FusionOrder::from_quote(params, &quote, chain_config(1).unwrap(), chain_config(1).unwrap())
    }

    #[tokio::test]
    async fn take_prefers_regeneration_and_evicts() {
        let cache = OrderCache::new();
        let params = test_params("0x70997970c51812dc3a010c7d01b50e0d17dc79c8");
        cache.store("q-1", test_order(&params), params.clone()).await;

        match cache.take("q-1").await.unwrap() {
            Resolution::Regenerate(resolved) => assert_eq!(resolved, params),
            Resolution::Live(_) => panic!("params entry must win over the live object"),
        }

        // At-most-once: both entries are gone
        assert!(cache.is_empty().await);
        match cache.take("q-1").await {
            Err(OrderError::NotReconstructable { quote_id }) => assert_eq!(quote_id, "q-1"),
            other => panic!("Expected NotReconstructable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn take_falls_back_to_live_order() {
        let cache = OrderCache::new();
        let params = test_params("0x70997970c51812dc3a010c7d01b50e0d17dc79c8");
        let order = test_order(&params);

        // Simulate a params entry lost to a partial store
        {
            let mut inner = cache.inner.lock().await;
            inner.orders.insert("q-2".to_string(), order.clone());
        }

        match cache.take("q-2").await.unwrap() {
            Resolution::Live(resolved) => assert_eq!(resolved.salt, order.salt),
            Resolution::Regenerate(_) => panic!("no params entry exists"),
        }
        assert!(cache.take("q-2").await.is_err());
    }

    #[tokio::test]
    async fn unknown_quote_id_is_not_reconstructable() {
        let cache = OrderCache::new();
        assert!(matches!(
            cache.take("missing").await,
            Err(OrderError::NotReconstructable { .. })
        ));
    }

    #[tokio::test]
    async fn entries_are_independent_per_quote_id() {
        let cache = OrderCache::new();
        let a = test_params("0x70997970c51812dc3a010c7d01b50e0d17dc79c8");
        let b = test_params("0x3c44cdddb6a900fa2b585dd299e03d12fa4293bc");
        cache.store("q-a", test_order(&a), a.clone()).await;
        cache.store("q-b", test_order(&b), b.clone()).await;

        cache.take("q-a").await.unwrap();
        // Consuming one entry leaves the other intact
        assert_eq!(cache.len().await, 1);
        assert!(cache.take("q-b").await.is_ok());
    }
}
