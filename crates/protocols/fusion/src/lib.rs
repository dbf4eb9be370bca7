//! Intent-based (Fusion) protocol client
//!
//! Quotes and the full order lifecycle for the gasless, MEV-protected intent
//! protocol: per-chain client instances created lazily and cached, native ->
//! wrapped asset substitution, preset-based quoting, order construction, the
//! order object cache bridging create and submit, and signed-order
//! submission. `cross_chain` is the parallel client for orders whose
//! settlement spans two chains.

pub mod client;
pub mod constants;
pub mod cross_chain;
pub mod order;
pub mod order_cache;
pub mod types;

pub use client::FusionService;
pub use constants::{chain_config, ChainConfig, SUPPORTED_CHAINS};
pub use cross_chain::CrossChainService;
pub use order::FusionOrder;
pub use order_cache::{OrderCache, Resolution};
pub use types::{CreatedOrder, FusionQuote, OrderParams, OrderStatus, QuoteParams, SubmittedOrder};
