//! Cross-protocol route comparison
//!
//! Fetches quotes from the classic, intent and cross-chain intent protocols
//! concurrently, absorbs individual failures, and ranks the survivors into
//! annotated routes. Protocol characteristics are fixed: intent routes are
//! always MEV-protected and gasless, classic never is.

use alloy_primitives::U256;
use classic::{ClassicClient, ClassicQuote};
use fusion::{CrossChainService, FusionQuote, FusionService, QuoteParams};
use prism_core::ChainId;
use serde::{Deserialize, Serialize};

/// Which protocol a route executes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Protocol {
    Classic,
    Intent,
    IntentCrossChain,
}

/// One ranked execution route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub protocol: Protocol,
    pub name: String,
    /// Base-unit integer string
    pub dst_amount: String,
    /// Display-currency estimate, or "Gas-free" for gasless routes
    pub gas_cost: String,
    pub execution_time: String,
    pub mev_protected: bool,
    pub gasless: bool,
    pub cross_chain: bool,
    /// Heuristic confidence score (0-100)
    pub confidence: u8,
    /// Underlying venue names, where the protocol reports them
    pub venues: Vec<String>,
    pub recommended: bool,
}

/// Quotes gathered for one comparison; a `None` is a fetch that failed or
/// was not applicable.
#[derive(Debug, Default)]
pub struct QuoteSet {
    pub classic: Option<ClassicQuote>,
    pub fusion: Option<FusionQuote>,
    pub cross_chain: Option<FusionQuote>,
}

/// Parameters for a comparison fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub chain_id: ChainId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dst_chain_id: Option<ChainId>,
    pub src: String,
    pub dst: String,
    /// Base-unit integer string
    pub amount: String,
    pub wallet_address: String,
}

/// Gas units -> display currency, using the fixed estimation multiplier
/// (20 gwei gas price at a round reference price).
fn display_gas_cost(gas: u64) -> String {
    format!("${:.2}", gas as f64 / 1e9 * 20.0)
}

/// Fetch quotes from all applicable protocols concurrently.
///
/// Each fetch is caught independently: one protocol failing must not block
/// or fail the others. The cross-chain fetch only runs when the request
/// actually spans two chains.
pub async fn fetch_all_quotes(
    classic: &ClassicClient,
    fusion: &FusionService,
    cross_chain: &CrossChainService,
    request: &CompareRequest,
) -> QuoteSet {
    let params = QuoteParams {
        from_token_address: request.src.clone(),
        to_token_address: request.dst.clone(),
        amount: request.amount.clone(),
        wallet_address: request.wallet_address.clone(),
        src_chain_id: Some(request.chain_id),
        dst_chain_id: None,
    };

    let spans_chains = request
        .dst_chain_id
        .is_some_and(|dst| dst != request.chain_id);

    let classic_fut = classic.get_quote(request.chain_id, &request.src, &request.dst, &request.amount);
    let fusion_fut = fusion.get_quote(&params);
    let cross_fut = async {
        if !spans_chains {
            return None;
        }
        let mut params = params.clone();
        params.dst_chain_id = request.dst_chain_id;
        Some(cross_chain.get_quote(&params).await)
    };

    let (classic_result, fusion_result, cross_result) =
        tokio::join!(classic_fut, fusion_fut, cross_fut);

    QuoteSet {
        classic: classic_result
            .map_err(|e| tracing::warn!("Classic quote omitted from comparison: {}", e))
            .ok(),
        fusion: fusion_result
            .map_err(|e| tracing::warn!("Intent quote omitted from comparison: {}", e))
            .ok(),
        cross_chain: cross_result.and_then(|r| {
            r.map_err(|e| tracing::warn!("Cross-chain quote omitted from comparison: {}", e))
                .ok()
        }),
    }
}

/// Rank the fetched quotes into routes.
///
/// The intent route is the default recommendation when present (gasless and
/// MEV-protected at comparable output); order is recommended-first, then
/// descending destination amount, stable on ties. All fetches failed ->
/// empty vec, and the caller surfaces a single no-routes condition.
pub fn compare_routes(quotes: &QuoteSet) -> Vec<Route> {
    let mut routes = Vec::new();

    if let Some(quote) = &quotes.fusion {
        routes.push(Route {
            protocol: Protocol::Intent,
            name: "Fusion (MEV Protected)".to_string(),
            dst_amount: quote.dst_amount.clone(),
            gas_cost: "Gas-free".to_string(),
            execution_time: "~30s".to_string(),
            mev_protected: true,
            gasless: true,
            cross_chain: false,
            confidence: 92,
            venues: vec!["Fusion Resolver Network".to_string()],
            recommended: false,
        });
    }

    if let Some(quote) = &quotes.classic {
        routes.push(Route {
            protocol: Protocol::Classic,
            name: "Classic Swap".to_string(),
            dst_amount: quote.dst_amount.clone(),
            gas_cost: display_gas_cost(quote.gas),
            execution_time: "~15s".to_string(),
            mev_protected: false,
            gasless: false,
            cross_chain: false,
            confidence: 95,
            venues: quote.venue_names(),
            recommended: false,
        });
    }

    if let Some(quote) = &quotes.cross_chain {
        routes.push(Route {
            protocol: Protocol::IntentCrossChain,
            name: "Fusion+ (Cross-Chain)".to_string(),
            dst_amount: quote.dst_amount.clone(),
            gas_cost: "Gas-free".to_string(),
            execution_time: "~3min".to_string(),
            mev_protected: true,
            gasless: true,
            cross_chain: true,
            confidence: 88,
            venues: vec!["Fusion Resolver Network".to_string()],
            recommended: false,
        });
    }

    // The intent route is the default recommendation; without it, the first
    // fetched route takes the flag.
    let recommended_idx = routes
        .iter()
        .position(|r| r.protocol == Protocol::Intent)
        .or(if routes.is_empty() { None } else { Some(0) });
    if let Some(idx) = recommended_idx {
        routes[idx].recommended = true;
    }

    routes.sort_by(|a, b| {
        b.recommended
            .cmp(&a.recommended)
            .then_with(|| dst_amount_value(b).cmp(&dst_amount_value(a)))
    });

    routes
}

fn dst_amount_value(route: &Route) -> U256 {
    U256::from_str_radix(&route.dst_amount, 10).unwrap_or(U256::ZERO)
}
