//! Chain table and maker-traits flags for the intent protocol

use alloy_primitives::U256;
use prism_core::{is_native_asset, ChainId};

/// Network binding for one supported chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    pub chain_id: ChainId,
    pub name: &'static str,
    /// Read endpoint for chain state
    pub rpc_url: &'static str,
    /// Wrapped-native asset. The settlement contract cannot hold native
    /// assets, so quotes and orders substitute this for the sentinel.
    pub wrapped_native: &'static str,
}

/// Chains the intent protocol settles on.
pub const SUPPORTED_CHAINS: &[ChainConfig] = &[
    ChainConfig {
        chain_id: 1,
        name: "Ethereum",
        rpc_url: "https://eth.llamarpc.com",
        wrapped_native: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
    },
    ChainConfig {
        chain_id: 56,
        name: "BNB Chain",
        rpc_url: "https://bsc-dataseed.binance.org",
        wrapped_native: "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c",
    },
    ChainConfig {
        chain_id: 137,
        name: "Polygon",
        rpc_url: "https://polygon-rpc.com",
        wrapped_native: "0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270",
    },
    ChainConfig {
        chain_id: 42161,
        name: "Arbitrum",
        rpc_url: "https://arb1.arbitrum.io/rpc",
        wrapped_native: "0x82af49447d8a07e3bd95bd0d56f35241523fbab1",
    },
    ChainConfig {
        chain_id: 10,
        name: "Optimism",
        rpc_url: "https://mainnet.optimism.io",
        wrapped_native: "0x4200000000000000000000000000000000000006",
    },
    ChainConfig {
        chain_id: 8453,
        name: "Base",
        rpc_url: "https://mainnet.base.org",
        wrapped_native: "0x4200000000000000000000000000000000000006",
    },
];

/// Look up the network binding for a chain, if supported.
pub fn chain_config(chain_id: ChainId) -> Option<&'static ChainConfig> {
    SUPPORTED_CHAINS.iter().find(|c| c.chain_id == chain_id)
}

/// Substitute the native sentinel with the chain's wrapped-native address;
/// any other address passes through unchanged (lowercased for upstream
/// consistency).
pub fn wrapped_or_self(chain: &ChainConfig, address: &str) -> String {
    if is_native_asset(address) {
        chain.wrapped_native.to_string()
    } else {
        address.to_ascii_lowercase()
    }
}

// Maker-traits bitfield flags (uint256 bit positions).
const NO_PARTIAL_FILLS_BIT: usize = 255;
const ALLOW_MULTIPLE_FILLS_BIT: usize = 254;

/// Encode order behavior flags into the maker-traits bitfield, transported
/// as a decimal string.
pub fn maker_traits(allow_partial_fills: bool, allow_multiple_fills: bool) -> String {
    let mut traits = U256::ZERO;
    if !allow_partial_fills {
        traits.set_bit(NO_PARTIAL_FILLS_BIT, true);
    }
    if allow_multiple_fills {
        traits.set_bit(ALLOW_MULTIPLE_FILLS_BIT, true);
    }
    traits.to_string()
}
