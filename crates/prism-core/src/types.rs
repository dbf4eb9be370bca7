//! Core type definitions for Prism

use serde::{Deserialize, Serialize};

/// EVM chain identifier (1 = Ethereum mainnet, 137 = Polygon, ...)
pub type ChainId = u64;

/// Chain used when a request does not specify one.
pub const DEFAULT_CHAIN_ID: ChainId = 1;

/// Sentinel address the aggregation API uses for the chain's native asset.
///
/// Protocol clients must recognize this value; the intent protocol cannot
/// settle native assets and substitutes the chain's wrapped equivalent.
pub const NATIVE_ASSET_ADDRESS: &str = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";

/// True if `address` is the native-asset sentinel (case-insensitive; the
/// sentinel circulates both checksummed and lowercased).
pub fn is_native_asset(address: &str) -> bool {
    address.eq_ignore_ascii_case(NATIVE_ASSET_ADDRESS)
}

/// Token metadata as returned by the aggregation API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Hex address (checksummed or lowercase)
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u32,
}

impl Token {
    pub fn is_native(&self) -> bool {
        is_native_asset(&self.address)
    }
}
