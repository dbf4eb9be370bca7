//! Response types for the classic swap endpoints

use prism_core::Token;
use serde::{Deserialize, Serialize};

/// One venue's share of a route hop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenuePart {
    pub name: String,
    pub part: f64,
    #[serde(rename = "fromTokenAddress")]
    pub from_token_address: String,
    #[serde(rename = "toTokenAddress")]
    pub to_token_address: String,
}

/// Quote from the classic swap protocol.
///
/// `protocols` is the upstream's nested route breakdown: paths, then hops,
/// then venue splits within a hop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassicQuote {
    #[serde(rename = "dstAmount")]
    pub dst_amount: String,
    #[serde(rename = "srcToken")]
    pub src_token: Token,
    #[serde(rename = "dstToken")]
    pub dst_token: Token,
    #[serde(default)]
    pub protocols: Vec<Vec<Vec<VenuePart>>>,
    #[serde(default)]
    pub gas: u64,
}

impl ClassicQuote {
    /// Distinct venue names across the whole route breakdown, in first-seen
    /// order.
    pub fn venue_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for path in &self.protocols {
            for hop in path {
                for part in hop {
                    if !names.contains(&part.name) {
                        names.push(part.name.clone());
                    }
                }
            }
        }
        names
    }
}

/// Ready-to-sign on-chain transaction descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapTransaction {
    pub from: String,
    pub to: String,
    pub data: String,
    pub value: String,
    pub gas: u64,
    #[serde(rename = "gasPrice")]
    pub gas_price: String,
}

/// Swap response: the quote fields plus the transaction to sign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapResponse {
    #[serde(flatten)]
    pub quote: ClassicQuote,
    pub tx: SwapTransaction,
}

/// Allowance read for (token, wallet) against the router contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allowance {
    pub allowance: String,
}

/// Approval transaction payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalTransaction {
    pub to: String,
    pub data: String,
    pub value: String,
    #[serde(rename = "gasPrice")]
    pub gas_price: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_deserializes_upstream_shape() {
        let json = serde_json::json!({
            "dstAmount": "1000000",
            "srcToken": {
                "address": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
                "symbol": "WETH", "name": "Wrapped Ether", "decimals": 18
            },
            "dstToken": {
                "address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                "symbol": "USDC", "name": "USD Coin", "decimals": 6
            },
            "protocols": [[[
                {"name": "UNISWAP_V3", "part": 60.0,
                 "fromTokenAddress": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
                 "toTokenAddress": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"},
                {"name": "CURVE", "part": 40.0,
                 "fromTokenAddress": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
                 "toTokenAddress": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"}
            ]]],
            "gas": 250000
        });

        let quote: ClassicQuote = serde_json::from_value(json).unwrap();
        assert_eq!(quote.dst_amount, "1000000");
        assert_eq!(quote.gas, 250000);
        assert_eq!(quote.venue_names(), vec!["UNISWAP_V3", "CURVE"]);
    }

    #[test]
    fn venue_names_deduplicate_across_hops() {
        let part = |name: &str| VenuePart {
            name: name.to_string(),
            part: 100.0,
            from_token_address: "0xaa".to_string(),
            to_token_address: "0xbb".to_string(),
        };
        let quote = ClassicQuote {
            dst_amount: "1".to_string(),
            src_token: Token {
                address: "0xaa".to_string(),
                symbol: "A".to_string(),
                name: "A".to_string(),
                decimals: 18,
            },
            dst_token: Token {
                address: "0xbb".to_string(),
                symbol: "B".to_string(),
                name: "B".to_string(),
                decimals: 18,
            },
            protocols: vec![vec![vec![part("UNISWAP_V3")], vec![part("UNISWAP_V3")]]],
            gas: 0,
        };
        assert_eq!(quote.venue_names(), vec!["UNISWAP_V3"]);
    }
}
