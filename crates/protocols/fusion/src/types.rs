//! Request parameters and response types for the intent protocol

use prism_core::{ChainId, Token};
use serde::{Deserialize, Serialize};

use crate::order::FusionOrder;

/// Quote request parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
    pub from_token_address: String,
    pub to_token_address: String,
    /// Base-unit integer string
    pub amount: String,
    pub wallet_address: String,
    /// Defaults to chain 1 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_chain_id: Option<ChainId>,
    /// Present and different from `src_chain_id` only on the cross-chain path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dst_chain_id: Option<ChainId>,
}

/// Order creation parameters: the quote parameters plus optional receiver
/// and permit. Cached verbatim so an equivalent order can be regenerated at
/// submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderParams {
    #[serde(flatten)]
    pub quote: QuoteParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit: Option<String>,
}

/// One auction parameter preset offered alongside a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub auction_start_amount: String,
    pub auction_end_amount: String,
    #[serde(default)]
    pub auction_duration: u64,
    #[serde(default)]
    pub start_auction_in: u64,
    #[serde(default)]
    pub allow_partial_fills: bool,
    #[serde(default)]
    pub allow_multiple_fills: bool,
}

/// The quoter's preset map. Upstream names the presets; `custom` appears
/// only when the caller requested one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Presets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fast: Option<Preset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<Preset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow: Option<Preset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Preset>,
}

impl Presets {
    pub fn get(&self, name: &str) -> Option<&Preset> {
        match name {
            "fast" => self.fast.as_ref(),
            "medium" => self.medium.as_ref(),
            "slow" => self.slow.as_ref(),
            "custom" => self.custom.as_ref(),
            _ => None,
        }
    }
}

/// Raw quoter response. The flat `dstAmount` field is superseded by the
/// preset structure and deserialized only for upstream compatibility.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoterResponse {
    pub quote_id: String,
    #[serde(default)]
    pub presets: Presets,
    pub recommended_preset: String,
    #[serde(default)]
    pub src_token: Option<Token>,
    #[serde(default)]
    pub dst_token: Option<Token>,
    #[serde(default)]
    pub gas: u64,
    #[serde(default)]
    #[allow(dead_code)]
    pub dst_amount: Option<String>,
}

impl QuoterResponse {
    /// The preset flagged as recommended.
    pub fn recommended(&self) -> Option<&Preset> {
        self.presets.get(&self.recommended_preset)
    }
}

/// Normalized quote returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionQuote {
    /// Starting auction amount of the recommended preset
    pub dst_amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dst_token: Option<Token>,
    pub gas: u64,
    pub quote_id: String,
    pub recommended_preset: String,
    /// The recommended preset itself; order construction reads its fill
    /// flags and auction parameters.
    pub preset: Preset,
    pub is_cross_chain: bool,
}

/// Result of order creation. `order_hash` is an empty placeholder; the true
/// hash is only known after successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrder {
    pub order_hash: String,
    pub order: FusionOrder,
    pub quote_id: String,
}

/// Result of order submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedOrder {
    pub order_hash: String,
    pub status: String,
}

/// Order status read
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(start: &str) -> serde_json::Value {
        serde_json::json!({
            "auctionStartAmount": start,
            "auctionEndAmount": "990000",
            "auctionDuration": 180,
            "allowPartialFills": true,
            "allowMultipleFills": false
        })
    }

    #[test]
    fn quoter_response_selects_recommended_preset() {
        let json = serde_json::json!({
            "quoteId": "q-123",
            "recommendedPreset": "medium",
            "presets": {
                "fast": preset("995000"),
                "medium": preset("1000000"),
                "slow": preset("1005000")
            },
            "dstAmount": "994000"
        });

        let response: QuoterResponse = serde_json::from_value(json).unwrap();
        let recommended = response.recommended().unwrap();
        // The preset's starting amount wins over the superseded flat field
        assert_eq!(recommended.auction_start_amount, "1000000");
    }

    #[test]
    fn quoter_response_unknown_recommended_preset() {
        let json = serde_json::json!({
            "quoteId": "q-123",
            "recommendedPreset": "turbo",
            "presets": { "fast": preset("995000") }
        });

        let response: QuoterResponse = serde_json::from_value(json).unwrap();
        assert!(response.recommended().is_none());
    }

    #[test]
    fn order_params_flatten_round_trip() {
        let params = OrderParams {
            quote: QuoteParams {
                from_token_address: "0xaa".into(),
                to_token_address: "0xbb".into(),
                amount: "1000".into(),
                wallet_address: "0xcc".into(),
                src_chain_id: Some(1),
                dst_chain_id: None,
            },
            receiver: None,
            permit: None,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["fromTokenAddress"], "0xaa");
        assert_eq!(json["srcChainId"], 1);
        let parsed: OrderParams = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, params);
    }
}
