//! Unsigned intent order construction and validation
//!
//! A [`FusionOrder`] is more than the eight signed fields: the auction
//! extension is required at submission but is not part of the signature and
//! does not survive the caller-side JSON round trip of the signing shape.
//! That asymmetry is why created orders are kept in the
//! [`crate::order_cache::OrderCache`] until submitted.

use alloy_primitives::U256;
use order_signing::{FlatOrderFields, SETTLEMENT_CONTRACT};
use prism_core::OrderError;
use serde::{Deserialize, Serialize};

use crate::constants::{maker_traits, wrapped_or_self, ChainConfig};
use crate::types::{FusionQuote, OrderParams};

/// Auction parameters carried by the extension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDetails {
    pub start_amount: String,
    pub end_amount: String,
    pub duration_secs: u64,
    pub start_delay_secs: u64,
}

/// An unsigned intent order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionOrder {
    /// Large integer, string-encoded
    pub salt: String,
    pub maker: String,
    pub receiver: String,
    pub maker_asset: String,
    pub taker_asset: String,
    pub making_amount: String,
    pub taking_amount: String,
    /// Behavior-flag bitfield, string-encoded
    pub maker_traits: String,
    /// Hex-encoded auction extension. Required by the relayer, not covered
    /// by the signature.
    pub extension: String,
    pub auction: AuctionDetails,
}

impl FusionOrder {
    /// Build an order from creation parameters and a freshly derived quote.
    ///
    /// The maker is the wallet that requested the quote; the receiver
    /// defaults to the maker. Asset addresses go through wrapped-native
    /// substitution against their own chain's table so they match what the
    /// quote was priced against; same-chain orders pass the same binding
    /// for both sides.
    pub fn from_quote(
        params: &OrderParams,
        quote: &FusionQuote,
        src_chain: &ChainConfig,
        dst_chain: &ChainConfig,
    ) -> Self {
        let maker = params.quote.wallet_address.to_ascii_lowercase();
        let receiver = params
            .receiver
            .as_deref()
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| maker.clone());

        let auction = AuctionDetails {
            start_amount: quote.preset.auction_start_amount.clone(),
            end_amount: quote.preset.auction_end_amount.clone(),
            duration_secs: quote.preset.auction_duration,
            start_delay_secs: quote.preset.start_auction_in,
        };

        Self {
            salt: random_salt(),
            maker,
            receiver,
            maker_asset: wrapped_or_self(src_chain, &params.quote.from_token_address),
            taker_asset: wrapped_or_self(dst_chain, &params.quote.to_token_address),
            making_amount: params.quote.amount.clone(),
            taking_amount: quote.preset.auction_start_amount.clone(),
            maker_traits: maker_traits(
                quote.preset.allow_partial_fills,
                quote.preset.allow_multiple_fills,
            ),
            extension: encode_extension(&auction),
            auction,
        }
    }

    /// Check the order is structurally submittable. A serialized order that
    /// lost its extension, or whose numeric fields no longer parse, fails
    /// here instead of producing a confusing relayer rejection.
    pub fn validate_submittable(&self) -> Result<(), OrderError> {
        let numeric = |name: &str, value: &str| -> Result<U256, OrderError> {
            U256::from_str_radix(value, 10).map_err(|_| OrderError::InvalidOrderObject {
                reason: format!("{name} is not a decimal integer: {value:?}"),
            })
        };

        if numeric("salt", &self.salt)?.is_zero() {
            return Err(OrderError::InvalidOrderObject {
                reason: "salt must be non-zero".to_string(),
            });
        }
        if numeric("makingAmount", &self.making_amount)?.is_zero() {
            return Err(OrderError::InvalidOrderObject {
                reason: "makingAmount must be non-zero".to_string(),
            });
        }
        if numeric("takingAmount", &self.taking_amount)?.is_zero() {
            return Err(OrderError::InvalidOrderObject {
                reason: "takingAmount must be non-zero".to_string(),
            });
        }
        numeric("makerTraits", &self.maker_traits)?;

        for (name, address) in [
            ("maker", &self.maker),
            ("receiver", &self.receiver),
            ("makerAsset", &self.maker_asset),
            ("takerAsset", &self.taker_asset),
        ] {
            if !is_hex_address(address) {
                return Err(OrderError::InvalidOrderObject {
                    reason: format!("{name} is not a hex address: {address:?}"),
                });
            }
        }

        let extension = self.extension.strip_prefix("0x").unwrap_or("");
        if extension.is_empty() || hex::decode(extension).is_err() {
            return Err(OrderError::InvalidOrderObject {
                reason: "auction extension missing or not hex".to_string(),
            });
        }

        Ok(())
    }

    /// The eight signed fields in canonical flat form.
    pub fn flat_fields(&self) -> FlatOrderFields {
        FlatOrderFields {
            salt: self.salt.clone(),
            maker: self.maker.clone(),
            receiver: self.receiver.clone(),
            maker_asset: self.maker_asset.clone(),
            taker_asset: self.taker_asset.clone(),
            making_amount: self.making_amount.clone(),
            taking_amount: self.taking_amount.clone(),
            maker_traits: self.maker_traits.clone(),
        }
    }

    /// Relayer submission body.
    pub fn submission_body(&self, signature: Option<&str>, quote_id: &str) -> serde_json::Value {
        let mut body = serde_json::json!({
            "order": {
                "salt": self.salt,
                "maker": self.maker,
                "receiver": self.receiver,
                "makerAsset": self.maker_asset,
                "takerAsset": self.taker_asset,
                "makingAmount": self.making_amount,
                "takingAmount": self.taking_amount,
                "makerTraits": self.maker_traits,
            },
            "extension": self.extension,
            "quoteId": quote_id,
        });
        if let Some(signature) = signature {
            body["signature"] = serde_json::Value::String(signature.to_string());
        }
        body
    }
}

fn is_hex_address(address: &str) -> bool {
    address
        .strip_prefix("0x")
        .is_some_and(|h| h.len() == 40 && h.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// 160-bit random salt, decimal-encoded. Randomized so two orders built
/// from identical parameters never collide.
fn random_salt() -> String {
    let bytes: [u8; 20] = rand::random();
    U256::from_be_slice(&bytes).to_string()
}

/// Pack the auction parameters into the hex extension blob: settlement
/// address, start/end amounts (32 bytes each), duration and start delay
/// (8 bytes each, big-endian).
fn encode_extension(auction: &AuctionDetails) -> String {
    let mut bytes = Vec::with_capacity(20 + 32 + 32 + 8 + 8);

    let settlement = SETTLEMENT_CONTRACT.trim_start_matches("0x");
    bytes.extend_from_slice(&hex::decode(settlement).expect("settlement address is valid hex"));

    let amount_bytes = |value: &str| -> [u8; 32] {
        U256::from_str_radix(value, 10)
            .unwrap_or(U256::ZERO)
            .to_be_bytes()
    };
    bytes.extend_from_slice(&amount_bytes(&auction.start_amount));
    bytes.extend_from_slice(&amount_bytes(&auction.end_amount));
    bytes.extend_from_slice(&auction.duration_secs.to_be_bytes());
    bytes.extend_from_slice(&auction.start_delay_secs.to_be_bytes());

    format!("0x{}", hex::encode(bytes))
}
