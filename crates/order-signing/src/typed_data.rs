//! EIP-712 typed data and order digest
//!
//! The signing domain is bound to the settlement contract and the target
//! chain; the message is the fixed eight-field order schema. The digest
//! computed here is the order hash reported after submission.

use alloy_primitives::{keccak256, Address, B256, U256};
use prism_core::{ChainId, OrderError};
use serde::Serialize;
use serde_json::{json, Value};

use crate::extract::FlatOrderFields;

/// Settlement contract the signing domain verifies against
pub const SETTLEMENT_CONTRACT: &str = "0x2ad5004c60e16e54d5007c80ce329adde5b51ef5";

const DOMAIN_NAME: &str = "1inch Fusion";
const DOMAIN_VERSION: &str = "1";

const ORDER_TYPE: &str = "Order(uint256 salt,address maker,address receiver,address makerAsset,address takerAsset,uint256 makingAmount,uint256 takingAmount,uint256 makerTraits)";
const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// A structured-signing payload in `eth_signTypedData_v4` wire form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedData {
    pub types: Value,
    pub primary_type: String,
    pub domain: Value,
    pub message: Value,
}

/// Build the wallet-signable payload for an order.
pub fn order_typed_data(fields: &FlatOrderFields, chain_id: ChainId) -> TypedData {
    TypedData {
        types: json!({
            "EIP712Domain": [
                {"name": "name", "type": "string"},
                {"name": "version", "type": "string"},
                {"name": "chainId", "type": "uint256"},
                {"name": "verifyingContract", "type": "address"},
            ],
            "Order": [
                {"name": "salt", "type": "uint256"},
                {"name": "maker", "type": "address"},
                {"name": "receiver", "type": "address"},
                {"name": "makerAsset", "type": "address"},
                {"name": "takerAsset", "type": "address"},
                {"name": "makingAmount", "type": "uint256"},
                {"name": "takingAmount", "type": "uint256"},
                {"name": "makerTraits", "type": "uint256"},
            ],
        }),
        primary_type: "Order".to_string(),
        domain: json!({
            "name": DOMAIN_NAME,
            "version": DOMAIN_VERSION,
            "chainId": chain_id,
            "verifyingContract": SETTLEMENT_CONTRACT,
        }),
        message: json!({
            "salt": fields.salt,
            "maker": fields.maker,
            "receiver": fields.receiver,
            "makerAsset": fields.maker_asset,
            "takerAsset": fields.taker_asset,
            "makingAmount": fields.making_amount,
            "takingAmount": fields.taking_amount,
            "makerTraits": fields.maker_traits,
        }),
    }
}

/// EIP-712 digest of an order: `keccak256(0x1901 || domainSeparator ||
/// structHash)`, hex-encoded with a 0x prefix.
pub fn order_hash(fields: &FlatOrderFields, chain_id: ChainId) -> Result<String, OrderError> {
    let struct_hash = struct_hash(fields)?;
    let separator = domain_separator(chain_id);

    let mut input = Vec::with_capacity(2 + 32 + 32);
    input.extend_from_slice(&[0x19, 0x01]);
    input.extend_from_slice(separator.as_slice());
    input.extend_from_slice(struct_hash.as_slice());

    Ok(format!("0x{}", hex::encode(keccak256(&input))))
}

fn struct_hash(fields: &FlatOrderFields) -> Result<B256, OrderError> {
    let mut encoded = Vec::with_capacity(32 * 9);
    encoded.extend_from_slice(keccak256(ORDER_TYPE.as_bytes()).as_slice());
    encoded.extend_from_slice(&uint_word("salt", &fields.salt)?);
    encoded.extend_from_slice(&address_word("maker", &fields.maker)?);
    encoded.extend_from_slice(&address_word("receiver", &fields.receiver)?);
    encoded.extend_from_slice(&address_word("makerAsset", &fields.maker_asset)?);
    encoded.extend_from_slice(&address_word("takerAsset", &fields.taker_asset)?);
    encoded.extend_from_slice(&uint_word("makingAmount", &fields.making_amount)?);
    encoded.extend_from_slice(&uint_word("takingAmount", &fields.taking_amount)?);
    encoded.extend_from_slice(&uint_word("makerTraits", &fields.maker_traits)?);
    Ok(keccak256(&encoded))
}

fn domain_separator(chain_id: ChainId) -> B256 {
    let contract: Address = SETTLEMENT_CONTRACT
        .parse()
        .expect("settlement contract address is valid");

    let mut encoded = Vec::with_capacity(32 * 5);
    encoded.extend_from_slice(keccak256(DOMAIN_TYPE.as_bytes()).as_slice());
    encoded.extend_from_slice(keccak256(DOMAIN_NAME.as_bytes()).as_slice());
    encoded.extend_from_slice(keccak256(DOMAIN_VERSION.as_bytes()).as_slice());
    encoded.extend_from_slice(&U256::from(chain_id).to_be_bytes::<32>());
    encoded.extend_from_slice(&address_to_word(contract));
    keccak256(&encoded)
}

/// A decimal integer field as a 32-byte big-endian word.
fn uint_word(name: &str, value: &str) -> Result<[u8; 32], OrderError> {
    U256::from_str_radix(value, 10)
        .map(|v| v.to_be_bytes::<32>())
        .map_err(|_| OrderError::InvalidOrderObject {
            reason: format!("{name} is not a decimal integer: {value:?}"),
        })
}

/// An address field, left-padded to a 32-byte word.
fn address_word(name: &str, value: &str) -> Result<[u8; 32], OrderError> {
    let address: Address = value.parse().map_err(|_| OrderError::InvalidOrderObject {
        reason: format!("{name} is not a hex address: {value:?}"),
    })?;
    Ok(address_to_word(address))
}

fn address_to_word(address: Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_slice());
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> FlatOrderFields {
        FlatOrderFields {
            salt: "42".to_string(),
            maker: "0x70997970c51812dc3a010c7d01b50e0d17dc79c8".to_string(),
            receiver: "0x70997970c51812dc3a010c7d01b50e0d17dc79c8".to_string(),
            maker_asset: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".to_string(),
            taker_asset: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(),
            making_amount: "1000000000000000000".to_string(),
            taking_amount: "1000000".to_string(),
            maker_traits: "0".to_string(),
        }
    }

    #[test]
    fn typed_data_wire_shape() {
        let typed = order_typed_data(&fields(), 1);
        let json = serde_json::to_value(&typed).unwrap();

        assert_eq!(json["primaryType"], "Order");
        assert_eq!(json["domain"]["name"], DOMAIN_NAME);
        assert_eq!(json["domain"]["chainId"], 1);
        assert_eq!(json["domain"]["verifyingContract"], SETTLEMENT_CONTRACT);
        assert_eq!(json["types"]["Order"].as_array().unwrap().len(), 8);
        assert_eq!(json["message"]["makingAmount"], "1000000000000000000");
    }

    #[test]
    fn order_hash_is_deterministic() {
        let a = order_hash(&fields(), 1).unwrap();
        let b = order_hash(&fields(), 1).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 66);
        assert!(a.starts_with("0x"));
    }

    #[test]
    fn order_hash_binds_chain_id() {
        let mainnet = order_hash(&fields(), 1).unwrap();
        let polygon = order_hash(&fields(), 137).unwrap();
        assert_ne!(mainnet, polygon);
    }

    #[test]
    fn order_hash_binds_every_field() {
        let base = order_hash(&fields(), 1).unwrap();

        let mut changed = fields();
        changed.salt = "43".to_string();
        assert_ne!(order_hash(&changed, 1).unwrap(), base);

        let mut changed = fields();
        changed.taking_amount = "1000001".to_string();
        assert_ne!(order_hash(&changed, 1).unwrap(), base);
    }

    #[test]
    fn order_hash_rejects_malformed_fields() {
        let mut bad = fields();
        bad.maker = "nope".to_string();
        assert!(matches!(
            order_hash(&bad, 1),
            Err(OrderError::InvalidOrderObject { .. })
        ));

        let mut bad = fields();
        bad.salt = "1.5".to_string();
        assert!(order_hash(&bad, 1).is_err());
    }
}
