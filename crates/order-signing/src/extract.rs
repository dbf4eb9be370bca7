//! Canonical order-field extraction
//!
//! An order reaches the signing bridge in one of two shapes: freshly
//! created, with the limit-order fields nested under `inner` and addresses
//! wrapped in `{val: ...}` objects, or after a JSON round trip, flattened to
//! plain strings. Both are parsed ONCE here into [`FlatOrderFields`];
//! nothing downstream branches on shape again.

use prism_core::OrderError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The eight signed order fields, every value in its string form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatOrderFields {
    pub salt: String,
    pub maker: String,
    pub receiver: String,
    pub maker_asset: String,
    pub taker_asset: String,
    pub making_amount: String,
    pub taking_amount: String,
    pub maker_traits: String,
}

/// Extract the canonical fields from either order shape.
///
/// Missing fields default the way the wire format does ("0" for numerics,
/// empty string for addresses); structural validation is the submitter's
/// job, not the extractor's.
pub fn extract_order_fields(order: &Value) -> Result<FlatOrderFields, OrderError> {
    let order = order.as_object().ok_or_else(|| OrderError::InvalidOrderObject {
        reason: "order is not a JSON object".to_string(),
    })?;

    // Fresh orders nest the limit order under `inner`; serialized ones are flat.
    let inner = match order.get("inner") {
        Some(Value::Object(inner)) => inner,
        _ => order,
    };

    let field = |names: &[&str], default: &str| -> String {
        names
            .iter()
            .find_map(|name| inner.get(*name))
            .map(unwrap_value)
            .unwrap_or_else(|| default.to_string())
    };

    Ok(FlatOrderFields {
        salt: field(&["_salt", "salt"], "0"),
        maker: field(&["maker"], ""),
        receiver: field(&["receiver"], ""),
        maker_asset: field(&["makerAsset"], ""),
        taker_asset: field(&["takerAsset"], ""),
        making_amount: field(&["makingAmount"], "0"),
        taking_amount: field(&["takingAmount"], "0"),
        maker_traits: field(&["makerTraits"], "0"),
    })
}

/// Coerce a field to its string form, unwrapping `{val: ...}` and
/// `{value: ...}` wrappers (nested arbitrarily, as in `makerTraits`'
/// `{value: {value: "..."}}`).
fn unwrap_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => map
            .get("val")
            .or_else(|| map.get("value"))
            .map(unwrap_value)
            .unwrap_or_default(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected() -> FlatOrderFields {
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
    fn extracts_fresh_nested_shape() {
        // SDK-style shape: `inner` sub-object, `_salt`, `{val}` address
        // wrappers, doubly nested makerTraits
        let order = serde_json::json!({
            "inner": {
                "_salt": "42",
                "maker": {"val": "0x70997970c51812dc3a010c7d01b50e0d17dc79c8"},
                "receiver": {"val": "0x70997970c51812dc3a010c7d01b50e0d17dc79c8"},
                "makerAsset": {"val": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"},
                "takerAsset": {"val": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"},
                "makingAmount": "1000000000000000000",
                "takingAmount": "1000000",
                "makerTraits": {"value": {"value": "0"}}
            },
            "settlementExtension": "0xabcd"
        });

        assert_eq!(extract_order_fields(&order).unwrap(), expected());
    }

    #[test]
    fn extracts_serialized_flat_shape() {
        let order = serde_json::json!({
            "salt": "42",
            "maker": "0x70997970c51812dc3a010c7d01b50e0d17dc79c8",
            "receiver": "0x70997970c51812dc3a010c7d01b50e0d17dc79c8",
            "makerAsset": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            "takerAsset": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
            "makingAmount": "1000000000000000000",
            "takingAmount": "1000000",
            "makerTraits": "0"
        });

        assert_eq!(extract_order_fields(&order).unwrap(), expected());
    }

    #[test]
    fn both_shapes_extract_identically() {
        let nested = serde_json::json!({
            "inner": {
                "_salt": "7",
                "maker": {"val": "0xaa00000000000000000000000000000000000001"},
                "makingAmount": 5000,
                "makerTraits": {"value": {"value": "1"}}
            }
        });
        let flat = serde_json::json!({
            "salt": "7",
            "maker": "0xaa00000000000000000000000000000000000001",
            "makingAmount": "5000",
            "makerTraits": "1"
        });

        assert_eq!(
            extract_order_fields(&nested).unwrap(),
            extract_order_fields(&flat).unwrap()
        );
    }

    #[test]
    fn missing_fields_take_wire_defaults() {
        let fields = extract_order_fields(&serde_json::json!({})).unwrap();
        assert_eq!(fields.salt, "0");
        assert_eq!(fields.maker, "");
        assert_eq!(fields.maker_traits, "0");
    }

    #[test]
    fn non_object_input_is_rejected() {
        let result = extract_order_fields(&serde_json::json!("not an order"));
        assert!(matches!(
            result,
            Err(OrderError::InvalidOrderObject { .. })
        ));
    }
}
