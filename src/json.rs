//! JSON bridge for RLP trees.
//!
//! Strings are `0x`-prefixed hex leaves, arrays are lists and non-negative
//! integers become their minimal big-endian byte string.

use ethereum_rlp::{uint_to_bytes, RlpItem, RlpValue};
use ethereum_types::{Hex, TypesError};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("Invalid hex leaf: {0}")]
    InvalidLeaf(#[from] TypesError),

    #[error("Unsupported JSON value: {0}")]
    Unsupported(String),
}

pub fn value_from_json(json: &Value) -> Result<RlpValue, JsonError> {
    match json {
        Value::String(s) => Ok(RlpValue::from(Hex::parse(s)?)),
        Value::Array(items) => items
            .iter()
            .map(value_from_json)
            .collect::<Result<Vec<_>, _>>()
            .map(RlpValue::List),
        Value::Number(n) => n
            .as_u64()
            .map(|n| RlpValue::bytes(uint_to_bytes(u128::from(n))))
            .ok_or_else(|| JsonError::Unsupported(n.to_string())),
        other => Err(JsonError::Unsupported(other.to_string())),
    }
}

pub fn item_to_json(item: &RlpItem) -> Value {
    match item {
        RlpItem::String(bytes) => Value::String(bytes.to_hex().into_string()),
        RlpItem::List(items) => Value::Array(items.iter().map(item_to_json).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_from_json() {
        let value = value_from_json(&json!(["0x01", [], ["0xabcd"], 1024])).unwrap();
        assert_eq!(
            value.to_item(),
            RlpItem::list(vec![
                RlpItem::string(vec![0x01]),
                RlpItem::empty_list(),
                RlpItem::list(vec![RlpItem::string(vec![0xab, 0xcd])]),
                RlpItem::string(vec![0x04, 0x00]),
            ])
        );
    }

    #[test]
    fn test_zero_is_empty_string() {
        let value = value_from_json(&json!(0)).unwrap();
        assert_eq!(value.to_item(), RlpItem::string(Vec::new()));
    }

    #[test]
    fn test_numbers_are_minimal_big_endian() {
        let value = value_from_json(&json!([127, 128, 256, u64::MAX])).unwrap();
        assert_eq!(
            value.to_item(),
            RlpItem::list(vec![
                RlpItem::string(vec![0x7f]),
                RlpItem::string(vec![0x80]),
                RlpItem::string(vec![0x01, 0x00]),
                RlpItem::string(vec![0xff; 8]),
            ])
        );
    }

    #[test]
    fn test_rejects_unsupported() {
        assert!(matches!(
            value_from_json(&json!("hello")),
            Err(JsonError::InvalidLeaf(_))
        ));
        assert!(matches!(
            value_from_json(&json!(-1)),
            Err(JsonError::Unsupported(_))
        ));
        assert!(matches!(
            value_from_json(&json!({"a": "0x01"})),
            Err(JsonError::Unsupported(_))
        ));
        assert!(value_from_json(&json!(null)).is_err());
    }

    #[test]
    fn test_item_to_json() {
        let item = RlpItem::list(vec![RlpItem::string("cat"), RlpItem::empty_list()]);
        assert_eq!(item_to_json(&item), json!(["0x636174", []]));
    }
}
