use crate::json::{item_to_json, value_from_json};
use anyhow::{Context, Result};
use ethereum_rlp::{decode_with, encode, DecodeOptions, Encoded, Format};
use ethereum_types::Hex;
use serde_json::{json, Value};
use tracing::{debug, info};

/// Encodes a JSON tree and renders the result in `format`.
pub fn encode_json(input: &str, format: Format) -> Result<String> {
    let json: Value = serde_json::from_str(input).context("Failed to parse JSON input")?;
    let value = value_from_json(&json).context("Failed to read RLP value")?;

    let encoded = encode(&value, format).context("Failed to encode RLP value")?;
    info!(format = %format, "Encoded RLP value");

    Ok(match encoded {
        Encoded::Hex(hex) => hex.into_string(),
        Encoded::Bytes(bytes) => serde_json::to_string(&bytes)?,
    })
}

/// Decodes hex input and renders the tree as JSON. When trailing bytes are
/// allowed the output also reports how many bytes the item consumed.
pub fn decode_to_json(input: &str, options: &DecodeOptions) -> Result<String> {
    let hex = Hex::parse(input.trim()).context("Failed to parse hex input")?;
    let data = hex.to_bytes();

    let (item, consumed) = decode_with(&data, options).context("Failed to decode RLP input")?;
    debug!(consumed, total = data.len(), "Decoded RLP input");

    let output = if options.allow_trailing {
        json!({ "item": item_to_json(&item), "consumed": consumed })
    } else {
        item_to_json(&item)
    };

    Ok(serde_json::to_string(&output)?)
}
