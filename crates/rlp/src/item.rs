use crate::DecoderError;
use ethereum_types::{Bytes, Hex, TypesError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical RLP tree. Leaves are raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RlpItem {
    String(Bytes),
    List(Vec<RlpItem>),
}

impl RlpItem {
    pub fn string(bytes: impl Into<Bytes>) -> Self {
        RlpItem::String(bytes.into())
    }

    pub fn list(items: Vec<RlpItem>) -> Self {
        RlpItem::List(items)
    }

    pub fn empty_list() -> Self {
        RlpItem::List(Vec::new())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, RlpItem::List(_))
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            RlpItem::String(bytes) => Some(bytes),
            RlpItem::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RlpItem]> {
        match self {
            RlpItem::String(_) => None,
            RlpItem::List(items) => Some(items),
        }
    }

    pub fn into_bytes(self) -> Result<Bytes, DecoderError> {
        match self {
            RlpItem::String(bytes) => Ok(bytes),
            RlpItem::List(_) => Err(DecoderError::UnexpectedKind {
                expected: "string",
                actual: "list",
            }),
        }
    }

    pub fn into_list(self) -> Result<Vec<RlpItem>, DecoderError> {
        match self {
            RlpItem::List(items) => Ok(items),
            RlpItem::String(_) => Err(DecoderError::UnexpectedKind {
                expected: "list",
                actual: "string",
            }),
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            RlpItem::String(_) => "string",
            RlpItem::List(_) => "list",
        }
    }

    /// Rebuilds the tree with every leaf in the requested representation.
    pub fn to_value(&self, format: Format) -> RlpValue {
        match self {
            RlpItem::String(bytes) => RlpValue::Leaf(match format {
                Format::Bytes => Leaf::Bytes(bytes.clone()),
                Format::Hex => Leaf::Hex(bytes.to_hex()),
            }),
            RlpItem::List(items) => {
                RlpValue::List(items.iter().map(|item| item.to_value(format)).collect())
            }
        }
    }
}

/// A byte-string leaf as handed over by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Leaf {
    Bytes(Bytes),
    Hex(Hex),
}

impl Leaf {
    pub fn to_bytes(&self) -> Bytes {
        match self {
            Leaf::Bytes(bytes) => bytes.clone(),
            Leaf::Hex(hex) => hex.to_bytes(),
        }
    }
}

/// Caller-facing RLP tree whose leaves may be raw bytes or hex strings,
/// mixed freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RlpValue {
    Leaf(Leaf),
    List(Vec<RlpValue>),
}

impl RlpValue {
    pub fn bytes(bytes: impl Into<Bytes>) -> Self {
        RlpValue::Leaf(Leaf::Bytes(bytes.into()))
    }

    pub fn hex(s: &str) -> Result<Self, TypesError> {
        Ok(RlpValue::Leaf(Leaf::Hex(Hex::parse(s)?)))
    }

    pub fn list(items: Vec<RlpValue>) -> Self {
        RlpValue::List(items)
    }

    /// Converts every leaf to raw bytes once, producing the canonical tree.
    pub fn to_item(&self) -> RlpItem {
        match self {
            RlpValue::Leaf(leaf) => RlpItem::String(leaf.to_bytes()),
            RlpValue::List(items) => RlpItem::List(items.iter().map(RlpValue::to_item).collect()),
        }
    }
}

impl From<&RlpValue> for RlpItem {
    fn from(value: &RlpValue) -> Self {
        value.to_item()
    }
}

impl From<Leaf> for RlpValue {
    fn from(leaf: Leaf) -> Self {
        RlpValue::Leaf(leaf)
    }
}

impl From<Hex> for RlpValue {
    fn from(hex: Hex) -> Self {
        RlpValue::Leaf(Leaf::Hex(hex))
    }
}

impl From<Bytes> for RlpValue {
    fn from(bytes: Bytes) -> Self {
        RlpValue::Leaf(Leaf::Bytes(bytes))
    }
}

/// Representation of encoded output and of decoded leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Bytes,
    Hex,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bytes" => Ok(Format::Bytes),
            "hex" => Ok(Format::Hex),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Bytes => f.write_str("bytes"),
            Format::Hex => f.write_str("hex"),
        }
    }
}

/// Encoder output in the representation the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Encoded {
    Bytes(Bytes),
    Hex(Hex),
}

impl Encoded {
    pub fn format(&self) -> Format {
        match self {
            Encoded::Bytes(_) => Format::Bytes,
            Encoded::Hex(_) => Format::Hex,
        }
    }

    pub fn into_bytes(self) -> Bytes {
        match self {
            Encoded::Bytes(bytes) => bytes,
            Encoded::Hex(hex) => hex.to_bytes(),
        }
    }

    pub fn into_hex(self) -> Hex {
        match self {
            Encoded::Bytes(bytes) => bytes.to_hex(),
            Encoded::Hex(hex) => hex,
        }
    }
}
