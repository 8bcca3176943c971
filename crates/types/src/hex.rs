use crate::{Bytes, Result, TypesError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "0x";

/// A `0x`-prefixed hex string holding a whole number of bytes.
///
/// Input is accepted in any letter case and normalized to lowercase, so two
/// `Hex` values compare equal exactly when they denote the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex(String);

impl Hex {
    /// The empty byte string, `0x`.
    pub fn empty() -> Self {
        Hex(PREFIX.to_string())
    }

    pub fn parse(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix(PREFIX)
            .ok_or_else(|| TypesError::InvalidHex(s.to_string()))?;

        if digits.len() % 2 != 0 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TypesError::InvalidHex(s.to_string()));
        }

        Ok(Hex(format!("{}{}", PREFIX, digits.to_ascii_lowercase())))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Hex(format!("{}{}", PREFIX, hex::encode(bytes)))
    }

    pub fn to_bytes(&self) -> Bytes {
        let digits = &self.0[PREFIX.len()..];
        let mut out = vec![0u8; digits.len() / 2];
        hex::decode_to_slice(digits, &mut out)
            .expect("Hex digits are validated on construction");
        Bytes::from_vec(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of bytes the string denotes.
    pub fn len(&self) -> usize {
        (self.0.len() - PREFIX.len()) / 2
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Hex {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for Hex {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self> {
        Hex::parse(s)
    }
}

impl TryFrom<&str> for Hex {
    type Error = TypesError;

    fn try_from(s: &str) -> Result<Self> {
        Hex::parse(s)
    }
}

impl From<&[u8]> for Hex {
    fn from(bytes: &[u8]) -> Self {
        Hex::from_bytes(bytes)
    }
}

impl From<&Bytes> for Hex {
    fn from(bytes: &Bytes) -> Self {
        Hex::from_bytes(bytes.as_slice())
    }
}

impl From<Bytes> for Hex {
    fn from(bytes: Bytes) -> Self {
        Hex::from_bytes(bytes.as_slice())
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Hex {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Hex::parse(&s).map_err(serde::de::Error::custom)
    }
}
