use crate::{Hex, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Owned byte sequence with a known length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    pub fn new() -> Self {
        Bytes(Vec::new())
    }

    pub fn from_vec(vec: Vec<u8>) -> Self {
        Bytes(vec)
    }

    pub fn from_slice(slice: &[u8]) -> Self {
        Bytes(slice.to_vec())
    }

    /// Parses a `0x`-prefixed hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Hex::parse(s)?.to_bytes())
    }

    pub fn to_hex(&self) -> Hex {
        Hex::from_bytes(&self.0)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(vec: Vec<u8>) -> Self {
        Bytes::from_vec(vec)
    }
}

impl From<&[u8]> for Bytes {
    fn from(slice: &[u8]) -> Self {
        Bytes::from_slice(slice)
    }
}

impl<const N: usize> From<[u8; N]> for Bytes {
    fn from(array: [u8; N]) -> Self {
        Bytes(array.to_vec())
    }
}

impl From<&str> for Bytes {
    fn from(s: &str) -> Self {
        Bytes::from_slice(s.as_bytes())
    }
}

impl From<&Hex> for Bytes {
    fn from(hex: &Hex) -> Self {
        hex.to_bytes()
    }
}

impl From<Hex> for Bytes {
    fn from(hex: Hex) -> Self {
        hex.to_bytes()
    }
}

impl From<Bytes> for Vec<u8> {
    fn from(bytes: Bytes) -> Self {
        bytes.0
    }
}

impl fmt::LowerHex for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_creation() {
        let bytes1 = Bytes::from_vec(vec![1, 2, 3]);
        let bytes2 = Bytes::from_slice(&[1, 2, 3]);
        let bytes3 = Bytes::from("abc");
        let bytes4 = Bytes::from([1u8, 2, 3]);

        assert_eq!(bytes1.as_slice(), &[1, 2, 3]);
        assert_eq!(bytes2.as_slice(), &[1, 2, 3]);
        assert_eq!(bytes3.as_slice(), b"abc");
        assert_eq!(bytes4, bytes1);
    }

    #[test]
    fn test_bytes_hex() {
        let bytes = Bytes::from_vec(vec![0x12, 0x34, 0x56]);
        assert_eq!(format!("{:x}", bytes), "0x123456");
        assert_eq!(bytes.to_hex().as_str(), "0x123456");
    }

    #[test]
    fn test_bytes_from_hex() {
        let bytes = Bytes::from_hex("0xdeadBEEF").unwrap();
        assert_eq!(bytes.as_slice(), &[0xde, 0xad, 0xbe, 0xef]);

        assert!(Bytes::from_hex("deadbeef").is_err());
        assert!(Bytes::from_hex("0xabc").is_err());
    }

    #[test]
    fn test_bytes_serde_transparent() {
        let bytes = Bytes::from_vec(vec![1, 2]);
        assert_eq!(serde_json::to_string(&bytes).unwrap(), "[1,2]");
    }
}
