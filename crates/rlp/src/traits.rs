use crate::{DecoderError, RlpError, RlpItem};
use ethereum_types::{Bytes, Hex, TypesError};

/// Conversion of a Rust value into its RLP tree.
pub trait Encode {
    fn to_rlp_item(&self) -> RlpItem;
}

/// Reconstruction of a Rust value from its RLP tree.
pub trait Decode: Sized {
    fn from_rlp_item(item: &RlpItem) -> Result<Self, RlpError>;
}

fn expect_bytes(item: &RlpItem) -> Result<&[u8], RlpError> {
    item.as_bytes().ok_or_else(|| {
        DecoderError::UnexpectedKind {
            expected: "string",
            actual: item.kind(),
        }
        .into()
    })
}

fn expect_list(item: &RlpItem) -> Result<&[RlpItem], RlpError> {
    item.as_list().ok_or_else(|| {
        DecoderError::UnexpectedKind {
            expected: "list",
            actual: item.kind(),
        }
        .into()
    })
}

/// Minimal big-endian form of `value`: leading zeros stripped, zero is empty.
pub fn uint_to_bytes(value: u128) -> Bytes {
    let bytes = value.to_be_bytes();
    let first_non_zero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    Bytes::from_slice(&bytes[first_non_zero..])
}

fn encode_uint(value: u128) -> RlpItem {
    RlpItem::String(uint_to_bytes(value))
}

fn decode_uint(item: &RlpItem, width: usize) -> Result<u128, RlpError> {
    let bytes = expect_bytes(item)?;
    if bytes.len() > width {
        return Err(DecoderError::IntegerOverflow.into());
    }
    if bytes.first() == Some(&0) {
        return Err(DecoderError::LeadingZeros.into());
    }
    Ok(bytes
        .iter()
        .fold(0u128, |acc, &byte| (acc << 8) | u128::from(byte)))
}

macro_rules! impl_uint {
    ($($ty:ty),*) => {
        $(
            impl Encode for $ty {
                fn to_rlp_item(&self) -> RlpItem {
                    encode_uint(u128::from(*self))
                }
            }

            impl Decode for $ty {
                fn from_rlp_item(item: &RlpItem) -> Result<Self, RlpError> {
                    let value = decode_uint(item, std::mem::size_of::<$ty>())?;
                    <$ty>::try_from(value).map_err(|_| DecoderError::IntegerOverflow.into())
                }
            }
        )*
    };
}

impl_uint!(u8, u16, u32, u64, u128);

impl Encode for bool {
    fn to_rlp_item(&self) -> RlpItem {
        encode_uint(u128::from(*self))
    }
}

impl Decode for bool {
    fn from_rlp_item(item: &RlpItem) -> Result<Self, RlpError> {
        match u8::from_rlp_item(item)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(DecoderError::InvalidData("Invalid boolean value".to_string()).into()),
        }
    }
}

impl Encode for RlpItem {
    fn to_rlp_item(&self) -> RlpItem {
        self.clone()
    }
}

impl Decode for RlpItem {
    fn from_rlp_item(item: &RlpItem) -> Result<Self, RlpError> {
        Ok(item.clone())
    }
}

impl Encode for [u8] {
    fn to_rlp_item(&self) -> RlpItem {
        RlpItem::string(self)
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn to_rlp_item(&self) -> RlpItem {
        RlpItem::string(&self[..])
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn from_rlp_item(item: &RlpItem) -> Result<Self, RlpError> {
        let bytes = expect_bytes(item)?;
        <[u8; N]>::try_from(bytes).map_err(|_| {
            TypesError::InvalidLength {
                expected: N,
                actual: bytes.len(),
            }
            .into()
        })
    }
}

impl Encode for Bytes {
    fn to_rlp_item(&self) -> RlpItem {
        RlpItem::String(self.clone())
    }
}

impl Decode for Bytes {
    fn from_rlp_item(item: &RlpItem) -> Result<Self, RlpError> {
        Ok(Bytes::from_slice(expect_bytes(item)?))
    }
}

impl Encode for Hex {
    fn to_rlp_item(&self) -> RlpItem {
        RlpItem::String(self.to_bytes())
    }
}

impl Decode for Hex {
    fn from_rlp_item(item: &RlpItem) -> Result<Self, RlpError> {
        Ok(Hex::from_bytes(expect_bytes(item)?))
    }
}

impl Encode for str {
    fn to_rlp_item(&self) -> RlpItem {
        RlpItem::string(self)
    }
}

impl Encode for String {
    fn to_rlp_item(&self) -> RlpItem {
        RlpItem::string(self.as_str())
    }
}

impl Decode for String {
    fn from_rlp_item(item: &RlpItem) -> Result<Self, RlpError> {
        String::from_utf8(expect_bytes(item)?.to_vec())
            .map_err(|_| DecoderError::InvalidData("Invalid UTF-8 string".to_string()).into())
    }
}

/// Always a list, so `Vec<u8>` is a list of integers. Use `Bytes` for a byte string.
impl<T: Encode> Encode for Vec<T> {
    fn to_rlp_item(&self) -> RlpItem {
        RlpItem::List(self.iter().map(Encode::to_rlp_item).collect())
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn from_rlp_item(item: &RlpItem) -> Result<Self, RlpError> {
        expect_list(item)?.iter().map(T::from_rlp_item).collect()
    }
}

/// `None` is the empty string, so `Some` of a value that also encodes as the
/// empty string (zero, `false`, empty bytes) decodes back as `None`.
impl<T: Encode> Encode for Option<T> {
    fn to_rlp_item(&self) -> RlpItem {
        match self {
            Some(value) => value.to_rlp_item(),
            None => RlpItem::string(Vec::new()),
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn from_rlp_item(item: &RlpItem) -> Result<Self, RlpError> {
        match item.as_bytes() {
            Some(bytes) if bytes.is_empty() => Ok(None),
            _ => T::from_rlp_item(item).map(Some),
        }
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn to_rlp_item(&self) -> RlpItem {
        (**self).to_rlp_item()
    }
}
