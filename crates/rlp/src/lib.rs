//! Recursive-Length Prefix encoding.
//!
//! Callers build an [`RlpValue`] whose leaves are raw [`Bytes`] or [`Hex`]
//! strings, or work directly with the canonical [`RlpItem`] tree. Encoding
//! measures the whole tree first and writes into a single exact-size buffer;
//! decoding only accepts canonical input.

pub mod cursor;
pub mod decode;
pub mod encode;
pub mod error;
pub mod item;
pub mod traits;

pub use cursor::Cursor;
pub use decode::{
    decode, decode_hex, decode_partial, decode_value, decode_with, DecodeOptions, Decoder, Header,
    DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT,
};
pub use encode::{
    encode, encode_bytes, encode_hex, encode_item, encoded_length, size_of_length, Encodable,
};
pub use error::{CursorError, DecoderError, EncoderError, RlpError};
pub use item::{Encoded, Format, Leaf, RlpItem, RlpValue};
pub use traits::{uint_to_bytes, Decode, Encode};

use ethereum_types::Bytes;

pub fn to_rlp<T: Encode + ?Sized>(value: &T) -> Result<Bytes, RlpError> {
    encode_item(&value.to_rlp_item())
}

pub fn from_rlp<T: Decode>(data: &[u8]) -> Result<T, RlpError> {
    T::from_rlp_item(&decode(data)?)
}
