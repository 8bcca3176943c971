//! Two-pass RLP encoder.
//!
//! The first pass builds an [`Encodable`] tree that mirrors the input and
//! records the exact encoded length of every node. The second pass allocates
//! a single buffer of the root length and writes every node into it through a
//! [`Cursor`].

use crate::{Cursor, EncoderError, Encoded, Format, RlpError, RlpItem, RlpValue};
use ethereum_types::{Bytes, Hex};
use tracing::trace;

/// Longest payload that still fits the single-byte prefix forms.
const SHORT_MAX: usize = 55;

const STRING_OFFSET: u8 = 0x80;
const LONG_STRING_OFFSET: u8 = 0xb7;
const LIST_OFFSET: u8 = 0xc0;
const LONG_LIST_OFFSET: u8 = 0xf7;

#[derive(Debug)]
enum Payload<'a> {
    Bytes(&'a [u8]),
    List {
        body_length: usize,
        items: Vec<Encodable<'a>>,
    },
}

/// Measured node of the encode tree: its total encoded length plus what is
/// needed to write it.
#[derive(Debug)]
pub struct Encodable<'a> {
    length: usize,
    payload: Payload<'a>,
}

impl<'a> Encodable<'a> {
    pub fn from_item(item: &'a RlpItem) -> Result<Self, EncoderError> {
        match item {
            RlpItem::String(bytes) => Self::bytes(bytes),
            RlpItem::List(items) => {
                let items = items
                    .iter()
                    .map(Self::from_item)
                    .collect::<Result<Vec<_>, _>>()?;
                Self::list(items)
            }
        }
    }

    fn bytes(bytes: &'a [u8]) -> Result<Self, EncoderError> {
        let length = match bytes.len() {
            1 if bytes[0] < STRING_OFFSET => 1,
            len if len <= SHORT_MAX => 1 + len,
            len => 1 + size_of_length(len)? + len,
        };

        Ok(Encodable {
            length,
            payload: Payload::Bytes(bytes),
        })
    }

    fn list(items: Vec<Encodable<'a>>) -> Result<Self, EncoderError> {
        let body_length = items
            .iter()
            .try_fold(0usize, |acc, item| acc.checked_add(item.length))
            .ok_or(EncoderError::LengthTooLarge { length: usize::MAX })?;

        let length = if body_length <= SHORT_MAX {
            1 + body_length
        } else {
            1 + size_of_length(body_length)? + body_length
        };

        Ok(Encodable {
            length,
            payload: Payload::List { body_length, items },
        })
    }

    /// Total encoded length in bytes, prefix included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn encode<B>(&self, cursor: &mut Cursor<B>) -> Result<(), RlpError>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        match &self.payload {
            Payload::Bytes(bytes) if bytes.len() == 1 && bytes[0] < STRING_OFFSET => {
                cursor.push_bytes(bytes)?;
            }
            Payload::Bytes(bytes) => {
                write_header(cursor, STRING_OFFSET, LONG_STRING_OFFSET, bytes.len())?;
                cursor.push_bytes(bytes)?;
            }
            Payload::List { body_length, items } => {
                write_header(cursor, LIST_OFFSET, LONG_LIST_OFFSET, *body_length)?;
                for item in items {
                    item.encode(cursor)?;
                }
            }
        }
        Ok(())
    }
}

fn write_header<B>(
    cursor: &mut Cursor<B>,
    offset: u8,
    long_offset: u8,
    length: usize,
) -> Result<(), RlpError>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    if length <= SHORT_MAX {
        cursor.push_byte(offset + length as u8)?;
        return Ok(());
    }

    let size = size_of_length(length)?;
    cursor.push_byte(long_offset + size as u8)?;
    match size {
        1 => cursor.push_u8(length as u8)?,
        2 => cursor.push_u16(length as u16)?,
        3 => cursor.push_u24(length as u32)?,
        _ => cursor.push_u32(length as u32)?,
    }
    Ok(())
}

/// Number of bytes needed to hold `length` unsigned. Lengths of 2^32 and
/// above have no encoding.
pub fn size_of_length(length: usize) -> Result<usize, EncoderError> {
    match length as u64 {
        n if n < 1 << 8 => Ok(1),
        n if n < 1 << 16 => Ok(2),
        n if n < 1 << 24 => Ok(3),
        n if n < 1 << 32 => Ok(4),
        _ => Err(EncoderError::LengthTooLarge { length }),
    }
}

/// Runs only the measuring pass.
pub fn encoded_length(item: &RlpItem) -> Result<usize, RlpError> {
    Ok(Encodable::from_item(item)?.len())
}

pub fn encode_item(item: &RlpItem) -> Result<Bytes, RlpError> {
    let encodable = Encodable::from_item(item)?;
    let mut cursor = Cursor::with_capacity(encodable.len());
    encodable.encode(&mut cursor)?;
    debug_assert!(cursor.is_empty(), "measured length disagrees with written bytes");

    trace!(length = cursor.capacity(), "encoded rlp item");
    Ok(Bytes::from_vec(cursor.into_inner()))
}

pub fn encode(value: &RlpValue, format: Format) -> Result<Encoded, RlpError> {
    let bytes = encode_item(&value.to_item())?;
    Ok(match format {
        Format::Bytes => Encoded::Bytes(bytes),
        Format::Hex => Encoded::Hex(bytes.to_hex()),
    })
}

pub fn encode_bytes(value: &RlpValue) -> Result<Bytes, RlpError> {
    encode_item(&value.to_item())
}

pub fn encode_hex(value: &RlpValue) -> Result<Hex, RlpError> {
    Ok(encode_item(&value.to_item())?.to_hex())
}
