use crate::{Cursor, CursorError, DecoderError, Format, RlpError, RlpItem, RlpValue};
use ethereum_types::{Bytes, Hex};
use tracing::debug;

/// Default limit on list nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Hard ceiling on list nesting. Decoding recurses once per level, so larger
/// limits are clamped to this value to keep the stack bounded.
pub const MAX_DEPTH_LIMIT: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum number of nested list levels.
    pub max_depth: usize,
    /// Accept input that continues past the first item.
    pub allow_trailing: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing: false,
        }
    }
}

/// Decoded prefix of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub list: bool,
    pub payload_length: usize,
}

pub struct Decoder<'a> {
    cursor: Cursor<&'a [u8]>,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_max_depth(data, DEFAULT_MAX_DEPTH)
    }

    /// Limits above [`MAX_DEPTH_LIMIT`] are clamped to it.
    pub fn with_max_depth(data: &'a [u8], max_depth: usize) -> Self {
        Decoder {
            cursor: Cursor::new(data),
            max_depth: max_depth.min(MAX_DEPTH_LIMIT),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor.is_empty()
    }

    /// Reads the prefix of the next item and leaves the cursor at its payload.
    ///
    /// A single byte below `0x80` is its own payload, so the cursor is not
    /// advanced for it.
    pub fn decode_header(&mut self) -> Result<Header, RlpError> {
        let prefix = self.cursor.inspect_byte().map_err(CursorError::into_eof)?;

        let header = match prefix {
            0x00..=0x7f => {
                return Ok(Header {
                    list: false,
                    payload_length: 1,
                })
            }
            0x80..=0xb7 => {
                self.cursor.read_byte()?;
                let len = (prefix - 0x80) as usize;
                if len == 1 {
                    if let Ok(byte) = self.cursor.inspect_byte() {
                        if byte < 0x80 {
                            return Err(DecoderError::NonCanonicalSingleByte(byte).into());
                        }
                    }
                }
                Header {
                    list: false,
                    payload_length: len,
                }
            }
            0xb8..=0xbf => {
                self.cursor.read_byte()?;
                Header {
                    list: false,
                    payload_length: self.read_length((prefix - 0xb7) as usize)?,
                }
            }
            0xc0..=0xf7 => {
                self.cursor.read_byte()?;
                Header {
                    list: true,
                    payload_length: (prefix - 0xc0) as usize,
                }
            }
            0xf8..=0xff => {
                self.cursor.read_byte()?;
                Header {
                    list: true,
                    payload_length: self.read_length((prefix - 0xf7) as usize)?,
                }
            }
        };

        if header.payload_length > self.cursor.remaining() {
            return Err(DecoderError::UnexpectedEof {
                offset: self.cursor.position(),
                needed: header.payload_length,
                remaining: self.cursor.remaining(),
            }
            .into());
        }

        Ok(header)
    }

    fn read_length(&mut self, size: usize) -> Result<usize, RlpError> {
        if size > 4 {
            return Err(DecoderError::LengthTooLarge(size).into());
        }
        if self.cursor.inspect_byte().map_err(CursorError::into_eof)? == 0 {
            return Err(DecoderError::LeadingZeros.into());
        }

        let len = match size {
            1 => self.cursor.read_u8().map(u32::from),
            2 => self.cursor.read_u16().map(u32::from),
            3 => self.cursor.read_u24(),
            _ => self.cursor.read_u32(),
        }
        .map_err(CursorError::into_eof)? as usize;

        if len <= 55 {
            return Err(DecoderError::NonCanonicalSize(len).into());
        }
        Ok(len)
    }

    pub fn decode_item(&mut self) -> Result<RlpItem, RlpError> {
        self.decode_at_depth(0)
    }

    fn decode_at_depth(&mut self, depth: usize) -> Result<RlpItem, RlpError> {
        let header = self.decode_header()?;

        if !header.list {
            let bytes = self
                .cursor
                .read_bytes(header.payload_length)
                .map_err(CursorError::into_eof)?;
            return Ok(RlpItem::String(Bytes::from_slice(bytes)));
        }

        if depth >= self.max_depth {
            return Err(DecoderError::DepthLimitExceeded(self.max_depth).into());
        }

        let start = self.cursor.position();
        let end = start + header.payload_length;
        let mut items = Vec::new();

        while self.cursor.position() < end {
            items.push(self.decode_at_depth(depth + 1)?);
        }

        if self.cursor.position() != end {
            return Err(DecoderError::ListLengthMismatch {
                expected: header.payload_length,
                actual: self.cursor.position() - start,
            }
            .into());
        }

        Ok(RlpItem::List(items))
    }

    /// Decodes the next item, requiring a byte string.
    pub fn decode_bytes(&mut self) -> Result<Bytes, RlpError> {
        let item = self.decode_item()?;
        match item {
            RlpItem::String(bytes) => Ok(bytes),
            other => Err(DecoderError::UnexpectedKind {
                expected: "string",
                actual: other.kind(),
            }
            .into()),
        }
    }
}

/// Decodes the first item of `data` and reports how many bytes it spanned.
pub fn decode_with(data: &[u8], options: &DecodeOptions) -> Result<(RlpItem, usize), RlpError> {
    let mut decoder = Decoder::with_max_depth(data, options.max_depth);
    let item = decoder.decode_item()?;
    let consumed = decoder.position();

    if !options.allow_trailing && consumed != data.len() {
        return Err(DecoderError::TrailingBytes(data.len() - consumed).into());
    }

    debug!(consumed, total = data.len(), "decoded rlp item");
    Ok((item, consumed))
}

pub fn decode_partial(data: &[u8]) -> Result<(RlpItem, usize), RlpError> {
    decode_with(
        data,
        &DecodeOptions {
            allow_trailing: true,
            ..DecodeOptions::default()
        },
    )
}

pub fn decode(data: &[u8]) -> Result<RlpItem, RlpError> {
    decode_with(data, &DecodeOptions::default()).map(|(item, _)| item)
}

pub fn decode_hex(hex: &Hex) -> Result<RlpItem, RlpError> {
    decode(&hex.to_bytes())
}

pub fn decode_value(data: &[u8], format: Format) -> Result<RlpValue, RlpError> {
    Ok(decode(data)?.to_value(format))
}
