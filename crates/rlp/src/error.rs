use ethereum_types::TypesError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RlpError {
    #[error("Decoder error: {0}")]
    Decoder(#[from] DecoderError),

    #[error("Encoder error: {0}")]
    Encoder(#[from] EncoderError),

    #[error("Cursor error: {0}")]
    Cursor(#[from] CursorError),

    #[error("Invalid leaf: {0}")]
    Types(#[from] TypesError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecoderError {
    #[error("Unexpected end of input at offset {offset}: need {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("Invalid RLP data: {0}")]
    InvalidData(String),

    #[error("Integer overflow")]
    IntegerOverflow,

    #[error("Leading zeros in integer")]
    LeadingZeros,

    #[error("List length mismatch: expected {expected}, got {actual}")]
    ListLengthMismatch { expected: usize, actual: usize },

    #[error("Single byte {0:#04x} must be encoded as itself")]
    NonCanonicalSingleByte(u8),

    #[error("Length {0} must use the short form")]
    NonCanonicalSize(usize),

    #[error("Length prefix of {0} bytes exceeds the 4-byte limit")]
    LengthTooLarge(usize),

    #[error("Nesting depth exceeds limit of {0}")]
    DepthLimitExceeded(usize),

    #[error("{0} trailing bytes after the encoded item")]
    TrailingBytes(usize),

    #[error("Expected {expected}, got {actual}")]
    UnexpectedKind {
        expected: &'static str,
        actual: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncoderError {
    #[error("Length {length} exceeds the 4-byte length prefix limit")]
    LengthTooLarge { length: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("Buffer overrun at position {position}: requested {requested} bytes, capacity {capacity}")]
    BufferOverrun {
        position: usize,
        requested: usize,
        capacity: usize,
    },

    #[error("Position {position} is out of bounds for capacity {capacity}")]
    PositionOutOfBounds { position: usize, capacity: usize },
}

impl CursorError {
    /// Reinterprets a read failure as truncated input.
    pub(crate) fn into_eof(self) -> DecoderError {
        match self {
            CursorError::BufferOverrun {
                position,
                requested,
                capacity,
            } => DecoderError::UnexpectedEof {
                offset: position,
                needed: requested,
                remaining: capacity.saturating_sub(position),
            },
            CursorError::PositionOutOfBounds { position, capacity } => {
                DecoderError::UnexpectedEof {
                    offset: position,
                    needed: 0,
                    remaining: capacity.saturating_sub(position),
                }
            }
        }
    }
}
