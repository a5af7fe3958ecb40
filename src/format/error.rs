//! Zero format error types

use thiserror::Error;

use super::ZeroType;

/// Errors raised by the Zero codec and containers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tag byte does not name any known kind
    #[error("unknown type tag {tag:#04x} at offset {offset}")]
    UnknownTag {
        /// Offending tag byte
        tag: u8,
        /// Offset of the tag byte
        offset: usize,
    },

    /// Container header names a different container kind
    #[error("type mismatch at offset {offset}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Expected container kind
        expected: ZeroType,
        /// Kind found on the wire
        found: ZeroType,
        /// Offset of the header tag
        offset: usize,
    },

    /// Fewer bytes remain than the field requires
    #[error("truncated {field} at offset {offset}: need {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        /// Field being decoded
        field: &'static str,
        /// Offset where the read was attempted
        offset: usize,
        /// Bytes required
        needed: usize,
        /// Bytes still available
        remaining: usize,
    },

    /// Declared count or length has its sign bit set
    #[error("negative {field} {value} at offset {offset}")]
    NegativeLength {
        /// Field being decoded
        field: &'static str,
        /// Signed reading of the field
        value: i64,
        /// Offset of the field
        offset: usize,
    },

    /// Input cannot hold even an empty container header
    #[error("input too short: {len} bytes (need at least 3)")]
    InputTooShort {
        /// Input length
        len: usize,
    },

    /// Boolean payload is neither 0 nor 1
    #[error("invalid boolean byte {value:#04x} at offset {offset}")]
    InvalidBoolean {
        /// Offending byte
        value: u8,
        /// Offset of the byte
        offset: usize,
    },

    /// String or key bytes are not valid UTF-8
    #[error("invalid UTF-8 string at offset {offset}")]
    InvalidUtf8 {
        /// Offset of the first string byte
        offset: usize,
    },

    /// Encoded input nests containers deeper than the configured limit
    #[error("nesting depth exceeds limit of {max} at offset {offset}")]
    DecodeDepthExceeded {
        /// Configured maximum depth
        max: usize,
        /// Offset of the container header that crossed the limit
        offset: usize,
    },

    /// Container handed to the encoder nests deeper than the configured limit
    #[error("cannot encode: nesting depth exceeds limit of {max}")]
    EncodeDepthExceeded {
        /// Configured maximum depth
        max: usize,
    },

    /// Bytes left over after the outermost container
    #[error("{count} trailing bytes after container ending at offset {offset}")]
    TrailingBytes {
        /// Number of unread bytes
        count: usize,
        /// Offset where the container ended
        offset: usize,
    },

    /// Positional access outside `[0, len)`
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Container length
        len: usize,
    },

    /// Map holds no entry for the key
    #[error("key not found: {key:?}")]
    KeyNotFound {
        /// Requested key
        key: String,
    },

    /// Map entry exists but holds `Null`
    #[error("value for key {key:?} is null")]
    NullValue {
        /// Requested key
        key: String,
    },

    /// Array element exists but holds `Null`
    #[error("value at index {index} is null")]
    NullAtIndex {
        /// Requested index
        index: usize,
    },

    /// Stored element has a different kind than the accessor reads
    #[error("wrong kind: expected {expected}, found {found}")]
    WrongKind {
        /// Kind the accessor reads
        expected: ZeroType,
        /// Kind actually stored
        found: ZeroType,
    },

    /// Value too long for its wire length field
    #[error("{field} length {len} exceeds wire limit {max}")]
    LengthOverflow {
        /// Field being encoded
        field: &'static str,
        /// Actual length
        len: usize,
        /// Maximum encodable length
        max: usize,
    },
}

impl Error {
    /// Whether the error was raised while decoding wire bytes.
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownTag { .. }
                | Self::TypeMismatch { .. }
                | Self::TruncatedInput { .. }
                | Self::NegativeLength { .. }
                | Self::InputTooShort { .. }
                | Self::InvalidBoolean { .. }
                | Self::InvalidUtf8 { .. }
                | Self::DecodeDepthExceeded { .. }
                | Self::TrailingBytes { .. }
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
