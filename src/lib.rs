//! Zero format - typed binary containers for game-server data interchange
//!
//! This library implements the Zero wire format: a self-describing binary
//! encoding of typed arrays and string-keyed maps, used to move structured
//! values between server components and network peers.
//!
//! # Quick Start
//!
//! ```rust
//! use zero::{ZeroArray, ZeroMap};
//!
//! // Build a container
//! let mut map = ZeroMap::new();
//! map.put_string("name", "knight").put_integer("hp", 120).put_null("guild");
//!
//! // Encode to bytes
//! let bytes = map.to_bytes()?;
//!
//! // Decode from bytes
//! let decoded = ZeroMap::from_bytes(&bytes)?;
//! assert_eq!(decoded.get_integer("hp")?, 120);
//! assert!(decoded.contains_key("guild") && decoded.is_null("guild"));
//! # Ok::<(), zero::Error>(())
//! ```
//!
//! # Features
//!
//! - **Typed elements** - one enum variant per wire kind, no runtime casts
//! - **Fluent containers** - chained `add_*` / `put_*` builders
//! - **Fail-fast decoding** - malformed input yields a typed error with offsets
//! - **Optional serde** - enable the `serde` feature to derive serde traits
//!
//! # Wire format
//!
//! ```text
//! container := [TAG (1)] [COUNT (2)] entry*
//! map entry := [KEY LEN (2)] [KEY] element
//! element   := [TAG (1)] [PAYLOAD]
//! ```
//!
//! Integers are big-endian. Counts and string lengths are signed 16-bit on
//! the wire, so at most 32767 entries or bytes are encodable.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod format;

pub use format::{
    ByteReader, CHUNK_SIZE, CodecConfig, CodecMetrics, Error, GrowableBuffer, ReadOnly, Result,
    ZeroArray, ZeroElement, ZeroMap, ZeroType, decode_to_array, decode_to_map, encode_array,
    encode_map,
};

/// Zero format library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
