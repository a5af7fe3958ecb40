//! Zero format core implementation
//!
//! This module provides the type tags, typed containers, growable buffer and
//! codec for the Zero wire format.

mod array;
mod buffer;
mod codec;
mod config;
mod element;
mod error;
mod map;
pub(crate) mod metrics;
mod types;
mod view;

pub use array::ZeroArray;
pub use buffer::{ByteReader, GrowableBuffer};
pub use codec::{
    decode_to_array, decode_to_array_with, decode_to_map, decode_to_map_with, encode_array,
    encode_array_with, encode_map, encode_map_with,
};
pub use config::{CodecConfig, DEFAULT_MAX_DEPTH};
pub use element::ZeroElement;
pub use error::{Error, Result};
pub use map::ZeroMap;
pub use metrics::CodecMetrics;
pub use types::ZeroType;
pub use view::ReadOnly;

/// Growth step of the encode buffer in bytes.
pub const CHUNK_SIZE: usize = 512;

/// Container header size: kind tag (1) + entry count (2).
pub const HEADER_SIZE: usize = 3;

/// Largest value accepted by a 2-byte count or length field.
///
/// The field is signed on the wire, so the sign bit is never set.
pub const MAX_SHORT_LEN: usize = i16::MAX as usize;

/// Largest value accepted by the 4-byte byte-array length field.
pub const MAX_BLOB_LEN: usize = i32::MAX as usize;

/// Render bytes as lowercase hex, 16 bytes per line.
#[must_use]
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (line_no, line) in bytes.chunks(16).enumerate() {
        if line_no > 0 {
            out.push('\n');
        }
        let hex: Vec<String> = line.iter().map(|b| format!("{b:02x}")).collect();
        out.push_str(&format!("{:04x}: {}", line_no * 16, hex.join(" ")));
    }
    out
}
