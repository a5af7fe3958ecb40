//! Codec configuration options.

use super::CHUNK_SIZE;

/// Default maximum container nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Codec configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum container nesting depth accepted when encoding or decoding.
    /// The outermost container is depth 1.
    pub max_depth: usize,
    /// Initial capacity of the encode buffer in bytes.
    pub initial_capacity: usize,
}

impl CodecConfig {
    /// Override the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Override the initial encode buffer capacity.
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            initial_capacity: CHUNK_SIZE,
        }
    }
}
