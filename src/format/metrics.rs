//! Process-wide codec counters
//!
//! Counters are relaxed atomics; read them with [`CodecMetrics::snapshot`].

use std::sync::atomic::{AtomicU64, Ordering};

/// Track Zero codec activity without external dependencies.
pub(crate) struct Metrics;

static ENCODED_CONTAINERS: AtomicU64 = AtomicU64::new(0);
static DECODED_CONTAINERS: AtomicU64 = AtomicU64::new(0);
static ENCODED_BYTES: AtomicU64 = AtomicU64::new(0);
static DECODED_BYTES: AtomicU64 = AtomicU64::new(0);
static DECODE_ERRORS: AtomicU64 = AtomicU64::new(0);
static BUFFER_REALLOCATIONS: AtomicU64 = AtomicU64::new(0);

impl Metrics {
    #[inline]
    pub(crate) fn record_encode(bytes: usize) {
        ENCODED_CONTAINERS.fetch_add(1, Ordering::Relaxed);
        ENCODED_BYTES.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_decode(bytes: usize) {
        DECODED_CONTAINERS.fetch_add(1, Ordering::Relaxed);
        DECODED_BYTES.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_decode_error() {
        DECODE_ERRORS.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_reallocation() {
        BUFFER_REALLOCATIONS.fetch_add(1, Ordering::Relaxed);
    }
}

/// Snapshot of the process-wide codec counters.
///
/// Only top-level encode/decode calls are counted; nested containers are
/// part of their parent's bytes.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecMetrics {
    /// Containers successfully encoded
    pub encoded_containers: u64,
    /// Containers successfully decoded
    pub decoded_containers: u64,
    /// Total bytes produced by encoding
    pub encoded_bytes: u64,
    /// Total bytes consumed by successful decodes
    pub decoded_bytes: u64,
    /// Decode calls rejected with an error
    pub decode_errors: u64,
    /// Encode buffer reallocations
    pub buffer_reallocations: u64,
}

impl CodecMetrics {
    /// Read the current counters.
    #[must_use]
    pub fn snapshot() -> Self {
        Self {
            encoded_containers: ENCODED_CONTAINERS.load(Ordering::Relaxed),
            decoded_containers: DECODED_CONTAINERS.load(Ordering::Relaxed),
            encoded_bytes: ENCODED_BYTES.load(Ordering::Relaxed),
            decoded_bytes: DECODED_BYTES.load(Ordering::Relaxed),
            decode_errors: DECODE_ERRORS.load(Ordering::Relaxed),
            buffer_reallocations: BUFFER_REALLOCATIONS.load(Ordering::Relaxed),
        }
    }

    /// Average encoded size in bytes.
    #[must_use]
    pub fn avg_encoded_size(&self) -> Option<u64> {
        if self.encoded_containers == 0 {
            return None;
        }
        Some(self.encoded_bytes / self.encoded_containers)
    }
}
