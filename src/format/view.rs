//! Immutable snapshots of Zero containers.

use std::fmt;
use std::ops::Deref;

/// Read-only copy of a container.
///
/// The snapshot owns its data, so later mutation of the source container is
/// never visible through it, and it only hands out shared references.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOnly<T>(T);

impl<T> ReadOnly<T> {
    pub(crate) const fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Take ownership of a mutable copy of the snapshot.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ReadOnly<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for ReadOnly<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for ReadOnly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
