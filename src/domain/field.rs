//! Common behavior for string-valued record fields.

use std::fmt;

/// A string-valued attribute of a [`Record`](crate::models::Record).
///
/// Field kinds differ only in how they validate their input, so each kind is
/// its own value type and this trait exposes the shared read access.
pub trait Field: fmt::Display {
    /// The stored value, verbatim.
    fn value(&self) -> &str;

    /// Whether the stored value equals `other` exactly.
    fn matches(&self, other: &str) -> bool {
        self.value() == other
    }
}
