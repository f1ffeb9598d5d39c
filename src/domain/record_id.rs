//! RecordId value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier handed out by an [`AddressBook`](crate::models::AddressBook)
/// when a record is added.
///
/// Ids are unique within one book and increase with insertion order. They are
/// never reused, even after the record they named is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
