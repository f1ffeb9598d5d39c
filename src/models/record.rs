//! Record model: one contact with a name and its phone numbers.

use crate::domain::{Field, Name, Phone};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at construction. Phones keep insertion order and never
/// hold two entries with the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordData")]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

/// Unvalidated wire form of a [`Record`].
#[derive(Deserialize)]
struct RecordData {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
}

impl TryFrom<RecordData> for Record {
    type Error = BookError;

    fn try_from(data: RecordData) -> Result<Self, Self::Error> {
        let mut record = Record::new(data.name);
        for phone in &data.phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.matches(phone))
    }

    /// Append a phone.
    ///
    /// # Errors
    ///
    /// `DuplicatePhone` if the value is already present (checked first), or
    /// `PhoneFormat` if it is not a valid phone.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        if self.position(phone).is_some() {
            return Err(BookError::DuplicatePhone(phone.to_string()));
        }
        self.phones.push(Phone::new(phone)?);
        tracing::debug!(name = %self.name, phone, "Phone added");
        Ok(())
    }

    /// Remove the first phone equal to `phone` and return it.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<Phone> {
        let idx = self
            .position(phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;
        tracing::debug!(name = %self.name, phone, "Phone removed");
        Ok(self.phones.remove(idx))
    }

    /// Replace `old` with `new` at the same position.
    ///
    /// The replacement is validated before anything changes, so on any error
    /// the phone list is left untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let idx = self
            .position(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        if old != new && self.position(new).is_some() {
            return Err(BookError::DuplicatePhone(new.to_string()));
        }
        self.phones[idx] = Phone::new(new)?;
        tracing::debug!(name = %self.name, old, new, "Phone edited");
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.matches(phone))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
