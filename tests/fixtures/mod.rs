//! Test fixtures and sample data.
//!
//! Reusable builders for records and books shared by the integration tests.

use contact_book::{AddressBook, Record};

/// Create a record with the given name and phones.
///
/// Panics if any phone is rejected, so only pass valid, distinct values.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record
            .add_phone(phone)
            .unwrap_or_else(|e| panic!("fixture phone {} rejected: {}", phone, e));
    }
    record
}

/// The two-contact book the walkthrough builds before any edits.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890", "5555555555"]));
    book.add_record(sample_record("Jane", &["9876543210"]));
    book
}

/// Phone values of a record, in order.
#[allow(dead_code)]
pub fn phone_values(record: &Record) -> Vec<String> {
    record
        .phones()
        .iter()
        .map(|p| p.as_str().to_string())
        .collect()
}
