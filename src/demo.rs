//! Scripted walkthrough of the contact book.
//!
//! Builds a book with two contacts, edits and queries them, then deletes
//! one. Output goes to any writer so the run can be captured in tests.

use crate::error::BookError;
use crate::models::{AddressBook, Record};
use anyhow::Result;
use std::io::Write;

/// Phone list rendered as `['a', 'b']`.
fn phone_list(record: &Record) -> String {
    let quoted: Vec<String> = record
        .phones()
        .iter()
        .map(|p| format!("'{}'", p))
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Run the walkthrough and return the resulting book.
///
/// A [`BookError`] aborts the script; pass the result to [`report`] to
/// print it the way the binary does.
pub fn run<W: Write>(out: &mut W) -> Result<AddressBook> {
    let mut book = AddressBook::new();

    let mut john_record = Record::new("John");
    john_record.add_phone("1234567890")?;
    john_record.add_phone("5555555555")?;
    john_record.add_phone("5555566666")?;
    writeln!(out, "{}", phone_list(&john_record))?;

    john_record.remove_phone("5555566666")?;
    writeln!(out, "{}", phone_list(&john_record))?;

    book.add_record(john_record);

    let mut jane_record = Record::new("Jane");
    jane_record.add_phone("9876543210")?;
    book.add_record(jane_record);

    for record in book.records() {
        writeln!(out, "{}", record)?;
    }

    let john = book
        .find_mut("John")
        .ok_or_else(|| BookError::RecordNotFound("John".to_string()))?;
    john.edit_phone("1234567890", "1112223333")?;
    writeln!(out, "{}", john)?;

    match john.find_phone("5555555555") {
        Some(phone) => writeln!(out, "{}: {}", john.name(), phone)?,
        None => writeln!(out, "{}: Phone not found", john.name())?,
    }

    book.delete("Jane")?;

    Ok(book)
}

/// Settle the outcome of a walkthrough.
///
/// A [`BookError`] is written to `out` as its message and the run counts as
/// finished, yielding `Ok(None)`. Any other error is returned unchanged.
pub fn report<W: Write>(
    result: Result<AddressBook>,
    out: &mut W,
) -> Result<Option<AddressBook>> {
    match result {
        Ok(book) => Ok(Some(book)),
        Err(e) => match e.downcast_ref::<BookError>() {
            Some(book_err) => {
                tracing::error!("Walkthrough aborted: {:?}", book_err);
                writeln!(out, "{}", book_err)?;
                Ok(None)
            }
            None => Err(e),
        },
    }
}
