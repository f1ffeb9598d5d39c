//! Data models for the contact book.
//!
//! A [`Record`] is one contact; an [`AddressBook`] stores many of them.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
