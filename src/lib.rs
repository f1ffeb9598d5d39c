//! Contact Book - an in-memory address book with validated phone numbers.
//!
//! # Architecture
//!
//! - **domain**: Value objects for names, phones and record ids
//! - **models**: The `Record` contact type and the `AddressBook` collection
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **demo**: Scripted walkthrough used by the binary

pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{Field, Name, Phone, RecordId, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{AddressBook, Record};
