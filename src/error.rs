//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when modifying records or the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone value failed validation
    #[error(transparent)]
    PhoneFormat(#[from] ValidationError),

    /// The record already holds this phone
    #[error("This phone already exists")]
    DuplicatePhone(String),

    /// The record holds no such phone
    #[error("Phone not found")]
    PhoneNotFound(String),

    /// No record in the book has this name
    #[error("The Record with this name not found.")]
    RecordNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
