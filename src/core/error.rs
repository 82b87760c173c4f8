//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input in field '{field}': not a valid {expected}")]
    InvalidInput {
        field: &'static str,
        expected: &'static str,
    },
}

impl Error {
    /// Invalid-input error for a field that must hold a non-negative integer
    pub fn invalid_integer(field: &'static str) -> Self {
        Self::InvalidInput {
            field,
            expected: "non-negative integer",
        }
    }

    /// Invalid-input error for a field that must hold a non-negative decimal
    pub fn invalid_decimal(field: &'static str) -> Self {
        Self::InvalidInput {
            field,
            expected: "non-negative decimal",
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
