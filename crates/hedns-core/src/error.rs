//! Error types for the hedns toolkit
//!
//! Only conditions that abort a command are errors. Per-item results such as
//! "record already exists" or "deletion cancelled" are outcome values, see
//! [`crate::traits::AddOutcome`] and [`crate::traits::DeleteOutcome`].

use thiserror::Error;

/// Result type alias for hedns operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the hedns toolkit
#[derive(Error, Debug)]
pub enum Error {
    /// Login was rejected or the console session could not be established
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// No zone in the account carries the requested name
    #[error("Domain {0} not found in your HE DNS zones")]
    ZoneNotFound(String),

    /// Record type outside the supported address-record set
    #[error("Unsupported record type: {0}. Only A, AAAA are supported")]
    UnsupportedRecordType(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(String),
}

impl Error {
    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a "zone not found" error
    pub fn zone_not_found(name: impl Into<String>) -> Self {
        Self::ZoneNotFound(name.into())
    }

    /// Create an unsupported record type error
    pub fn unsupported_type(record_type: impl Into<String>) -> Self {
        Self::UnsupportedRecordType(record_type.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Whether this error must abort the whole command.
    ///
    /// Fatal errors stop a batch immediately. Transport errors are attributed
    /// to the item being processed and its siblings still run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Authentication(_)
                | Self::ZoneNotFound(_)
                | Self::UnsupportedRecordType(_)
                | Self::Config(_)
                | Self::InvalidInput(_)
        )
    }
}
