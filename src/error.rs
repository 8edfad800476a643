//! Error types for connection string resolution.

use thiserror::Error;

/// Result type for connection string operations.
pub type UriResult<T> = Result<T, UriError>;

/// Errors that can occur while parsing or resolving a connection string.
///
/// Every error is terminal for the construction attempt: there is no partial
/// result to recover. [`UriError::Malformed`] covers syntactic failures of
/// the connection string itself; every other variant reports a semantic
/// violation of the merged configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// The connection string could not be parsed.
    #[error("invalid connection string: {0}")]
    Malformed(String),

    /// An option value is out of bounds or otherwise invalid.
    #[error("invalid {key}: {message}")]
    InvalidOption {
        /// The offending option key.
        key: String,
        /// Description of the violated constraint.
        message: String,
    },

    /// Two options were supplied with incompatible values.
    #[error("conflicting options: {0}")]
    Conflict(String),

    /// A recognized connection string option that is permanently unsupported.
    #[error("unsupported connection string option {0}")]
    UnsupportedOption(String),
}

impl UriError {
    /// Create a malformed connection string error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Create an invalid option error.
    pub fn invalid_option(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a conflicting options error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Check if this is a syntactic parse failure.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    /// Check if this is a semantic configuration failure.
    pub fn is_invalid_configuration(&self) -> bool {
        !self.is_malformed()
    }
}
