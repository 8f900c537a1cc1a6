//! Error types for the Scriptnet core library
//!
//! Every error produced while turning a script configuration into a client is
//! a caller error except [`Error::ClientBuild`], which wraps a failure of the
//! underlying HTTP library itself.

use thiserror::Error;

/// Main error type for client construction
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration argument is not a table
    #[error("configuration must be a table, got {actual}")]
    ConfigShape { actual: String },

    /// A recognized option holds a value of the wrong type
    #[error("{field} must be {expected}, got {actual}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        actual: String,
    },

    /// A recognized option has the right type but an unusable value
    #[error("{field} is invalid: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The HTTP library refused the resolved configuration
    #[error("failed to build HTTP client: {message}")]
    ClientBuild {
        message: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Name of the configuration field this error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::InvalidType { field, .. } | Error::InvalidValue { field, .. } => Some(*field),
            Error::ConfigShape { .. } | Error::ClientBuild { .. } => None,
        }
    }

    /// Whether the error was caused by the configuration the caller supplied
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Error::ClientBuild { .. })
    }

    pub(crate) fn invalid_type(
        field: &'static str,
        expected: &'static str,
        actual: &crate::Value,
    ) -> Self {
        Error::InvalidType {
            field,
            expected,
            actual: actual.type_name().to_string(),
        }
    }
}
