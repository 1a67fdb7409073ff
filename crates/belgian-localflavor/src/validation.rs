use thiserror::Error;

/// Validation errors raised when cleaning or parsing field values.
///
/// Each variant carries the user-facing message so that per-field overrides
/// travel with the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field received an empty-equivalent value.
    #[error("{message}")]
    Required {
        /// Message shown to the user.
        message: String,
    },
    /// The value is not a checksum-valid National Register Number.
    #[error("{message}")]
    InvalidNrn {
        /// Message shown to the user.
        message: String,
    },
    /// The value is not a Belgian postal code.
    #[error("{message}")]
    InvalidPostalCode {
        /// Message shown to the user.
        message: String,
    },
}

impl ValidationError {
    /// Stable error code, used as the key for message overrides.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Required { .. } => "required",
            ValidationError::InvalidNrn { .. } | ValidationError::InvalidPostalCode { .. } => {
                "invalid"
            }
        }
    }

    /// User-facing message.
    pub fn message(&self) -> &str {
        match self {
            ValidationError::Required { message }
            | ValidationError::InvalidNrn { message }
            | ValidationError::InvalidPostalCode { message } => message,
        }
    }
}
