//! Error types for the booking component.

use tablebook_forms::FormError;

/// Errors raised around the booking form.
///
/// Invalid input is not an error: it is reported as
/// [`ValidationErrors`](tablebook_forms::ValidationErrors) data.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// The name does not belong to any booking field.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Error from the form layer.
    #[error(transparent)]
    Form(#[from] FormError),

    /// A values document had the wrong shape.
    #[error("invalid values for field {field}: {message}")]
    InvalidValues {
        /// Offending key, or `(root)` for the document itself.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// IO error (writing notifications, reading value files or scripts).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A session script line could not be understood.
    #[error("line {line}: {message}")]
    Script {
        /// 1-based line number.
        line: usize,
        /// Error message.
        message: String,
    },
}

/// Result type for booking operations.
pub type Result<T> = std::result::Result<T, BookingError>;
