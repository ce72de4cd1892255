//! Error types for Reglas operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Reglas operations.
///
/// Covers threshold normalization failures, missing mining preconditions,
/// and table construction problems.
///
/// # Examples
///
/// ```
/// use reglas::error::ReglasError;
///
/// let err = ReglasError::InvalidThreshold {
///     value: "120%".to_string(),
///     constraint: "within [0, 1]".to_string(),
/// };
/// assert!(err.to_string().contains("Invalid threshold"));
/// ```
#[derive(Debug)]
pub enum ReglasError {
    /// Threshold could not be parsed or is outside [0, 1] after normalization.
    InvalidThreshold {
        /// Value as provided by the caller
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Rule mining was requested without a transaction table and without
    /// precomputed frequency tables to mine from.
    MissingTransactionTable,

    /// Requested mining algorithm is not implemented.
    Unsupported {
        /// Algorithm name (e.g., "fp-growth")
        algorithm: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for ReglasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReglasError::InvalidThreshold { value, constraint } => {
                write!(f, "Invalid threshold: {value}, expected {constraint}")
            }
            ReglasError::MissingTransactionTable => {
                write!(
                    f,
                    "No transaction table or precomputed frequency tables to mine from"
                )
            }
            ReglasError::Unsupported { algorithm } => {
                write!(f, "Unsupported mining algorithm: {algorithm}")
            }
            ReglasError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ReglasError {}

impl From<&str> for ReglasError {
    fn from(msg: &str) -> Self {
        ReglasError::Other(msg.to_string())
    }
}

impl From<String> for ReglasError {
    fn from(msg: String) -> Self {
        ReglasError::Other(msg)
    }
}

impl ReglasError {
    /// Create an invalid threshold error with descriptive context
    #[must_use]
    pub fn invalid_threshold(value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidThreshold {
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create an index out of bounds error
    #[must_use]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::Other(format!("index {index} out of bounds (len={len})"))
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ReglasError>;
