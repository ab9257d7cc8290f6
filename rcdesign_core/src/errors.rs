//! # Error Types
//!
//! Structured error types for rcdesign_core. Every calculation validates its
//! input record before computing anything and fails fast with one of these
//! variants; no partial result is ever returned.
//!
//! A design that does not verify (steel ratio out of bounds, demand above
//! capacity) is *not* an error. Those verdicts are boolean fields on the
//! result records.
//!
//! ## Example
//!
//! ```rust
//! use rcdesign_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rcdesign_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A code from a closed lookup table is not recognised
    /// (seismic zone, soil profile, bar designation, support condition)
    #[error("Unsupported {kind} code: '{code}'")]
    UnsupportedCode { kind: String, code: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedCode error
    pub fn unsupported_code(kind: impl Into<String>, code: impl Into<String>) -> Self {
        CalcError::UnsupportedCode {
            kind: kind.into(),
            code: code.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnsupportedCode { .. } => "UNSUPPORTED_CODE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Reject values that are not strictly positive (or not finite).
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be positive",
        ));
    }
    Ok(())
}

/// Reject negative (or non-finite) values. Zero is allowed.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value cannot be negative",
        ));
    }
    Ok(())
}
