//! # Error Types
//!
//! Structured error types for estimate_core. These errors carry enough
//! context to fix issues programmatically (which field, what value, why).
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::errors::{EstimateError, EstimateResult};
//!
//! fn validate_eave(eave_m: f64) -> EstimateResult<()> {
//!     if eave_m <= 0.0 {
//!         return Err(EstimateError::Validation {
//!             field: "eave_front_m".to_string(),
//!             value: eave_m.to_string(),
//!             reason: "Eave height must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for estimate_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for the estimation pipeline.
///
/// Only two classes are fatal to a calculation: a malformed spacing
/// pattern and a configuration that fails validation. Reference lookup
/// misses are *not* errors; they degrade to a zero-weight placeholder
/// product (see [`crate::catalog::LookupService`]).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// A spacing pattern string does not match `N@D[+N@D]*`
    #[error("Cannot parse spacing pattern '{pattern}': {reason}")]
    SpacingParse { pattern: String, reason: String },

    /// The building configuration fails a structural sanity check
    #[error("Invalid configuration for '{field}': {value} - {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl EstimateError {
    /// Create a SpacingParse error
    pub fn spacing_parse(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::SpacingParse {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create a Validation error
    pub fn validation(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::Validation {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        EstimateError::MissingField {
            field: field.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::SpacingParse { .. } => "SPACING_PARSE",
            EstimateError::Validation { .. } => "VALIDATION",
            EstimateError::MissingField { .. } => "MISSING_FIELD",
            EstimateError::SerializationError { .. } => "SERIALIZATION_ERROR",
            EstimateError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
