//! # Parameter Errors
//!
//! Errors raised while loading a parameter set from a table, a JSON document
//! or a `name=value` override. Building and reporting never fail.

use thiserror::Error;

/// Errors that can occur while loading parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    /// Name does not match any known parameter.
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// Value is NaN or infinite.
    #[error("Parameter {name} must be finite, got {value}")]
    NonFinite { name: String, value: f64 },

    /// Tessellation resolution is not a whole number of facets.
    #[error("Parameter segments must be a whole number >= {min}, got {value}")]
    InvalidSegments { value: f64, min: u32 },

    /// Rib grid divisions are not a whole number of cells.
    #[error("Parameter rib_divisions must be a whole number from {min} to {max}, got {value}")]
    InvalidRibDivisions { value: f64, min: u32, max: u32 },

    /// Override is not of the form `name=value`.
    #[error("Malformed assignment '{0}': expected name=value")]
    MalformedAssignment(String),

    /// JSON document could not be decoded.
    #[error("Invalid parameter JSON: {0}")]
    Json(String),
}

impl ParamsError {
    /// Creates a non-finite value error.
    pub fn non_finite(name: impl Into<String>, value: f64) -> Self {
        Self::NonFinite {
            name: name.into(),
            value,
        }
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
