//! Error types for JSON conversions.
//!
//! Every failure aborts the whole conversion: a datum either converts
//! completely or produces one of these errors and no JSON value.

use thiserror::Error;

/// Errors that can occur while converting a datum to JSON.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JsonTypesError {
    /// The type has no conversion rule.
    #[error("Unsupported type for JSON conversion: {sql_type}")]
    UnsupportedType { sql_type: String },

    /// The value does not have the shape its declared type requires.
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A numeric value cannot be rendered under the active policy.
    #[error("Cannot render {sql_type} value as JSON: {reason}")]
    NumericRender { sql_type: String, reason: String },

    /// Marshalling a spatial value to GeoJSON, or parsing it back, failed.
    #[error("GeoJSON encoding failed: {0}")]
    GeoEncoding(String),
}

/// Result type for JSON conversions.
pub type Result<T> = std::result::Result<T, JsonTypesError>;
