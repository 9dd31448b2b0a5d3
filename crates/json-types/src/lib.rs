//! JSON conversions for datum-core types.
//!
//! This crate renders `TypedDatum` values as `serde_json::Value`s, preserving
//! numeric precision, composite nesting, nulls and timezone-sensitive
//! timestamps.
//!
//! # Modules
//!
//! - [`forward`] - TypedDatum → JSON value conversion
//! - [`config`] - Session formatting options
//! - [`geo`] - GeoJSON marshalling for spatial values
//! - [`error`] - Conversion errors
//!
//! # Example
//!
//! ```
//! use chrono_tz::Tz;
//! use datum_core::{SqlType, TypedDatum};
//! use json_types::{as_json, DataConversionConfig};
//!
//! let datum = TypedDatum::tuple(vec![
//!     TypedDatum::int(1),
//!     TypedDatum::text("x"),
//!     TypedDatum::null(SqlType::Int),
//! ]);
//! let json = as_json(&datum, &DataConversionConfig::default(), &Tz::UTC).unwrap();
//! assert_eq!(json, serde_json::json!([1, "x", null]));
//! ```

pub mod config;
pub mod error;
pub mod forward;
pub mod geo;

pub use config::{BytesEncoding, DataConversionConfig, NonFinitePolicy};
pub use error::{JsonTypesError, Result};
pub use forward::{as_json, row_to_json, row_to_jsonl, JsonValue};
pub use geo::{marshal_geojson, GeoKind};
