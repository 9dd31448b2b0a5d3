//! Core types for the datum-json framework.
//!
//! This crate provides the foundational types shared by the conversion engine
//! and the random generators:
//!
//! - [`SqlType`] - Relational type descriptor (leaf kinds, arrays, tuples)
//! - [`Datum`] - Raw SQL value
//! - [`TypedDatum`] - Value paired with its type for conversion
//! - [`Interval`] - Month/day/microsecond interval with its textual styles
//! - [`catalog`] - Seed set of leaf types and array eligibility
//!
//! # Architecture
//!
//! ```text
//! datum-core (this crate)
//!    │
//!    ├─── datum-generator   (random types and datums)
//!    │
//!    └─── json-types        (TypedDatum → JSON value)
//! ```
//!
//! # Example
//!
//! ```rust
//! use datum_core::{Datum, SqlType, TypedDatum};
//!
//! let value = TypedDatum::new(SqlType::Int, Datum::Int(42));
//! assert!(!value.is_null());
//! ```

pub mod catalog;
pub mod interval;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use catalog::{is_allowed_for_array, seed_types};
pub use interval::{Interval, IntervalStyle};
pub use types::SqlType;
pub use values::{Datum, TypedDatum};
