//! Random type and datum generation for exercising JSON conversion.
//!
//! This crate provides the `DatumGenerator` which produces deterministic random
//! datums for any `SqlType`, and a type generator that builds the list of
//! types a run covers. Everything is driven by a seeded RNG so that a failing
//! case can be reproduced from its seed.
//!
//! # Architecture
//!
//! ```text
//! seed_types()  (datum-core catalog)
//!        │
//!        ▼
//!  generate_types ──► [leaf, leaf[], ..., tuple(..) x5]
//!        │
//!        ▼
//! ┌─────────────────┐
//! │ DatumGenerator  │
//! │                 │
//! │  - seed         │
//! │  - rng (StdRng) │
//! │  - allow_nulls  │
//! └────────┬────────┘
//!          │
//!          ▼
//!    TypedDatum { sql_type, value }
//! ```
//!
//! # Example
//!
//! ```rust
//! use datum_generator::DatumGenerator;
//!
//! let mut generator = DatumGenerator::new(42);
//! let types = generator.types().unwrap();
//! for sql_type in &types {
//!     let datum = generator.next_datum(sql_type);
//!     assert_eq!(&datum.sql_type, sql_type);
//! }
//! ```
//!
//! # Value shapes
//!
//! - Nulls appear with probability [`NULL_PROBABILITY`] at every level
//! - Arrays have up to five elements
//! - Floats and decimals are occasionally NaN or infinite
//! - Timestamps fall between 1970 and 2100
//! - `record` produces an empty tuple; `unknown` produces text

pub mod generator;
pub mod generators;
pub mod types;

// Re-exports for convenience
pub use generator::{DatumGenerator, DatumIterator, GeneratorError};
pub use generators::{generate_value, rand_datum, NULL_PROBABILITY};
pub use types::{
    generate_types, test_types, MAX_TUPLE_ATTEMPTS, MAX_TUPLE_FIELDS, NUM_TUPLE_TYPES,
};
