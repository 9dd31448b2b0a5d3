//! Seeded datum generator.

use crate::generators::rand_datum;
use crate::types::test_types;
use datum_core::{SqlType, TypedDatum};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error type for generator operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// No new distinct tuple type was found within the retry budget
    #[error("Could not find a new distinct tuple type after {attempts} attempts ({generated} generated so far)")]
    TupleSpaceExhausted {
        /// Candidates tried for the missing tuple type
        attempts: usize,
        /// Tuple types generated before giving up
        generated: usize,
    },
}

/// Datum generator that produces deterministic random values.
///
/// The generator uses a seeded random number generator, so the same seed and
/// sequence of calls always yields the same datums.
pub struct DatumGenerator {
    /// Seed the RNG was created from
    seed: u64,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Whether generated values may be null at any level
    allow_nulls: bool,
    /// Number of datums generated so far
    index: u64,
}

impl DatumGenerator {
    /// Create a new generator with the given seed. Nulls are allowed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            allow_nulls: true,
            index: 0,
        }
    }

    /// Set whether generated values may be null.
    pub fn with_nulls(mut self, allow_nulls: bool) -> Self {
        self.allow_nulls = allow_nulls;
        self
    }

    /// Get the seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the number of datums generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the type list for a run from the catalog seed types, using
    /// this generator's RNG.
    pub fn types(&mut self) -> Result<Vec<SqlType>, GeneratorError> {
        test_types(&mut self.rng)
    }

    /// Generate the next datum of the given type.
    pub fn next_datum(&mut self, sql_type: &SqlType) -> TypedDatum {
        self.index += 1;
        rand_datum(&mut self.rng, sql_type, self.allow_nulls)
    }

    /// Generate `count` datums of the given type.
    ///
    /// Returns an iterator that lazily generates datums.
    pub fn datums<'a>(&'a mut self, sql_type: &'a SqlType, count: u64) -> DatumIterator<'a> {
        DatumIterator {
            generator: self,
            sql_type,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates datums of one type.
pub struct DatumIterator<'a> {
    generator: &'a mut DatumGenerator,
    sql_type: &'a SqlType,
    remaining: u64,
}

impl Iterator for DatumIterator<'_> {
    type Item = TypedDatum;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_datum(self.sql_type))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DatumIterator<'_> {}
