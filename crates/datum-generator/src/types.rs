//! Random type generation.
//!
//! Builds the list of types a conversion run is exercised with: the seed leaf
//! types, arrays of the array-eligible ones, and a handful of structurally
//! distinct tuple types drawn from that list.

use crate::generator::GeneratorError;
use datum_core::{is_allowed_for_array, seed_types, SqlType};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Number of tuple types appended to every generated type list.
pub const NUM_TUPLE_TYPES: usize = 5;

/// Tuple field counts are drawn from `0..MAX_TUPLE_FIELDS`.
pub const MAX_TUPLE_FIELDS: usize = 6;

/// Candidate tuples tried before giving up on finding a new distinct one.
pub const MAX_TUPLE_ATTEMPTS: usize = 10_000;

/// Generate the type list from the catalog seed types.
pub fn test_types<R: Rng>(rng: &mut R) -> Result<Vec<SqlType>, GeneratorError> {
    generate_types(&seed_types(), rng)
}

/// Generate a type list from the given seed types.
///
/// OID aliases, geospatial types and `AnyTuple` are left out. Every remaining
/// type appears once, immediately followed by its array type when arrays of
/// it are allowed. [`NUM_TUPLE_TYPES`] pairwise distinct tuple types are
/// appended last; their fields are drawn from the scalar and array types only.
pub fn generate_types<R: Rng>(
    seed: &[SqlType],
    rng: &mut R,
) -> Result<Vec<SqlType>, GeneratorError> {
    let mut types: Vec<SqlType> = Vec::new();
    let mut seen: HashSet<&SqlType> = HashSet::new();

    for sql_type in seed.iter().filter(|t| !is_excluded(t)) {
        if !seen.insert(sql_type) {
            continue;
        }
        types.push(sql_type.clone());
        if is_allowed_for_array(sql_type) {
            types.push(SqlType::array(sql_type.clone()));
        }
    }

    let field_pool = types.clone();
    let mut tuples: HashSet<SqlType> = HashSet::new();
    for generated in 0..NUM_TUPLE_TYPES {
        let tuple = make_unique_tuple(&field_pool, &tuples, rng, generated)?;
        tuples.insert(tuple.clone());
        types.push(tuple);
    }

    debug!(
        "Generated {} types from {} seed types",
        types.len(),
        seed.len()
    );
    Ok(types)
}

/// Whether a seed type is left out of generated type lists.
pub fn is_excluded(sql_type: &SqlType) -> bool {
    sql_type.is_oid_alias() || sql_type.is_geospatial() || *sql_type == SqlType::AnyTuple
}

fn make_unique_tuple<R: Rng>(
    pool: &[SqlType],
    existing: &HashSet<SqlType>,
    rng: &mut R,
    generated: usize,
) -> Result<SqlType, GeneratorError> {
    for attempt in 0..MAX_TUPLE_ATTEMPTS {
        let field_count = if pool.is_empty() {
            0
        } else {
            rng.gen_range(0..MAX_TUPLE_FIELDS)
        };
        let fields: Vec<SqlType> = (0..field_count)
            .filter_map(|_| pool.choose(rng).cloned())
            .collect();

        let candidate = SqlType::tuple(fields);
        if !existing.contains(&candidate) {
            return Ok(candidate);
        }
        debug!("Tuple candidate {candidate} collides on attempt {attempt}, retrying");
    }

    Err(GeneratorError::TupleSpaceExhausted {
        attempts: MAX_TUPLE_ATTEMPTS,
        generated,
    })
}
