//! Individual value generators for different data types.
//!
//! [`generate_value`] dispatches on the SQL type and recurses into arrays and
//! tuples; every other kind has its own module.

pub mod array;
pub mod geo;
pub mod json;
pub mod network;
pub mod numeric;
pub mod oid;
pub mod temporal;
pub mod text;

use datum_core::{Datum, SqlType, TypedDatum};
use rand::Rng;

/// Probability that a value is null when nulls are allowed.
///
/// Applies at every level: top-level values, array elements and tuple fields.
pub const NULL_PROBABILITY: f64 = 0.1;

/// Generate a random datum of the given type.
pub fn rand_datum<R: Rng>(rng: &mut R, sql_type: &SqlType, allow_nulls: bool) -> TypedDatum {
    TypedDatum::new(sql_type.clone(), generate_value(rng, sql_type, allow_nulls))
}

/// Generate a random value whose shape matches the given type.
pub fn generate_value<R: Rng>(rng: &mut R, sql_type: &SqlType, allow_nulls: bool) -> Datum {
    if allow_nulls && rng.gen_bool(NULL_PROBABILITY) {
        return Datum::Null;
    }

    match sql_type {
        SqlType::Bool => Datum::Bool(rng.gen()),
        SqlType::SmallInt => numeric::generate_int(rng, 16),
        SqlType::Int => numeric::generate_int(rng, 32),
        SqlType::BigInt => numeric::generate_int(rng, 64),
        SqlType::Float => numeric::generate_float(rng, true),
        SqlType::Double => numeric::generate_float(rng, false),
        SqlType::Decimal { precision, scale } => {
            numeric::generate_decimal(rng, *precision, *scale)
        }

        SqlType::Char { length } => text::generate_char(rng, *length),
        SqlType::VarChar { length } => text::generate_varchar(rng, *length),
        SqlType::Text | SqlType::Unknown => text::generate_text(rng),
        SqlType::Name => text::generate_name(rng),
        SqlType::Bytes => text::generate_bytes(rng),
        SqlType::Enum { labels, .. } => text::generate_enum(rng, labels),

        SqlType::Date => temporal::generate_date(rng),
        SqlType::Time => temporal::generate_time(rng),
        SqlType::TimeTz => temporal::generate_timetz(rng),
        SqlType::Timestamp => temporal::generate_timestamp(rng),
        SqlType::TimestampTz => temporal::generate_timestamptz(rng),
        SqlType::Interval => temporal::generate_interval(rng),

        SqlType::Uuid => Datum::Uuid(uuid::Builder::from_random_bytes(rng.gen()).into_uuid()),
        SqlType::Inet => network::generate_inet(rng),
        SqlType::Json => json::generate_json(rng),

        SqlType::Oid
        | SqlType::RegClass
        | SqlType::RegNamespace
        | SqlType::RegProc
        | SqlType::RegProcedure
        | SqlType::RegRole
        | SqlType::RegType => oid::generate_oid(rng, sql_type),

        SqlType::Geometry => geo::generate_geometry(rng, false),
        SqlType::Geography => geo::generate_geometry(rng, true),

        SqlType::Array { element_type } => array::generate_array(rng, element_type, allow_nulls),
        SqlType::Tuple { fields } => array::generate_tuple(rng, fields, allow_nulls),
        SqlType::AnyTuple => Datum::Tuple(Vec::new()),
    }
}
