//! Seed catalog of leaf types.

use crate::types::SqlType;

/// Labels of the enum type included in the seed set.
const SEED_ENUM_LABELS: [&str; 3] = ["sad", "ok", "happy"];

/// Return one representative of every leaf type kind.
///
/// Parameterized kinds use a fixed, typical parameterization. `Unknown` is not
/// part of the seed set: it only exists for untyped literals.
pub fn seed_types() -> Vec<SqlType> {
    vec![
        SqlType::Bool,
        SqlType::SmallInt,
        SqlType::Int,
        SqlType::BigInt,
        SqlType::Float,
        SqlType::Double,
        SqlType::decimal(10, 2),
        SqlType::char(8),
        SqlType::varchar(16),
        SqlType::Text,
        SqlType::Name,
        SqlType::Bytes,
        SqlType::Date,
        SqlType::Time,
        SqlType::TimeTz,
        SqlType::Timestamp,
        SqlType::TimestampTz,
        SqlType::Interval,
        SqlType::Uuid,
        SqlType::Inet,
        SqlType::Oid,
        SqlType::RegClass,
        SqlType::RegNamespace,
        SqlType::RegProc,
        SqlType::RegProcedure,
        SqlType::RegRole,
        SqlType::RegType,
        SqlType::Json,
        SqlType::enumeration(
            "mood",
            SEED_ENUM_LABELS.iter().map(|s| s.to_string()).collect(),
        ),
        SqlType::Geometry,
        SqlType::Geography,
        SqlType::AnyTuple,
    ]
}

/// Check whether an array of the given type may be built.
///
/// Arrays of arrays, arrays of tuples and arrays of pseudo types are not
/// allowed.
pub fn is_allowed_for_array(sql_type: &SqlType) -> bool {
    !matches!(
        sql_type,
        SqlType::AnyTuple | SqlType::Unknown | SqlType::Array { .. } | SqlType::Tuple { .. }
    )
}
