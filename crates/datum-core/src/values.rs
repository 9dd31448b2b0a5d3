//! Datum value representations.
//!
//! A `Datum` is the raw value of a SQL column. It does not know its own type:
//! `TypedDatum` pairs it with a `SqlType`, which is what conversions dispatch on.

use crate::interval::Interval;
use crate::types::SqlType;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use geo_types::Geometry;
use std::net::IpAddr;
use uuid::Uuid;

/// Raw SQL value.
///
/// Composite values own their elements, so a datum is always a finite tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    /// SQL NULL of whatever type the datum is paired with
    Null,

    /// Boolean value
    Bool(bool),

    /// Integer value of any width; the paired type decides the valid range
    Int(i64),

    /// Floating point value, possibly NaN or infinite
    Float(f64),

    /// Decimal value in canonical text form (`-12.50`, `NaN`, `Infinity`)
    Decimal(String),

    /// Character data
    String(String),

    /// Binary data
    Bytes(Vec<u8>),

    /// Calendar date
    Date(NaiveDate),

    /// Time of day
    Time(NaiveTime),

    /// Time of day with its UTC offset
    TimeTz {
        /// Local time of day
        time: NaiveTime,
        /// Offset the time is expressed in
        offset: FixedOffset,
    },

    /// Timestamp without timezone
    Timestamp(NaiveDateTime),

    /// Instant in time
    TimestampTz(DateTime<Utc>),

    /// Interval value
    Interval(Interval),

    /// UUID value
    Uuid(Uuid),

    /// Network address
    Inet {
        /// Host address
        addr: IpAddr,
        /// Network prefix length in bits
        prefix: u8,
    },

    /// Object identifier, with the object's name when it is known
    Oid {
        /// Numeric OID
        oid: u32,
        /// Resolved object name for `reg*` aliases
        name: Option<String>,
    },

    /// JSON document
    Json(serde_json::Value),

    /// Enum label
    Enum(String),

    /// Spatial value
    Geo(Geometry<f64>),

    /// Array elements
    Array(Vec<Datum>),

    /// Tuple fields
    Tuple(Vec<Datum>),
}

impl Datum {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the value shape, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Decimal(_) => "decimal",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::TimeTz { .. } => "timetz",
            Self::Timestamp(_) => "timestamp",
            Self::TimestampTz(_) => "timestamptz",
            Self::Interval(_) => "interval",
            Self::Uuid(_) => "uuid",
            Self::Inet { .. } => "inet",
            Self::Oid { .. } => "oid",
            Self::Json(_) => "json",
            Self::Enum(_) => "enum",
            Self::Geo(_) => "geo",
            Self::Array(_) => "array",
            Self::Tuple(_) => "tuple",
        }
    }

    /// Try to get the elements of an array or the fields of a tuple.
    pub fn as_elements(&self) -> Option<&[Datum]> {
        match self {
            Self::Array(items) | Self::Tuple(items) => Some(items),
            _ => None,
        }
    }
}

/// Datum together with the type it was produced for.
///
/// `TypedDatum` provides the type context needed to render a value; a bare
/// `Datum::Int` could be an `int2`, an `int8` or an array element.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedDatum {
    /// The declared type
    pub sql_type: SqlType,

    /// The raw value
    pub value: Datum,
}

impl TypedDatum {
    /// Create a new typed datum.
    pub fn new(sql_type: SqlType, value: Datum) -> Self {
        Self { sql_type, value }
    }

    /// Create a null datum of the given type.
    pub fn null(sql_type: SqlType) -> Self {
        Self::new(sql_type, Datum::Null)
    }

    /// Create a boolean datum.
    pub fn bool(value: bool) -> Self {
        Self::new(SqlType::Bool, Datum::Bool(value))
    }

    /// Create an int4 datum.
    pub fn int(value: i32) -> Self {
        Self::new(SqlType::Int, Datum::Int(i64::from(value)))
    }

    /// Create an int8 datum.
    pub fn bigint(value: i64) -> Self {
        Self::new(SqlType::BigInt, Datum::Int(value))
    }

    /// Create a float8 datum.
    pub fn double(value: f64) -> Self {
        Self::new(SqlType::Double, Datum::Float(value))
    }

    /// Create a decimal datum from its text form.
    pub fn decimal(value: impl Into<String>, precision: u8, scale: u8) -> Self {
        Self::new(
            SqlType::Decimal { precision, scale },
            Datum::Decimal(value.into()),
        )
    }

    /// Create a text datum.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(SqlType::Text, Datum::String(value.into()))
    }

    /// Create a bytea datum.
    pub fn bytes(value: Vec<u8>) -> Self {
        Self::new(SqlType::Bytes, Datum::Bytes(value))
    }

    /// Create a UUID datum.
    pub fn uuid(value: Uuid) -> Self {
        Self::new(SqlType::Uuid, Datum::Uuid(value))
    }

    /// Create a timestamp datum.
    pub fn timestamp(value: NaiveDateTime) -> Self {
        Self::new(SqlType::Timestamp, Datum::Timestamp(value))
    }

    /// Create a timestamptz datum.
    pub fn timestamptz(value: DateTime<Utc>) -> Self {
        Self::new(SqlType::TimestampTz, Datum::TimestampTz(value))
    }

    /// Create an interval datum.
    pub fn interval(value: Interval) -> Self {
        Self::new(SqlType::Interval, Datum::Interval(value))
    }

    /// Create an array datum.
    pub fn array(values: Vec<Datum>, element_type: SqlType) -> Self {
        Self::new(SqlType::array(element_type), Datum::Array(values))
    }

    /// Create a tuple datum from typed fields.
    pub fn tuple(fields: Vec<TypedDatum>) -> Self {
        let (types, values): (Vec<SqlType>, Vec<Datum>) = fields
            .into_iter()
            .map(|field| (field.sql_type, field.value))
            .unzip();
        Self::new(SqlType::tuple(types), Datum::Tuple(values))
    }

    /// Check if this typed datum is null.
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }
}
