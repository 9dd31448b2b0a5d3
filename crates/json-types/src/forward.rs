//! Forward conversion: TypedDatum → JSON value.
//!
//! [`as_json`] dispatches on the declared type kind, checks that the value has
//! the shape that kind requires, and renders it. Arrays and tuples recurse with
//! the same configuration and timezone; the first failing element aborts the
//! whole conversion.

use crate::config::{DataConversionConfig, NonFinitePolicy};
use crate::error::{JsonTypesError, Result};
use crate::geo::{marshal_geojson, GeoKind};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use datum_core::{Datum, SqlType, TypedDatum};
use geo_types::Geometry;
use serde_json::{Number, Value};
use std::net::IpAddr;
use tracing::{debug, trace};

/// Wrapper for JSON values produced from datums.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonValue(pub Value);

impl JsonValue {
    /// Get the inner JSON value.
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Get a reference to the inner JSON value.
    pub fn as_inner(&self) -> &Value {
        &self.0
    }
}

/// Converts with the default configuration, rendering instants in UTC.
impl TryFrom<TypedDatum> for JsonValue {
    type Error = JsonTypesError;

    fn try_from(datum: TypedDatum) -> Result<Self> {
        as_json(&datum, &DataConversionConfig::default(), &Tz::UTC).map(JsonValue)
    }
}

/// Convert a typed datum to a JSON value.
///
/// The result depends only on the three inputs. `timestamptz` values are
/// rendered in `tz`; every other kind ignores it.
///
/// # Errors
///
/// - [`JsonTypesError::UnsupportedType`] if the type has no conversion rule
/// - [`JsonTypesError::TypeMismatch`] if the value does not fit the type
/// - [`JsonTypesError::NumericRender`] for out-of-range integers, malformed
///   decimals, and non-finite numbers under [`NonFinitePolicy::Error`]
/// - [`JsonTypesError::GeoEncoding`] if a spatial value cannot be marshalled
pub fn as_json(datum: &TypedDatum, config: &DataConversionConfig, tz: &Tz) -> Result<Value> {
    convert(&datum.sql_type, &datum.value, config, tz)
}

fn convert(
    sql_type: &SqlType,
    value: &Datum,
    config: &DataConversionConfig,
    tz: &Tz,
) -> Result<Value> {
    if value.is_null() {
        return Ok(Value::Null);
    }

    let mismatch = || JsonTypesError::TypeMismatch {
        expected: sql_type.to_string(),
        actual: value.kind_name().to_string(),
    };

    match sql_type {
        SqlType::Bool => match value {
            Datum::Bool(b) => Ok(Value::Bool(*b)),
            _ => Err(mismatch()),
        },

        // Integer types - range-checked against the declared width
        SqlType::SmallInt => match value {
            Datum::Int(i) => int_to_json(sql_type, *i, i16::MIN.into(), i16::MAX.into()),
            _ => Err(mismatch()),
        },
        SqlType::Int => match value {
            Datum::Int(i) => int_to_json(sql_type, *i, i32::MIN.into(), i32::MAX.into()),
            _ => Err(mismatch()),
        },
        SqlType::BigInt => match value {
            Datum::Int(i) => Ok(Value::from(*i)),
            _ => Err(mismatch()),
        },

        // Floating point
        SqlType::Float | SqlType::Double => match value {
            Datum::Float(f) => float_to_json(sql_type, *f, config),
            _ => Err(mismatch()),
        },

        // Decimal - keep every digit of the stored text
        SqlType::Decimal { .. } => match value {
            Datum::Decimal(text) => decimal_to_json(sql_type, text, config),
            _ => Err(mismatch()),
        },

        // String types
        SqlType::Char { .. } | SqlType::VarChar { .. } | SqlType::Text | SqlType::Name => {
            match value {
                Datum::String(s) => Ok(Value::String(s.clone())),
                _ => Err(mismatch()),
            }
        }

        // Binary types - encoding picked by the configuration
        SqlType::Bytes => match value {
            Datum::Bytes(b) => Ok(Value::String(config.bytes_encoding.encode(b))),
            _ => Err(mismatch()),
        },

        // Date/time types
        SqlType::Date => match value {
            Datum::Date(d) => Ok(Value::String(d.format("%Y-%m-%d").to_string())),
            _ => Err(mismatch()),
        },
        SqlType::Time => match value {
            Datum::Time(t) => Ok(Value::String(format_time(t))),
            _ => Err(mismatch()),
        },
        SqlType::TimeTz => match value {
            Datum::TimeTz { time, offset } => {
                Ok(Value::String(format!("{}{}", format_time(time), offset)))
            }
            _ => Err(mismatch()),
        },
        SqlType::Timestamp => match value {
            Datum::Timestamp(ts) => Ok(Value::String(format_timestamp(ts))),
            _ => Err(mismatch()),
        },
        SqlType::TimestampTz => match value {
            Datum::TimestampTz(ts) => Ok(Value::String(format_timestamptz(ts, tz))),
            _ => Err(mismatch()),
        },
        SqlType::Interval => match value {
            Datum::Interval(interval) => Ok(Value::String(
                interval.format_with_style(config.interval_style),
            )),
            _ => Err(mismatch()),
        },

        // UUID
        SqlType::Uuid => match value {
            Datum::Uuid(u) => Ok(Value::String(u.to_string())),
            _ => Err(mismatch()),
        },

        SqlType::Inet => match value {
            Datum::Inet { addr, prefix } => inet_to_json(addr, *prefix),
            _ => Err(mismatch()),
        },

        // OID family - aliases prefer the object name
        SqlType::Oid => match value {
            Datum::Oid { oid, .. } => Ok(Value::String(oid.to_string())),
            _ => Err(mismatch()),
        },
        SqlType::RegClass
        | SqlType::RegNamespace
        | SqlType::RegProc
        | SqlType::RegProcedure
        | SqlType::RegRole
        | SqlType::RegType => match value {
            Datum::Oid { oid, name } => Ok(Value::String(
                name.clone().unwrap_or_else(|| oid.to_string()),
            )),
            _ => Err(mismatch()),
        },

        // JSON is already a JSON value
        SqlType::Json => match value {
            Datum::Json(v) => Ok(v.clone()),
            _ => Err(mismatch()),
        },

        SqlType::Enum { labels, .. } => match value {
            Datum::Enum(label) if labels.contains(label) => Ok(Value::String(label.clone())),
            _ => Err(mismatch()),
        },

        // Spatial types - GeoJSON text parsed back into a JSON value
        SqlType::Geometry => match value {
            Datum::Geo(g) => geo_to_json(g, GeoKind::Geometry),
            _ => Err(mismatch()),
        },
        SqlType::Geography => match value {
            Datum::Geo(g) => geo_to_json(g, GeoKind::Geography),
            _ => Err(mismatch()),
        },

        // Array types
        SqlType::Array { element_type } => match value {
            Datum::Array(items) => items
                .iter()
                .map(|item| convert(element_type, item, config, tz))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            _ => Err(mismatch()),
        },

        // Tuples render as arrays; field names are not known here
        SqlType::Tuple { fields } => match value {
            Datum::Tuple(values) if values.len() == fields.len() => fields
                .iter()
                .zip(values)
                .map(|(field_type, field)| convert(field_type, field, config, tz))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            _ => Err(mismatch()),
        },

        // Kinds without a conversion rule
        _ => {
            debug!("No JSON conversion rule for {sql_type}");
            Err(JsonTypesError::UnsupportedType {
                sql_type: sql_type.to_string(),
            })
        }
    }
}

fn int_to_json(sql_type: &SqlType, value: i64, min: i64, max: i64) -> Result<Value> {
    if value < min || value > max {
        return Err(JsonTypesError::NumericRender {
            sql_type: sql_type.to_string(),
            reason: format!("{value} is out of range"),
        });
    }
    Ok(Value::from(value))
}

fn float_to_json(
    sql_type: &SqlType,
    value: f64,
    config: &DataConversionConfig,
) -> Result<Value> {
    match Number::from_f64(value) {
        Some(n) => Ok(Value::Number(n)),
        None => {
            let text = if value.is_nan() {
                "NaN"
            } else if value.is_sign_positive() {
                "Infinity"
            } else {
                "-Infinity"
            };
            non_finite_to_json(sql_type, text, config)
        }
    }
}

fn decimal_to_json(
    sql_type: &SqlType,
    text: &str,
    config: &DataConversionConfig,
) -> Result<Value> {
    match text {
        "NaN" | "Infinity" | "-Infinity" => non_finite_to_json(sql_type, text, config),
        _ => serde_json::from_str::<Number>(text)
            .map(Value::Number)
            .map_err(|_| JsonTypesError::NumericRender {
                sql_type: sql_type.to_string(),
                reason: format!("malformed decimal {text:?}"),
            }),
    }
}

fn non_finite_to_json(
    sql_type: &SqlType,
    text: &str,
    config: &DataConversionConfig,
) -> Result<Value> {
    match config.non_finite {
        NonFinitePolicy::Text => Ok(Value::String(text.to_string())),
        NonFinitePolicy::Error => Err(JsonTypesError::NumericRender {
            sql_type: sql_type.to_string(),
            reason: format!("{text} is not a JSON number"),
        }),
    }
}

/// Fractional seconds as `.fffffffff` with trailing zeros removed, or nothing.
fn fraction(nanos: u32) -> String {
    let nanos = nanos % 1_000_000_000;
    if nanos == 0 {
        return String::new();
    }
    let digits = format!("{nanos:09}");
    format!(".{}", digits.trim_end_matches('0'))
}

fn format_time(time: &NaiveTime) -> String {
    format!("{}{}", time.format("%H:%M:%S"), fraction(time.nanosecond()))
}

fn format_timestamp(ts: &NaiveDateTime) -> String {
    format!(
        "{}{}",
        ts.format("%Y-%m-%dT%H:%M:%S"),
        fraction(ts.nanosecond())
    )
}

/// RFC 3339 in the session timezone, with `Z` for a zero offset.
fn format_timestamptz(ts: &DateTime<Utc>, tz: &Tz) -> String {
    let local = ts.with_timezone(tz);
    let offset = *local.fixed_offset().offset();
    let zone = if offset.local_minus_utc() == 0 {
        "Z".to_string()
    } else {
        offset.to_string()
    };
    format!(
        "{}{}{}",
        local.format("%Y-%m-%dT%H:%M:%S"),
        fraction(local.nanosecond()),
        zone
    )
}

fn inet_to_json(addr: &IpAddr, prefix: u8) -> Result<Value> {
    let max_prefix = if addr.is_ipv4() { 32 } else { 128 };
    if prefix > max_prefix {
        return Err(JsonTypesError::TypeMismatch {
            expected: format!("inet prefix of at most {max_prefix} bits"),
            actual: prefix.to_string(),
        });
    }
    let text = if prefix == max_prefix {
        addr.to_string()
    } else {
        format!("{addr}/{prefix}")
    };
    Ok(Value::String(text))
}

fn geo_to_json(geometry: &Geometry<f64>, kind: GeoKind) -> Result<Value> {
    let text = marshal_geojson(geometry, kind)?;
    trace!("Parsing marshalled GeoJSON back into a JSON value");
    serde_json::from_str(&text).map_err(|e| JsonTypesError::GeoEncoding(e.to_string()))
}

/// Convert named typed datums to a JSON object.
pub fn row_to_json<I>(fields: I, config: &DataConversionConfig, tz: &Tz) -> Result<Value>
where
    I: IntoIterator<Item = (String, TypedDatum)>,
{
    let mut obj = serde_json::Map::new();
    for (name, datum) in fields {
        obj.insert(name, as_json(&datum, config, tz)?);
    }
    Ok(Value::Object(obj))
}

/// Convert named typed datums to a JSONL line (JSON text with newline).
pub fn row_to_jsonl<I>(fields: I, config: &DataConversionConfig, tz: &Tz) -> Result<String>
where
    I: IntoIterator<Item = (String, TypedDatum)>,
{
    let json = row_to_json(fields, config, tz)?;
    Ok(format!("{json}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BytesEncoding;
    use chrono::{FixedOffset, NaiveDate, TimeZone};
    use datum_core::{Interval, IntervalStyle};
    use geo_types::point;
    use serde_json::json;

    fn convert_default(datum: TypedDatum) -> Result<Value> {
        as_json(&datum, &DataConversionConfig::default(), &Tz::UTC)
    }

    #[test]
    fn test_null_conversion() {
        for sql_type in [SqlType::Bool, SqlType::Text, SqlType::Unknown, SqlType::AnyTuple] {
            let value = convert_default(TypedDatum::null(sql_type)).unwrap();
            assert!(value.is_null());
        }
    }

    #[test]
    fn test_bool_conversion() {
        assert_eq!(convert_default(TypedDatum::bool(true)).unwrap(), json!(true));
        assert_eq!(convert_default(TypedDatum::bool(false)).unwrap(), json!(false));
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(convert_default(TypedDatum::int(42)).unwrap(), json!(42));
        assert_eq!(
            convert_default(TypedDatum::bigint(9876543210)).unwrap(),
            json!(9876543210i64)
        );
        let smallint = TypedDatum::new(SqlType::SmallInt, Datum::Int(-32768));
        assert_eq!(convert_default(smallint).unwrap(), json!(-32768));
    }

    #[test]
    fn test_integer_out_of_range() {
        let datum = TypedDatum::new(SqlType::SmallInt, Datum::Int(40_000));
        assert!(matches!(
            convert_default(datum),
            Err(JsonTypesError::NumericRender { .. })
        ));

        let datum = TypedDatum::new(SqlType::Int, Datum::Int(i64::from(i32::MAX) + 1));
        assert!(matches!(
            convert_default(datum),
            Err(JsonTypesError::NumericRender { .. })
        ));
    }

    #[test]
    fn test_float_conversion() {
        let value = convert_default(TypedDatum::double(1.23456)).unwrap();
        assert_eq!(value.as_f64(), Some(1.23456));
    }

    #[test]
    fn test_non_finite_float_as_text() {
        assert_eq!(
            convert_default(TypedDatum::double(f64::NAN)).unwrap(),
            json!("NaN")
        );
        assert_eq!(
            convert_default(TypedDatum::double(f64::INFINITY)).unwrap(),
            json!("Infinity")
        );
        assert_eq!(
            convert_default(TypedDatum::double(f64::NEG_INFINITY)).unwrap(),
            json!("-Infinity")
        );
    }

    #[test]
    fn test_non_finite_float_as_error() {
        let config = DataConversionConfig::new().with_non_finite(NonFinitePolicy::Error);
        let result = as_json(&TypedDatum::double(f64::NAN), &config, &Tz::UTC);
        assert!(matches!(result, Err(JsonTypesError::NumericRender { .. })));

        let decimal = TypedDatum::decimal("Infinity", 10, 2);
        let result = as_json(&decimal, &config, &Tz::UTC);
        assert!(matches!(result, Err(JsonTypesError::NumericRender { .. })));
    }

    #[test]
    fn test_decimal_keeps_digits() {
        let value = convert_default(TypedDatum::decimal("123.450", 10, 3)).unwrap();
        assert!(value.is_number());
        assert_eq!(value.to_string(), "123.450");

        let long = "12345678901234567890.123456789012345678";
        let value = convert_default(TypedDatum::decimal(long, 38, 18)).unwrap();
        assert_eq!(value.to_string(), long);
    }

    #[test]
    fn test_malformed_decimal() {
        let result = convert_default(TypedDatum::decimal("12,5", 10, 2));
        assert!(matches!(result, Err(JsonTypesError::NumericRender { .. })));
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(
            convert_default(TypedDatum::text("hello \"world\"")).unwrap(),
            json!("hello \"world\"")
        );
        let datum = TypedDatum::new(SqlType::char(4), Datum::String("ab  ".to_string()));
        assert_eq!(convert_default(datum).unwrap(), json!("ab  "));
    }

    #[test]
    fn test_bytes_follow_configuration() {
        let datum = TypedDatum::bytes(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(convert_default(datum.clone()).unwrap(), json!("\\xdeadbeef"));

        let config = DataConversionConfig::new().with_bytes_encoding(BytesEncoding::Base64);
        assert_eq!(as_json(&datum, &config, &Tz::UTC).unwrap(), json!("3q2+7w=="));
    }

    #[test]
    fn test_date_and_time_conversion() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let datum = TypedDatum::new(SqlType::Date, Datum::Date(date));
        assert_eq!(convert_default(datum).unwrap(), json!("2024-06-15"));

        let time = NaiveTime::from_hms_micro_opt(14, 30, 45, 500_000).unwrap();
        let datum = TypedDatum::new(SqlType::Time, Datum::Time(time));
        assert_eq!(convert_default(datum).unwrap(), json!("14:30:45.5"));

        let datum = TypedDatum::new(
            SqlType::TimeTz,
            Datum::TimeTz {
                time,
                offset: FixedOffset::east_opt(-5 * 3600).unwrap(),
            },
        );
        assert_eq!(convert_default(datum).unwrap(), json!("14:30:45.5-05:00"));
    }

    #[test]
    fn test_timestamp_ignores_timezone() {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let datum = TypedDatum::timestamp(ts);
        let config = DataConversionConfig::default();

        let utc = as_json(&datum, &config, &Tz::UTC).unwrap();
        let tokyo = as_json(&datum, &config, &chrono_tz::Asia::Tokyo).unwrap();
        assert_eq!(utc, json!("2024-06-15T10:30:00"));
        assert_eq!(utc, tokyo);
    }

    #[test]
    fn test_timestamptz_uses_timezone() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let datum = TypedDatum::timestamptz(ts);
        let config = DataConversionConfig::default();

        assert_eq!(
            as_json(&datum, &config, &Tz::UTC).unwrap(),
            json!("2024-06-15T10:30:00Z")
        );
        assert_eq!(
            as_json(&datum, &config, &chrono_tz::Asia::Kolkata).unwrap(),
            json!("2024-06-15T16:00:00+05:30")
        );
        assert_eq!(
            as_json(&datum, &config, &chrono_tz::America::New_York).unwrap(),
            json!("2024-06-15T06:30:00-04:00")
        );
    }

    #[test]
    fn test_interval_follows_configuration() {
        let datum = TypedDatum::interval(Interval::new(14, 3, 0));
        assert_eq!(
            convert_default(datum.clone()).unwrap(),
            json!("1 year 2 mons 3 days")
        );

        let config = DataConversionConfig::new().with_interval_style(IntervalStyle::Iso8601);
        assert_eq!(as_json(&datum, &config, &Tz::UTC).unwrap(), json!("P1Y2M3D"));
    }

    #[test]
    fn test_uuid_conversion() {
        let u = uuid::Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(
            convert_default(TypedDatum::uuid(u)).unwrap(),
            json!("550e8400-e29b-41d4-a716-446655440000")
        );
    }

    #[test]
    fn test_inet_conversion() {
        let host = TypedDatum::new(
            SqlType::Inet,
            Datum::Inet {
                addr: "192.168.0.1".parse().unwrap(),
                prefix: 32,
            },
        );
        assert_eq!(convert_default(host).unwrap(), json!("192.168.0.1"));

        let network = TypedDatum::new(
            SqlType::Inet,
            Datum::Inet {
                addr: "2001:db8::".parse().unwrap(),
                prefix: 32,
            },
        );
        assert_eq!(convert_default(network).unwrap(), json!("2001:db8::/32"));

        let invalid = TypedDatum::new(
            SqlType::Inet,
            Datum::Inet {
                addr: "10.0.0.1".parse().unwrap(),
                prefix: 40,
            },
        );
        assert!(matches!(
            convert_default(invalid),
            Err(JsonTypesError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_oid_family_conversion() {
        let oid = TypedDatum::new(
            SqlType::Oid,
            Datum::Oid {
                oid: 1259,
                name: Some("pg_class".to_string()),
            },
        );
        assert_eq!(convert_default(oid).unwrap(), json!("1259"));

        let named = TypedDatum::new(
            SqlType::RegClass,
            Datum::Oid {
                oid: 1259,
                name: Some("pg_class".to_string()),
            },
        );
        assert_eq!(convert_default(named).unwrap(), json!("pg_class"));

        let unnamed = TypedDatum::new(SqlType::RegType, Datum::Oid { oid: 23, name: None });
        assert_eq!(convert_default(unnamed).unwrap(), json!("23"));
    }

    #[test]
    fn test_json_passthrough() {
        let doc = json!({"key": [1, "two", null]});
        let datum = TypedDatum::new(SqlType::Json, Datum::Json(doc.clone()));
        assert_eq!(convert_default(datum).unwrap(), doc);
    }

    #[test]
    fn test_enum_conversion() {
        let mood = SqlType::enumeration("mood", vec!["sad".to_string(), "happy".to_string()]);
        let datum = TypedDatum::new(mood.clone(), Datum::Enum("happy".to_string()));
        assert_eq!(convert_default(datum).unwrap(), json!("happy"));

        let datum = TypedDatum::new(mood, Datum::Enum("angry".to_string()));
        assert!(matches!(
            convert_default(datum),
            Err(JsonTypesError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_geometry_conversion() {
        let datum = TypedDatum::new(
            SqlType::Geometry,
            Datum::Geo(Geometry::Point(point!(x: -73.97, y: 40.77))),
        );
        assert_eq!(
            convert_default(datum).unwrap(),
            json!({"type": "Point", "coordinates": [-73.97, 40.77]})
        );
    }

    #[test]
    fn test_geography_out_of_bounds() {
        let datum = TypedDatum::new(
            SqlType::Geography,
            Datum::Geo(Geometry::Point(point!(x: 0.0, y: 95.0))),
        );
        assert!(matches!(
            convert_default(datum),
            Err(JsonTypesError::GeoEncoding(_))
        ));
    }

    #[test]
    fn test_array_conversion() {
        let datum = TypedDatum::array(
            vec![Datum::Int(1), Datum::Int(2), Datum::Int(3)],
            SqlType::Int,
        );
        assert_eq!(convert_default(datum).unwrap(), json!([1, 2, 3]));

        let datum = TypedDatum::array(
            vec![Datum::String("a".to_string()), Datum::Null],
            SqlType::Text,
        );
        assert_eq!(convert_default(datum).unwrap(), json!(["a", null]));
    }

    #[test]
    fn test_tuple_conversion() {
        let datum = TypedDatum::tuple(vec![
            TypedDatum::int(1),
            TypedDatum::text("x"),
            TypedDatum::null(SqlType::Int),
        ]);
        assert_eq!(convert_default(datum).unwrap(), json!([1, "x", null]));

        let empty = TypedDatum::tuple(vec![]);
        assert_eq!(convert_default(empty).unwrap(), json!([]));
    }

    #[test]
    fn test_nested_composites() {
        let inner = SqlType::tuple(vec![SqlType::Bool, SqlType::array(SqlType::Int)]);
        let datum = TypedDatum::new(
            SqlType::tuple(vec![inner.clone(), inner]),
            Datum::Tuple(vec![
                Datum::Tuple(vec![Datum::Bool(true), Datum::Array(vec![Datum::Int(7)])]),
                Datum::Null,
            ]),
        );
        assert_eq!(convert_default(datum).unwrap(), json!([[true, [7]], null]));
    }

    #[test]
    fn test_tuple_arity_mismatch() {
        let datum = TypedDatum::new(
            SqlType::tuple(vec![SqlType::Int, SqlType::Int]),
            Datum::Tuple(vec![Datum::Int(1)]),
        );
        assert!(matches!(
            convert_default(datum),
            Err(JsonTypesError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_value_shape_mismatch() {
        let datum = TypedDatum::new(SqlType::Int, Datum::String("42".to_string()));
        assert_eq!(
            convert_default(datum),
            Err(JsonTypesError::TypeMismatch {
                expected: "int4".to_string(),
                actual: "string".to_string(),
            })
        );
    }

    #[test]
    fn test_unsupported_type() {
        let datum = TypedDatum::new(SqlType::Unknown, Datum::String("x".to_string()));
        assert_eq!(
            convert_default(datum),
            Err(JsonTypesError::UnsupportedType {
                sql_type: "unknown".to_string()
            })
        );
    }

    #[test]
    fn test_error_inside_array_aborts_conversion() {
        let datum = TypedDatum::array(
            vec![Datum::Int(1), Datum::Int(100_000), Datum::Int(3)],
            SqlType::SmallInt,
        );
        assert!(matches!(
            convert_default(datum),
            Err(JsonTypesError::NumericRender { .. })
        ));
    }

    #[test]
    fn test_json_value_try_from() {
        let json_val = JsonValue::try_from(TypedDatum::int(5)).unwrap();
        assert_eq!(json_val.as_inner(), &json!(5));
        assert_eq!(json_val.into_inner(), json!(5));
    }

    #[test]
    fn test_row_to_json() {
        let fields = vec![
            ("name".to_string(), TypedDatum::text("Alice")),
            ("age".to_string(), TypedDatum::int(30)),
            ("active".to_string(), TypedDatum::bool(true)),
        ];

        let json = row_to_json(fields, &DataConversionConfig::default(), &Tz::UTC).unwrap();
        assert_eq!(json["name"], json!("Alice"));
        assert_eq!(json["age"], json!(30));
        assert_eq!(json["active"], json!(true));
    }

    #[test]
    fn test_row_to_jsonl() {
        let fields = vec![
            ("name".to_string(), TypedDatum::text("Bob")),
            ("age".to_string(), TypedDatum::int(25)),
        ];

        let jsonl = row_to_jsonl(fields, &DataConversionConfig::default(), &Tz::UTC).unwrap();
        assert!(jsonl.ends_with('\n'));
        let parsed: Value = serde_json::from_str(jsonl.trim()).unwrap();
        assert_eq!(parsed["name"], json!("Bob"));
    }
}
