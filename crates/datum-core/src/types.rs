//! Relational type descriptors.
//!
//! This module defines `SqlType`, the closed set of SQL type kinds a datum can
//! carry. Leaf kinds are atomic; `Array` and `Tuple` are composite kinds built
//! from other types. Composite equality is structural (the derived `PartialEq`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// SQL type descriptor.
///
/// # YAML Format
///
/// Simple types can be specified as strings:
/// ```yaml
/// type: int
/// type: timestamp_tz
/// ```
///
/// Parameterized and composite types use object format:
/// ```yaml
/// type:
///   type: decimal
///   precision: 10
///   scale: 2
/// type:
///   type: tuple
///   fields: [int, text]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SqlType {
    // Boolean
    /// Boolean value
    Bool,

    // Integer types (sized)
    /// 16-bit signed integer
    SmallInt,

    /// 32-bit signed integer
    Int,

    /// 64-bit signed integer
    BigInt,

    // Floating point
    /// 32-bit IEEE 754 floating point
    Float,

    /// 64-bit IEEE 754 floating point
    Double,

    // Exact numeric
    /// Exact decimal with specified precision and scale
    Decimal {
        /// Total number of digits
        precision: u8,
        /// Number of digits after the decimal point
        scale: u8,
    },

    // String types
    /// Fixed-length character string
    Char {
        /// Maximum length
        length: u16,
    },

    /// Variable-length character string with max length
    VarChar {
        /// Maximum length
        length: u16,
    },

    /// Unlimited text
    Text,

    /// Identifier name
    Name,

    // Binary types
    /// Byte sequence
    Bytes,

    // Temporal types
    /// Date only (YYYY-MM-DD)
    Date,

    /// Time of day without timezone
    Time,

    /// Time of day with a fixed UTC offset
    TimeTz,

    /// Timestamp without timezone
    Timestamp,

    /// Timestamp with timezone, rendered in the session timezone
    TimestampTz,

    /// Months, days and microseconds
    Interval,

    // Special types
    /// UUID (128-bit)
    Uuid,

    /// IPv4 or IPv6 host address with optional prefix length
    Inet,

    // OID family
    /// Object identifier
    Oid,
    /// OID alias naming a relation
    RegClass,
    /// OID alias naming a schema
    RegNamespace,
    /// OID alias naming a function
    RegProc,
    /// OID alias naming a function with argument types
    RegProcedure,
    /// OID alias naming a role
    RegRole,
    /// OID alias naming a type
    RegType,

    /// JSON document
    Json,

    // Enumeration
    /// User-defined enumeration type
    Enum {
        /// Type name
        name: String,
        /// Allowed labels, in declaration order
        labels: Vec<String>,
    },

    // Spatial
    /// Planar geometry
    Geometry,

    /// Geodetic (longitude/latitude) geography
    Geography,

    // Collection types
    /// Array of a specific type
    Array {
        /// Element type
        element_type: Box<SqlType>,
    },

    /// Ordered list of field types
    Tuple {
        /// Field types in declaration order
        fields: Vec<SqlType>,
    },

    // Pseudo types
    /// Placeholder matching any tuple
    AnyTuple,

    /// Type of an untyped literal
    Unknown,
}

impl SqlType {
    /// Create a new Decimal type with the given precision and scale.
    pub fn decimal(precision: u8, scale: u8) -> Self {
        Self::Decimal { precision, scale }
    }

    /// Create a new Char type with the given length.
    pub fn char(length: u16) -> Self {
        Self::Char { length }
    }

    /// Create a new VarChar type with the given length.
    pub fn varchar(length: u16) -> Self {
        Self::VarChar { length }
    }

    /// Create a new Enum type with the given name and labels.
    pub fn enumeration(name: impl Into<String>, labels: Vec<String>) -> Self {
        Self::Enum {
            name: name.into(),
            labels,
        }
    }

    /// Create a new Array type with the given element type.
    pub fn array(element_type: SqlType) -> Self {
        Self::Array {
            element_type: Box::new(element_type),
        }
    }

    /// Create a new Tuple type with the given field types.
    pub fn tuple(fields: Vec<SqlType>) -> Self {
        Self::Tuple { fields }
    }

    /// Check if this type represents a numeric type.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::SmallInt
                | Self::Int
                | Self::BigInt
                | Self::Float
                | Self::Double
                | Self::Decimal { .. }
        )
    }

    /// Check if this type represents a string type.
    pub fn is_string(&self) -> bool {
        matches!(
            self,
            Self::Char { .. } | Self::VarChar { .. } | Self::Text | Self::Name
        )
    }

    /// Check if this type represents a temporal type.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date
                | Self::Time
                | Self::TimeTz
                | Self::Timestamp
                | Self::TimestampTz
                | Self::Interval
        )
    }

    /// Check if this type is built from other types.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Array { .. } | Self::Tuple { .. })
    }

    /// Check if this type is one of the `reg*` aliases of `oid`.
    pub fn is_oid_alias(&self) -> bool {
        matches!(
            self,
            Self::RegClass
                | Self::RegNamespace
                | Self::RegProc
                | Self::RegProcedure
                | Self::RegRole
                | Self::RegType
        )
    }

    /// Check if this type is in the OID family.
    pub fn is_oid(&self) -> bool {
        matches!(self, Self::Oid) || self.is_oid_alias()
    }

    /// Check if this type holds spatial values.
    pub fn is_geospatial(&self) -> bool {
        matches!(self, Self::Geometry | Self::Geography)
    }

    /// Name used when the type is written as a plain string.
    fn simple_name(&self) -> Option<&'static str> {
        let name = match self {
            Self::Bool => "bool",
            Self::SmallInt => "small_int",
            Self::Int => "int",
            Self::BigInt => "big_int",
            Self::Float => "float",
            Self::Double => "double",
            Self::Text => "text",
            Self::Name => "name",
            Self::Bytes => "bytes",
            Self::Date => "date",
            Self::Time => "time",
            Self::TimeTz => "time_tz",
            Self::Timestamp => "timestamp",
            Self::TimestampTz => "timestamp_tz",
            Self::Interval => "interval",
            Self::Uuid => "uuid",
            Self::Inet => "inet",
            Self::Oid => "oid",
            Self::RegClass => "regclass",
            Self::RegNamespace => "regnamespace",
            Self::RegProc => "regproc",
            Self::RegProcedure => "regprocedure",
            Self::RegRole => "regrole",
            Self::RegType => "regtype",
            Self::Json => "json",
            Self::Geometry => "geometry",
            Self::Geography => "geography",
            Self::AnyTuple => "any_tuple",
            Self::Unknown => "unknown",
            Self::Decimal { .. }
            | Self::Char { .. }
            | Self::VarChar { .. }
            | Self::Enum { .. }
            | Self::Array { .. }
            | Self::Tuple { .. } => return None,
        };
        Some(name)
    }

    /// Parse a plain-string type name, including common aliases.
    fn from_simple_name(name: &str) -> Option<Self> {
        let ty = match name {
            "bool" | "boolean" => Self::Bool,
            "small_int" | "smallint" | "int2" => Self::SmallInt,
            "int" | "integer" | "int4" => Self::Int,
            "big_int" | "bigint" | "int8" => Self::BigInt,
            "float" | "real" | "float4" => Self::Float,
            "double" | "float8" => Self::Double,
            "text" | "string" => Self::Text,
            "name" => Self::Name,
            "bytes" | "bytea" => Self::Bytes,
            "date" => Self::Date,
            "time" => Self::Time,
            "time_tz" | "timetz" => Self::TimeTz,
            "timestamp" => Self::Timestamp,
            "timestamp_tz" | "timestamptz" => Self::TimestampTz,
            "interval" => Self::Interval,
            "uuid" => Self::Uuid,
            "inet" => Self::Inet,
            "oid" => Self::Oid,
            "regclass" => Self::RegClass,
            "regnamespace" => Self::RegNamespace,
            "regproc" => Self::RegProc,
            "regprocedure" => Self::RegProcedure,
            "regrole" => Self::RegRole,
            "regtype" => Self::RegType,
            "json" | "jsonb" => Self::Json,
            "geometry" => Self::Geometry,
            "geography" => Self::Geography,
            "any_tuple" | "record" => Self::AnyTuple,
            "unknown" => Self::Unknown,
            _ => return None,
        };
        Some(ty)
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::SmallInt => f.write_str("int2"),
            Self::Int => f.write_str("int4"),
            Self::BigInt => f.write_str("int8"),
            Self::Float => f.write_str("float4"),
            Self::Double => f.write_str("float8"),
            Self::Decimal { precision, scale } => write!(f, "decimal({precision},{scale})"),
            Self::Char { length } => write!(f, "char({length})"),
            Self::VarChar { length } => write!(f, "varchar({length})"),
            Self::Text => f.write_str("text"),
            Self::Name => f.write_str("name"),
            Self::Bytes => f.write_str("bytea"),
            Self::Date => f.write_str("date"),
            Self::Time => f.write_str("time"),
            Self::TimeTz => f.write_str("timetz"),
            Self::Timestamp => f.write_str("timestamp"),
            Self::TimestampTz => f.write_str("timestamptz"),
            Self::Interval => f.write_str("interval"),
            Self::Uuid => f.write_str("uuid"),
            Self::Inet => f.write_str("inet"),
            Self::Oid => f.write_str("oid"),
            Self::RegClass => f.write_str("regclass"),
            Self::RegNamespace => f.write_str("regnamespace"),
            Self::RegProc => f.write_str("regproc"),
            Self::RegProcedure => f.write_str("regprocedure"),
            Self::RegRole => f.write_str("regrole"),
            Self::RegType => f.write_str("regtype"),
            Self::Json => f.write_str("jsonb"),
            Self::Enum { name, .. } => f.write_str(name),
            Self::Geometry => f.write_str("geometry"),
            Self::Geography => f.write_str("geography"),
            Self::Array { element_type } => write!(f, "{element_type}[]"),
            Self::Tuple { fields } => {
                f.write_str("tuple(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{field}")?;
                }
                f.write_str(")")
            }
            Self::AnyTuple => f.write_str("record"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

// Custom serialization/deserialization for SqlType
// Supports both simple string format ("uuid", "int") and object format ({"type": "var_char", "length": 255})

impl Serialize for SqlType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        if let Some(name) = self.simple_name() {
            return serializer.serialize_str(name);
        }

        match self {
            Self::Decimal { precision, scale } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "decimal")?;
                map.serialize_entry("precision", precision)?;
                map.serialize_entry("scale", scale)?;
                map.end()
            }
            Self::Char { length } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "char")?;
                map.serialize_entry("length", length)?;
                map.end()
            }
            Self::VarChar { length } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "var_char")?;
                map.serialize_entry("length", length)?;
                map.end()
            }
            Self::Enum { name, labels } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "enum")?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("labels", labels)?;
                map.end()
            }
            Self::Array { element_type } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("element_type", element_type)?;
                map.end()
            }
            Self::Tuple { fields } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "tuple")?;
                map.serialize_entry("fields", fields)?;
                map.end()
            }
            other => Err(serde::ser::Error::custom(format!(
                "type {other} has no serialized form"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for SqlType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct SqlTypeVisitor;

        impl<'de> Visitor<'de> for SqlTypeVisitor {
            type Value = SqlType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or map representing a SqlType")
            }

            // Handle string format: "uuid", "int", etc.
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                SqlType::from_simple_name(value)
                    .ok_or_else(|| E::custom(format!("unknown simple type: {value}")))
            }

            // Handle map format: {"type": "var_char", "length": 255}
            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut type_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        type_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let type_name = type_name.ok_or_else(|| M::Error::missing_field("type"))?;

                if let Some(simple) = SqlType::from_simple_name(&type_name) {
                    return Ok(simple);
                }

                match type_name.as_str() {
                    "decimal" | "numeric" => {
                        let precision = get_field_required(&fields, "precision")?;
                        let scale = get_field_required(&fields, "scale")?;
                        Ok(SqlType::Decimal { precision, scale })
                    }
                    "char" => {
                        let length = get_field_required(&fields, "length")?;
                        Ok(SqlType::Char { length })
                    }
                    "var_char" | "varchar" => {
                        let length = get_field_required(&fields, "length")?;
                        Ok(SqlType::VarChar { length })
                    }
                    "enum" => {
                        let name = get_field_required(&fields, "name")?;
                        let labels = get_field_required(&fields, "labels")?;
                        Ok(SqlType::Enum { name, labels })
                    }
                    "array" => {
                        let element_type: SqlType = get_field_required(&fields, "element_type")?;
                        Ok(SqlType::array(element_type))
                    }
                    "tuple" => {
                        let tuple_fields = if fields.contains_key("fields") {
                            get_field_required(&fields, "fields")?
                        } else {
                            Vec::new()
                        };
                        Ok(SqlType::Tuple {
                            fields: tuple_fields,
                        })
                    }
                    _ => Err(M::Error::custom(format!("unknown type: {type_name}"))),
                }
            }
        }

        deserializer.deserialize_any(SqlTypeVisitor)
    }
}

// Helper functions for deserialization
fn get_field_required<T: for<'de> Deserialize<'de>, E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &'static str,
) -> Result<T, E> {
    let value = fields.get(key).ok_or_else(|| E::missing_field(key))?;
    serde_yaml::from_value(value.clone())
        .map_err(|e| E::custom(format!("invalid field '{key}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            SqlType::decimal(10, 2),
            SqlType::Decimal {
                precision: 10,
                scale: 2
            }
        );
        assert_eq!(SqlType::varchar(255), SqlType::VarChar { length: 255 });
        assert_eq!(
            SqlType::array(SqlType::Int),
            SqlType::Array {
                element_type: Box::new(SqlType::Int)
            }
        );
    }

    #[test]
    fn test_type_categories() {
        assert!(SqlType::Int.is_numeric());
        assert!(SqlType::decimal(10, 2).is_numeric());
        assert!(!SqlType::Text.is_numeric());

        assert!(SqlType::Text.is_string());
        assert!(SqlType::varchar(255).is_string());
        assert!(!SqlType::Int.is_string());

        assert!(SqlType::TimestampTz.is_temporal());
        assert!(SqlType::Interval.is_temporal());
        assert!(!SqlType::Uuid.is_temporal());

        assert!(SqlType::RegClass.is_oid_alias());
        assert!(!SqlType::Oid.is_oid_alias());
        assert!(SqlType::Oid.is_oid());

        assert!(SqlType::Geography.is_geospatial());
        assert!(SqlType::tuple(vec![]).is_composite());
    }

    #[test]
    fn test_tuple_structural_equality() {
        let a = SqlType::tuple(vec![SqlType::Int, SqlType::array(SqlType::Text)]);
        let b = SqlType::tuple(vec![SqlType::Int, SqlType::array(SqlType::Text)]);
        let reordered = SqlType::tuple(vec![SqlType::array(SqlType::Text), SqlType::Int]);
        let shorter = SqlType::tuple(vec![SqlType::Int]);

        assert_eq!(a, b);
        assert_ne!(a, reordered);
        assert_ne!(a, shorter);
        assert_eq!(SqlType::tuple(vec![]), SqlType::tuple(vec![]));
    }

    #[test]
    fn test_display() {
        assert_eq!(SqlType::BigInt.to_string(), "int8");
        assert_eq!(SqlType::decimal(10, 2).to_string(), "decimal(10,2)");
        assert_eq!(SqlType::array(SqlType::Int).to_string(), "int4[]");
        assert_eq!(
            SqlType::tuple(vec![SqlType::BigInt, SqlType::Text]).to_string(),
            "tuple(int8, text)"
        );
        assert_eq!(SqlType::tuple(vec![]).to_string(), "tuple()");
    }

    #[test]
    fn test_deserialize_simple_string() {
        let parsed: SqlType = serde_yaml::from_str("uuid").unwrap();
        assert_eq!(parsed, SqlType::Uuid);

        let parsed: SqlType = serde_yaml::from_str("timestamptz").unwrap();
        assert_eq!(parsed, SqlType::TimestampTz);

        let parsed: SqlType = serde_yaml::from_str("bigint").unwrap();
        assert_eq!(parsed, SqlType::BigInt);

        assert!(serde_yaml::from_str::<SqlType>("not_a_type").is_err());
    }

    #[test]
    fn test_deserialize_complex_types() {
        let yaml = r#"
type: decimal
precision: 10
scale: 2
"#;
        let parsed: SqlType = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed, SqlType::decimal(10, 2));

        let yaml = r#"
type: tuple
fields:
  - int
  - type: array
    element_type: text
"#;
        let parsed: SqlType = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            parsed,
            SqlType::tuple(vec![SqlType::Int, SqlType::array(SqlType::Text)])
        );
    }

    #[test]
    fn test_deserialize_tuple_with_invalid_field_fails() {
        let yaml = "type: tuple\nfields: [int, not_a_type]";
        assert!(serde_yaml::from_str::<SqlType>(yaml).is_err());

        let yaml = "type: tuple\nfields: 3";
        assert!(serde_yaml::from_str::<SqlType>(yaml).is_err());
    }

    #[test]
    fn test_deserialize_tuple_without_fields_is_empty() {
        let parsed: SqlType = serde_yaml::from_str("type: tuple").unwrap();
        assert_eq!(parsed, SqlType::tuple(vec![]));
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let types = vec![
            SqlType::Bool,
            SqlType::Int,
            SqlType::decimal(10, 2),
            SqlType::varchar(255),
            SqlType::array(SqlType::Int),
            SqlType::enumeration("mood", vec!["sad".to_string(), "happy".to_string()]),
            SqlType::tuple(vec![SqlType::Uuid, SqlType::array(SqlType::TimestampTz)]),
        ];

        for ty in types {
            let yaml = serde_yaml::to_string(&ty).unwrap();
            let parsed: SqlType = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(ty, parsed);
        }
    }
}
