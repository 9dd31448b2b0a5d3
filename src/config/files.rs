//! YAML files accepted on the command line.

use anyhow::Context;
use datum_core::SqlType;
use json_types::DataConversionConfig;
use std::path::Path;

/// Load a conversion configuration from a YAML file.
///
/// Options missing from the file keep their defaults.
pub fn load_conversion_config(path: &Path) -> anyhow::Result<DataConversionConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_conversion_config(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Parse a conversion configuration from YAML text.
pub fn parse_conversion_config(yaml: &str) -> anyhow::Result<DataConversionConfig> {
    if yaml.trim().is_empty() {
        return Ok(DataConversionConfig::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load a list of types from a YAML file.
pub fn load_types_file(path: &Path) -> anyhow::Result<Vec<SqlType>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read types file {}", path.display()))?;
    parse_types(&content).with_context(|| format!("Failed to parse types file {}", path.display()))
}

/// Parse a YAML sequence of types, e.g.
///
/// ```yaml
/// - int
/// - type: decimal
///   precision: 10
///   scale: 2
/// - type: array
///   element_type: text
/// ```
pub fn parse_types(yaml: &str) -> anyhow::Result<Vec<SqlType>> {
    let types: Vec<SqlType> = serde_yaml::from_str(yaml)?;
    if types.is_empty() {
        anyhow::bail!("Types file lists no types");
    }
    Ok(types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use datum_core::IntervalStyle;
    use json_types::BytesEncoding;
    use std::io::Write;

    #[test]
    fn test_parse_types() {
        let yaml = r#"
- int
- type: decimal
  precision: 10
  scale: 2
- type: array
  element_type: text
"#;
        let types = parse_types(yaml).unwrap();
        assert_eq!(
            types,
            vec![
                SqlType::Int,
                SqlType::decimal(10, 2),
                SqlType::array(SqlType::Text),
            ]
        );
    }

    #[test]
    fn test_parse_empty_types() {
        assert!(parse_types("[]").is_err());
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(
            parse_conversion_config("").unwrap(),
            DataConversionConfig::default()
        );
    }

    #[test]
    fn test_load_conversion_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bytes_encoding: base64").unwrap();
        writeln!(file, "interval_style: sql_standard").unwrap();

        let config = load_conversion_config(file.path()).unwrap();
        assert_eq!(config.bytes_encoding, BytesEncoding::Base64);
        assert_eq!(config.interval_style, IntervalStyle::SqlStandard);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_types_file(Path::new("/nonexistent/types.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read types file"));
    }
}
