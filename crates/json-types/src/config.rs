//! Conversion configuration.
//!
//! `DataConversionConfig` carries the session formatting options that change
//! how individual kinds render. It is built by the caller and passed by
//! reference into every conversion.

use base64::Engine;
use datum_core::IntervalStyle;
use serde::{Deserialize, Serialize};

/// Binary-to-text encoding for byte sequences, mirroring `bytea_output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BytesEncoding {
    /// `\x` followed by lowercase hex digits
    #[default]
    Hex,
    /// Printable ASCII verbatim, backslash doubled, everything else as `\ooo`
    Escape,
    /// Standard base64 with padding
    Base64,
}

impl BytesEncoding {
    /// Encode bytes as text.
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::Hex => format!("\\x{}", hex::encode(bytes)),
            Self::Escape => {
                let mut out = String::with_capacity(bytes.len());
                for &b in bytes {
                    match b {
                        b'\\' => out.push_str("\\\\"),
                        0x20..=0x7e => out.push(char::from(b)),
                        _ => out.push_str(&format!("\\{b:03o}")),
                    }
                }
                out
            }
            Self::Base64 => base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}

/// What to do with NaN and infinite floats and decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Render as the JSON strings `"NaN"`, `"Infinity"` and `"-Infinity"`
    #[default]
    Text,
    /// Fail the conversion with `NumericRender`
    Error,
}

/// Formatting options applied during conversion.
///
/// # Example
///
/// ```
/// use json_types::{BytesEncoding, DataConversionConfig, NonFinitePolicy};
///
/// let config = DataConversionConfig::new()
///     .with_bytes_encoding(BytesEncoding::Base64)
///     .with_non_finite(NonFinitePolicy::Error);
/// assert_eq!(config.bytes_encoding, BytesEncoding::Base64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConversionConfig {
    /// Encoding of `bytea` values.
    pub bytes_encoding: BytesEncoding,
    /// Style of `interval` values.
    pub interval_style: IntervalStyle,
    /// Handling of NaN and infinite numbers.
    pub non_finite: NonFinitePolicy,
}

impl DataConversionConfig {
    /// Create a configuration with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bytes encoding.
    pub fn with_bytes_encoding(mut self, encoding: BytesEncoding) -> Self {
        self.bytes_encoding = encoding;
        self
    }

    /// Set the interval style.
    pub fn with_interval_style(mut self, style: IntervalStyle) -> Self {
        self.interval_style = style;
        self
    }

    /// Set the non-finite number policy.
    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }
}
