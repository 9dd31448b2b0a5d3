//! datum-json Library
//!
//! Renders SQL datums as JSON and exercises the conversion with randomly
//! generated types and datums.
//!
//! # Crates
//!
//! - `datum_core` - SQL types, datum values and the seed type catalog
//! - `json_types` - TypedDatum → JSON conversion and its formatting options
//! - `datum_generator` - Seeded random type and datum generation
//!
//! # CLI Usage
//!
//! ```bash
//! # List the types a run with seed 42 covers
//! datum-json types --seed 42
//!
//! # Convert 3 random datums of every type, rendering timestamps in Tokyo time
//! datum-json convert --seed 42 --count 3 --timezone Asia/Tokyo --bytes-encoding base64
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use datum_core::{IntervalStyle, SqlType};
use datum_generator::DatumGenerator;
use json_types::{as_json, BytesEncoding, DataConversionConfig, NonFinitePolicy};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

pub mod config;

/// Options shared by every subcommand that generates types.
#[derive(Parser, Clone, Debug)]
pub struct TypesOpts {
    /// Seed for the random type and datum generators
    #[arg(long, default_value = "0", env = "DATUM_JSON_SEED")]
    pub seed: u64,

    /// YAML file listing the types to use instead of generating them
    #[arg(long)]
    pub types_file: Option<PathBuf>,
}

impl TypesOpts {
    /// Load the types from the types file, or generate them from the seed.
    pub fn resolve_types(&self, generator: &mut DatumGenerator) -> anyhow::Result<Vec<SqlType>> {
        match &self.types_file {
            Some(path) => config::load_types_file(path),
            None => generator
                .types()
                .with_context(|| format!("Failed to generate types for seed {}", self.seed)),
        }
    }
}

/// Options controlling how datums are generated and rendered.
#[derive(Parser, Clone, Debug)]
pub struct ConvertOpts {
    /// Type selection
    #[command(flatten)]
    pub types: TypesOpts,

    /// Number of datums to convert per type
    #[arg(long, default_value = "1")]
    pub count: u64,

    /// Session timezone used to render timestamptz values
    #[arg(long, default_value = "UTC", env = "DATUM_JSON_TIMEZONE")]
    pub timezone: String,

    /// Encoding of bytea values (overrides the config file)
    #[arg(long, value_enum)]
    pub bytes_encoding: Option<BytesEncodingOpt>,

    /// Style of interval values (overrides the config file)
    #[arg(long, value_enum)]
    pub interval_style: Option<IntervalStyleOpt>,

    /// Handling of NaN and infinite numbers (overrides the config file)
    #[arg(long, value_enum)]
    pub non_finite: Option<NonFiniteOpt>,

    /// Never generate null values
    #[arg(long)]
    pub no_nulls: bool,

    /// YAML file with conversion options
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConvertOpts {
    /// Build the conversion configuration: the config file (or defaults) with
    /// any explicit flags applied on top.
    pub fn conversion_config(&self) -> anyhow::Result<DataConversionConfig> {
        let mut conversion = match &self.config {
            Some(path) => config::load_conversion_config(path)?,
            None => DataConversionConfig::default(),
        };

        if let Some(encoding) = self.bytes_encoding {
            conversion = conversion.with_bytes_encoding(encoding.into());
        }
        if let Some(style) = self.interval_style {
            conversion = conversion.with_interval_style(style.into());
        }
        if let Some(policy) = self.non_finite {
            conversion = conversion.with_non_finite(policy.into());
        }
        Ok(conversion)
    }
}

/// `--bytes-encoding` values
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BytesEncodingOpt {
    /// `\x` followed by hex digits
    Hex,
    /// Printable characters verbatim, the rest as octal escapes
    Escape,
    /// Standard base64
    Base64,
}

impl From<BytesEncodingOpt> for BytesEncoding {
    fn from(opt: BytesEncodingOpt) -> Self {
        match opt {
            BytesEncodingOpt::Hex => Self::Hex,
            BytesEncodingOpt::Escape => Self::Escape,
            BytesEncodingOpt::Base64 => Self::Base64,
        }
    }
}

/// `--interval-style` values
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum IntervalStyleOpt {
    /// `1 year 2 mons 3 days 04:05:06`
    Postgres,
    /// `P1Y2M3DT4H5M6S`
    #[value(name = "iso_8601")]
    Iso8601,
    /// `+1-2 +3 +4:05:06`
    #[value(name = "sql_standard")]
    SqlStandard,
}

impl From<IntervalStyleOpt> for IntervalStyle {
    fn from(opt: IntervalStyleOpt) -> Self {
        match opt {
            IntervalStyleOpt::Postgres => Self::Postgres,
            IntervalStyleOpt::Iso8601 => Self::Iso8601,
            IntervalStyleOpt::SqlStandard => Self::SqlStandard,
        }
    }
}

/// `--non-finite` values
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NonFiniteOpt {
    /// Render as "NaN", "Infinity" and "-Infinity"
    Text,
    /// Fail the conversion
    Error,
}

impl From<NonFiniteOpt> for NonFinitePolicy {
    fn from(opt: NonFiniteOpt) -> Self {
        match opt {
            NonFiniteOpt::Text => Self::Text,
            NonFiniteOpt::Error => Self::Error,
        }
    }
}

/// Write the resolved types, one display name per line.
pub fn run_types(opts: &TypesOpts, out: &mut impl Write) -> anyhow::Result<()> {
    let mut generator = DatumGenerator::new(opts.seed);
    let types = opts.resolve_types(&mut generator)?;

    for sql_type in &types {
        writeln!(out, "{sql_type}")?;
    }
    info!("Listed {} types", types.len());
    Ok(())
}

/// Generate `count` datums of every type and write one JSONL line per datum.
///
/// Stops at the first datum that fails to convert.
pub fn run_convert(opts: &ConvertOpts, out: &mut impl Write) -> anyhow::Result<()> {
    let tz = config::parse_timezone(&opts.timezone)?;
    let conversion_config = opts.conversion_config()?;
    debug!("Converting with {conversion_config:?} in {tz}");

    let mut generator = DatumGenerator::new(opts.types.seed).with_nulls(!opts.no_nulls);
    let types = opts.types.resolve_types(&mut generator)?;

    let mut converted = 0u64;
    for sql_type in &types {
        for datum in generator.datums(sql_type, opts.count) {
            let json = as_json(&datum, &conversion_config, &tz).with_context(|| {
                format!(
                    "Failed to convert datum {converted} of type {sql_type}: {:?}",
                    datum.value
                )
            })?;
            let line = serde_json::json!({
                "type": sql_type.to_string(),
                "json": json,
            });
            writeln!(out, "{line}")?;
            converted += 1;
        }
    }

    info!("Converted {converted} datums across {} types", types.len());
    Ok(())
}
