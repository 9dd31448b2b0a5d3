//! Command-line configuration helpers.

mod files;
mod timezone;

pub use files::{load_conversion_config, load_types_file, parse_conversion_config, parse_types};
pub use timezone::parse_timezone;
