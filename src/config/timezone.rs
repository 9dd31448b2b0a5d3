//! Timezone parsing utilities.

use anyhow::Context;
use chrono_tz::Tz;
use std::str::FromStr;

/// Parse an IANA timezone name like "UTC" or "America/New_York".
///
/// Surrounding whitespace is ignored; names are case-sensitive.
pub fn parse_timezone(s: &str) -> anyhow::Result<Tz> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("Empty timezone name");
    }

    Tz::from_str(s)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid timezone: {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_timezones() {
        assert_eq!(parse_timezone("UTC").unwrap(), Tz::UTC);
        assert_eq!(
            parse_timezone(" America/New_York ").unwrap(),
            Tz::America__New_York
        );
    }

    #[test]
    fn test_parse_invalid_timezone() {
        let err = parse_timezone("Mars/Olympus_Mons").unwrap_err();
        assert!(format!("{err:#}").contains("Invalid timezone: Mars/Olympus_Mons"));
        assert!(parse_timezone("  ").is_err());
    }
}
