//! Interval values and their textual styles.

use serde::{Deserialize, Serialize};
use std::fmt;

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_MINUTE: i64 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MINUTE;

/// Output style for interval text, mirroring the `IntervalStyle` session setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalStyle {
    /// `1 year 2 mons 3 days 04:05:06`
    #[default]
    Postgres,
    /// `P1Y2M3DT4H5M6S`
    #[serde(rename = "iso_8601", alias = "iso8601")]
    Iso8601,
    /// `+1-2 +3 +4:05:06`
    SqlStandard,
}

/// A span of time kept as separate month, day and microsecond components.
///
/// Components are not normalized into each other: a month is not 30 days and a
/// day is not 24 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interval {
    /// Whole months
    pub months: i32,
    /// Whole days
    pub days: i32,
    /// Microseconds of the time part
    pub micros: i64,
}

/// Interval broken into the fields every style prints.
struct Fields {
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    micros: i64,
}

impl Interval {
    /// Create a new interval.
    pub fn new(months: i32, days: i32, micros: i64) -> Self {
        Self {
            months,
            days,
            micros,
        }
    }

    fn fields(&self) -> Fields {
        let months = i64::from(self.months);
        let micros = self.micros;
        Fields {
            years: months / 12,
            months: months % 12,
            days: i64::from(self.days),
            hours: micros / MICROS_PER_HOUR,
            minutes: (micros % MICROS_PER_HOUR) / MICROS_PER_MINUTE,
            seconds: (micros % MICROS_PER_MINUTE) / MICROS_PER_SECOND,
            micros: micros % MICROS_PER_SECOND,
        }
    }

    /// Render the interval in the given style.
    pub fn format_with_style(&self, style: IntervalStyle) -> String {
        let fields = self.fields();
        match style {
            IntervalStyle::Postgres => format_postgres(&fields),
            IntervalStyle::Iso8601 => format_iso8601(&fields),
            IntervalStyle::SqlStandard => format_sql_standard(&fields),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_style(IntervalStyle::Postgres))
    }
}

/// Fractional seconds as `.ffffff` with trailing zeros removed, or nothing.
fn fraction(micros: i64) -> String {
    if micros == 0 {
        return String::new();
    }
    let digits = format!("{:06}", micros.abs());
    format!(".{}", digits.trim_end_matches('0'))
}

fn format_postgres(f: &Fields) -> String {
    let mut out = String::new();
    let mut is_before = false;

    for (value, unit) in [(f.years, "year"), (f.months, "mon"), (f.days, "day")] {
        if value == 0 {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        let sign = if is_before && value > 0 { "+" } else { "" };
        let plural = if value != 1 { "s" } else { "" };
        out.push_str(&format!("{sign}{value} {unit}{plural}"));
        is_before = value < 0;
    }

    let has_time = f.hours != 0 || f.minutes != 0 || f.seconds != 0 || f.micros != 0;
    if has_time || out.is_empty() {
        let minus = f.hours < 0 || f.minutes < 0 || f.seconds < 0 || f.micros < 0;
        let sign = if minus {
            "-"
        } else if is_before {
            "+"
        } else {
            ""
        };
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!(
            "{sign}{:02}:{:02}:{:02}{}",
            f.hours.abs(),
            f.minutes.abs(),
            f.seconds.abs(),
            fraction(f.micros)
        ));
    }

    out
}

fn format_iso8601(f: &Fields) -> String {
    let has_time = f.hours != 0 || f.minutes != 0 || f.seconds != 0 || f.micros != 0;
    if f.years == 0 && f.months == 0 && f.days == 0 && !has_time {
        return "PT0S".to_string();
    }

    let mut out = String::from("P");
    for (value, unit) in [(f.years, 'Y'), (f.months, 'M'), (f.days, 'D')] {
        if value != 0 {
            out.push_str(&format!("{value}{unit}"));
        }
    }

    if has_time {
        out.push('T');
        if f.hours != 0 {
            out.push_str(&format!("{}H", f.hours));
        }
        if f.minutes != 0 {
            out.push_str(&format!("{}M", f.minutes));
        }
        if f.seconds != 0 || f.micros != 0 {
            let sign = if f.seconds < 0 || f.micros < 0 { "-" } else { "" };
            out.push_str(&format!(
                "{sign}{}{}S",
                f.seconds.abs(),
                fraction(f.micros)
            ));
        }
    }

    out
}

fn format_sql_standard(f: &Fields) -> String {
    let parts = [f.years, f.months, f.days, f.hours, f.minutes, f.seconds, f.micros];
    let has_negative = parts.iter().any(|v| *v < 0);
    let has_positive = parts.iter().any(|v| *v > 0);
    let has_year_month = f.years != 0 || f.months != 0;
    let has_day_time =
        f.days != 0 || f.hours != 0 || f.minutes != 0 || f.seconds != 0 || f.micros != 0;

    if !has_negative && !has_positive {
        return "0".to_string();
    }

    let seconds = format!("{:02}{}", f.seconds.abs(), fraction(f.micros));

    if (has_negative && has_positive) || (has_year_month && has_day_time) {
        // Every field carries its own sign.
        let year_sign = if f.years < 0 || f.months < 0 { '-' } else { '+' };
        let day_sign = if f.days < 0 { '-' } else { '+' };
        let time_sign = if f.hours < 0 || f.minutes < 0 || f.seconds < 0 || f.micros < 0 {
            '-'
        } else {
            '+'
        };
        return format!(
            "{year_sign}{}-{} {day_sign}{} {time_sign}{}:{:02}:{seconds}",
            f.years.abs(),
            f.months.abs(),
            f.days.abs(),
            f.hours.abs(),
            f.minutes.abs(),
        );
    }

    let sign = if has_negative { "-" } else { "" };
    if has_year_month {
        format!("{sign}{}-{}", f.years.abs(), f.months.abs())
    } else if f.days != 0 {
        format!(
            "{sign}{} {}:{:02}:{seconds}",
            f.days.abs(),
            f.hours.abs(),
            f.minutes.abs()
        )
    } else {
        format!("{sign}{}:{:02}:{seconds}", f.hours.abs(), f.minutes.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(hours: i64, minutes: i64, seconds: i64) -> i64 {
        hours * MICROS_PER_HOUR + minutes * MICROS_PER_MINUTE + seconds * MICROS_PER_SECOND
    }

    #[test]
    fn test_postgres_style() {
        let interval = Interval::new(14, 3, hms(4, 5, 6) + 500_000);
        assert_eq!(interval.to_string(), "1 year 2 mons 3 days 04:05:06.5");

        assert_eq!(Interval::default().to_string(), "00:00:00");
        assert_eq!(Interval::new(0, 1, 0).to_string(), "1 day");
        assert_eq!(Interval::new(-12, 0, 0).to_string(), "-1 years");
        assert_eq!(Interval::new(0, 0, -hms(4, 5, 6)).to_string(), "-04:05:06");
        assert_eq!(Interval::new(0, 0, hms(27, 0, 0)).to_string(), "27:00:00");
    }

    #[test]
    fn test_postgres_style_mixed_signs() {
        assert_eq!(Interval::new(-1, 2, 0).to_string(), "-1 mons +2 days");
        assert_eq!(
            Interval::new(0, -1, hms(1, 0, 0)).to_string(),
            "-1 days +01:00:00"
        );
    }

    #[test]
    fn test_iso8601_style() {
        let interval = Interval::new(14, 3, hms(4, 5, 6) + 500_000);
        assert_eq!(
            interval.format_with_style(IntervalStyle::Iso8601),
            "P1Y2M3DT4H5M6.5S"
        );
        assert_eq!(
            Interval::default().format_with_style(IntervalStyle::Iso8601),
            "PT0S"
        );
        assert_eq!(
            Interval::new(0, 0, -hms(1, 30, 0)).format_with_style(IntervalStyle::Iso8601),
            "PT-1H-30M"
        );
        assert_eq!(
            Interval::new(0, 2, 0).format_with_style(IntervalStyle::Iso8601),
            "P2D"
        );
    }

    #[test]
    fn test_sql_standard_style() {
        let style = IntervalStyle::SqlStandard;
        assert_eq!(Interval::default().format_with_style(style), "0");
        assert_eq!(Interval::new(14, 0, 0).format_with_style(style), "1-2");
        assert_eq!(Interval::new(-14, 0, 0).format_with_style(style), "-1-2");
        assert_eq!(
            Interval::new(0, 3, hms(4, 5, 6)).format_with_style(style),
            "3 4:05:06"
        );
        assert_eq!(
            Interval::new(0, 0, hms(4, 5, 6) + 250_000).format_with_style(style),
            "4:05:06.25"
        );
        assert_eq!(
            Interval::new(14, 3, hms(4, 5, 6)).format_with_style(style),
            "+1-2 +3 +4:05:06"
        );
        assert_eq!(
            Interval::new(-14, 3, -hms(4, 5, 6)).format_with_style(style),
            "-1-2 +3 -4:05:06"
        );
    }

    #[test]
    fn test_style_names() {
        let style: IntervalStyle = serde_yaml::from_str("iso_8601").unwrap();
        assert_eq!(style, IntervalStyle::Iso8601);
        let style: IntervalStyle = serde_yaml::from_str("sql_standard").unwrap();
        assert_eq!(style, IntervalStyle::SqlStandard);
    }
}
