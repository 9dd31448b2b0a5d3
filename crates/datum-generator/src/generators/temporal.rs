//! Date, time and interval value generators.

use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, Offset, Utc};
use datum_core::{Datum, Interval};
use rand::Rng;

/// Seconds since the epoch of 2100-01-01T00:00:00Z; generated timestamps fall
/// in `[1970-01-01, 2100-01-01)`.
const END_OF_RANGE_SECS: i64 = 4_102_444_800;

const SECONDS_PER_DAY: u32 = 86_400;

/// Generate a date between 1970 and 2100.
pub fn generate_date<R: Rng>(rng: &mut R) -> Datum {
    Datum::Date(random_datetime(rng).date())
}

/// Generate a time of day with microsecond precision.
pub fn generate_time<R: Rng>(rng: &mut R) -> Datum {
    Datum::Time(random_time(rng))
}

/// Generate a time of day with a UTC offset of up to 14 hours, in whole
/// minutes.
pub fn generate_timetz<R: Rng>(rng: &mut R) -> Datum {
    let minutes = rng.gen_range(-14 * 60..=14 * 60);
    let offset = FixedOffset::east_opt(minutes * 60).unwrap_or_else(|| Utc.fix());
    Datum::TimeTz {
        time: random_time(rng),
        offset,
    }
}

/// Generate a timestamp without timezone between 1970 and 2100.
pub fn generate_timestamp<R: Rng>(rng: &mut R) -> Datum {
    Datum::Timestamp(random_datetime(rng))
}

/// Generate an instant between 1970 and 2100.
pub fn generate_timestamptz<R: Rng>(rng: &mut R) -> Datum {
    Datum::TimestampTz(random_datetime(rng).and_utc())
}

/// Generate an interval whose fields may have mixed signs.
pub fn generate_interval<R: Rng>(rng: &mut R) -> Datum {
    let months = if rng.gen_bool(0.5) {
        rng.gen_range(-240..=240)
    } else {
        0
    };
    let days = if rng.gen_bool(0.5) {
        rng.gen_range(-400..=400)
    } else {
        0
    };
    let micros = if rng.gen_bool(0.7) {
        let micros = rng.gen_range(-100_000_000_000i64..=100_000_000_000);
        // Whole seconds are common in practice.
        if rng.gen_bool(0.5) {
            micros - micros % 1_000_000
        } else {
            micros
        }
    } else {
        0
    };
    Datum::Interval(Interval::new(months, days, micros))
}

fn random_time<R: Rng>(rng: &mut R) -> NaiveTime {
    let secs = rng.gen_range(0..SECONDS_PER_DAY);
    let micros = if rng.gen_bool(0.5) {
        rng.gen_range(0..1_000_000u32)
    } else {
        0
    };
    NaiveTime::from_num_seconds_from_midnight_opt(secs, micros * 1000).unwrap_or(NaiveTime::MIN)
}

fn random_datetime<R: Rng>(rng: &mut R) -> NaiveDateTime {
    let secs = rng.gen_range(0..END_OF_RANGE_SECS);
    let micros = if rng.gen_bool(0.5) {
        rng.gen_range(0..1_000_000u32)
    } else {
        0
    };
    DateTime::from_timestamp(secs, micros * 1000)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}
