//! Numeric value generators.

use datum_core::Datum;
use rand::Rng;

/// One in this many floats and decimals is NaN or infinite.
const SPECIAL_VALUE_ODDS: u32 = 50;

/// Generate an integer that fits in `bits` bits (16, 32 or 64).
pub fn generate_int<R: Rng>(rng: &mut R, bits: u32) -> Datum {
    let value = match bits {
        16 => i64::from(rng.gen::<i16>()),
        32 => i64::from(rng.gen::<i32>()),
        _ => rng.gen::<i64>(),
    };
    Datum::Int(value)
}

/// Generate a float, occasionally NaN or infinite.
///
/// With `single_precision` the value is exactly representable as an `f32`.
pub fn generate_float<R: Rng>(rng: &mut R, single_precision: bool) -> Datum {
    if rng.gen_ratio(1, SPECIAL_VALUE_ODDS) {
        let special = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
        return Datum::Float(special[rng.gen_range(0..special.len())]);
    }

    let value = if single_precision {
        f64::from(rng.gen_range(-1.0e6f32..1.0e6f32))
    } else {
        rng.gen_range(-1.0e12..1.0e12)
    };
    Datum::Float(value)
}

/// Generate a decimal with at most `precision` digits, `scale` of them after
/// the decimal point, occasionally NaN or infinite.
pub fn generate_decimal<R: Rng>(rng: &mut R, precision: u8, scale: u8) -> Datum {
    if rng.gen_ratio(1, SPECIAL_VALUE_ODDS) {
        let special = ["NaN", "Infinity", "-Infinity"];
        return Datum::Decimal(special[rng.gen_range(0..special.len())].to_string());
    }

    let integer_digits = precision.saturating_sub(scale);
    let mut text = String::new();
    if rng.gen_bool(0.5) {
        text.push('-');
    }

    let len = rng.gen_range(0..=integer_digits);
    if len == 0 {
        text.push('0');
    } else {
        text.push(char::from(b'0' + rng.gen_range(1..=9u8)));
        for _ in 1..len {
            text.push(random_digit(rng));
        }
    }

    if scale > 0 {
        text.push('.');
        for _ in 0..scale {
            text.push(random_digit(rng));
        }
    }

    Datum::Decimal(text)
}

fn random_digit<R: Rng>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..=9u8))
}
