//! String, byte and enum value generators.

use datum_core::Datum;
use rand::seq::SliceRandom;
use rand::Rng;

/// Maximum length of generated `text` values, in characters.
const MAX_TEXT_LENGTH: usize = 24;

/// Maximum length of generated byte strings.
const MAX_BYTES_LENGTH: usize = 16;

/// Identifiers are limited to 63 bytes.
const MAX_NAME_LENGTH: usize = 63;

/// Characters that need escaping in JSON or are outside ASCII.
const AWKWARD_CHARS: [char; 8] = ['"', '\\', '\n', '\t', '\u{1}', 'é', '日', '🦀'];

/// Generate a `text` value, occasionally containing quotes, control
/// characters or non-ASCII characters.
pub fn generate_text<R: Rng>(rng: &mut R) -> Datum {
    let len = rng.gen_range(0..=MAX_TEXT_LENGTH);
    Datum::String(random_string(rng, len))
}

/// Generate a `char(n)` value, blank-padded to exactly `length` characters.
pub fn generate_char<R: Rng>(rng: &mut R, length: u16) -> Datum {
    let length = usize::from(length);
    let len = rng.gen_range(0..=length);
    let mut value = random_string(rng, len);
    value.extend(std::iter::repeat(' ').take(length - len));
    Datum::String(value)
}

/// Generate a `varchar(n)` value of at most `length` characters.
pub fn generate_varchar<R: Rng>(rng: &mut R, length: u16) -> Datum {
    let len = rng.gen_range(0..=usize::from(length).min(MAX_TEXT_LENGTH));
    Datum::String(random_string(rng, len))
}

/// Generate an identifier: a lowercase letter followed by letters, digits and
/// underscores.
pub fn generate_name<R: Rng>(rng: &mut R) -> Datum {
    const FIRST: &[u8] = b"abcdefghijklmnopqrstuvwxyz_";
    const REST: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789_";

    let len = rng.gen_range(1..=MAX_NAME_LENGTH.min(MAX_TEXT_LENGTH));
    let mut name = String::with_capacity(len);
    name.push(char::from(FIRST[rng.gen_range(0..FIRST.len())]));
    for _ in 1..len {
        name.push(char::from(REST[rng.gen_range(0..REST.len())]));
    }
    Datum::String(name)
}

/// Generate an arbitrary byte string.
pub fn generate_bytes<R: Rng>(rng: &mut R) -> Datum {
    let len = rng.gen_range(0..=MAX_BYTES_LENGTH);
    let mut bytes = vec![0u8; len];
    rng.fill(bytes.as_mut_slice());
    Datum::Bytes(bytes)
}

/// Pick one of the enum's labels. An enum without labels has no values, so
/// the result is null.
pub fn generate_enum<R: Rng>(rng: &mut R, labels: &[String]) -> Datum {
    match labels.choose(rng) {
        Some(label) => Datum::Enum(label.clone()),
        None => Datum::Null,
    }
}

fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| {
            if rng.gen_ratio(1, 10) {
                AWKWARD_CHARS[rng.gen_range(0..AWKWARD_CHARS.len())]
            } else {
                char::from(rng.gen_range(b' '..=b'~'))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_char_is_padded() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let Datum::String(value) = generate_char(&mut rng, 8) else {
                panic!("Expected String value");
            };
            assert_eq!(value.chars().count(), 8);
        }
    }

    #[test]
    fn test_varchar_respects_length() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let Datum::String(value) = generate_varchar(&mut rng, 3) else {
                panic!("Expected String value");
            };
            assert!(value.chars().count() <= 3);
        }
    }

    #[test]
    fn test_name_is_identifier() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let Datum::String(name) = generate_name(&mut rng) else {
                panic!("Expected String value");
            };
            assert!(!name.is_empty());
            assert!(!name.starts_with(|c: char| c.is_ascii_digit()));
            assert!(name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        }
    }

    #[test]
    fn test_enum_label() {
        let mut rng = StdRng::seed_from_u64(42);
        let labels = vec!["sad".to_string(), "ok".to_string(), "happy".to_string()];

        for _ in 0..20 {
            let Datum::Enum(label) = generate_enum(&mut rng, &labels) else {
                panic!("Expected Enum value");
            };
            assert!(labels.contains(&label));
        }

        assert_eq!(generate_enum(&mut rng, &[]), Datum::Null);
    }

    #[test]
    fn test_bytes_length() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let Datum::Bytes(bytes) = generate_bytes(&mut rng) else {
                panic!("Expected Bytes value");
            };
            assert!(bytes.len() <= MAX_BYTES_LENGTH);
        }
    }
}
