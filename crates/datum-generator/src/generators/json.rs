//! JSON document generator.

use datum_core::Datum;
use rand::Rng;
use serde_json::{Map, Number, Value};

/// Nesting depth past which only scalars are generated.
const MAX_DEPTH: u32 = 3;

/// Maximum number of members in a generated object or array.
const MAX_MEMBERS: usize = 4;

const KEYS: [&str; 8] = ["a", "b", "id", "name", "tags", "nested", "empty", "ключ"];

/// Generate a random JSON document.
pub fn generate_json<R: Rng>(rng: &mut R) -> Datum {
    Datum::Json(generate_document(rng, 0))
}

fn generate_document<R: Rng>(rng: &mut R, depth: u32) -> Value {
    let choice = if depth >= MAX_DEPTH {
        rng.gen_range(0..4)
    } else {
        rng.gen_range(0..6)
    };

    match choice {
        0 => Value::Null,
        1 => Value::Bool(rng.gen()),
        2 => {
            if rng.gen_bool(0.5) {
                Value::Number(Number::from(rng.gen_range(-1_000_000i64..1_000_000)))
            } else {
                // Finite by construction.
                Number::from_f64(rng.gen_range(-1000.0..1000.0))
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        3 => Value::String(KEYS[rng.gen_range(0..KEYS.len())].repeat(rng.gen_range(0..3))),
        4 => {
            let len = rng.gen_range(0..=MAX_MEMBERS);
            Value::Array((0..len).map(|_| generate_document(rng, depth + 1)).collect())
        }
        _ => {
            let len = rng.gen_range(0..=MAX_MEMBERS);
            let mut object = Map::new();
            for _ in 0..len {
                let key = KEYS[rng.gen_range(0..KEYS.len())].to_string();
                object.insert(key, generate_document(rng, depth + 1));
            }
            Value::Object(object)
        }
    }
}
