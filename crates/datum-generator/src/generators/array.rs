//! Array and tuple value generators.

use super::generate_value;
use datum_core::{Datum, SqlType};
use rand::Rng;

/// Maximum number of elements in a generated array.
pub const MAX_ARRAY_LENGTH: usize = 5;

/// Generate an array of `0..=MAX_ARRAY_LENGTH` elements of the given type.
///
/// Elements are independently null with the usual probability when nulls are
/// allowed.
pub fn generate_array<R: Rng>(rng: &mut R, element_type: &SqlType, allow_nulls: bool) -> Datum {
    let length = rng.gen_range(0..=MAX_ARRAY_LENGTH);

    let items: Vec<Datum> = (0..length)
        .map(|_| generate_value(rng, element_type, allow_nulls))
        .collect();

    Datum::Array(items)
}

/// Generate a tuple with one value per field type, in field order.
pub fn generate_tuple<R: Rng>(rng: &mut R, fields: &[SqlType], allow_nulls: bool) -> Datum {
    Datum::Tuple(
        fields
            .iter()
            .map(|field| generate_value(rng, field, allow_nulls))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_array_length() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut lengths = std::collections::HashSet::new();
        for _ in 0..200 {
            if let Datum::Array(items) = generate_array(&mut rng, &SqlType::Int, false) {
                assert!(items.len() <= MAX_ARRAY_LENGTH);
                assert!(items.iter().all(|item| matches!(item, Datum::Int(_))));
                lengths.insert(items.len());
            } else {
                panic!("Expected Array value");
            }
        }
        assert!(lengths.contains(&0));
        assert!(lengths.contains(&MAX_ARRAY_LENGTH));
    }

    #[test]
    fn test_array_elements_may_be_null() {
        let mut rng = StdRng::seed_from_u64(42);

        let has_null = (0..200).any(|_| {
            generate_array(&mut rng, &SqlType::Text, true)
                .as_elements()
                .is_some_and(|items| items.iter().any(Datum::is_null))
        });
        assert!(has_null);
    }

    #[test]
    fn test_generate_tuple_follows_fields() {
        let mut rng = StdRng::seed_from_u64(42);
        let fields = vec![
            SqlType::Bool,
            SqlType::array(SqlType::Uuid),
            SqlType::Date,
        ];

        let Datum::Tuple(values) = generate_tuple(&mut rng, &fields, false) else {
            panic!("Expected Tuple value");
        };
        assert_eq!(values.len(), 3);
        assert!(matches!(values[0], Datum::Bool(_)));
        assert!(matches!(values[1], Datum::Array(_)));
        assert!(matches!(values[2], Datum::Date(_)));
    }

    #[test]
    fn test_empty_tuple() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_tuple(&mut rng, &[], true), Datum::Tuple(vec![]));
    }
}
