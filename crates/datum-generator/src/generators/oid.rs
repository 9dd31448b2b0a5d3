//! Object identifier generators.

use datum_core::{Datum, SqlType};
use rand::seq::SliceRandom;
use rand::Rng;

const RELATIONS: [(u32, &str); 4] = [
    (1259, "pg_class"),
    (1247, "pg_type"),
    (2615, "pg_namespace"),
    (1255, "pg_proc"),
];

const NAMESPACES: [(u32, &str); 3] = [(11, "pg_catalog"), (2200, "public"), (99, "pg_toast")];

const FUNCTIONS: [(u32, &str); 3] = [(1242, "boolin"), (42, "int4in"), (46, "textin")];

const ROLES: [(u32, &str); 2] = [(10, "root"), (4200, "app_user")];

const TYPES: [(u32, &str); 4] = [(16, "bool"), (23, "int4"), (25, "text"), (114, "json")];

/// Generate an OID for the given OID type.
///
/// For `reg*` aliases the OID is usually a known object and carries its name;
/// otherwise it is a bare number that has no name to resolve to.
pub fn generate_oid<R: Rng>(rng: &mut R, sql_type: &SqlType) -> Datum {
    let pool: &[(u32, &str)] = match sql_type {
        SqlType::RegClass => &RELATIONS,
        SqlType::RegNamespace => &NAMESPACES,
        SqlType::RegProc | SqlType::RegProcedure => &FUNCTIONS,
        SqlType::RegRole => &ROLES,
        SqlType::RegType => &TYPES,
        _ => &[],
    };

    match pool.choose(rng) {
        Some(&(oid, name)) if rng.gen_bool(0.8) => Datum::Oid {
            oid,
            name: Some(name.to_string()),
        },
        _ => Datum::Oid {
            oid: rng.gen(),
            name: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_plain_oid_has_no_name() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert!(matches!(
                generate_oid(&mut rng, &SqlType::Oid),
                Datum::Oid { name: None, .. }
            ));
        }
    }

    #[test]
    fn test_alias_names_come_from_pool() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut named = 0;
        for _ in 0..100 {
            let Datum::Oid { oid, name } = generate_oid(&mut rng, &SqlType::RegType) else {
                panic!("Expected Oid value");
            };
            if let Some(name) = name {
                assert!(TYPES.contains(&(oid, name.as_str())));
                named += 1;
            }
        }
        assert!(named > 0);
    }
}
