//! Categorical value generator.

use rand::Rng;
use seedgen_core::FieldValue;

/// Pick one candidate uniformly at random.
///
/// Schema validation guarantees a non-empty candidate set before
/// generation starts; an empty set here yields an empty string rather
/// than panicking.
pub fn pick<R: Rng>(values: &[String], rng: &mut R) -> FieldValue {
    if values.is_empty() {
        return FieldValue::Text(String::new());
    }

    let idx = rng.gen_range(0..values.len());
    FieldValue::Text(values[idx].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_is_always_a_member() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = vec!["hr".to_string(), "sales".to_string(), "eng".to_string()];

        for _ in 0..100 {
            let value = pick(&values, &mut rng);
            let text = value.as_text().unwrap().to_string();
            assert!(values.contains(&text));
        }
    }

    #[test]
    fn test_single_candidate_is_constant() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = vec!["66f7e8a82f1b6c01120dcc32".to_string()];

        for _ in 0..10 {
            assert_eq!(
                pick(&values, &mut rng),
                FieldValue::from("66f7e8a82f1b6c01120dcc32")
            );
        }
    }

    #[test]
    fn test_deterministic_pick() {
        let values = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            assert_eq!(pick(&values, &mut rng1), pick(&values, &mut rng2));
        }
    }
}
