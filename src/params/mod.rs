//! Parameter bindings and randomized sample inputs.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::Rng;

use crate::registry::Value;

// Binding names exposed to every script body.
pub const SCRIPT_NAME_PARAM: &str = "script_name";
pub const NAME_PARAM: &str = "name";
pub const AGE_PARAM: &str = "age";

/// Names drawn from when no SAMPLE_NAMES override is configured.
pub const DEFAULT_NAMES: &[&str] = &["Alice", "Dave", "George", "Mary", "Lucy"];

/// Named values pushed into the evaluation scope.
pub type Bindings = HashMap<String, Value>;

/// Builds the randomized bindings handed to a single script run.
pub fn sample_bindings(script_name: &str, names: &[String], rng: &mut StdRng) -> Bindings {
    let mut bindings = Bindings::new();
    bindings.insert(
        SCRIPT_NAME_PARAM.into(),
        Value::Str(script_name.to_string()),
    );
    if !names.is_empty() {
        let pick = rng.random_range(0..names.len());
        bindings.insert(NAME_PARAM.into(), Value::Str(names[pick].clone()));
    }
    bindings.insert(AGE_PARAM.into(), Value::Int(rng.random_range(15..50)));
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn sample_bindings_cover_expected_keys() {
        let names: Vec<String> = DEFAULT_NAMES.iter().map(|n| n.to_string()).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let bindings = sample_bindings("demo", &names, &mut rng);

        assert_eq!(
            bindings.get(SCRIPT_NAME_PARAM),
            Some(&Value::Str("demo".into()))
        );
        match bindings.get(AGE_PARAM) {
            Some(Value::Int(age)) => assert!((15_i64..50).contains(age)),
            other => panic!("unexpected age binding: {:?}", other),
        }
        match bindings.get(NAME_PARAM) {
            Some(Value::Str(name)) => assert!(names.contains(name)),
            other => panic!("unexpected name binding: {:?}", other),
        }
    }

    #[test]
    fn empty_name_pool_skips_the_name_binding() {
        let mut rng = StdRng::seed_from_u64(7);
        let bindings = sample_bindings("demo", &[], &mut rng);
        assert!(bindings.get(NAME_PARAM).is_none());
        assert!(bindings.get(AGE_PARAM).is_some());
    }
}
