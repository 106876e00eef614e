//! Property-based tests for clause evaluation and failure aggregation

use proptest::prelude::*;
use strait::prelude::*;

fn run(values: &[i32], config: Config) -> Result<(), ValidationError> {
    config.constrained(|scope| {
        for (i, value) in values.iter().enumerate() {
            scope.clause(format!("value {i} must be positive"), |c| c.must(value, Positive))?;
        }
        Ok(())
    })
}

proptest! {
    #[test]
    fn prop_must_matches_check(value in any::<i32>(), min in any::<i32>()) {
        let mut scope = Scope::new();
        scope.clause("at least", |c| c.must(&value, AtLeast::new(min))).unwrap();

        prop_assert_eq!(scope.results()[0].is_success(), value >= min);
        prop_assert_eq!(scope.results().len(), 1);
    }

    #[test]
    fn prop_must_not_is_complement(value in any::<i64>(), lo in -50i64..0, hi in 0i64..50) {
        let range = InRange::new(lo, hi).unwrap();
        let mut scope = Scope::new();
        scope.clause("in", |c| c.must(&value, range.clone())).unwrap();
        scope.clause("out", |c| c.must_not(&value, range)).unwrap();

        let results = scope.results();
        prop_assert_ne!(results[0].is_success(), results[1].is_success());
    }

    #[test]
    fn prop_failures_preserve_evaluation_order(
        values in prop::collection::vec(any::<i32>(), 0..20)
    ) {
        let expected: Vec<String> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v <= 0)
            .map(|(i, _)| format!("value {i} must be positive"))
            .collect();

        match run(&values, Config::default()) {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(err) => {
                prop_assert!(matches!(err, ValidationError::Violations(_)));
                let actual: Vec<&str> = err.failures().iter().map(|e| e.message()).collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }

    #[test]
    fn prop_short_circuit_returns_first_failure(
        values in prop::collection::vec(any::<i32>(), 0..20)
    ) {
        let first = values.iter().position(|v| *v <= 0);

        match (run(&values, Config::new().short_circuit(true)), first) {
            (Ok(()), None) => {}
            (Err(ValidationError::ShortCircuited(err)), Some(i)) => {
                prop_assert_eq!(err.message(), format!("value {i} must be positive"));
                prop_assert_eq!(err.kind(), ErrorKind::Numeric);
            }
            (other, first) => prop_assert!(false, "unexpected {:?} for first failure {:?}", other, first),
        }
    }

    #[test]
    fn prop_skip_always_succeeds(values in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(run(&values, Config::new().skip_checks(true)).is_ok());
    }

    #[test]
    fn prop_composite_message_lists_every_failure(
        messages in prop::collection::vec("[a-z]{1,10}", 1..6)
    ) {
        let failures: Vec<ConstraintError> =
            messages.iter().map(|m| ConstraintError::generic(m.as_str())).collect();
        let rendered = CompositeError::new(failures).unwrap().to_string();

        if messages.len() == 1 {
            prop_assert_eq!(
                rendered,
                format!("An exception occurred -- [ConstraintError] {}", messages[0])
            );
        } else {
            prop_assert!(rendered.starts_with("Multiple exceptions occurred -- "));
            prop_assert_eq!(rendered.matches("{ [ConstraintError] ").count(), messages.len());
        }
    }

    #[test]
    fn prop_monotonic_holds_for_sorted(mut values in prop::collection::vec(any::<i32>(), 0..30)) {
        values.sort_unstable();
        prop_assert!(MonotonicallyIncreasing::new().check(&values));

        values.reverse();
        prop_assert!(MonotonicallyDecreasing::new().check(&values));

        values.dedup();
        prop_assert!(MonotonicallyDecreasing::strict().check(&values));
    }

    #[test]
    fn prop_equal_within_is_symmetric(
        a in -1e6f64..1e6,
        b in -1e6f64..1e6,
        tolerance in 0f64..10.0
    ) {
        let from_a = EqualWithin::new(a, tolerance).unwrap().check(&b);
        let from_b = EqualWithin::new(b, tolerance).unwrap().check(&a);
        prop_assert_eq!(from_a, from_b);
    }
}
