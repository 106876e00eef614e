//! Testing utilities
//!
//! Assertion macros for the results of validation passes, and, with the
//! `proptest` feature, [`Arbitrary`](proptest::arbitrary::Arbitrary)
//! implementations for the error and accumulation types.
//!
//! The macros accept any `Result` whose error exposes
//! `failures() -> &[ConstraintError]`, i.e. both [`ValidationError`] and
//! [`CompositeError`].
//!
//! ```rust
//! use strait::prelude::*;
//! use strait::{assert_satisfied, assert_violated, assert_violations};
//!
//! let check = |n: i32| {
//!     constrained(|scope| {
//!         scope.clause("must be positive", |c| c.must(&n, Positive))?;
//!         scope.clause("must be even", |c| c.constraint(|| n % 2 == 0))
//!     })
//! };
//!
//! assert_satisfied!(check(4));
//! assert_violated!(check(3));
//! assert_violations!(check(-1), ["must be positive", "must be even"]);
//! ```
//!
//! [`ValidationError`]: crate::ValidationError
//! [`CompositeError`]: crate::CompositeError

/// Assert that a validation result is `Ok`.
///
/// Panics with the rendered error otherwise.
#[macro_export]
macro_rules! assert_satisfied {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(_) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected all constraints to hold, got: {}", e);
            }
        }
    };
}

/// Assert that a validation result is `Err`.
#[macro_export]
macro_rules! assert_violated {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Err(_) => {}
            ::std::result::Result::Ok(v) => {
                panic!("Expected a violation, got Ok({:?})", v);
            }
        }
    };
}

/// Assert that a validation result failed with exactly these messages, in order.
///
/// ```rust
/// use strait::prelude::*;
/// use strait::assert_violations;
///
/// let result = constrained_to(String::new(), |scope, s| {
///     scope.clause("must not be empty", |c| c.must_not(s, BeEmpty))
/// });
/// assert_violations!(result, ["must not be empty"]);
/// ```
#[macro_export]
macro_rules! assert_violations {
    ($result:expr, $expected:expr) => {
        match $result {
            ::std::result::Result::Err(e) => {
                let actual: ::std::vec::Vec<&str> =
                    e.failures().iter().map(|f| f.message()).collect();
                let expected: &[&str] = &$expected;
                assert_eq!(actual, expected);
            }
            ::std::result::Result::Ok(v) => {
                panic!(
                    "Expected violations {:?}, got Ok({:?})",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use crate::error::{CompositeError, ConstraintError, ErrorKind};
    use crate::nonempty::NonEmptyVec;
    use crate::Validation;

    impl Arbitrary for ErrorKind {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                Just(ErrorKind::Generic),
                Just(ErrorKind::Collection),
                Just(ErrorKind::String),
                Just(ErrorKind::Numeric),
                Just(ErrorKind::Pair),
            ]
            .boxed()
        }
    }

    impl Arbitrary for ConstraintError {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (any::<ErrorKind>(), "[a-z][a-z ]{0,23}")
                .prop_map(|(kind, message)| ConstraintError::new(kind, message))
                .boxed()
        }
    }

    impl Arbitrary for CompositeError {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (
                any::<ConstraintError>(),
                prop::collection::vec(any::<ConstraintError>(), 0..6),
            )
                .prop_map(|(head, tail)| CompositeError::from(NonEmptyVec::new(head, tail)))
                .boxed()
        }
    }

    // BoxedStrategy needs 'static inner strategies
    impl<T, E> Arbitrary for Validation<T, E>
    where
        T: Arbitrary + 'static,
        T::Strategy: 'static,
        E: Arbitrary + 'static,
        E::Strategy: 'static,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with((success, failure): Self::Parameters) -> Self::Strategy {
            prop_oneof![
                T::arbitrary_with(success).prop_map(Validation::Success),
                E::arbitrary_with(failure).prop_map(Validation::Failure),
            ]
            .boxed()
        }
    }
}
