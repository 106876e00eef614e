//! Accumulating results across several validation passes
//!
//! Each entry point returns a plain `Result`. When a caller validates several
//! independent values and wants one report for all of them, the results are
//! lifted into [`Validation`] and joined: failures are merged with
//! [`Semigroup::combine`] instead of stopping at the first.
//!
//! ```
//! use strait::prelude::*;
//!
//! let name = constrained_to(String::new(), |scope, name| {
//!     scope.clause("name must not be empty", |c| c.must_not(name.as_str(), BeEmpty))
//! });
//! let age = constrained_to(-4, |scope, age| {
//!     scope.clause("age must be positive", |c| c.must(age, Positive))
//! });
//!
//! let both = Validation::from_result(name).and(Validation::from_result(age));
//! match both {
//!     Validation::Failure(err) => assert_eq!(err.failures().len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

use crate::Semigroup;

/// Either a validated value or every error accumulated so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// The value passed.
    Success(T),
    /// One or more errors, merged through `E: Semigroup`.
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Wrap a passing value.
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Wrap an error.
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Lift a `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Lower back into a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// `true` for [`Validation::Success`].
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// `true` for [`Validation::Failure`].
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the passing value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error.
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Join a tuple of validations, see [`ValidateAll`].
    pub fn all<V, E2>(validations: V) -> Validation<V::Output, E2>
    where
        E2: Semigroup,
        V: ValidateAll<E2>,
    {
        validations.validate_all()
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}

fn merge<E: Semigroup>(acc: Option<E>, error: E) -> Option<E> {
    Some(match acc {
        Some(acc) => acc.combine(error),
        None => error,
    })
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Pair two validations, merging errors when both failed.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) | (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Run a dependent validation on the passing value.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Join a homogeneous list of validations.
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::with_capacity(validations.len());
        let mut errors = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => errors = merge(errors, error),
            }
        }

        match errors {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}

/// Tuples of validations sharing an error type.
pub trait ValidateAll<E: Semigroup> {
    /// Tuple of passing values.
    type Output;

    /// Join every element, merging errors in tuple order.
    fn validate_all(self) -> Validation<Self::Output, E>;
}

macro_rules! impl_validate_all {
    ($($T:ident $v:ident),+) => {
        impl<E: Semigroup, $($T),+> ValidateAll<E> for ($(Validation<$T, E>,)+) {
            type Output = ($($T,)+);

            fn validate_all(self) -> Validation<Self::Output, E> {
                let ($($v,)+) = self;
                let mut errors = None;
                $(
                    let $v = match $v {
                        Validation::Success(value) => Some(value),
                        Validation::Failure(error) => {
                            errors = merge(errors, error);
                            None
                        }
                    };
                )+
                match (errors, ($($v,)+)) {
                    (Some(error), _) => Validation::Failure(error),
                    (None, ($(Some($v),)+)) => Validation::Success(($($v,)+)),
                    (None, _) => unreachable!("every missing value records an error"),
                }
            }
        }
    };
}

impl_validate_all!(T1 a);
impl_validate_all!(T1 a, T2 b);
impl_validate_all!(T1 a, T2 b, T3 c);
impl_validate_all!(T1 a, T2 b, T3 c, T4 d);
impl_validate_all!(T1 a, T2 b, T3 c, T4 d, T5 e);
impl_validate_all!(T1 a, T2 b, T3 c, T4 d, T5 e, T6 f);
