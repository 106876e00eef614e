//! Ordering and equality shapes
//!
//! Every shape here works for any `T: PartialOrd` (or `PartialEq`) that has a
//! [`Domain`], and reports that domain's [`ErrorKind`]. Bounds are inclusive.
//! Values that do not compare (a NaN, for instance) never satisfy a bound.

use std::fmt::Debug;
use std::ops::RangeInclusive;

use super::{Constraint, Domain};
use crate::error::{ArgumentError, ErrorKind};

/// `value >= min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtLeast<T> {
    min: T,
}

impl<T> AtLeast<T> {
    /// Require at least `min`, inclusive.
    pub fn new(min: T) -> Self {
        Self { min }
    }

    /// The inclusive lower bound.
    pub fn min(&self) -> &T {
        &self.min
    }
}

impl<T> Constraint<T> for AtLeast<T>
where
    T: PartialOrd + Domain + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min
    }

    fn kind(&self) -> ErrorKind {
        T::KIND
    }
}

/// `value <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtMost<T> {
    max: T,
}

impl<T> AtMost<T> {
    /// Require at most `max`, inclusive.
    pub fn new(max: T) -> Self {
        Self { max }
    }

    /// The inclusive upper bound.
    pub fn max(&self) -> &T {
        &self.max
    }
}

impl<T> Constraint<T> for AtMost<T>
where
    T: PartialOrd + Domain + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.max
    }

    fn kind(&self) -> ErrorKind {
        T::KIND
    }
}

/// `lower <= value <= upper`.
///
/// The bounds are validated when the constraint is built:
///
/// ```rust
/// use strait::constraint::{Constraint, InRange};
/// use strait::error::ArgumentError;
///
/// let percent = InRange::new(0, 100).unwrap();
/// assert!(percent.check(&0));
/// assert!(percent.check(&100));
/// assert!(!percent.check(&101));
///
/// assert!(matches!(InRange::new(10, 1), Err(ArgumentError::InvalidRange { .. })));
/// assert!(InRange::try_from(0.0..=f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InRange<T> {
    lower: T,
    upper: T,
}

impl<T: PartialOrd + Debug> InRange<T> {
    /// Build a closed range.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::InvalidRange`] when `lower > upper` or the bounds do
    /// not compare.
    pub fn new(lower: T, upper: T) -> Result<Self, ArgumentError> {
        if lower <= upper {
            Ok(Self { lower, upper })
        } else {
            Err(ArgumentError::InvalidRange {
                lower: format!("{lower:?}"),
                upper: format!("{upper:?}"),
            })
        }
    }
}

impl<T> InRange<T> {
    /// The inclusive lower bound.
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// The inclusive upper bound.
    pub fn upper(&self) -> &T {
        &self.upper
    }
}

impl<T: PartialOrd + Debug> TryFrom<RangeInclusive<T>> for InRange<T> {
    type Error = ArgumentError;

    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (lower, upper) = range.into_inner();
        Self::new(lower, upper)
    }
}

impl<T> Constraint<T> for InRange<T>
where
    T: PartialOrd + Domain + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.lower && *value <= self.upper
    }

    fn kind(&self) -> ErrorKind {
        T::KIND
    }
}

/// `value == expected`.
///
/// Exact equality. For floating point with a tolerance see
/// [`EqualWithin`](super::EqualWithin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualTo<T> {
    expected: T,
}

impl<T> EqualTo<T> {
    /// Require exactly `expected`.
    pub fn new(expected: T) -> Self {
        Self { expected }
    }

    /// The expected value.
    pub fn expected(&self) -> &T {
        &self.expected
    }
}

impl<T> Constraint<T> for EqualTo<T>
where
    T: PartialEq + Domain + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value == self.expected
    }

    fn kind(&self) -> ErrorKind {
        T::KIND
    }
}

/// `value > zero`, where zero is `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Positive;

impl<T> Constraint<T> for Positive
where
    T: PartialOrd + Default + Domain,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > T::default()
    }

    fn kind(&self) -> ErrorKind {
        T::KIND
    }
}

/// `value < zero`, where zero is `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Negative;

impl<T> Constraint<T> for Negative
where
    T: PartialOrd + Default + Domain,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value < T::default()
    }

    fn kind(&self) -> ErrorKind {
        T::KIND
    }
}
