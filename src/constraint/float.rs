//! Floating point shapes
//!
//! All of these report [`ErrorKind::Numeric`]. Tolerance comparison is
//! inclusive: `|value - expected| <= tolerance`.

use super::Constraint;
use crate::error::{ArgumentError, ErrorKind};

/// Tolerance used by [`EqualWithin::with_default_tolerance`].
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// The value is neither infinite nor NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeFinite;

/// The value is positive or negative infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeInfinite;

/// The value is NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeNaN;

macro_rules! impl_float_class {
    ($($ty:ty),+) => {
        $(
            impl Constraint<$ty> for BeFinite {
                #[inline]
                fn check(&self, value: &$ty) -> bool {
                    value.is_finite()
                }

                fn kind(&self) -> ErrorKind {
                    ErrorKind::Numeric
                }
            }

            impl Constraint<$ty> for BeInfinite {
                #[inline]
                fn check(&self, value: &$ty) -> bool {
                    value.is_infinite()
                }

                fn kind(&self) -> ErrorKind {
                    ErrorKind::Numeric
                }
            }

            impl Constraint<$ty> for BeNaN {
                #[inline]
                fn check(&self, value: &$ty) -> bool {
                    value.is_nan()
                }

                fn kind(&self) -> ErrorKind {
                    ErrorKind::Numeric
                }
            }
        )+
    };
}

impl_float_class!(f32, f64);

/// The value is within `tolerance` of `expected`.
///
/// ```rust
/// use strait::constraint::{Constraint, EqualWithin};
///
/// let about_five = EqualWithin::new(5.0, 0.01).unwrap();
/// assert!(about_five.check(&5.005_f64));
/// assert!(!about_five.check(&5.02_f64));
///
/// assert!(EqualWithin::new(5.0, -0.1).is_err());
/// ```
///
/// NaN never equals anything, whatever the tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualWithin {
    expected: f64,
    tolerance: f64,
}

impl EqualWithin {
    /// Compare against `expected` with the given tolerance.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::InvalidTolerance`] when `tolerance` is negative or NaN.
    pub fn new(expected: f64, tolerance: f64) -> Result<Self, ArgumentError> {
        if tolerance >= 0.0 {
            Ok(Self {
                expected,
                tolerance,
            })
        } else {
            Err(ArgumentError::InvalidTolerance(tolerance))
        }
    }

    /// Compare against `expected` with [`DEFAULT_TOLERANCE`].
    pub fn with_default_tolerance(expected: f64) -> Self {
        Self {
            expected,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// The value compared against.
    pub fn expected(&self) -> f64 {
        self.expected
    }

    /// The accepted absolute difference.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[inline]
    fn accepts(&self, value: f64) -> bool {
        (value - self.expected).abs() <= self.tolerance
    }
}

impl Constraint<f64> for EqualWithin {
    #[inline]
    fn check(&self, value: &f64) -> bool {
        self.accepts(*value)
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Numeric
    }
}

impl Constraint<f32> for EqualWithin {
    #[inline]
    fn check(&self, value: &f32) -> bool {
        self.accepts(f64::from(*value))
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Numeric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(BeFinite.check(&1.5_f64));
        assert!(!BeFinite.check(&f64::INFINITY));
        assert!(!BeFinite.check(&f32::NAN));

        assert!(BeInfinite.check(&f64::NEG_INFINITY));
        assert!(!BeInfinite.check(&0.0_f32));

        assert!(BeNaN.check(&f64::NAN));
        assert!(!BeNaN.check(&1.0_f64));
    }

    #[test]
    fn test_equal_within_boundary() {
        let c = EqualWithin::new(5.0, 0.01).unwrap();
        assert!(c.check(&5.005_f64));
        assert!(c.check(&4.995_f64));
        assert!(!c.check(&5.02_f64));
        assert!(!c.check(&f64::NAN));
    }

    #[test]
    fn test_equal_within_zero_tolerance_is_exact() {
        let c = EqualWithin::new(0.25, 0.0).unwrap();
        assert!(c.check(&0.25_f64));
        assert!(!c.check(&0.250_000_1_f64));
    }

    #[test]
    fn test_equal_within_rejects_bad_tolerance() {
        assert_eq!(
            EqualWithin::new(1.0, -0.5),
            Err(ArgumentError::InvalidTolerance(-0.5))
        );
        assert!(EqualWithin::new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_default_tolerance() {
        let c = EqualWithin::with_default_tolerance(1.0);
        assert_eq!(c.tolerance(), DEFAULT_TOLERANCE);
        assert!(c.check(&(1.0_f64 + 1e-9)));
        assert!(!c.check(&(1.0_f64 + 1e-6)));
    }

    #[test]
    fn test_equal_within_f32() {
        let c = EqualWithin::new(2.0, 0.1).unwrap();
        assert!(c.check(&2.05_f32));
        assert!(!c.check(&2.5_f32));
    }

    #[test]
    fn test_kind_is_numeric() {
        assert_eq!(Constraint::<f64>::kind(&BeFinite), ErrorKind::Numeric);
        assert_eq!(Constraint::<f32>::kind(&BeNaN), ErrorKind::Numeric);
        assert_eq!(
            Constraint::<f64>::kind(&EqualWithin::with_default_tolerance(0.0)),
            ErrorKind::Numeric
        );
    }
}
