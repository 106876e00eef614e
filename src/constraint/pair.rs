//! Shapes over two-element tuples, reported as [`ErrorKind::Pair`]

use super::Constraint;
use crate::error::ErrorKind;

/// Both components are finite floats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BothFinite;

impl Constraint<(f64, f64)> for BothFinite {
    #[inline]
    fn check(&self, value: &(f64, f64)) -> bool {
        value.0.is_finite() && value.1.is_finite()
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Pair
    }
}

impl Constraint<(f32, f32)> for BothFinite {
    #[inline]
    fn check(&self, value: &(f32, f32)) -> bool {
        value.0.is_finite() && value.1.is_finite()
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Pair
    }
}

/// The first component is strictly less than the second.
///
/// ```rust
/// use strait::constraint::{Constraint, StrictlyOrdered};
///
/// assert!(StrictlyOrdered.check(&(1, 2)));
/// assert!(!StrictlyOrdered.check(&(2, 2)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictlyOrdered;

impl<A: PartialOrd> Constraint<(A, A)> for StrictlyOrdered {
    #[inline]
    fn check(&self, value: &(A, A)) -> bool {
        value.0 < value.1
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Pair
    }
}
