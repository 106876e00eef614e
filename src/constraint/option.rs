//! Presence checks for `Option`

use super::Constraint;

/// The value is `None`.
///
/// Use `.not()` from [`ConstraintExt`](super::ConstraintExt) or
/// [`Clause::must_not`](crate::Clause::must_not) to require a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeNone;

impl<T> Constraint<Option<T>> for BeNone {
    #[inline]
    fn check(&self, value: &Option<T>) -> bool {
        value.is_none()
    }
}
