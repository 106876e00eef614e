//! Logical composition of constraints
//!
//! Composite constraints report the kind of their left-most operand, so
//! `Positive.and(AtMost::new(10))` over an `i32` still fails as a numeric
//! error.

use super::Constraint;
use crate::error::ErrorKind;

/// Method chaining for [`Constraint`]s.
///
/// ```rust
/// use strait::constraint::*;
///
/// let outside = AtLeast::new(0).and(AtMost::new(100)).not();
/// assert!(outside.check(&-5));
/// assert!(!outside.check(&50));
/// ```
pub trait ConstraintExt<T: ?Sized>: Constraint<T> + Sized {
    /// Both constraints must hold.
    fn and<C: Constraint<T>>(self, other: C) -> And<Self, C> {
        And(self, other)
    }

    /// Either constraint must hold.
    ///
    /// ```rust
    /// use strait::constraint::*;
    ///
    /// let extreme = AtMost::new(-100).or(AtLeast::new(100));
    /// assert!(extreme.check(&150));
    /// assert!(!extreme.check(&0));
    /// ```
    fn or<C: Constraint<T>>(self, other: C) -> Or<Self, C> {
        Or(self, other)
    }

    /// The constraint must not hold.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, C: Constraint<T>> ConstraintExt<T> for C {}

/// Both constraints hold.
#[derive(Clone, Copy, Debug)]
pub struct And<A, B>(pub A, pub B);

impl<T: ?Sized, A: Constraint<T>, B: Constraint<T>> Constraint<T> for And<A, B> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }

    fn kind(&self) -> ErrorKind {
        self.0.kind()
    }
}

/// At least one constraint holds.
#[derive(Clone, Copy, Debug)]
pub struct Or<A, B>(pub A, pub B);

impl<T: ?Sized, A: Constraint<T>, B: Constraint<T>> Constraint<T> for Or<A, B> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }

    fn kind(&self) -> ErrorKind {
        self.0.kind()
    }
}

/// The inner constraint does not hold.
#[derive(Clone, Copy, Debug)]
pub struct Not<C>(pub C);

impl<T: ?Sized, C: Constraint<T>> Constraint<T> for Not<C> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }

    fn kind(&self) -> ErrorKind {
        self.0.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{AtLeast, AtMost, BeEmpty, HaveSize, Negative, Positive};

    #[test]
    fn test_and() {
        let c = AtLeast::new(1).and(AtMost::new(9));
        assert!(c.check(&1));
        assert!(c.check(&9));
        assert!(!c.check(&0));
        assert!(!c.check(&10));
    }

    #[test]
    fn test_or() {
        let c = Negative.or(AtLeast::new(100_i32));
        assert!(c.check(&-1));
        assert!(c.check(&100));
        assert!(!c.check(&50));
    }

    #[test]
    fn test_not() {
        let c = ConstraintExt::<i32>::not(Positive);
        assert!(c.check(&0_i32));
        assert!(!c.check(&1_i32));
    }

    #[test]
    fn test_kind_follows_left_operand() {
        let numeric = ConstraintExt::<i32>::and(Positive, |x: &i32| x % 2 == 0);
        assert_eq!(Constraint::<i32>::kind(&numeric), ErrorKind::Numeric);

        let generic = ConstraintExt::<i32>::and(|x: &i32| x % 2 == 0, Positive);
        assert_eq!(Constraint::<i32>::kind(&generic), ErrorKind::Generic);

        let non_empty_pair =
            ConstraintExt::<Vec<i32>>::and(Not(BeEmpty), HaveSize::new(2));
        assert_eq!(Constraint::<Vec<i32>>::kind(&non_empty_pair), ErrorKind::Collection);
        assert!(non_empty_pair.check(&vec![1, 2]));
        assert!(!non_empty_pair.check(&Vec::<i32>::new()));
    }
}
