//! Collection shapes
//!
//! Shapes here work over anything implementing [`Collection`] and report
//! [`ErrorKind::Collection`]. [`BeEmpty`] also applies to strings, see
//! [`string`](super::string).

use std::collections::{BTreeSet, HashSet, VecDeque};

use super::{Constraint, SizeRule};
use crate::error::ErrorKind;

/// A finite container that can report its size and walk its elements.
///
/// Ordering shapes such as [`MonotonicallyIncreasing`] use iteration order,
/// so they are only meaningful for ordered containers.
pub trait Collection {
    /// Element type.
    type Item;

    /// Number of elements.
    fn size(&self) -> usize;

    /// Iterate the elements in the container's own order.
    fn elements(&self) -> impl Iterator<Item = &Self::Item>;
}

impl<T> Collection for [T] {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    fn size(&self) -> usize {
        N
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, S> Collection for HashSet<T, S> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Collection for BTreeSet<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

/// The collection (or string) has no elements.
///
/// Over `str` and `String` it reports [`ErrorKind::String`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeEmpty;

impl<C: Collection + ?Sized> Constraint<C> for BeEmpty {
    #[inline]
    fn check(&self, value: &C) -> bool {
        value.size() == 0
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Collection
    }
}

/// The collection's size matches a rule.
///
/// ```rust
/// use strait::constraint::{Constraint, HaveSize};
///
/// assert!(HaveSize::new(3).check(&vec![1, 2, 3]));
/// assert!(!HaveSize::new(3).check(&vec![1, 2]));
///
/// let small = HaveSize::matching(|n| n < 4);
/// assert!(small.check(&[1, 2, 3][..]));
/// ```
#[derive(Debug, Clone)]
pub struct HaveSize {
    rule: SizeRule,
}

impl HaveSize {
    /// Exactly `size` elements.
    pub fn new(size: usize) -> Self {
        Self {
            rule: SizeRule::Exactly(size),
        }
    }

    /// A size accepted by `predicate`.
    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(usize) -> bool + Send + Sync + 'static,
    {
        Self {
            rule: SizeRule::matching(predicate),
        }
    }
}

impl<C: Collection + ?Sized> Constraint<C> for HaveSize {
    #[inline]
    fn check(&self, value: &C) -> bool {
        self.rule.accepts(value.size())
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Collection
    }
}

/// The collection contains an element equal to the given one.
#[derive(Debug, Clone, PartialEq)]
pub struct HaveElement<T> {
    element: T,
}

impl<T> HaveElement<T> {
    /// Require `element` to be present.
    pub fn new(element: T) -> Self {
        Self { element }
    }
}

impl<C, T> Constraint<C> for HaveElement<T>
where
    C: Collection<Item = T> + ?Sized,
    T: PartialEq + Send + Sync,
{
    fn check(&self, value: &C) -> bool {
        value.elements().any(|e| *e == self.element)
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Collection
    }
}

fn is_monotonic<'a, T, I>(mut items: I, holds: impl Fn(&T, &T) -> bool) -> bool
where
    T: 'a,
    I: Iterator<Item = &'a T>,
{
    let Some(mut previous) = items.next() else {
        return true;
    };
    for current in items {
        if !holds(previous, current) {
            return false;
        }
        previous = current;
    }
    true
}

/// Every element is greater than or equal to the one before it.
///
/// With [`strict`](MonotonicallyIncreasing::strict) every element must be
/// strictly greater. Empty and single-element collections always pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonotonicallyIncreasing {
    strict: bool,
}

impl MonotonicallyIncreasing {
    /// Non-strict: equal neighbours are allowed.
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Strict: equal neighbours fail.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Whether equal neighbours fail.
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl<C, T> Constraint<C> for MonotonicallyIncreasing
where
    C: Collection<Item = T> + ?Sized,
    T: PartialOrd,
{
    fn check(&self, value: &C) -> bool {
        if self.strict {
            is_monotonic(value.elements(), |a: &T, b: &T| a < b)
        } else {
            is_monotonic(value.elements(), |a: &T, b: &T| a <= b)
        }
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Collection
    }
}

/// Every element is less than or equal to the one before it.
///
/// With [`strict`](MonotonicallyDecreasing::strict) every element must be
/// strictly smaller. Empty and single-element collections always pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonotonicallyDecreasing {
    strict: bool,
}

impl MonotonicallyDecreasing {
    /// Non-strict: equal neighbours are allowed.
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Strict: equal neighbours fail.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Whether equal neighbours fail.
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl<C, T> Constraint<C> for MonotonicallyDecreasing
where
    C: Collection<Item = T> + ?Sized,
    T: PartialOrd,
{
    fn check(&self, value: &C) -> bool {
        if self.strict {
            is_monotonic(value.elements(), |a: &T, b: &T| a > b)
        } else {
            is_monotonic(value.elements(), |a: &T, b: &T| a >= b)
        }
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_be_empty_collections() {
        assert!(BeEmpty.check(&Vec::<i32>::new()));
        assert!(!BeEmpty.check(&vec![1]));
        assert!(BeEmpty.check(&BTreeSet::<u8>::new()));
        assert!(!BeEmpty.check(&[1, 2][..]));
        assert_eq!(Constraint::<Vec<i32>>::kind(&BeEmpty), ErrorKind::Collection);
    }

    #[test]
    fn test_have_size() {
        assert!(HaveSize::new(3).check(&vec![1, 2, 3]));
        assert!(!HaveSize::new(3).check(&vec![1, 2]));
        assert!(HaveSize::new(0).check(&VecDeque::<i32>::new()));

        let at_most_two = HaveSize::matching(|n| n <= 2);
        assert!(at_most_two.check(&[1, 2]));
        assert!(!at_most_two.check(&[1, 2, 3]));
    }

    #[test]
    fn test_have_element() {
        let set: HashSet<&str> = ["a", "b"].into_iter().collect();
        assert!(HaveElement::new("a").check(&set));
        assert!(!HaveElement::new("z").check(&set));
        assert!(!HaveElement::new(1).check(&Vec::<i32>::new()));
    }

    #[test]
    fn test_monotonically_increasing() {
        let non_strict = MonotonicallyIncreasing::new();
        let strict = MonotonicallyIncreasing::strict();

        assert!(non_strict.check(&vec![1, 2, 2, 3]));
        assert!(!strict.check(&vec![1, 2, 2, 3]));
        assert!(strict.check(&vec![1, 2, 3]));
        assert!(!non_strict.check(&vec![2, 1]));
    }

    #[test]
    fn test_monotonically_decreasing() {
        let non_strict = MonotonicallyDecreasing::new();
        let strict = MonotonicallyDecreasing::strict();

        assert!(non_strict.check(&vec![3, 3, 1]));
        assert!(!strict.check(&vec![3, 3, 1]));
        assert!(strict.check(&vec![3.5, 2.0, -1.0]));
        assert!(!non_strict.check(&vec![1, 2]));
    }

    #[test]
    fn test_monotonic_trivial_inputs() {
        let empty: Vec<i32> = Vec::new();
        assert!(MonotonicallyIncreasing::strict().check(&empty));
        assert!(MonotonicallyDecreasing::strict().check(&empty));
        assert!(MonotonicallyIncreasing::strict().check(&vec![7]));
        assert!(MonotonicallyDecreasing::strict().check(&vec![7]));
    }

    #[test]
    fn test_monotonic_incomparable_neighbours_fail() {
        assert!(!MonotonicallyIncreasing::new().check(&vec![1.0, f64::NAN, 2.0]));
    }
}
