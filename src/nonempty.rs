//! Non-empty vector
//!
//! [`NonEmptyVec<T>`] holds at least one element by construction. The crate
//! uses it wherever "one or more failures" is an invariant rather than a
//! runtime check, most notably as the source of a
//! [`CompositeError`](crate::error::CompositeError).
//!
//! ```
//! use strait::NonEmptyVec;
//! use strait::error::{CompositeError, ConstraintError};
//!
//! let failures = NonEmptyVec::new(
//!     ConstraintError::generic("must be positive"),
//!     vec![ConstraintError::generic("must be even")],
//! );
//! let composite = CompositeError::from(failures);
//! assert_eq!(composite.len(), 2);
//! ```

use crate::Semigroup;

/// A vector guaranteed to contain at least one element.
///
/// Elements are stored contiguously, so the whole vector is available as a
/// slice through [`as_slice`](NonEmptyVec::as_slice).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct NonEmptyVec<T> {
    // never empty
    items: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create from a first element and the rest.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        let mut items = Vec::with_capacity(1 + tail.len());
        items.push(head);
        items.extend(tail);
        Self { items }
    }

    /// Create from a single element.
    ///
    /// ```
    /// use strait::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton("only");
    /// assert_eq!(nev.len(), 1);
    /// assert_eq!(nev.last(), &"only");
    /// ```
    pub fn singleton(value: T) -> Self {
        Self { items: vec![value] }
    }

    /// Try to create from a `Vec`, returning `None` when it is empty.
    ///
    /// ```
    /// use strait::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.items[0]
    }

    /// Every element after the first.
    pub fn tail(&self) -> &[T] {
        &self.items[1..]
    }

    /// The last element.
    pub fn last(&self) -> &T {
        &self.items[self.items.len() - 1]
    }

    /// Every element, in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Number of elements, never zero.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append an element.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Apply `f` to every element, preserving order.
    pub fn map<U, F>(self, f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyVec {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Iterate in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Convert into a plain `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.items.extend(other.items);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_keeps_order() {
        let nev = NonEmptyVec::from_vec(vec!["a", "b", "c"]).unwrap();
        assert_eq!(nev.head(), &"a");
        assert_eq!(nev.tail(), &["b", "c"]);
        assert_eq!(nev.last(), &"c");
        assert_eq!(nev.len(), 3);
    }

    #[test]
    fn test_as_slice_after_combine() {
        let mut nev = NonEmptyVec::singleton('a').combine(NonEmptyVec::new('b', vec!['c']));
        nev.push('d');
        assert_eq!(nev.as_slice(), &['a', 'b', 'c', 'd']);
        assert_eq!(nev.head(), &'a');
        assert_eq!(nev.tail(), &['b', 'c', 'd']);
    }

    #[test]
    fn test_from_empty_vec() {
        assert!(NonEmptyVec::from_vec(Vec::<u8>::new()).is_none());
    }

    #[test]
    fn test_push_and_iter() {
        let mut nev = NonEmptyVec::singleton(1);
        nev.push(2);
        nev.push(3);
        assert_eq!(nev.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(!nev.is_empty());
    }

    #[test]
    fn test_map_and_into_iter() {
        let nev = NonEmptyVec::new(1, vec![2]).map(|n| n * 10);
        assert_eq!(nev.into_iter().collect::<Vec<_>>(), vec![10, 20]);
    }

    #[test]
    fn test_combine_appends() {
        let combined = NonEmptyVec::new(1, vec![2]).combine(NonEmptyVec::singleton(3));
        assert_eq!(combined.into_vec(), vec![1, 2, 3]);
    }
}
