//! Associative combination of failures
//!
//! Failures from independent validation passes are merged with
//! [`Semigroup::combine`]. [`Validation`](crate::Validation) relies on it to
//! accumulate errors when several results are joined.
//!
//! ```
//! use strait::Semigroup;
//! use strait::error::{CompositeError, ConstraintError};
//!
//! let name = CompositeError::from(ConstraintError::generic("name must not be empty"));
//! let age = CompositeError::from(ConstraintError::generic("age must be positive"));
//!
//! let both = name.combine(age);
//! assert_eq!(both.len(), 2);
//! ```

/// A type with an associative binary operation.
///
/// Implementations must satisfy
/// `a.combine(b).combine(c) == a.combine(b.combine(c))`.
pub trait Semigroup: Sized {
    /// Combine `self` with `other`, `self` first.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CompositeError, ConstraintError, ErrorKind};

    #[test]
    fn test_vec_combine() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
        assert_eq!(Vec::<i32>::new().combine(vec![1]), vec![1]);
    }

    #[test]
    fn test_string_combine() {
        assert_eq!("must ".to_string().combine("hold".to_string()), "must hold");
    }

    #[test]
    fn test_composite_associativity() {
        let a = CompositeError::from(ConstraintError::generic("a"));
        let b = CompositeError::from(ConstraintError::new(ErrorKind::Numeric, "b"));
        let c = CompositeError::from(ConstraintError::new(ErrorKind::Pair, "c"));

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }
}
