//! Constraints: named, reusable predicates with a domain-typed failure
//!
//! A [`Constraint<T>`] answers one question about a value of type `T` and knows
//! which [`ErrorKind`] to report when the answer is "no". Constraints are plain
//! values: build them where they are used, they hold only immutable
//! parameters.
//!
//! Shapes are grouped by value domain:
//!
//! - [`comparable`]: [`AtLeast`], [`AtMost`], [`InRange`], [`EqualTo`],
//!   [`Positive`], [`Negative`]
//! - [`float`]: [`BeFinite`], [`BeInfinite`], [`BeNaN`], [`EqualWithin`]
//! - [`collection`]: [`BeEmpty`], [`HaveSize`], [`HaveElement`],
//!   [`MonotonicallyIncreasing`], [`MonotonicallyDecreasing`]
//! - [`string`]: [`BeEmpty`], [`BeAlphanumeric`], [`HaveLength`],
//!   [`Contain`], [`Match`]
//! - [`pair`]: [`BothFinite`], [`StrictlyOrdered`]
//! - [`option`]: [`BeNone`]
//!
//! # Example
//!
//! ```rust
//! use strait::constraint::*;
//! use strait::error::ErrorKind;
//!
//! assert!(AtLeast::new(5).check(&5));
//! assert!(!AtLeast::new(5).check(&4));
//!
//! let in_range = InRange::new(1, 10).unwrap();
//! assert!(in_range.check(&10));
//! assert!(!in_range.check(&11));
//!
//! assert!(HaveSize::new(3).check(&vec![1, 2, 3]));
//! assert_eq!(Constraint::<Vec<i32>>::kind(&HaveSize::new(3)), ErrorKind::Collection);
//! ```
//!
//! Constraints compose with [`ConstraintExt`]:
//!
//! ```rust
//! use strait::constraint::*;
//!
//! let small_positive = Positive.and(AtMost::new(10));
//! assert!(small_positive.check(&3));
//! assert!(!small_positive.check(&11));
//! assert!(!small_positive.check(&0));
//! ```

mod combinators;
pub mod collection;
pub mod comparable;
pub mod float;
pub mod option;
pub mod pair;
pub mod string;

use std::fmt;
use std::sync::Arc;

use crate::error::{ConstraintError, ErrorKind};

pub use collection::{
    BeEmpty, Collection, HaveElement, HaveSize, MonotonicallyDecreasing, MonotonicallyIncreasing,
};
pub use combinators::{And, ConstraintExt, Not, Or};
pub use comparable::{AtLeast, AtMost, EqualTo, InRange, Negative, Positive};
pub use float::{BeFinite, BeInfinite, BeNaN, EqualWithin, DEFAULT_TOLERANCE};
pub use option::BeNone;
pub use pair::{BothFinite, StrictlyOrdered};
pub use string::{BeAlphanumeric, Contain, HaveLength, Match};

/// A predicate over `T` paired with the error it reports on failure.
///
/// `check` must be pure: same input and parameters, same answer, no side
/// effects. The default [`generate_error`](Constraint::generate_error) tags the
/// clause message with [`kind`](Constraint::kind); override either to customize.
///
/// Closures `Fn(&T) -> bool` are constraints of [`ErrorKind::Generic`].
///
/// # Example
///
/// ```rust
/// use strait::constraint::Constraint;
/// use strait::error::ErrorKind;
///
/// struct Even;
///
/// impl Constraint<i64> for Even {
///     fn check(&self, value: &i64) -> bool {
///         value % 2 == 0
///     }
///
///     fn kind(&self) -> ErrorKind {
///         ErrorKind::Numeric
///     }
/// }
///
/// assert!(Even.check(&4));
/// assert_eq!(Even.generate_error("must be even").kind(), ErrorKind::Numeric);
/// ```
pub trait Constraint<T: ?Sized>: Send + Sync {
    /// `true` when `value` satisfies the constraint.
    fn check(&self, value: &T) -> bool;

    /// The value domain reported on failure.
    fn kind(&self) -> ErrorKind {
        ErrorKind::Generic
    }

    /// Build the error reported when a clause using this constraint fails.
    fn generate_error(&self, description: &str) -> ConstraintError {
        ConstraintError::new(self.kind(), description)
    }
}

impl<T: ?Sized, F> Constraint<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Maps a value type to the [`ErrorKind`] its generic constraints report.
///
/// Implemented for the primitive numbers, strings, sequences and pairs.
/// Implement it for your own types to use them with the comparable shapes.
///
/// ```rust
/// use strait::constraint::{AtLeast, Constraint, Domain};
/// use strait::error::ErrorKind;
///
/// #[derive(PartialEq, PartialOrd)]
/// struct Version(u32, u32);
///
/// impl Domain for Version {
///     const KIND: ErrorKind = ErrorKind::Generic;
/// }
///
/// assert!(AtLeast::new(Version(1, 2)).check(&Version(1, 10)));
/// ```
pub trait Domain {
    /// Kind reported by constraints over this type.
    const KIND: ErrorKind;
}

macro_rules! impl_domain {
    ($kind:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Domain for $ty {
                const KIND: ErrorKind = $kind;
            }
        )+
    };
}

impl_domain!(ErrorKind::Numeric => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
impl_domain!(ErrorKind::String => String, str);
impl_domain!(ErrorKind::Generic => bool, char);

impl<T> Domain for Vec<T> {
    const KIND: ErrorKind = ErrorKind::Collection;
}

impl<T> Domain for [T] {
    const KIND: ErrorKind = ErrorKind::Collection;
}

impl<A, B> Domain for (A, B) {
    const KIND: ErrorKind = ErrorKind::Pair;
}

impl<T: Domain + ?Sized> Domain for &T {
    const KIND: ErrorKind = T::KIND;
}

/// Size requirement shared by [`HaveSize`] and [`HaveLength`].
#[derive(Clone)]
pub(crate) enum SizeRule {
    Exactly(usize),
    Matching(Arc<dyn Fn(usize) -> bool + Send + Sync>),
}

impl SizeRule {
    pub(crate) fn matching<F>(predicate: F) -> Self
    where
        F: Fn(usize) -> bool + Send + Sync + 'static,
    {
        SizeRule::Matching(Arc::new(predicate))
    }

    #[inline]
    pub(crate) fn accepts(&self, size: usize) -> bool {
        match self {
            SizeRule::Exactly(expected) => size == *expected,
            SizeRule::Matching(predicate) => predicate(size),
        }
    }
}

impl fmt::Debug for SizeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeRule::Exactly(expected) => f.debug_tuple("Exactly").field(expected).finish(),
            SizeRule::Matching(_) => f.write_str("Matching(..)"),
        }
    }
}
