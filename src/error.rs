//! Error taxonomy for constraint checking
//!
//! Three families of errors exist and they never mix:
//!
//! - [`ArgumentError`]: a constraint (or composite) was built with inconsistent
//!   parameters. Raised at construction, independent of any validation pass.
//! - [`ConstraintError`]: a single violated clause, tagged with the
//!   [`ErrorKind`] of the value domain that produced it.
//! - [`CompositeError`] / [`ValidationError`]: what an entry point hands back
//!   when one or more clauses failed.
//!
//! # Example
//!
//! ```
//! use strait::error::{CompositeError, ConstraintError, ErrorKind};
//!
//! let err = CompositeError::new(vec![
//!     ConstraintError::new(ErrorKind::Numeric, "must be positive"),
//!     ConstraintError::generic("must be even"),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     err.to_string(),
//!     "Multiple exceptions occurred -- { [NumericConstraintError] must be positive }, \
//!      { [ConstraintError] must be even }"
//! );
//! ```

use std::fmt;

use crate::nonempty::NonEmptyVec;
use crate::semigroup::Semigroup;

/// The value domain a [`ConstraintError`] originates from.
///
/// Callers match on the kind where a class hierarchy would use subtype checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// Free-form predicates and constraints without a specific domain.
    #[default]
    Generic,
    /// Collections: vectors, slices, sets.
    Collection,
    /// Strings and string slices.
    String,
    /// Integers and floating point numbers.
    Numeric,
    /// Two-element tuples.
    Pair,
}

impl ErrorKind {
    /// Name used when rendering errors, e.g. `NumericConstraintError`.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Generic => "ConstraintError",
            ErrorKind::Collection => "CollectionConstraintError",
            ErrorKind::String => "StringConstraintError",
            ErrorKind::Numeric => "NumericConstraintError",
            ErrorKind::Pair => "PairConstraintError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single violated clause.
///
/// The message is the literal text given at the clause site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct ConstraintError {
    kind: ErrorKind,
    message: String,
}

impl ConstraintError {
    /// Create an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an error of [`ErrorKind::Generic`].
    ///
    /// ```
    /// use strait::error::{ConstraintError, ErrorKind};
    ///
    /// let err = ConstraintError::generic("must hold");
    /// assert_eq!(err.kind(), ErrorKind::Generic);
    /// assert_eq!(err.message(), "must hold");
    /// ```
    pub fn generic(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Generic, message)
    }

    /// The value domain this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The clause message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// `[Kind] message`, the fragment used inside composite messages.
    pub fn tagged(&self) -> String {
        format!("[{}] {}", self.kind, self.message)
    }
}

/// Construction-time errors.
///
/// These signal a mistake in how a constraint was set up, not a violated rule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgumentError {
    /// A tolerance was negative or NaN.
    #[error("the tolerance must be non-negative, got {0}")]
    InvalidTolerance(f64),
    /// Range bounds are inverted or cannot be compared.
    #[error("range lower bound {lower} must not exceed upper bound {upper}")]
    InvalidRange {
        /// Debug rendering of the lower bound.
        lower: String,
        /// Debug rendering of the upper bound.
        upper: String,
    },
    /// A regular expression failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// A composite error was requested with nothing to aggregate.
    #[error("the list of failures cannot be empty")]
    EmptyComposite,
}

/// Every failure recorded during one validation pass, in evaluation order.
///
/// A `CompositeError` is never empty. It stores its failures in a
/// [`NonEmptyVec`], so [`CompositeError::new`] rejects an empty list and the
/// other conversions cannot receive one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{}", render(.failures.as_slice()))]
pub struct CompositeError {
    failures: NonEmptyVec<ConstraintError>,
}

fn render(failures: &[ConstraintError]) -> String {
    match failures {
        [single] => format!("An exception occurred -- {}", single.tagged()),
        many => {
            let entries = many
                .iter()
                .map(|e| format!("{{ {} }}", e.tagged()))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Multiple exceptions occurred -- {entries}")
        }
    }
}

impl CompositeError {
    /// Aggregate a list of failures.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::EmptyComposite`] when `failures` is empty.
    ///
    /// ```
    /// use strait::error::{ArgumentError, CompositeError};
    ///
    /// assert_eq!(CompositeError::new(vec![]), Err(ArgumentError::EmptyComposite));
    /// ```
    pub fn new(failures: Vec<ConstraintError>) -> Result<Self, ArgumentError> {
        NonEmptyVec::from_vec(failures)
            .map(Self::from)
            .ok_or(ArgumentError::EmptyComposite)
    }

    /// The aggregated failures in evaluation order.
    pub fn failures(&self) -> &[ConstraintError] {
        self.failures.as_slice()
    }

    /// Number of aggregated failures. Always at least one.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Consume into the underlying failures.
    pub fn into_failures(self) -> NonEmptyVec<ConstraintError> {
        self.failures
    }
}

impl From<NonEmptyVec<ConstraintError>> for CompositeError {
    fn from(failures: NonEmptyVec<ConstraintError>) -> Self {
        Self { failures }
    }
}

impl From<ConstraintError> for CompositeError {
    fn from(failure: ConstraintError) -> Self {
        Self {
            failures: NonEmptyVec::singleton(failure),
        }
    }
}

impl Semigroup for CompositeError {
    fn combine(self, other: Self) -> Self {
        Self {
            failures: self.failures.combine(other.failures),
        }
    }
}

/// What an entry point returns when validation does not pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Every recorded violation of the pass.
    #[error(transparent)]
    Violations(#[from] CompositeError),
    /// The first violation, returned as soon as it happened because
    /// short-circuit mode was on.
    #[error(transparent)]
    ShortCircuited(ConstraintError),
}

impl ValidationError {
    /// The violations carried by this error, in evaluation order.
    pub fn failures(&self) -> &[ConstraintError] {
        match self {
            ValidationError::Violations(composite) => composite.failures(),
            ValidationError::ShortCircuited(error) => std::slice::from_ref(error),
        }
    }

    /// Flatten into a [`CompositeError`].
    pub fn into_composite(self) -> CompositeError {
        match self {
            ValidationError::Violations(composite) => composite,
            ValidationError::ShortCircuited(error) => CompositeError::from(error),
        }
    }
}

// Combining two failed passes keeps every violation of both.
impl Semigroup for ValidationError {
    fn combine(self, other: Self) -> Self {
        ValidationError::Violations(self.into_composite().combine(other.into_composite()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(msg: &str) -> ConstraintError {
        ConstraintError::new(ErrorKind::Numeric, msg)
    }

    #[test]
    fn test_single_failure_message() {
        let err = CompositeError::new(vec![numeric("must be positive")]).unwrap();
        assert_eq!(
            err.to_string(),
            "An exception occurred -- [NumericConstraintError] must be positive"
        );
    }

    #[test]
    fn test_multiple_failures_message_keeps_order() {
        let err = CompositeError::new(vec![
            numeric("first"),
            ConstraintError::new(ErrorKind::Collection, "second"),
            ConstraintError::generic("third"),
        ])
        .unwrap();

        assert_eq!(
            err.to_string(),
            "Multiple exceptions occurred -- { [NumericConstraintError] first }, \
             { [CollectionConstraintError] second }, { [ConstraintError] third }"
        );
    }

    #[test]
    fn test_empty_composite_is_rejected() {
        assert_eq!(CompositeError::new(Vec::new()), Err(ArgumentError::EmptyComposite));
    }

    #[test]
    fn test_failures_round_trip() {
        let failures = vec![numeric("a"), ConstraintError::generic("b")];
        let err = CompositeError::new(failures.clone()).unwrap();
        assert_eq!(err.failures(), failures.as_slice());
        assert_eq!(err.len(), 2);
        assert_eq!(err.into_failures().into_vec(), failures);
    }

    #[test]
    fn test_from_nonempty() {
        let err = CompositeError::from(NonEmptyVec::new(numeric("a"), vec![numeric("b")]));
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn test_into_failures_keeps_head_and_order() {
        let err = CompositeError::from(numeric("first"))
            .combine(CompositeError::new(vec![numeric("second"), numeric("third")]).unwrap());

        let failures = err.into_failures();
        assert_eq!(failures.head().message(), "first");
        assert_eq!(failures.last().message(), "third");
        assert_eq!(failures.len(), 3);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::Generic.to_string(), "ConstraintError");
        assert_eq!(ErrorKind::String.to_string(), "StringConstraintError");
        assert_eq!(ErrorKind::Pair.to_string(), "PairConstraintError");
        assert_eq!(ErrorKind::default(), ErrorKind::Generic);
    }

    #[test]
    fn test_constraint_error_displays_message_only() {
        let err = ConstraintError::new(ErrorKind::String, "must not be empty");
        assert_eq!(err.to_string(), "must not be empty");
        assert_eq!(err.tagged(), "[StringConstraintError] must not be empty");
    }

    #[test]
    fn test_composite_combine_concatenates() {
        let left = CompositeError::from(numeric("a"));
        let right = CompositeError::new(vec![numeric("b"), numeric("c")]).unwrap();
        let combined = left.combine(right);
        let messages: Vec<_> = combined.failures().iter().map(|e| e.message()).collect();
        assert_eq!(messages, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_validation_error_combine_flattens_short_circuit() {
        let left = ValidationError::ShortCircuited(numeric("a"));
        let right = ValidationError::from(CompositeError::from(numeric("b")));
        let combined = left.combine(right);
        assert!(matches!(combined, ValidationError::Violations(_)));
        assert_eq!(combined.failures().len(), 2);
    }

    #[test]
    fn test_argument_error_messages() {
        assert_eq!(
            ArgumentError::InvalidTolerance(-1.0).to_string(),
            "the tolerance must be non-negative, got -1"
        );
        let err = ArgumentError::InvalidRange {
            lower: "10".into(),
            upper: "1".into(),
        };
        assert_eq!(err.to_string(), "range lower bound 10 must not exceed upper bound 1");
    }
}
