//! # Strait
//!
//! Named, composable constraints checked over a value, with every violation of
//! a pass aggregated into one error.
//!
//! A validation pass is a builder run over a [`Scope`]. The builder groups
//! checks into clauses, each with a human-readable message. Violations are
//! recorded rather than raised, so the caller sees every broken rule at once.
//!
//! ## Quick Example
//!
//! ```rust
//! use strait::prelude::*;
//!
//! fn check_order(quantity: i32, items: &[&str]) -> Result<(), ValidationError> {
//!     constrained(|scope| {
//!         scope.clause("quantity must be positive", |c| c.must(&quantity, Positive))?;
//!         scope.clause("at most 10 items", |c| {
//!             c.must(items, HaveSize::matching(|n| n <= 10))
//!         })?;
//!         scope.clause("item names must not be empty", |c| {
//!             for item in items {
//!                 c.must_not(*item, BeEmpty)?;
//!             }
//!             Ok(())
//!         })
//!     })
//! }
//!
//! assert!(check_order(2, &["tea", "milk"]).is_ok());
//!
//! let err = check_order(0, &["tea", ""]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Multiple exceptions occurred -- \
//!      { [NumericConstraintError] quantity must be positive }, \
//!      { [StringConstraintError] item names must not be empty }"
//! );
//! ```
//!
//! ## Modes
//!
//! A [`Config`] selects how a pass runs. It is passed explicitly; nothing is
//! global.
//!
//! ```rust
//! use strait::prelude::*;
//!
//! let fast = Config::new().short_circuit(true);
//! let err = fast
//!     .constrained(|scope| {
//!         scope.clause("first", |c| c.constraint(|| false))?;
//!         scope.clause("second", |c| c.constraint(|| false))
//!     })
//!     .unwrap_err();
//! assert_eq!(err.failures().len(), 1);
//!
//! let off = Config::new().skip_checks(true);
//! assert!(off.constrained(|_| unreachable!()).is_ok());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod constrained;
pub mod constraint;
pub mod error;
pub mod nonempty;
pub mod scope;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use config::Config;
pub use constrained::{constrained, constrained_to};
pub use constraint::{Constraint, ConstraintExt};
pub use error::{ArgumentError, CompositeError, ConstraintError, ErrorKind, ValidationError};
pub use nonempty::NonEmptyVec;
pub use scope::{Clause, Outcome, Scope};
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::constrained::{constrained, constrained_to};
    pub use crate::constraint::{
        AtLeast, AtMost, BeAlphanumeric, BeEmpty, BeFinite, BeInfinite, BeNaN, BeNone, BothFinite,
        Constraint, ConstraintExt, Contain, EqualTo, EqualWithin, HaveElement, HaveLength,
        HaveSize, InRange, Match, MonotonicallyDecreasing, MonotonicallyIncreasing, Negative,
        Positive, StrictlyOrdered,
    };
    pub use crate::error::{CompositeError, ConstraintError, ErrorKind, ValidationError};
    pub use crate::scope::{Clause, Outcome, Scope};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
}
