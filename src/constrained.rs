//! Entry points
//!
//! [`constrained`] runs a builder over a fresh [`Scope`] and turns the
//! recorded failures into one [`ValidationError`]. [`constrained_to`] does the
//! same for a value and hands the value back when it passes.
//!
//! The free functions evaluate under [`Config::default`]. Use the methods of
//! the same name on [`Config`] to skip checks or to stop at the first
//! violation.
//!
//! ```rust
//! use strait::prelude::*;
//!
//! let err = constrained(|scope| {
//!     scope.clause("must be positive", |c| c.must(&-3, Positive))?;
//!     scope.clause("must be at least 0", |c| c.must(&-3, AtLeast::new(0)))
//! })
//! .unwrap_err();
//!
//! assert_eq!(err.failures().len(), 2);
//! assert_eq!(
//!     err.to_string(),
//!     "Multiple exceptions occurred -- { [NumericConstraintError] must be positive }, \
//!      { [NumericConstraintError] must be at least 0 }"
//! );
//! ```

use crate::config::Config;
use crate::error::{CompositeError, ConstraintError, ValidationError};
use crate::scope::Scope;
use crate::semigroup::Semigroup;

/// Run `builder` under the default [`Config`].
///
/// # Errors
///
/// [`ValidationError::Violations`] with every failure the builder recorded.
pub fn constrained<F>(builder: F) -> Result<(), ValidationError>
where
    F: FnOnce(&mut Scope) -> Result<(), ConstraintError>,
{
    Config::default().constrained(builder)
}

/// Validate `value` under the default [`Config`], returning it on success.
///
/// ```rust
/// use strait::prelude::*;
///
/// let port = constrained_to(8080_u16, |scope, port| {
///     scope.clause("port must be unprivileged", |c| c.must(port, AtLeast::new(1024)))
/// });
/// assert_eq!(port, Ok(8080));
/// ```
///
/// # Errors
///
/// [`ValidationError::Violations`] with every failure the builder recorded.
pub fn constrained_to<T, F>(value: T, builder: F) -> Result<T, ValidationError>
where
    F: FnOnce(&mut Scope, &T) -> Result<(), ConstraintError>,
{
    Config::default().constrained_to(value, builder)
}

impl Config {
    /// Run `builder` under this configuration.
    ///
    /// With [`skip_checks`](Config::skip_checks) on, returns `Ok(())` without
    /// calling `builder`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::ShortCircuited`] with the first violation, when
    ///   [`short_circuit`](Config::short_circuit) is on.
    /// - [`ValidationError::Violations`] otherwise. An `Err` returned by the
    ///   builder itself is reported after the failures recorded before it.
    pub fn constrained<F>(self, builder: F) -> Result<(), ValidationError>
    where
        F: FnOnce(&mut Scope) -> Result<(), ConstraintError>,
    {
        if self.is_skip_checks() {
            #[cfg(feature = "tracing")]
            tracing::debug!("constraint checks skipped");

            return Ok(());
        }

        let mut scope = Scope::with_config(self);
        let raised = builder(&mut scope).err();
        conclude(scope, raised)
    }

    /// Validate `value` under this configuration, returning it on success.
    ///
    /// ```rust
    /// use strait::prelude::*;
    ///
    /// let config = Config::new().short_circuit(true);
    /// let err = config
    ///     .constrained_to(vec![3, 1], |scope, v| {
    ///         scope.clause("must be sorted", |c| c.must(v, MonotonicallyIncreasing::new()))?;
    ///         scope.clause("never reached", |c| c.constraint(|| false))
    ///     })
    ///     .unwrap_err();
    ///
    /// assert!(matches!(err, ValidationError::ShortCircuited(_)));
    /// assert_eq!(err.failures()[0].message(), "must be sorted");
    /// ```
    ///
    /// # Errors
    ///
    /// As [`Config::constrained`].
    pub fn constrained_to<T, F>(self, value: T, builder: F) -> Result<T, ValidationError>
    where
        F: FnOnce(&mut Scope, &T) -> Result<(), ConstraintError>,
    {
        self.constrained(|scope| builder(scope, &value))?;
        Ok(value)
    }
}

fn conclude(scope: Scope, raised: Option<ConstraintError>) -> Result<(), ValidationError> {
    // the session's own record wins over whatever the builder returned
    if let Some(first) = scope.aborted() {
        return Err(ValidationError::ShortCircuited(first.clone()));
    }

    let short_circuit = scope.config().is_short_circuit();
    match (scope.finish(), raised) {
        (Ok(()), None) => Ok(()),
        (Err(recorded), None) => Err(ValidationError::Violations(recorded)),
        (_, Some(error)) if short_circuit => Err(ValidationError::ShortCircuited(error)),
        (Ok(()), Some(error)) => Err(ValidationError::Violations(CompositeError::from(error))),
        (Err(recorded), Some(error)) => Err(ValidationError::Violations(
            recorded.combine(CompositeError::from(error)),
        )),
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_skip_is_logged() {
        let _ = Config::new().skip_checks(true).constrained(|_| Ok(()));
        assert!(logs_contain("constraint checks skipped"));
    }
}
