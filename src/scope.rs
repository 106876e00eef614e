//! Validation sessions and clauses
//!
//! A [`Scope`] owns the ordered outcome list of one validation pass. Checks are
//! grouped into clauses: [`Scope::clause`] binds a message to a body, and every
//! evaluation inside the body ([`Clause::must`], [`Clause::must_not`],
//! [`Clause::constraint`]) appends exactly one [`Outcome`].
//!
//! Violations are recorded, not returned, so one pass reports every broken
//! rule. With [`Config::short_circuit`] on, the first violation is returned as
//! `Err` instead and `?` aborts the rest of the pass. The session remembers that
//! violation, so every later evaluation returns it again without checking or
//! recording anything, even when the builder discarded the first `Err`.
//!
//! # Example
//!
//! ```rust
//! use strait::constraint::{AtLeast, Positive};
//! use strait::Scope;
//!
//! let value = -3;
//! let mut scope = Scope::new();
//! scope
//!     .clause("must be positive", |c| c.must(&value, Positive))
//!     .unwrap();
//! scope
//!     .clause("must be at least 0", |c| c.must(&value, AtLeast::new(0)))
//!     .unwrap();
//!
//! let messages: Vec<_> = scope.failures().iter().map(|e| e.message()).collect();
//! assert_eq!(messages, ["must be positive", "must be at least 0"]);
//! assert!(scope.finish().is_err());
//! ```

use std::fmt::{self, Debug};

use crate::config::Config;
use crate::constraint::Constraint;
use crate::error::{CompositeError, ConstraintError};

/// The result of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The evaluation passed.
    Success {
        /// `Debug` rendering of the checked value, `()` for free-form
        /// predicates.
        ///
        /// This is for display and logs only. Its format follows whatever the
        /// value's `Debug` impl prints and is not stable, so do not parse it.
        subject: String,
    },
    /// The evaluation failed with this error.
    Failure(ConstraintError),
}

impl Outcome {
    /// `true` for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// `true` for [`Outcome::Failure`].
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The error of a failed evaluation.
    pub fn error(&self) -> Option<&ConstraintError> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure(error) => Some(error),
        }
    }
}

/// One validation pass.
///
/// Outcomes are only ever appended; nothing removes or reorders them.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    config: Config,
    results: Vec<Outcome>,
    // first violation under short-circuit; set once
    aborted: Option<ConstraintError>,
}

impl Scope {
    /// An empty session with the default [`Config`].
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty session evaluating under `config`.
    ///
    /// Only [`Config::is_short_circuit`] affects a session; skipping is
    /// decided by the entry points before a session exists.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            results: Vec::new(),
            aborted: None,
        }
    }

    /// The configuration this session evaluates under.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Every outcome recorded so far, in evaluation order.
    pub fn results(&self) -> &[Outcome] {
        &self.results
    }

    /// The errors among [`results`](Scope::results), in evaluation order.
    pub fn failures(&self) -> Vec<&ConstraintError> {
        self.results.iter().filter_map(Outcome::error).collect()
    }

    /// The violation that stopped a short-circuited session, if any.
    pub fn aborted(&self) -> Option<&ConstraintError> {
        self.aborted.as_ref()
    }

    /// `true` when no evaluation has failed.
    pub fn is_satisfied(&self) -> bool {
        self.aborted.is_none() && self.results.iter().all(Outcome::is_success)
    }

    /// Run `body` as a clause described by `message`.
    ///
    /// Failures built inside the clause carry `message` verbatim.
    ///
    /// # Errors
    ///
    /// Whatever `body` returns; under short-circuit that is the first
    /// violation it hit.
    pub fn clause<F>(&mut self, message: impl Into<String>, body: F) -> Result<(), ConstraintError>
    where
        F: FnOnce(&mut Clause<'_>) -> Result<(), ConstraintError>,
    {
        let mut clause = Clause {
            scope: self,
            message: message.into(),
            generator: None,
        };
        body(&mut clause)
    }

    /// Like [`clause`](Scope::clause), but failures are built by `generator`
    /// from the message instead of by the constraint.
    ///
    /// ```rust
    /// use strait::constraint::HaveSize;
    /// use strait::error::{ConstraintError, ErrorKind};
    /// use strait::Scope;
    ///
    /// let mut scope = Scope::new();
    /// scope
    ///     .clause_with(
    ///         "need a pair",
    ///         |msg| ConstraintError::new(ErrorKind::Pair, format!("input: {msg}")),
    ///         |c| c.must(&vec![1], HaveSize::new(2)),
    ///     )
    ///     .unwrap();
    ///
    /// let failure = scope.failures()[0];
    /// assert_eq!(failure.kind(), ErrorKind::Pair);
    /// assert_eq!(failure.message(), "input: need a pair");
    /// ```
    ///
    /// # Errors
    ///
    /// Whatever `body` returns.
    pub fn clause_with<G, F>(
        &mut self,
        message: impl Into<String>,
        generator: G,
        body: F,
    ) -> Result<(), ConstraintError>
    where
        G: Fn(&str) -> ConstraintError,
        F: FnOnce(&mut Clause<'_>) -> Result<(), ConstraintError>,
    {
        let mut clause = Clause {
            scope: self,
            message: message.into(),
            generator: Some(&generator),
        };
        body(&mut clause)
    }

    /// Close the session.
    ///
    /// # Errors
    ///
    /// A [`CompositeError`] holding every failure, in evaluation order,
    /// followed by the violation that aborted the session.
    pub fn finish(self) -> Result<(), CompositeError> {
        let failures: Vec<ConstraintError> = self
            .results
            .into_iter()
            .filter_map(|outcome| match outcome {
                Outcome::Failure(error) => Some(error),
                Outcome::Success { .. } => None,
            })
            .chain(self.aborted)
            .collect();

        match CompositeError::new(failures) {
            Ok(composite) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(failures = composite.len(), "validation finished with violations");

                Err(composite)
            }
            // nothing failed
            Err(_) => Ok(()),
        }
    }

    fn record(&mut self, outcome: Outcome) {
        self.results.push(outcome);
    }
}

/// A message bound to the session it records into.
///
/// Obtained through [`Scope::clause`] or [`Scope::clause_with`].
pub struct Clause<'s> {
    scope: &'s mut Scope,
    message: String,
    generator: Option<&'s dyn Fn(&str) -> ConstraintError>,
}

impl Debug for Clause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clause")
            .field("message", &self.message)
            .field("custom_error", &self.generator.is_some())
            .finish_non_exhaustive()
    }
}

impl Clause<'_> {
    /// The clause message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Record whether `value` satisfies `constraint`.
    ///
    /// # Errors
    ///
    /// Only under short-circuit: the violation, unrecorded, or the one that
    /// already aborted the session.
    pub fn must<T, C>(&mut self, value: &T, constraint: C) -> Result<(), ConstraintError>
    where
        T: Debug + ?Sized,
        C: Constraint<T>,
    {
        self.ensure_running()?;
        if constraint.check(value) {
            self.pass(format!("{value:?}"));
            Ok(())
        } else {
            let error = self.error_for(&constraint);
            self.fail(error)
        }
    }

    /// Record whether `value` violates `constraint`.
    ///
    /// # Errors
    ///
    /// Only under short-circuit: the violation, unrecorded, or the one that
    /// already aborted the session.
    pub fn must_not<T, C>(&mut self, value: &T, constraint: C) -> Result<(), ConstraintError>
    where
        T: Debug + ?Sized,
        C: Constraint<T>,
    {
        self.ensure_running()?;
        if constraint.check(value) {
            let error = self.error_for(&constraint);
            self.fail(error)
        } else {
            self.pass(format!("{value:?}"));
            Ok(())
        }
    }

    /// Record a free-form predicate.
    ///
    /// A failure is a [`ErrorKind::Generic`](crate::error::ErrorKind::Generic)
    /// error, or the custom error when the clause has a generator.
    ///
    /// # Errors
    ///
    /// Only under short-circuit: the violation, unrecorded, or the one that
    /// already aborted the session.
    pub fn constraint<P>(&mut self, predicate: P) -> Result<(), ConstraintError>
    where
        P: FnOnce() -> bool,
    {
        self.ensure_running()?;
        if predicate() {
            self.pass(String::from("()"));
            Ok(())
        } else {
            let error = match self.generator {
                Some(generate) => generate(&self.message),
                None => ConstraintError::generic(self.message.as_str()),
            };
            self.fail(error)
        }
    }

    fn ensure_running(&self) -> Result<(), ConstraintError> {
        match &self.scope.aborted {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn error_for<T: ?Sized, C: Constraint<T>>(&self, constraint: &C) -> ConstraintError {
        match self.generator {
            Some(generate) => generate(&self.message),
            None => constraint.generate_error(&self.message),
        }
    }

    fn pass(&mut self, subject: String) {
        #[cfg(feature = "tracing")]
        tracing::trace!(clause = %self.message, subject = %subject, "constraint satisfied");

        self.scope.record(Outcome::Success { subject });
    }

    fn fail(&mut self, error: ConstraintError) -> Result<(), ConstraintError> {
        if self.scope.config.is_short_circuit() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                clause = %error.message(),
                kind = %error.kind(),
                "short-circuiting on violation"
            );

            self.scope.aborted = Some(error.clone());
            return Err(error);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(clause = %error.message(), kind = %error.kind(), "constraint violated");

        self.scope.record(Outcome::Failure(error));
        Ok(())
    }
}
