//! Evaluation modes
//!
//! A [`Config`] is a small `Copy` value handed to the entry points. There is
//! no process-wide mode: two callers validating at the same time cannot see
//! each other's settings.
//!
//! ```rust
//! use strait::Config;
//!
//! let config = Config::new().short_circuit(true);
//! assert!(config.is_short_circuit());
//! assert!(!config.is_skip_checks());
//! assert_eq!(Config::default(), Config::new());
//! ```

/// How a validation pass is evaluated.
///
/// Both modes are off by default: every clause runs and every violation is
/// aggregated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    skip_checks: bool,
    short_circuit: bool,
}

impl Config {
    /// Both modes off.
    pub const fn new() -> Self {
        Self {
            skip_checks: false,
            short_circuit: false,
        }
    }

    /// When on, entry points succeed immediately without running the builder.
    #[must_use]
    pub const fn skip_checks(mut self, enabled: bool) -> Self {
        self.skip_checks = enabled;
        self
    }

    /// When on, the first violation is returned at once instead of recorded.
    #[must_use]
    pub const fn short_circuit(mut self, enabled: bool) -> Self {
        self.short_circuit = enabled;
        self
    }

    /// Whether checks are skipped.
    pub const fn is_skip_checks(&self) -> bool {
        self.skip_checks
    }

    /// Whether the first violation aborts the pass.
    pub const fn is_short_circuit(&self) -> bool {
        self.short_circuit
    }
}
