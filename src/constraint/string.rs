//! String shapes
//!
//! Every shape here reports [`ErrorKind::String`] and accepts any
//! `T: AsRef<str>`, so `str`, `String` and `&str` all work. Lengths count
//! Unicode scalar values, not bytes. [`BeEmpty`] is shared with collections.

use regex::Regex;

use super::{BeEmpty, Constraint, SizeRule};
use crate::error::{ArgumentError, ErrorKind};

impl Constraint<str> for BeEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.is_empty()
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::String
    }
}

impl Constraint<String> for BeEmpty {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.is_empty()
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::String
    }
}

/// Every character is a letter or a digit.
///
/// The empty string passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeAlphanumeric;

impl<T: AsRef<str> + ?Sized> Constraint<T> for BeAlphanumeric {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.as_ref().chars().all(char::is_alphanumeric)
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::String
    }
}

/// The number of characters matches a rule.
///
/// ```rust
/// use strait::constraint::{Constraint, HaveLength};
///
/// assert!(HaveLength::new(4).check("café"));
/// assert!(HaveLength::matching(|n| n >= 2).check("ok"));
/// ```
#[derive(Debug, Clone)]
pub struct HaveLength {
    rule: SizeRule,
}

impl HaveLength {
    /// Exactly `length` characters.
    pub fn new(length: usize) -> Self {
        Self {
            rule: SizeRule::Exactly(length),
        }
    }

    /// A length accepted by `predicate`.
    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(usize) -> bool + Send + Sync + 'static,
    {
        Self {
            rule: SizeRule::matching(predicate),
        }
    }
}

impl<T: AsRef<str> + ?Sized> Constraint<T> for HaveLength {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.rule.accepts(value.as_ref().chars().count())
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::String
    }
}

/// Some substring matches the pattern.
#[derive(Debug, Clone)]
pub struct Contain {
    pattern: Regex,
}

impl Contain {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::InvalidPattern`] when the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, ArgumentError> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    /// Use an already compiled expression.
    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// The expression searched for.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl<T: AsRef<str> + ?Sized> Constraint<T> for Contain {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.pattern.is_match(value.as_ref())
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::String
    }
}

/// The whole string matches the pattern.
///
/// Unlike [`Contain`], a match of only part of the input fails:
///
/// ```rust
/// use strait::constraint::{Constraint, Contain, Match};
///
/// let digits = Match::new(r"\d+").unwrap();
/// assert!(digits.check("2024"));
/// assert!(!digits.check("v2024"));
///
/// assert!(Contain::new(r"\d+").unwrap().check("v2024"));
/// ```
#[derive(Debug, Clone)]
pub struct Match {
    source: String,
    anchored: Regex,
}

impl Match {
    /// Compile `pattern`, anchored at both ends.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::InvalidPattern`] when the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, ArgumentError> {
        let anchored = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            source: pattern.to_owned(),
            anchored,
        })
    }

    /// Anchor an already compiled expression.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::InvalidPattern`] when the anchored form does not compile.
    pub fn from_regex(pattern: &Regex) -> Result<Self, ArgumentError> {
        Self::new(pattern.as_str())
    }

    /// The pattern as given, without anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl<T: AsRef<str> + ?Sized> Constraint<T> for Match {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.anchored.is_match(value.as_ref())
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::String
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_be_empty_strings() {
        assert!(BeEmpty.check(""));
        assert!(!BeEmpty.check("x"));
        assert!(BeEmpty.check(&String::new()));
        assert_eq!(Constraint::<str>::kind(&BeEmpty), ErrorKind::String);
        assert_eq!(Constraint::<String>::kind(&BeEmpty), ErrorKind::String);
    }

    #[test]
    fn test_be_alphanumeric() {
        assert!(BeAlphanumeric.check("abc123"));
        assert!(BeAlphanumeric.check("ñandú"));
        assert!(BeAlphanumeric.check(""));
        assert!(!BeAlphanumeric.check("with space"));
        assert!(!BeAlphanumeric.check(&String::from("a-b")));
    }

    #[test]
    fn test_have_length_counts_chars() {
        assert!(HaveLength::new(3).check("abc"));
        assert!(HaveLength::new(1).check("é"));
        assert!(!HaveLength::new(2).check("é"));
        assert!(HaveLength::new(0).check(""));
        assert!(HaveLength::matching(|n| n > 3).check(&String::from("long")));
    }

    #[test]
    fn test_contain_is_partial() {
        let c = Contain::new("[0-9]").unwrap();
        assert!(c.check("abc1"));
        assert!(!c.check("abc"));
        assert_eq!(c.pattern().as_str(), "[0-9]");
    }

    #[test]
    fn test_match_is_full() {
        let m = Match::new("[a-z]+").unwrap();
        assert!(m.check("hello"));
        assert!(!m.check("hello!"));
        assert!(!m.check(""));
        assert_eq!(m.as_str(), "[a-z]+");
    }

    #[test]
    fn test_match_anchors_alternation() {
        let m = Match::new("cat|dog").unwrap();
        assert!(m.check("dog"));
        assert!(!m.check("catalog"));
    }

    #[test]
    fn test_match_from_regex() {
        let m = Match::from_regex(&Regex::new(r"\d{2}").unwrap()).unwrap();
        assert!(m.check("42"));
        assert!(!m.check("421"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(Contain::new("("), Err(ArgumentError::InvalidPattern(_))));
        assert!(matches!(Match::new("[a-"), Err(ArgumentError::InvalidPattern(_))));
    }

    #[test]
    fn test_kind_is_string() {
        assert_eq!(Constraint::<str>::kind(&BeAlphanumeric), ErrorKind::String);
        assert_eq!(Constraint::<String>::kind(&HaveLength::new(1)), ErrorKind::String);
    }
}
