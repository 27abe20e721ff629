//! Compiled regular expressions attached to rules

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::RuleError;

/// A regular expression tested against the string form of a value.
///
/// The expression is compiled once, when the rule is built. Matching is
/// unanchored: the pattern may match anywhere in the input, so use `^` and
/// `$` to require a full match.
///
/// # Example
///
/// ```rust
/// use shapeguard::Pattern;
///
/// let digits = Pattern::new(r"^\d+$").unwrap();
/// assert!(digits.is_match("12345"));
/// assert!(!digits.is_match("12a45"));
/// ```
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compile a pattern from its source.
    pub fn new(source: &str) -> Result<Self, RuleError> {
        Regex::new(source)
            .map(Pattern)
            .map_err(|err| RuleError::InvalidPattern {
                pattern: source.to_string(),
                reason: err.to_string(),
            })
    }

    /// Test the pattern against `text`.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }

    /// The source the pattern was compiled from.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern(regex)
    }
}

impl FromStr for Pattern {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
