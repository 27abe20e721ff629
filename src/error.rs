//! Errors raised while building rules
//!
//! Validation itself never fails with an error; it produces a
//! [`ValidationResult`](crate::ValidationResult). Building a rule can fail,
//! for example when a pattern is not a valid regular expression.

use std::error::Error as StdError;
use std::fmt;

/// An error encountered while constructing a rule.
///
/// # Examples
///
/// ```
/// use shapeguard::{Pattern, RuleError};
///
/// let err = Pattern::new("(unclosed").unwrap_err();
/// assert!(matches!(err, RuleError::InvalidPattern { .. }));
/// assert!(err.to_string().starts_with("invalid pattern '(unclosed'"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The pattern source did not compile as a regular expression.
    InvalidPattern {
        /// Pattern source as given.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },
    /// A rule document omitted a field the rule cannot do without.
    MissingField {
        /// Rule kind, e.g. `"boolean"`.
        rule: &'static str,
        /// Name of the missing field.
        field: &'static str,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::InvalidPattern { pattern, reason } => {
                write!(f, "invalid pattern '{}': {}", pattern, reason)
            }
            RuleError::MissingField { rule, field } => {
                write!(f, "{} rule is missing required field '{}'", rule, field)
            }
        }
    }
}

impl StdError for RuleError {}
