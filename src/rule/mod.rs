//! Rule descriptors
//!
//! A rule describes the constraints for one value category. Every rule
//! carries the [`CommonRule`] fields; each category adds its own bounds:
//!
//! - [`BooleanRule`]: the exact value the input must equal
//! - [`StringRule`]: inclusive character-count bounds
//! - [`NumberRule`]: inclusive numeric bounds
//! - [`ArrayRule`]: element-count bounds, emptiness, and a rule for items
//! - [`ObjectRule`]: a rule per named field
//!
//! A field left unset is not enforced; no default is substituted for it.
//! Rules are built with chained setters and are never modified by the
//! engine.
//!
//! # Example
//!
//! ```rust
//! use shapeguard::prelude::*;
//!
//! let user = ObjectRule::new()
//!     .required()
//!     .child("name", StringRule::new().min_length(2).max_length(40))
//!     .child("age", NumberRule::new().min(0.0).max(150.0))
//!     .child("tags", ArrayRule::new().allow_empty().items(StringRule::new().min_length(1)));
//!
//! assert_eq!(user.children().len(), 3);
//! ```

mod collection;
mod scalar;
#[cfg(feature = "serde")]
mod serde_impl;

pub use collection::{ArrayRule, ObjectRule};
pub use scalar::{BooleanRule, NumberRule, StringRule};

use crate::error::RuleError;
use crate::pattern::Pattern;
use crate::predicate::{CustomValidator, Predicate};

/// Fields shared by every rule category.
///
/// `T` is the type the custom validator receives.
#[derive(Debug)]
pub struct CommonRule<T: ?Sized> {
    /// Fail when the value is absent.
    pub required: bool,
    /// Accept an explicit null.
    pub null_allowed: bool,
    /// Replaces the message of every failure produced under this rule.
    pub error_message: Option<String>,
    /// Tested against the string form of the value. Not evaluated for
    /// booleans or arrays.
    pub pattern: Option<Pattern>,
    /// Final caller-supplied check.
    pub custom_validator: Option<CustomValidator<T>>,
}

impl<T: ?Sized> Default for CommonRule<T> {
    fn default() -> Self {
        CommonRule {
            required: false,
            null_allowed: false,
            error_message: None,
            pattern: None,
            custom_validator: None,
        }
    }
}

impl<T: ?Sized> Clone for CommonRule<T> {
    fn clone(&self) -> Self {
        CommonRule {
            required: self.required,
            null_allowed: self.null_allowed,
            error_message: self.error_message.clone(),
            pattern: self.pattern.clone(),
            custom_validator: self.custom_validator.clone(),
        }
    }
}

impl<T: ?Sized> CommonRule<T> {
    /// The message to report: the override if set, otherwise `default`.
    pub(crate) fn message_or(&self, default: impl FnOnce() -> String) -> String {
        match &self.error_message {
            Some(message) => message.clone(),
            None => default(),
        }
    }

    /// The same fields for a value of another category.
    ///
    /// The custom validator is typed to this category and is left behind.
    pub(crate) fn untyped<U: ?Sized>(&self) -> CommonRule<U> {
        CommonRule {
            required: self.required,
            null_allowed: self.null_allowed,
            error_message: self.error_message.clone(),
            pattern: self.pattern.clone(),
            custom_validator: None,
        }
    }
}

/// Chained setters for the [`CommonRule`] fields, shared by all rules.
pub trait RuleBuilder: Sized {
    /// Type the custom validator receives.
    type Input: ?Sized;

    /// Borrow the common fields.
    fn common(&self) -> &CommonRule<Self::Input>;

    /// Mutably borrow the common fields.
    fn common_mut(&mut self) -> &mut CommonRule<Self::Input>;

    /// Fail when the value is absent.
    fn required(mut self) -> Self {
        self.common_mut().required = true;
        self
    }

    /// Accept an explicit null.
    fn null_allowed(mut self) -> Self {
        self.common_mut().null_allowed = true;
        self
    }

    /// Report `message` for any failure under this rule.
    fn error_message(mut self, message: impl Into<String>) -> Self {
        self.common_mut().error_message = Some(message.into());
        self
    }

    /// Attach an already compiled pattern.
    fn pattern(mut self, pattern: Pattern) -> Self {
        self.common_mut().pattern = Some(pattern);
        self
    }

    /// Compile `source` and attach it as the pattern.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapeguard::prelude::*;
    ///
    /// assert!(StringRule::new().try_pattern("^[a-z]+$").is_ok());
    /// assert!(StringRule::new().try_pattern("([a-z]+").is_err());
    /// ```
    fn try_pattern(self, source: &str) -> Result<Self, RuleError> {
        Ok(self.pattern(Pattern::new(source)?))
    }

    /// Attach a custom validator, run after every built-in check.
    fn custom<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<Self::Input> + 'static,
    {
        self.common_mut().custom_validator = Some(CustomValidator::new(predicate));
        self
    }
}

/// A rule for any value category.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Constraints for a boolean.
    Boolean(BooleanRule),
    /// Constraints for a string.
    String(StringRule),
    /// Constraints for a number.
    Number(NumberRule),
    /// Constraints for an array.
    Array(ArrayRule),
    /// Constraints for an object.
    Object(ObjectRule),
}

impl Rule {
    /// Lowercase name of the category this rule applies to.
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::Boolean(_) => "boolean",
            Rule::String(_) => "string",
            Rule::Number(_) => "number",
            Rule::Array(_) => "array",
            Rule::Object(_) => "object",
        }
    }

    /// The rule's common fields, minus its custom validator, retargeted to
    /// another category.
    pub(crate) fn common_for<U: ?Sized>(&self) -> CommonRule<U> {
        match self {
            Rule::Boolean(r) => r.common.untyped(),
            Rule::String(r) => r.common.untyped(),
            Rule::Number(r) => r.common.untyped(),
            Rule::Array(r) => r.common.untyped(),
            Rule::Object(r) => r.common.untyped(),
        }
    }
}

impl From<BooleanRule> for Rule {
    fn from(rule: BooleanRule) -> Self {
        Rule::Boolean(rule)
    }
}

impl From<StringRule> for Rule {
    fn from(rule: StringRule) -> Self {
        Rule::String(rule)
    }
}

impl From<NumberRule> for Rule {
    fn from(rule: NumberRule) -> Self {
        Rule::Number(rule)
    }
}

impl From<ArrayRule> for Rule {
    fn from(rule: ArrayRule) -> Self {
        Rule::Array(rule)
    }
}

impl From<ObjectRule> for Rule {
    fn from(rule: ObjectRule) -> Self {
        Rule::Object(rule)
    }
}
