//! The validation engine
//!
//! Five typed entry points, one per value category, plus the dispatcher
//! [`validate_value`] that array items and object fields go through. Every
//! validator applies its checks in a fixed order and returns on the first
//! failure.
//!
//! The engine is stateless: the free functions and the [`Validator`]
//! service object are interchangeable.
//!
//! # Example
//!
//! ```rust
//! use shapeguard::prelude::*;
//!
//! let rule = NumberRule::new().min(1.0).max(5.0);
//! assert!(validate_number(3.0, &rule).is_valid());
//!
//! let result = validate_number(9.0, &rule);
//! assert_eq!(result.message(), Some("param must be less than or equal to 5."));
//! ```

mod collection;
mod dispatch;
mod scalar;

pub use collection::{validate_array, validate_object};
pub use dispatch::validate_value;
pub use scalar::{validate_boolean, validate_number, validate_string};

use crate::messages::NULL_NOT_ALLOWED;
use crate::result::ValidationResult;
use crate::rule::{ArrayRule, BooleanRule, CommonRule, NumberRule, ObjectRule, Rule, StringRule};
use crate::value::{Object, Param, Value};

/// Build a failing result, honouring the rule's message override.
pub(crate) fn reject<T: ?Sized>(
    common: &CommonRule<T>,
    default: impl FnOnce() -> String,
) -> ValidationResult {
    let message = common.message_or(default);
    #[cfg(feature = "tracing")]
    tracing::debug!(message = %message, "validation failed");
    ValidationResult::invalid(message)
}

/// Resolve the required and null checks.
///
/// Yields the present value, or the finished result when there is nothing
/// further to check.
pub(crate) fn admit<T, I: ?Sized>(
    param: Param<T>,
    common: &CommonRule<I>,
    required_message: &'static str,
) -> Result<T, ValidationResult> {
    match param {
        Param::Present(value) => Ok(value),
        Param::Absent if common.required => Err(reject(common, || required_message.into())),
        Param::Null if !common.null_allowed => Err(reject(common, || NULL_NOT_ALLOWED.into())),
        Param::Absent | Param::Null => Err(ValidationResult::valid()),
    }
}

/// Stateless validation service.
///
/// Equivalent to calling the free functions directly; useful where a value
/// implementing the operations is more convenient than a module path.
///
/// # Example
///
/// ```rust
/// use shapeguard::prelude::*;
///
/// let validator = Validator::new();
/// let result = validator.validate_boolean(false, &BooleanRule::new(true));
/// assert_eq!(result.message(), Some("param value did not matched the provided value."));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Create a validator.
    pub fn new() -> Self {
        Validator
    }

    /// See [`validate_boolean`].
    pub fn validate_boolean(
        &self,
        param: impl Into<Param<bool>>,
        rule: &BooleanRule,
    ) -> ValidationResult {
        validate_boolean(param, rule)
    }

    /// See [`validate_string`].
    pub fn validate_string<'a>(
        &self,
        param: impl Into<Param<&'a str>>,
        rule: &StringRule,
    ) -> ValidationResult {
        validate_string(param, rule)
    }

    /// See [`validate_number`].
    pub fn validate_number(
        &self,
        param: impl Into<Param<f64>>,
        rule: &NumberRule,
    ) -> ValidationResult {
        validate_number(param, rule)
    }

    /// See [`validate_array`].
    pub fn validate_array<'a>(
        &self,
        param: impl Into<Param<&'a [Value]>>,
        rule: &ArrayRule,
    ) -> ValidationResult {
        validate_array(param, rule)
    }

    /// See [`validate_object`].
    pub fn validate_object<'a>(
        &self,
        param: impl Into<Param<&'a Object>>,
        rule: &ObjectRule,
    ) -> ValidationResult {
        validate_object(param, rule)
    }

    /// See [`validate_value`].
    pub fn validate_value(&self, value: &Value, rule: &Rule) -> ValidationResult {
        validate_value(value, rule)
    }
}
