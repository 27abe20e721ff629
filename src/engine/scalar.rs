//! Boolean, string, and number validators

use super::{admit, reject};
use crate::messages::{
    number_above, number_below, string_too_long, string_too_short, BOOLEAN_CUSTOM,
    BOOLEAN_MISMATCH, PARAM_CUSTOM, PARAM_PATTERN, PARAM_REQUIRED,
};
use crate::predicate::Predicate;
use crate::result::ValidationResult;
use crate::rule::{BooleanRule, NumberRule, StringRule};
use crate::value::Param;

/// Validate a boolean.
///
/// Checks, in order: required, exact value, custom validator. Absent and
/// null are not special-cased beyond `required`; neither equals the rule's
/// value, so both fail the comparison.
///
/// # Example
///
/// ```rust
/// use shapeguard::prelude::*;
///
/// let must_accept = BooleanRule::new(true).required();
/// assert!(validate_boolean(true, &must_accept).is_valid());
/// assert_eq!(
///     validate_boolean(Param::Absent, &must_accept).message(),
///     Some("param is required."),
/// );
/// ```
pub fn validate_boolean(param: impl Into<Param<bool>>, rule: &BooleanRule) -> ValidationResult {
    let common = &rule.common;
    let value = match param.into() {
        Param::Absent if common.required => return reject(common, || PARAM_REQUIRED.into()),
        Param::Absent | Param::Null => None,
        Param::Present(value) => Some(value),
    };

    let Some(value) = value.filter(|v| *v == rule.value) else {
        return reject(common, || BOOLEAN_MISMATCH.into());
    };

    if let Some(custom) = &common.custom_validator {
        if !custom.check(&value) {
            return reject(common, || BOOLEAN_CUSTOM.into());
        }
    }

    ValidationResult::valid()
}

/// Validate a string.
///
/// Checks, in order: required, null, minimum length, maximum length,
/// pattern, custom validator.
///
/// # Example
///
/// ```rust
/// use shapeguard::prelude::*;
///
/// let rule = StringRule::new().min_length(3).try_pattern("^[a-z]+$").unwrap();
/// assert!(validate_string("abc", &rule).is_valid());
/// assert_eq!(
///     validate_string("ABC", &rule).message(),
///     Some("param does not match the required pattern."),
/// );
/// ```
pub fn validate_string<'a>(param: impl Into<Param<&'a str>>, rule: &StringRule) -> ValidationResult {
    let common = &rule.common;
    let value = match admit(param.into(), common, PARAM_REQUIRED) {
        Ok(value) => value,
        Err(done) => return done,
    };

    let len = value.chars().count();
    if let Some(min) = rule.min_length {
        if len < min {
            return reject(common, || string_too_short(min));
        }
    }
    if let Some(max) = rule.max_length {
        if len > max {
            return reject(common, || string_too_long(max));
        }
    }

    if let Some(pattern) = &common.pattern {
        if !pattern.is_match(value) {
            return reject(common, || PARAM_PATTERN.into());
        }
    }

    if let Some(custom) = &common.custom_validator {
        if !custom.check(value) {
            return reject(common, || PARAM_CUSTOM.into());
        }
    }

    ValidationResult::valid()
}

/// Validate a number.
///
/// Checks, in order: required, null, minimum, maximum, pattern (against
/// the decimal form), custom validator.
///
/// # Example
///
/// ```rust
/// use shapeguard::prelude::*;
///
/// let rule = NumberRule::new().min(10.0);
/// assert_eq!(
///     validate_number(5.0, &rule).message(),
///     Some("param must be greater than or equal to 10."),
/// );
/// ```
pub fn validate_number(param: impl Into<Param<f64>>, rule: &NumberRule) -> ValidationResult {
    let common = &rule.common;
    let value = match admit(param.into(), common, PARAM_REQUIRED) {
        Ok(value) => value,
        Err(done) => return done,
    };

    if let Some(min) = rule.min {
        if value < min {
            return reject(common, || number_below(min));
        }
    }
    if let Some(max) = rule.max {
        if value > max {
            return reject(common, || number_above(max));
        }
    }

    if let Some(pattern) = &common.pattern {
        if !pattern.is_match(&value.to_string()) {
            return reject(common, || PARAM_PATTERN.into());
        }
    }

    if let Some(custom) = &common.custom_validator {
        if !custom.check(&value) {
            return reject(common, || PARAM_CUSTOM.into());
        }
    }

    ValidationResult::valid()
}
