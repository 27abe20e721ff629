//! Runtime-category dispatch for nested values

use super::{validate_array, validate_boolean, validate_number, validate_object, validate_string};
use crate::messages::invalid_type;
use crate::result::ValidationResult;
use crate::rule::{ArrayRule, NumberRule, ObjectRule, Rule, StringRule};
#[cfg(feature = "tracing")]
use crate::value::Category;
use crate::value::{display_value, Value};

/// Validate a value whose category is only known at runtime.
///
/// The value's category selects the validator. When the rule is of another
/// category, the value is checked against the rule's shared fields only
/// (`required`, `null_allowed`, `error_message`, `pattern`); the rule's
/// bounds and its custom validator belong to its own category and are not
/// enforced. Null, and a boolean paired with a non-boolean rule, fail with
/// `"Invalid data type for param: <value>"`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let rule: Rule = NumberRule::new().min(13.0).into();
/// assert!(validate_value(&json!(21), &rule).is_valid());
/// assert!(validate_value(&json!("thirty"), &rule).is_valid());
/// assert_eq!(
///     validate_value(&json!(null), &rule).message(),
///     Some("Invalid data type for param: null"),
/// );
/// ```
pub fn validate_value(value: &Value, rule: &Rule) -> ValidationResult {
    #[cfg(feature = "tracing")]
    tracing::trace!(category = %Category::of(value), rule = rule.kind(), "dispatching value");

    match (value, rule) {
        (Value::Bool(b), Rule::Boolean(r)) => validate_boolean(*b, r),
        (Value::String(s), Rule::String(r)) => validate_string(s.as_str(), r),
        (Value::Number(n), Rule::Number(r)) => match n.as_f64() {
            Some(n) => validate_number(n, r),
            None => unrecognized(value, rule),
        },
        (Value::Array(items), Rule::Array(r)) => validate_array(items.as_slice(), r),
        (Value::Object(map), Rule::Object(r)) => validate_object(map, r),
        (Value::Null, _) | (Value::Bool(_), _) => unrecognized(value, rule),
        _ => validate_across(value, rule),
    }
}

/// Check a value against a rule of another category.
fn validate_across(value: &Value, rule: &Rule) -> ValidationResult {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        category = %Category::of(value),
        rule = rule.kind(),
        "value category differs from rule, checking shared fields"
    );

    match value {
        Value::String(s) => {
            let rule = StringRule {
                common: rule.common_for(),
                ..StringRule::default()
            };
            validate_string(s.as_str(), &rule)
        }
        Value::Number(n) => match n.as_f64() {
            Some(n) => {
                let rule = NumberRule {
                    common: rule.common_for(),
                    ..NumberRule::default()
                };
                validate_number(n, &rule)
            }
            None => unrecognized(value, rule),
        },
        Value::Array(items) => {
            let rule = ArrayRule {
                common: rule.common_for(),
                ..ArrayRule::default()
            };
            validate_array(items.as_slice(), &rule)
        }
        Value::Object(map) => {
            let mut object_rule = ObjectRule::new();
            object_rule.common = rule.common_for();
            validate_object(map, &object_rule)
        }
        Value::Null | Value::Bool(_) => unrecognized(value, rule),
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn unrecognized(value: &Value, rule: &Rule) -> ValidationResult {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        category = %Category::of(value),
        rule = rule.kind(),
        "unrecognized value category"
    );
    ValidationResult::invalid(invalid_type(display_value(value)))
}
