//! Array and object validators

use super::{admit, reject, validate_value};
use crate::messages::{
    array_too_long, array_too_short, ARRAY_CUSTOM, ARRAY_EMPTY, ARRAY_REQUIRED, OBJECT_CUSTOM,
    OBJECT_PATTERN, OBJECT_REQUIRED,
};
use crate::predicate::Predicate;
use crate::result::{PathSegment, ValidationResult};
use crate::rule::{ArrayRule, ObjectRule};
use crate::value::{Object, Param, Value};

/// Validate an array.
///
/// Checks, in order: required, null, minimum length, maximum length,
/// emptiness, custom validator, then every item in index order against the
/// item rule. The first failing item's result is returned with its message
/// unchanged.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let rule = ArrayRule::new().items(StringRule::new().min_length(3));
/// let input = json!(["ab", "abc"]);
///
/// let result = validate_array(input.as_array().unwrap(), &rule);
/// assert_eq!(result.message(), Some("param must be at least 3 characters long."));
/// assert_eq!(result.path().to_string(), "$[0]");
/// ```
pub fn validate_array<'a>(
    param: impl Into<Param<&'a [Value]>>,
    rule: &ArrayRule,
) -> ValidationResult {
    let common = &rule.common;
    let items = match admit(param.into(), common, ARRAY_REQUIRED) {
        Ok(items) => items,
        Err(done) => return done,
    };

    if let Some(min) = rule.min_length {
        if items.len() < min {
            return reject(common, || array_too_short(min));
        }
    }
    if let Some(max) = rule.max_length {
        if items.len() > max {
            return reject(common, || array_too_long(max));
        }
    }

    if !rule.allow_empty && items.is_empty() {
        return reject(common, || ARRAY_EMPTY.into());
    }

    if let Some(custom) = &common.custom_validator {
        if !custom.check(items) {
            return reject(common, || ARRAY_CUSTOM.into());
        }
    }

    if let Some(item_rule) = &rule.item_rule {
        for (idx, item) in items.iter().enumerate() {
            let result = validate_value(item, item_rule);
            if !result.is_valid() {
                return result.within(PathSegment::Index(idx));
            }
        }
    }

    ValidationResult::valid()
}

/// Validate an object.
///
/// Checks, in order: required, null, pattern (against the object's JSON
/// text), custom validator, then each field rule in the order it was added.
/// A field missing from the input, or registered without a rule, is
/// skipped. Fields without a rule are never inspected.
///
/// The JSON text follows the input's key order, so a pattern that depends
/// on key order is only as stable as the producer of the input.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let rule = ObjectRule::new()
///     .child("a", StringRule::new().min_length(2))
///     .child("b", NumberRule::new().min(10.0));
/// let input = json!({ "a": "x", "b": 5 });
///
/// let result = validate_object(input.as_object().unwrap(), &rule);
/// assert_eq!(result.message(), Some("param must be at least 2 characters long."));
/// ```
pub fn validate_object<'a>(
    param: impl Into<Param<&'a Object>>,
    rule: &ObjectRule,
) -> ValidationResult {
    let common = &rule.common;
    let object = match admit(param.into(), common, OBJECT_REQUIRED) {
        Ok(object) => object,
        Err(done) => return done,
    };

    if let Some(pattern) = &common.pattern {
        let matches = serde_json::to_string(object).is_ok_and(|text| pattern.is_match(&text));
        if !matches {
            return reject(common, || OBJECT_PATTERN.into());
        }
    }

    if let Some(custom) = &common.custom_validator {
        if !custom.check(object) {
            return reject(common, || OBJECT_CUSTOM.into());
        }
    }

    for (name, child) in rule.children() {
        let (Some(child), Some(field)) = (child, object.get(name)) else {
            continue;
        };
        let result = validate_value(field, child);
        if !result.is_valid() {
            return result.within(PathSegment::Field(name.clone()));
        }
    }

    ValidationResult::valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{BooleanRule, NumberRule, RuleBuilder, StringRule};
    use serde_json::json;

    fn obj(value: &Value) -> &Object {
        value.as_object().unwrap()
    }

    fn arr(value: &Value) -> &[Value] {
        value.as_array().unwrap()
    }

    // Array

    #[test]
    fn test_array_empty_rejected_by_default() {
        let empty: Vec<Value> = Vec::new();
        let result = validate_array(&empty, &ArrayRule::new());
        assert_eq!(result.message(), Some(ARRAY_EMPTY));
    }

    #[test]
    fn test_array_empty_allowed() {
        let empty: Vec<Value> = Vec::new();
        assert!(validate_array(&empty, &ArrayRule::new().allow_empty()).is_valid());
    }

    #[test]
    fn test_array_min_before_empty() {
        let empty: Vec<Value> = Vec::new();
        let result = validate_array(&empty, &ArrayRule::new().min_length(1));
        assert_eq!(result.message(), Some("Array must contain at least 1 items."));
    }

    #[test]
    fn test_array_max() {
        let input = json!([1, 2, 3]);
        let result = validate_array(arr(&input), &ArrayRule::new().max_length(2));
        assert_eq!(
            result.message(),
            Some("Array must contain no more than 2 items.")
        );
    }

    #[test]
    fn test_array_required_and_null() {
        let rule = ArrayRule::new().required();
        assert_eq!(
            validate_array(Param::Absent, &rule).message(),
            Some(ARRAY_REQUIRED)
        );
        assert_eq!(
            validate_array(Param::Null, &rule).message(),
            Some("Null is not allowed.")
        );
        assert!(validate_array(Param::Null, &rule.null_allowed()).is_valid());
    }

    #[test]
    fn test_array_custom_sees_whole_array() {
        let rule = ArrayRule::new().custom(|items: &[Value]| items.len() % 2 == 0);
        assert!(validate_array(arr(&json!([1, 2])), &rule).is_valid());
        assert_eq!(
            validate_array(arr(&json!([1])), &rule).message(),
            Some(ARRAY_CUSTOM)
        );
    }

    #[test]
    fn test_array_custom_before_items() {
        let rule = ArrayRule::new()
            .custom(|_: &[Value]| false)
            .items(NumberRule::new().min(100.0));
        assert_eq!(
            validate_array(arr(&json!([1])), &rule).message(),
            Some(ARRAY_CUSTOM)
        );
    }

    #[test]
    fn test_array_first_failing_item_wins() {
        let rule = ArrayRule::new().items(NumberRule::new().max(5.0));
        let input = json!([1, 9, 20]);
        let result = validate_array(arr(&input), &rule);
        assert_eq!(result.message(), Some("param must be less than or equal to 5."));
        assert_eq!(result.path().to_string(), "$[1]");
    }

    #[test]
    fn test_array_of_booleans() {
        let rule = ArrayRule::new().items(BooleanRule::new(true));
        assert!(validate_array(arr(&json!([true, true])), &rule).is_valid());
        let result = validate_array(arr(&json!([true, false])), &rule);
        assert_eq!(result.path().to_string(), "$[1]");
    }

    #[test]
    fn test_nested_arrays() {
        let rule = ArrayRule::new().items(ArrayRule::new().items(StringRule::new().max_length(1)));
        let input = json!([["a"], ["b", "cc"]]);
        let result = validate_array(arr(&input), &rule);
        assert_eq!(
            result.message(),
            Some("param must be no more than 1 characters long.")
        );
        assert_eq!(result.path().to_string(), "$[1][1]");
    }

    #[test]
    fn test_array_error_message_does_not_leak_into_items() {
        let rule = ArrayRule::new()
            .error_message("bad list")
            .items(StringRule::new().min_length(2));
        let result = validate_array(arr(&json!(["a"])), &rule);
        assert_eq!(result.message(), Some("param must be at least 2 characters long."));
    }

    // Object

    #[test]
    fn test_object_fields_in_rule_order() {
        let rule = ObjectRule::new()
            .child("b", NumberRule::new().min(10.0))
            .child("a", StringRule::new().min_length(2));
        let input = json!({ "a": "x", "b": 5 });
        let result = validate_object(obj(&input), &rule);
        assert_eq!(
            result.message(),
            Some("param must be greater than or equal to 10.")
        );
        assert_eq!(result.path().to_string(), "$.b");
    }

    #[test]
    fn test_object_missing_field_skipped() {
        let rule = ObjectRule::new().child("name", StringRule::new().required());
        assert!(validate_object(obj(&json!({})), &rule).is_valid());
    }

    #[test]
    fn test_object_skip_entry() {
        let rule = ObjectRule::new().skip("anything");
        assert!(validate_object(obj(&json!({ "anything": [] })), &rule).is_valid());
    }

    #[test]
    fn test_object_unlisted_fields_ignored() {
        let rule = ObjectRule::new().child("a", NumberRule::new());
        let input = json!({ "a": 1, "extra": { "deep": null } });
        assert!(validate_object(obj(&input), &rule).is_valid());
    }

    #[test]
    fn test_object_null_field_is_unrecognized() {
        let input = json!({ "a": null });
        for rule in [StringRule::new(), StringRule::new().null_allowed()] {
            let result = validate_object(obj(&input), &ObjectRule::new().child("a", rule));
            assert_eq!(result.message(), Some("Invalid data type for param: null"));
            assert_eq!(result.path().to_string(), "$.a");
        }
    }

    #[test]
    fn test_array_null_item_is_unrecognized() {
        let rule = ArrayRule::new().items(NumberRule::new().null_allowed());
        let result = validate_array(arr(&json!([1, null])), &rule);
        assert_eq!(result.message(), Some("Invalid data type for param: null"));
        assert_eq!(result.path().to_string(), "$[1]");
    }

    #[test]
    fn test_object_pattern_on_json_text() {
        let rule = ObjectRule::new().try_pattern(r#""id":\d+"#).unwrap();
        assert!(validate_object(obj(&json!({ "id": 7 })), &rule).is_valid());
        assert_eq!(
            validate_object(obj(&json!({ "id": "7" })), &rule).message(),
            Some(OBJECT_PATTERN)
        );
    }

    #[test]
    fn test_object_custom() {
        let rule = ObjectRule::new().custom(|o: &Object| o.contains_key("id"));
        assert!(validate_object(obj(&json!({ "id": 1 })), &rule).is_valid());
        assert_eq!(
            validate_object(obj(&json!({})), &rule).message(),
            Some(OBJECT_CUSTOM)
        );
    }

    #[test]
    fn test_object_required() {
        let rule = ObjectRule::new().required().error_message("need body");
        assert_eq!(
            validate_object(Param::Absent, &rule).message(),
            Some("need body")
        );
        let rule = ObjectRule::new().required();
        assert_eq!(
            validate_object(Param::Absent, &rule).message(),
            Some(OBJECT_REQUIRED)
        );
    }

    #[test]
    fn test_object_nested_path() {
        let rule = ObjectRule::new().child(
            "user",
            ObjectRule::new().child(
                "emails",
                ArrayRule::new().items(StringRule::new().try_pattern("@").unwrap()),
            ),
        );
        let input = json!({ "user": { "emails": ["a@b.c", "nope"] } });
        let result = validate_object(obj(&input), &rule);
        assert_eq!(result.message(), Some("param does not match the required pattern."));
        assert_eq!(result.path().to_string(), "$.user.emails[1]");
    }

    #[test]
    fn test_object_field_of_other_category() {
        let rule = ObjectRule::new().child("age", NumberRule::new().min(13.0));
        assert!(validate_object(obj(&json!({ "age": "thirty" })), &rule).is_valid());

        let numeric = NumberRule::new()
            .required()
            .error_message("age must be numeric")
            .try_pattern(r"^\d+$")
            .unwrap();
        let rule = ObjectRule::new().child("age", numeric);
        let result = validate_object(obj(&json!({ "age": "old" })), &rule);
        assert_eq!(result.message(), Some("age must be numeric"));
        assert_eq!(result.path().to_string(), "$.age");
    }
}
