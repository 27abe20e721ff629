//! Default failure messages
//!
//! Used verbatim unless the rule sets an `error_message`.

use std::fmt::Display;

pub(crate) const PARAM_REQUIRED: &str = "param is required.";
pub(crate) const OBJECT_REQUIRED: &str = "Object is required.";
pub(crate) const ARRAY_REQUIRED: &str = "Array is required.";
pub(crate) const NULL_NOT_ALLOWED: &str = "Null is not allowed.";

pub(crate) const PARAM_PATTERN: &str = "param does not match the required pattern.";
pub(crate) const OBJECT_PATTERN: &str = "Object does not match the required pattern.";

pub(crate) const PARAM_CUSTOM: &str = "param failed custom validation.";
pub(crate) const OBJECT_CUSTOM: &str = "Object failed custom validation.";
pub(crate) const ARRAY_CUSTOM: &str = "Array failed custom validation.";
pub(crate) const BOOLEAN_CUSTOM: &str = "Custom validator failed.";

pub(crate) const ARRAY_EMPTY: &str = "Array must not be empty.";
pub(crate) const BOOLEAN_MISMATCH: &str = "param value did not matched the provided value.";

pub(crate) fn string_too_short(min: usize) -> String {
    format!("param must be at least {} characters long.", min)
}

pub(crate) fn string_too_long(max: usize) -> String {
    format!("param must be no more than {} characters long.", max)
}

pub(crate) fn number_below(min: f64) -> String {
    format!("param must be greater than or equal to {}.", min)
}

pub(crate) fn number_above(max: f64) -> String {
    format!("param must be less than or equal to {}.", max)
}

pub(crate) fn array_too_short(min: usize) -> String {
    format!("Array must contain at least {} items.", min)
}

pub(crate) fn array_too_long(max: usize) -> String {
    format!("Array must contain no more than {} items.", max)
}

pub(crate) fn invalid_type(value: impl Display) -> String {
    format!("Invalid data type for param: {}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_render_without_fraction() {
        assert_eq!(number_below(10.0), "param must be greater than or equal to 10.");
        assert_eq!(number_above(2.5), "param must be less than or equal to 2.5.");
    }

    #[test]
    fn test_length_templates() {
        assert_eq!(string_too_short(3), "param must be at least 3 characters long.");
        assert_eq!(string_too_long(8), "param must be no more than 8 characters long.");
        assert_eq!(array_too_short(1), "Array must contain at least 1 items.");
        assert_eq!(array_too_long(4), "Array must contain no more than 4 items.");
    }
}
