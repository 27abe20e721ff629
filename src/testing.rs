//! Testing utilities for code that validates with shapeguard
//!
//! Assertion macros for [`ValidationResult`](crate::ValidationResult), and,
//! with the `proptest` feature, strategies for generating inputs.
//!
//! # Examples
//!
//! ```rust
//! use shapeguard::prelude::*;
//! use shapeguard::{assert_invalid, assert_valid};
//!
//! let rule = StringRule::new().min_length(3);
//!
//! assert_valid!(validate_string("abc", &rule));
//! assert_invalid!(validate_string("ab", &rule));
//! assert_invalid!(
//!     validate_string("ab", &rule),
//!     "param must be at least 3 characters long."
//! );
//! ```

/// Assert that a validation result is valid.
///
/// Panics with the failure message and path otherwise.
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {{
        let result: $crate::ValidationResult = $result;
        if !result.is_valid() {
            panic!(
                "Expected valid result, got failure at {}: {:?}",
                result.path(),
                result.message()
            );
        }
    }};
}

/// Assert that a validation result is invalid, optionally with a given
/// message.
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {{
        let result: $crate::ValidationResult = $result;
        if result.is_valid() {
            panic!("Expected invalid result, got valid");
        }
    }};
    ($result:expr, $message:expr) => {{
        let result: $crate::ValidationResult = $result;
        match result.message() {
            Some(message) => assert_eq!(message, $message),
            None => panic!(
                "Expected invalid result with message {:?}, got valid",
                $message
            ),
        }
    }};
}

#[cfg(feature = "proptest")]
pub use strategies::*;

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;
    use serde_json::Value as JsonValue;

    use crate::value::Param;

    impl<T> Arbitrary for Param<T>
    where
        T: Arbitrary + Clone + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                Just(Param::Absent),
                Just(Param::Null),
                any_with::<T>(args).prop_map(Param::Present),
            ]
            .boxed()
        }
    }

    /// Any non-container value: null, boolean, number, or string.
    pub fn scalar_value() -> impl Strategy<Value = JsonValue> {
        prop_oneof![
            Just(JsonValue::Null),
            any::<bool>().prop_map(JsonValue::Bool),
            any::<i64>().prop_map(JsonValue::from),
            (-1.0e9f64..1.0e9).prop_map(JsonValue::from),
            ".{0,16}".prop_map(JsonValue::String),
        ]
    }

    /// Any value, nesting arrays and objects up to four levels deep.
    pub fn any_value() -> impl Strategy<Value = JsonValue> {
        scalar_value().prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(JsonValue::Array),
                prop::collection::vec(("[a-z]{1,8}", inner), 0..8)
                    .prop_map(|fields| JsonValue::Object(fields.into_iter().collect())),
            ]
        })
    }
}
