//! # Shapeguard
//!
//! Declarative, rule-based validation for untrusted runtime values.
//!
//! Describe the shape you expect with a rule, hand the engine a value, and
//! get back a verdict with a human-readable reason. Use it before trusting
//! API payloads, form submissions, or configuration blobs.
//!
//! ## Model
//!
//! - One rule type per value category: [`BooleanRule`], [`StringRule`],
//!   [`NumberRule`], [`ArrayRule`], [`ObjectRule`], unified as [`Rule`].
//! - One entry point per category: [`validate_boolean`],
//!   [`validate_string`], [`validate_number`], [`validate_array`],
//!   [`validate_object`], plus [`validate_value`] for values whose category
//!   is only known at runtime.
//! - Checks run in a fixed order and stop at the first failure. The
//!   [`ValidationResult`] carries that failure's message and the
//!   [`FieldPath`] where it happened.
//!
//! ## Quick Example
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::prelude::*;
//!
//! let signup = ObjectRule::new()
//!     .required()
//!     .child("username", StringRule::new().min_length(3).max_length(20))
//!     .child("age", NumberRule::new().min(13.0))
//!     .child("terms", BooleanRule::new(true));
//!
//! let payload = json!({ "username": "al", "age": 30, "terms": true });
//! let result = validate_object(payload.as_object().unwrap(), &signup);
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.message(), Some("param must be at least 3 characters long."));
//! assert_eq!(result.path().to_string(), "$.username");
//! ```
//!
//! ## Features
//!
//! - `serde`: load and store rules as JSON documents; serialize results.
//! - `tracing`: emit `tracing` events for failures and dispatch.
//! - `proptest`: strategies for generating inputs in [`testing`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod engine;
pub mod error;
mod messages;
pub mod pattern;
pub mod predicate;
pub mod result;
pub mod rule;
pub mod testing;
pub mod value;

// Re-exports
pub use engine::{
    validate_array, validate_boolean, validate_number, validate_object, validate_string,
    validate_value, Validator,
};
pub use error::RuleError;
pub use pattern::Pattern;
pub use result::{FieldPath, PathSegment, ValidationError, ValidationResult};
pub use rule::{
    ArrayRule, BooleanRule, CommonRule, NumberRule, ObjectRule, Rule, RuleBuilder, StringRule,
};
pub use value::{Category, Object, Param, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::{
        validate_array, validate_boolean, validate_number, validate_object, validate_string,
        validate_value, Validator,
    };
    pub use crate::error::RuleError;
    pub use crate::pattern::Pattern;
    pub use crate::result::{FieldPath, ValidationError, ValidationResult};
    pub use crate::rule::{
        ArrayRule, BooleanRule, NumberRule, ObjectRule, Rule, RuleBuilder, StringRule,
    };
    pub use crate::value::{Object, Param, Value};
}
