//! Runtime values and the absent/null/present distinction
//!
//! Typed entry points take a [`Param<T>`], which separates a value that was
//! never provided ([`Param::Absent`]) from one that was explicitly set to
//! null ([`Param::Null`]). Nested data is carried as [`Value`], a
//! `serde_json::Value` whose objects keep their insertion order.
//!
//! # Example
//!
//! ```rust
//! use shapeguard::Param;
//!
//! let given: Param<&str> = "hello".into();
//! assert_eq!(given, Param::Present("hello"));
//!
//! assert_eq!(Param::<&str>::optional(None), Param::Absent);
//! assert_eq!(Param::<&str>::nullable(None), Param::Null);
//! ```

use std::fmt;

pub use serde_json::{Map, Value};

/// A JSON object as seen by the object validator.
pub type Object = Map<String, Value>;

/// An input to one of the typed entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Param<T> {
    /// The value was not provided at all.
    #[default]
    Absent,
    /// The value was provided as an explicit null.
    Null,
    /// The value was provided.
    Present(T),
}

impl<T> Param<T> {
    /// Map `None` to [`Param::Absent`].
    pub fn optional(value: Option<T>) -> Self {
        match value {
            Some(value) => Param::Present(value),
            None => Param::Absent,
        }
    }

    /// Map `None` to [`Param::Null`].
    pub fn nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Param::Present(value),
            None => Param::Null,
        }
    }

    /// Returns `true` for [`Param::Absent`].
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Param::Absent)
    }

    /// Returns `true` for [`Param::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Param::Null)
    }

    /// Borrow the provided value, if any.
    pub fn present(&self) -> Option<&T> {
        match self {
            Param::Present(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Param<T> {
    fn from(value: T) -> Self {
        Param::Present(value)
    }
}

impl<'a> From<&'a Vec<Value>> for Param<&'a [Value]> {
    fn from(items: &'a Vec<Value>) -> Self {
        Param::Present(items.as_slice())
    }
}

/// The runtime category of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `null`
    Null,
    /// `true` / `false`
    Boolean,
    /// Any JSON number
    Number,
    /// Any JSON string
    String,
    /// An ordered list of values
    Array,
    /// A keyed map of values
    Object,
}

impl Category {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Category::Null,
            Value::Bool(_) => Category::Boolean,
            Value::Number(_) => Category::Number,
            Value::String(_) => Category::String,
            Value::Array(_) => Category::Array,
            Value::Object(_) => Category::Object,
        }
    }

    /// Lowercase name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Null => "null",
            Category::Boolean => "boolean",
            Category::Number => "number",
            Category::String => "string",
            Category::Array => "array",
            Category::Object => "object",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a value the way failure messages quote it: strings bare,
/// everything else as compact JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
