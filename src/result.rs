//! Validation verdicts
//!
//! Every entry point returns a [`ValidationResult`]. A failing result holds
//! the message of the first violated constraint and the [`FieldPath`] of
//! the nested field or item it came from. The path never changes the
//! message.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::prelude::*;
//!
//! let rule = ObjectRule::new().child(
//!     "tags",
//!     ArrayRule::new().items(StringRule::new().min_length(3)),
//! );
//! let input = json!({ "tags": ["abc", "x"] });
//!
//! let result = validate_object(input.as_object().unwrap(), &rule);
//! assert!(!result.is_valid());
//! assert_eq!(result.message(), Some("param must be at least 3 characters long."));
//! assert_eq!(result.path().to_string(), "$.tags[1]");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// One step into a nested value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named object field.
    Field(String),
    /// A zero-based array index.
    Index(usize),
}

/// Location of a value inside the validated input, outermost step first.
///
/// Renders as `$` for the root, then `.field` and `[index]` per step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Steps from the root, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns `true` when the path points at the root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Add an outer step in front of the existing ones.
    pub(crate) fn prepend(&mut self, segment: PathSegment) {
        self.segments.insert(0, segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

/// Outcome of a validation call.
///
/// `message` is `None` exactly when the result is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValidationResult {
    is_valid: bool,
    message: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "FieldPath::is_root"))]
    path: FieldPath,
}

impl ValidationResult {
    /// A passing result.
    #[inline]
    pub fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            message: None,
            path: FieldPath::root(),
        }
    }

    /// A failing result at the root.
    pub fn invalid(message: impl Into<String>) -> Self {
        ValidationResult {
            is_valid: false,
            message: Some(message.into()),
            path: FieldPath::root(),
        }
    }

    /// Whether every checked constraint held.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Explanation of the first failure, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Where the failure occurred. The root for passing results.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Record that this result came from `segment` of an enclosing value.
    pub(crate) fn within(mut self, segment: PathSegment) -> Self {
        if !self.is_valid {
            self.path.prepend(segment);
        }
        self
    }

    /// Convert into a `Result`, for use with `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapeguard::prelude::*;
    ///
    /// fn check_name(name: &str) -> Result<(), ValidationError> {
    ///     validate_string(name, &StringRule::new().min_length(2)).into_result()
    /// }
    ///
    /// assert!(check_name("Al").is_ok());
    /// let err = check_name("A").unwrap_err();
    /// assert_eq!(err.message(), "param must be at least 2 characters long.");
    /// ```
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.message {
            Some(message) if !self.is_valid => Err(ValidationError {
                message,
                path: self.path,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A failed validation as an error value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
    path: FieldPath,
}

impl ValidationError {
    /// Explanation of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the failure occurred.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl StdError for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_has_no_message() {
        let r = ValidationResult::valid();
        assert!(r.is_valid());
        assert_eq!(r.message(), None);
        assert!(r.path().is_root());
    }

    #[test]
    fn test_invalid_has_message() {
        let r = ValidationResult::invalid("nope");
        assert!(!r.is_valid());
        assert_eq!(r.message(), Some("nope"));
    }

    #[test]
    fn test_within_builds_path_outside_in() {
        let r = ValidationResult::invalid("bad")
            .within(PathSegment::Field("name".into()))
            .within(PathSegment::Index(2))
            .within(PathSegment::Field("users".into()));

        assert_eq!(r.path().to_string(), "$.users[2].name");
        assert_eq!(r.message(), Some("bad"));
    }

    #[test]
    fn test_within_ignores_valid() {
        let r = ValidationResult::valid().within(PathSegment::Index(0));
        assert!(r.path().is_root());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationResult::valid().into_result(), Ok(()));

        let err = ValidationResult::invalid("bad")
            .within(PathSegment::Field("a".into()))
            .into_result()
            .unwrap_err();
        assert_eq!(err.message(), "bad");
        assert_eq!(err.to_string(), "$.a: bad");
    }

    #[test]
    fn test_error_display_at_root() {
        let err = ValidationResult::invalid("Null is not allowed.")
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "Null is not allowed.");
    }

    #[test]
    fn test_root_display() {
        assert_eq!(FieldPath::root().to_string(), "$");
    }
}
