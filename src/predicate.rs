//! Caller-supplied predicates for the custom validation step
//!
//! Every rule may carry a custom validator: a predicate over the value the
//! rule applies to. Any `Fn(&T) -> bool + Send + Sync` closure is a
//! predicate.
//!
//! # Example
//!
//! ```rust
//! use shapeguard::predicate::{CustomValidator, Predicate};
//!
//! let even = CustomValidator::<f64>::new(|n: &f64| n % 2.0 == 0.0);
//! assert!(even.check(&4.0));
//! assert!(!even.check(&3.0));
//! ```

use std::fmt;
use std::sync::Arc;

/// A predicate over values of type T.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// A shared, type-erased predicate stored on a rule.
///
/// Cloning is cheap; clones share the same predicate.
pub struct CustomValidator<T: ?Sized>(Arc<dyn Predicate<T>>);

impl<T: ?Sized> CustomValidator<T> {
    /// Wrap a predicate.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        CustomValidator(Arc::new(predicate))
    }
}

impl<T: ?Sized> Predicate<T> for CustomValidator<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value)
    }
}

impl<T: ?Sized> Clone for CustomValidator<T> {
    fn clone(&self) -> Self {
        CustomValidator(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> fmt::Debug for CustomValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomValidator(..)")
    }
}
