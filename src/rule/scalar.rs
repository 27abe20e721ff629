//! Rules for booleans, strings, and numbers

use super::{CommonRule, RuleBuilder};

/// Constraints for a boolean: it must equal [`BooleanRule::value`].
#[derive(Debug, Clone)]
pub struct BooleanRule {
    /// Shared fields. `null_allowed` and `pattern` are not consulted.
    pub common: CommonRule<bool>,
    /// The value the input must equal.
    pub value: bool,
}

impl BooleanRule {
    /// A rule requiring the input to equal `value`.
    pub fn new(value: bool) -> Self {
        BooleanRule {
            common: CommonRule::default(),
            value,
        }
    }
}

impl RuleBuilder for BooleanRule {
    type Input = bool;

    fn common(&self) -> &CommonRule<bool> {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonRule<bool> {
        &mut self.common
    }
}

/// Constraints for a string.
///
/// Lengths count Unicode scalar values, not bytes.
#[derive(Debug, Clone, Default)]
pub struct StringRule {
    /// Shared fields.
    pub common: CommonRule<str>,
    /// Inclusive lower bound on length.
    pub min_length: Option<usize>,
    /// Inclusive upper bound on length.
    pub max_length: Option<usize>,
}

impl StringRule {
    /// An empty rule: nothing is enforced.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `min` characters.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Allow at most `max` characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }
}

impl RuleBuilder for StringRule {
    type Input = str;

    fn common(&self) -> &CommonRule<str> {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonRule<str> {
        &mut self.common
    }
}

/// Constraints for a number.
///
/// Numbers are checked as `f64`. An integer beyond 2^53 is rounded before
/// the bounds are compared, so bounds near it are approximate. Messages and
/// the pattern use `f64`'s `Display`, which never switches to exponent
/// form: `1e21` reads `1000000000000000000000`.
#[derive(Debug, Clone, Default)]
pub struct NumberRule {
    /// Shared fields. The pattern sees the number's decimal form.
    pub common: CommonRule<f64>,
    /// Inclusive lower bound.
    pub min: Option<f64>,
    /// Inclusive upper bound.
    pub max: Option<f64>,
}

impl NumberRule {
    /// An empty rule: nothing is enforced.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the value to be at least `min`.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Require the value to be at most `max`.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

impl RuleBuilder for NumberRule {
    type Input = f64;

    fn common(&self) -> &CommonRule<f64> {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonRule<f64> {
        &mut self.common
    }
}
