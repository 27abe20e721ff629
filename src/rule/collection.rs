//! Rules for arrays and objects

use indexmap::IndexMap;

use super::{CommonRule, Rule, RuleBuilder};
use crate::value::{Object, Value};

/// Constraints for an array.
///
/// Empty arrays fail unless [`ArrayRule::allow_empty`] is set.
#[derive(Debug, Clone, Default)]
pub struct ArrayRule {
    /// Shared fields. `pattern` is not consulted for arrays.
    pub common: CommonRule<[Value]>,
    /// Inclusive lower bound on the element count.
    pub min_length: Option<usize>,
    /// Inclusive upper bound on the element count.
    pub max_length: Option<usize>,
    /// Accept an array with no elements.
    pub allow_empty: bool,
    /// Rule applied to every element.
    pub item_rule: Option<Box<Rule>>,
}

impl ArrayRule {
    /// An empty rule. Only the non-empty check is enforced.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `min` elements.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Allow at most `max` elements.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Accept an empty array.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Validate every element against `rule`.
    pub fn items(mut self, rule: impl Into<Rule>) -> Self {
        self.item_rule = Some(Box::new(rule.into()));
        self
    }
}

impl RuleBuilder for ArrayRule {
    type Input = [Value];

    fn common(&self) -> &CommonRule<[Value]> {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonRule<[Value]> {
        &mut self.common
    }
}

/// Constraints for an object, one rule per named field.
///
/// Fields are checked in the order they were added. Fields of the input
/// without an entry here are never inspected. An entry whose rule is `None`
/// is skipped.
#[derive(Debug, Clone, Default)]
pub struct ObjectRule {
    /// Shared fields. The pattern sees the object's JSON text.
    pub common: CommonRule<Object>,
    children: IndexMap<String, Option<Rule>>,
}

impl ObjectRule {
    /// An empty rule: no field is checked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate field `name` against `rule`.
    ///
    /// Adding a name twice replaces its rule but keeps its position.
    pub fn child(mut self, name: impl Into<String>, rule: impl Into<Rule>) -> Self {
        self.children.insert(name.into(), Some(rule.into()));
        self
    }

    /// Register field `name` without a rule; it is skipped.
    pub fn skip(mut self, name: impl Into<String>) -> Self {
        self.children.insert(name.into(), None);
        self
    }

    /// Field rules in check order.
    pub fn children(&self) -> &IndexMap<String, Option<Rule>> {
        &self.children
    }

    #[cfg(feature = "serde")]
    pub(crate) fn with_children(
        common: CommonRule<Object>,
        children: IndexMap<String, Option<Rule>>,
    ) -> Self {
        ObjectRule { common, children }
    }
}

impl RuleBuilder for ObjectRule {
    type Input = Object;

    fn common(&self) -> &CommonRule<Object> {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonRule<Object> {
        &mut self.common
    }
}
