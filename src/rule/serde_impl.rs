//! Serde support for rules (feature-gated)
//!
//! Rules load from a JSON document with a `"type"` tag and camelCase
//! fields. Patterns are written as regex source and compiled while the
//! document is read, so a bad pattern fails deserialization. Custom
//! validators cannot be written down; they are dropped on serialization
//! and absent after deserialization.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "serde")]
//! # {
//! use serde_json::json;
//! use shapeguard::prelude::*;
//!
//! let rule: Rule = serde_json::from_str(r#"{
//!     "type": "object",
//!     "required": true,
//!     "childrens": {
//!         "name": { "type": "string", "minLength": 2, "pattern": "^[A-Z]" },
//!         "tags": {
//!             "type": "array",
//!             "allowEmpty": true,
//!             "itemValidationRules": { "type": "string", "maxLength": 16 }
//!         }
//!     }
//! }"#).unwrap();
//!
//! assert!(validate_value(&json!({ "name": "Ada", "tags": [] }), &rule).is_valid());
//! assert_eq!(
//!     validate_value(&json!({ "name": "ada" }), &rule).message(),
//!     Some("param does not match the required pattern."),
//! );
//! # }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ArrayRule, BooleanRule, CommonRule, NumberRule, ObjectRule, Rule, StringRule};
use crate::error::RuleError;
use crate::pattern::Pattern;

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommonDoc {
    #[serde(default, skip_serializing_if = "is_false")]
    required: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    null_allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
enum RuleDoc {
    Boolean {
        #[serde(flatten)]
        common: CommonDoc,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<bool>,
    },
    String {
        #[serde(flatten)]
        common: CommonDoc,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_length: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
    Number {
        #[serde(flatten)]
        common: CommonDoc,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Array {
        #[serde(flatten)]
        common: CommonDoc,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_length: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
        #[serde(default, skip_serializing_if = "is_false")]
        allow_empty: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item_validation_rules: Option<Box<RuleDoc>>,
    },
    Object {
        #[serde(flatten)]
        common: CommonDoc,
        #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
        childrens: IndexMap<String, Option<RuleDoc>>,
    },
}

fn common_from_doc<T: ?Sized>(doc: CommonDoc) -> Result<CommonRule<T>, RuleError> {
    Ok(CommonRule {
        required: doc.required,
        null_allowed: doc.null_allowed,
        error_message: doc.error_message,
        pattern: doc.pattern.as_deref().map(Pattern::new).transpose()?,
        custom_validator: None,
    })
}

fn common_to_doc<T: ?Sized>(common: &CommonRule<T>) -> CommonDoc {
    CommonDoc {
        required: common.required,
        null_allowed: common.null_allowed,
        error_message: common.error_message.clone(),
        pattern: common.pattern.as_ref().map(|p| p.as_str().to_string()),
    }
}

impl TryFrom<RuleDoc> for Rule {
    type Error = RuleError;

    fn try_from(doc: RuleDoc) -> Result<Self, Self::Error> {
        let rule = match doc {
            RuleDoc::Boolean { common, value } => Rule::Boolean(BooleanRule {
                common: common_from_doc(common)?,
                value: value.ok_or(RuleError::MissingField {
                    rule: "boolean",
                    field: "value",
                })?,
            }),
            RuleDoc::String {
                common,
                min_length,
                max_length,
            } => Rule::String(StringRule {
                common: common_from_doc(common)?,
                min_length,
                max_length,
            }),
            RuleDoc::Number { common, min, max } => Rule::Number(NumberRule {
                common: common_from_doc(common)?,
                min,
                max,
            }),
            RuleDoc::Array {
                common,
                min_length,
                max_length,
                allow_empty,
                item_validation_rules,
            } => Rule::Array(ArrayRule {
                common: common_from_doc(common)?,
                min_length,
                max_length,
                allow_empty,
                item_rule: item_validation_rules
                    .map(|doc| Rule::try_from(*doc).map(Box::new))
                    .transpose()?,
            }),
            RuleDoc::Object { common, childrens } => {
                let children = childrens
                    .into_iter()
                    .map(|(name, doc)| -> Result<_, RuleError> {
                        Ok((name, doc.map(Rule::try_from).transpose()?))
                    })
                    .collect::<Result<IndexMap<_, _>, RuleError>>()?;
                Rule::Object(ObjectRule::with_children(common_from_doc(common)?, children))
            }
        };
        Ok(rule)
    }
}

impl From<&Rule> for RuleDoc {
    fn from(rule: &Rule) -> Self {
        match rule {
            Rule::Boolean(r) => RuleDoc::Boolean {
                common: common_to_doc(&r.common),
                value: Some(r.value),
            },
            Rule::String(r) => RuleDoc::String {
                common: common_to_doc(&r.common),
                min_length: r.min_length,
                max_length: r.max_length,
            },
            Rule::Number(r) => RuleDoc::Number {
                common: common_to_doc(&r.common),
                min: r.min,
                max: r.max,
            },
            Rule::Array(r) => RuleDoc::Array {
                common: common_to_doc(&r.common),
                min_length: r.min_length,
                max_length: r.max_length,
                allow_empty: r.allow_empty,
                item_validation_rules: r
                    .item_rule
                    .as_deref()
                    .map(|item| Box::new(RuleDoc::from(item))),
            },
            Rule::Object(r) => RuleDoc::Object {
                common: common_to_doc(&r.common),
                childrens: r
                    .children()
                    .iter()
                    .map(|(name, child)| (name.clone(), child.as_ref().map(RuleDoc::from)))
                    .collect(),
            },
        }
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RuleDoc::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = RuleDoc::deserialize(deserializer)?;
        Rule::try_from(doc).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::validate_value;
    use crate::rule::RuleBuilder;
    use serde_json::json;

    #[test]
    fn test_deserialize_object_rule() {
        let rule: Rule = serde_json::from_value(json!({
            "type": "object",
            "childrens": {
                "a": { "type": "string", "minLength": 2 },
                "b": { "type": "number", "min": 10 },
                "c": null
            }
        }))
        .unwrap();

        let Rule::Object(object) = &rule else {
            panic!("expected object rule, got {:?}", rule);
        };
        let keys: Vec<&str> = object.children().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);

        let result = validate_value(&json!({ "a": "x", "b": 5, "c": 1 }), &rule);
        assert_eq!(
            result.message(),
            Some("param must be at least 2 characters long.")
        );
    }

    #[test]
    fn test_deserialize_array_rule() {
        let rule: Rule = serde_json::from_value(json!({
            "type": "array",
            "allowEmpty": true,
            "maxLength": 3,
            "itemValidationRules": { "type": "boolean", "value": true }
        }))
        .unwrap();

        assert!(validate_value(&json!([]), &rule).is_valid());
        assert!(validate_value(&json!([true, true]), &rule).is_valid());
        assert!(!validate_value(&json!([true, false]), &rule).is_valid());
    }

    #[test]
    fn test_deserialize_common_fields() {
        let rule: Rule = serde_json::from_value(json!({
            "type": "string",
            "required": true,
            "nullAllowed": true,
            "errorMessage": "bad code",
            "pattern": "^[A-Z]{3}$"
        }))
        .unwrap();

        assert!(validate_value(&json!(null), &rule).is_valid());
        assert!(validate_value(&json!("ABC"), &rule).is_valid());
        assert_eq!(validate_value(&json!("abc"), &rule).message(), Some("bad code"));
    }

    #[test]
    fn test_boolean_requires_value() {
        let err = serde_json::from_value::<Rule>(json!({ "type": "boolean" })).unwrap_err();
        assert!(err
            .to_string()
            .contains("boolean rule is missing required field 'value'"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = serde_json::from_value::<Rule>(json!({
            "type": "string",
            "pattern": "(open"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid pattern '(open'"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(serde_json::from_value::<Rule>(json!({ "type": "date" })).is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let doc = json!({
            "type": "object",
            "required": true,
            "childrens": {
                "score": { "type": "number", "min": 0.5, "max": 99.5 },
                "tags": {
                    "type": "array",
                    "allowEmpty": true,
                    "itemValidationRules": { "type": "string", "pattern": "^#" }
                },
                "skipped": null
            }
        });

        let rule: Rule = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(serde_json::to_value(&rule).unwrap(), doc);
    }

    #[test]
    fn test_serialize_drops_custom_validator() {
        let rule: Rule = StringRule::new().custom(|s: &str| !s.is_empty()).into();
        assert_eq!(serde_json::to_value(&rule).unwrap(), json!({ "type": "string" }));
    }
}
