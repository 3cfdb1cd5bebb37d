// SPDX-License-Identifier: MIT

//! Key/attribute equality predicate

use serde_json::Value;

use super::ConditionPredicate;
use crate::error::{ConditionError, PredicateError};

/// Accepts `key.attr=value`, comparing against the data context.
///
/// The left side is a dotted path (`user1.address.city=paris` works too). The
/// first segment must be a top-level key of the context and every following
/// segment must exist. Strings compare by content, numbers and booleans by
/// their JSON rendering; anything else never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeEquality;

impl AttributeEquality {
    fn compare(condition: &str, context: Option<&Value>) -> Result<bool, ConditionError> {
        let malformed = || ConditionError::Malformed {
            condition: condition.to_string(),
            expected: "key.attr=value",
        };

        let (path, expected) = condition.split_once('=').ok_or_else(malformed)?;
        if expected.contains('=') {
            return Err(malformed());
        }
        let (key, attributes) = path.split_once('.').ok_or_else(malformed)?;

        let data = context.ok_or_else(|| ConditionError::MissingContext {
            condition: condition.to_string(),
        })?;

        let mut current = data.get(key).ok_or_else(|| ConditionError::UnknownKey {
            key: key.to_string(),
            condition: condition.to_string(),
        })?;
        for attribute in attributes.split('.') {
            current = current
                .get(attribute)
                .ok_or_else(|| ConditionError::UnknownAttribute {
                    attribute: attribute.to_string(),
                    condition: condition.to_string(),
                })?;
        }

        Ok(matches(current, expected))
    }
}

fn matches(value: &Value, expected: &str) -> bool {
    match value {
        Value::String(s) => s == expected,
        Value::Number(_) | Value::Bool(_) => value.to_string() == expected,
        _ => false,
    }
}

impl ConditionPredicate for AttributeEquality {
    fn test(&self, condition: &str, context: Option<&Value>) -> Result<bool, PredicateError> {
        Ok(Self::compare(condition, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn users() -> Value {
        json!({
            "user1": {"name": "alice", "height": 1.8, "admin": true},
            "user2": {"name": "bob", "height": 1.65, "address": {"city": "paris"}},
        })
    }

    #[test]
    fn test_string_equality() {
        let data = users();
        assert_eq!(AttributeEquality::compare("user1.name=alice", Some(&data)), Ok(true));
        assert_eq!(AttributeEquality::compare("user2.name=alice", Some(&data)), Ok(false));
    }

    #[test]
    fn test_scalar_rendering() {
        let data = users();
        assert_eq!(AttributeEquality::compare("user1.height=1.8", Some(&data)), Ok(true));
        assert_eq!(AttributeEquality::compare("user1.admin=true", Some(&data)), Ok(true));
        assert_eq!(AttributeEquality::compare("user2.address=paris", Some(&data)), Ok(false));
    }

    #[test]
    fn test_nested_path() {
        let data = users();
        assert_eq!(
            AttributeEquality::compare("user2.address.city=paris", Some(&data)),
            Ok(true)
        );
    }

    #[test]
    fn test_unknown_key() {
        let data = users();
        assert_eq!(
            AttributeEquality::compare("user3.name=carol", Some(&data)),
            Err(ConditionError::UnknownKey {
                key: "user3".to_string(),
                condition: "user3.name=carol".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_attribute() {
        let data = users();
        let err = AttributeEquality::compare("user1.age=30", Some(&data)).unwrap_err();
        assert_eq!(err.to_string(), "attr age in user1.age=30 not recognised");
    }

    #[test]
    fn test_malformed() {
        let data = users();
        for condition in ["user1", "user1name=alice", "user1.name", "a.b=c=d"] {
            assert_eq!(
                AttributeEquality::compare(condition, Some(&data)),
                Err(ConditionError::Malformed {
                    condition: condition.to_string(),
                    expected: "key.attr=value",
                }),
                "condition: {}",
                condition
            );
        }
    }

    #[test]
    fn test_missing_context() {
        assert_eq!(
            AttributeEquality::compare("user1.name=alice", None),
            Err(ConditionError::MissingContext {
                condition: "user1.name=alice".to_string(),
            })
        );
    }
}
