//! Rule file loader - YAML/JSON loading and parsing

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::types::RuleSet;
use crate::error::LoadError;

/// Loads rule sets and data contexts from disk
pub struct RuleLoader;

impl RuleLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a rule set from a YAML (or JSON) file
    pub fn load_rules<P: AsRef<Path>>(&self, path: P) -> Result<RuleSet, LoadError> {
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse a rule set from a YAML string
    pub fn parse_yaml(content: &str) -> Result<RuleSet, LoadError> {
        let set: RuleSet = serde_yaml::from_str(content)?;
        Ok(set)
    }

    /// Load a data context; `.json` files use the JSON parser, anything else YAML
    pub fn load_data<P: AsRef<Path>>(&self, path: P) -> Result<Value, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Self::parse_data_yaml(&content)
        }
    }

    /// Parse a data context from a YAML string
    pub fn parse_data_yaml(content: &str) -> Result<Value, LoadError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl Default for RuleLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateKind;
    use serde_json::json;

    #[test]
    fn test_parse_rule_set() {
        let yaml = r#"
name: users
predicate: attribute
data:
  user1:
    name: alice
    height: 1.8
  user2:
    name: carol
rules:
  - name: alice-present
    statement: "user1.name=alice or user2.name=bob"
    expect: true
  - name: no-expectation
    statement: "user1.height=1.8"
"#;
        let set = RuleLoader::parse_yaml(yaml).unwrap();
        assert_eq!(set.name, "users");
        assert_eq!(set.predicate, PredicateKind::Attribute);
        assert_eq!(set.data.as_ref().unwrap()["user1"]["height"], json!(1.8));
        assert_eq!(set.rules.len(), 2);
        assert_eq!(set.rules[0].expect, Some(true));
        assert_eq!(set.rules[1].expect, None);

        assert!(set.run().iter().all(|outcome| outcome.passed()));
    }

    #[test]
    fn test_defaults() {
        let set = RuleLoader::parse_yaml("rules:\n  - name: r\n    statement: \"1<2\"\n").unwrap();
        assert_eq!(set.predicate, PredicateKind::Numeric);
        assert!(set.data.is_none());
        assert!(set.name.is_empty());
    }

    #[test]
    fn test_json_is_accepted() {
        let set = RuleLoader::parse_yaml(
            r#"{"predicate": "dry-run", "rules": [{"name": "x", "statement": "a or b"}]}"#,
        )
        .unwrap();
        assert_eq!(set.predicate, PredicateKind::DryRun);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = RuleLoader::parse_yaml("rules: [name: x").unwrap_err();
        assert!(matches!(err, LoadError::Yaml(_)));
    }

    #[test]
    fn test_parse_data_yaml() {
        let data = RuleLoader::parse_data_yaml("user1:\n  name: alice\n").unwrap();
        assert_eq!(data, json!({"user1": {"name": "alice"}}));
    }

    #[test]
    fn test_missing_file() {
        let err = RuleLoader::new()
            .load_data("/nonexistent/verdict/data.json")
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
