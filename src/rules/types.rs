//! Rule file type definitions

use serde::Deserialize;
use serde_json::Value;

use crate::checker::Checker;
use crate::error::CheckError;
use crate::predicate::{ConditionPredicate, PredicateKind};

/// A set of statements evaluated against one data context
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RuleSet {
    /// Name of the rule set
    #[serde(default)]
    pub name: String,
    /// Predicate used for every rule
    #[serde(default)]
    pub predicate: PredicateKind,
    /// Data context handed to the predicate
    pub data: Option<Value>,
    /// Rules, evaluated in order
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// One named statement
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    pub name: String,
    pub statement: String,
    /// Expected result, if the rule doubles as a test
    pub expect: Option<bool>,
}

/// Result of evaluating one rule
#[derive(Debug)]
pub struct RuleOutcome {
    pub name: String,
    pub result: Result<bool, CheckError>,
    pub expect: Option<bool>,
}

impl RuleOutcome {
    /// Evaluation succeeded and agreed with the expectation, if any
    pub fn passed(&self) -> bool {
        match (&self.result, self.expect) {
            (Ok(value), Some(expected)) => *value == expected,
            (Ok(_), None) => true,
            (Err(_), _) => false,
        }
    }
}

impl RuleSet {
    /// Evaluate every rule with this set's predicate and data
    pub fn run(&self) -> Vec<RuleOutcome> {
        let checker = Checker::new(self.predicate.build());
        self.run_with(&checker)
    }

    /// Evaluate every rule with a caller-provided checker
    pub fn run_with<P: ConditionPredicate>(&self, checker: &Checker<P>) -> Vec<RuleOutcome> {
        self.rules
            .iter()
            .map(|rule| {
                let result = checker.check_match(&rule.statement, self.data.as_ref());
                match &result {
                    Ok(value) => log::info!("Rule {}: {}", rule.name, value),
                    Err(e) => log::warn!("Rule {} failed: {}", rule.name, e),
                }
                RuleOutcome {
                    name: rule.name.clone(),
                    result,
                    expect: rule.expect,
                }
            })
            .collect()
    }
}
