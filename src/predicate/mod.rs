// SPDX-License-Identifier: MIT

//! Condition predicates
//!
//! A predicate gives meaning to the opaque condition text found at the leaves
//! of a statement. Built-in predicates:
//! - `NumericComparison` - `x<y` / `x>y` on integers
//! - `AttributeEquality` - `key.attr=value` against a data context
//! - `DryRun` - accepts everything, for syntax-only checks

mod attribute;
mod numeric;

use std::sync::Arc;

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Value;

use crate::error::PredicateError;

pub use attribute::AttributeEquality;
pub use numeric::NumericComparison;

/// Resolves one atomic condition to a boolean.
///
/// Implementations decide the condition syntax entirely; the core only hands
/// over the text and the optional data context.
pub trait ConditionPredicate {
    fn test(&self, condition: &str, context: Option<&Value>) -> Result<bool, PredicateError>;
}

impl<P: ConditionPredicate + ?Sized> ConditionPredicate for &P {
    fn test(&self, condition: &str, context: Option<&Value>) -> Result<bool, PredicateError> {
        (**self).test(condition, context)
    }
}

impl<P: ConditionPredicate + ?Sized> ConditionPredicate for Box<P> {
    fn test(&self, condition: &str, context: Option<&Value>) -> Result<bool, PredicateError> {
        (**self).test(condition, context)
    }
}

impl<P: ConditionPredicate + ?Sized> ConditionPredicate for Arc<P> {
    fn test(&self, condition: &str, context: Option<&Value>) -> Result<bool, PredicateError> {
        (**self).test(condition, context)
    }
}

/// Predicate backed by a closure, see [`from_fn`]
#[derive(Clone, Copy)]
pub struct FnPredicate<F>(F);

/// Wrap a closure as a predicate
pub fn from_fn<F>(f: F) -> FnPredicate<F>
where
    F: Fn(&str, Option<&Value>) -> Result<bool, PredicateError>,
{
    FnPredicate(f)
}

impl<F> ConditionPredicate for FnPredicate<F>
where
    F: Fn(&str, Option<&Value>) -> Result<bool, PredicateError>,
{
    fn test(&self, condition: &str, context: Option<&Value>) -> Result<bool, PredicateError> {
        (self.0)(condition, context)
    }
}

/// Accepts every condition without looking at it
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRun;

impl ConditionPredicate for DryRun {
    fn test(&self, condition: &str, _context: Option<&Value>) -> Result<bool, PredicateError> {
        log::debug!("dry run, not evaluating {}", condition);
        Ok(true)
    }
}

/// Built-in predicate selector used by the CLI and rule files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PredicateKind {
    /// `x<y` / `x>y` integer comparisons
    #[default]
    Numeric,
    /// `key.attr=value` lookups in the data context
    Attribute,
    /// Parse only, every condition is true
    DryRun,
}

impl PredicateKind {
    pub fn build(self) -> Box<dyn ConditionPredicate + Send + Sync> {
        match self {
            PredicateKind::Numeric => Box::new(NumericComparison),
            PredicateKind::Attribute => Box::new(AttributeEquality),
            PredicateKind::DryRun => Box::new(DryRun),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dry_run_accepts_anything() {
        assert!(DryRun.test("not even a condition", None).unwrap());
    }

    #[test]
    fn test_from_fn() {
        let even = from_fn(|condition: &str, _: Option<&Value>| {
            let n: i64 = condition.parse()?;
            Ok(n % 2 == 0)
        });
        assert!(even.test("4", None).unwrap());
        assert!(!even.test("3", None).unwrap());
        assert!(even.test("x", None).is_err());
    }

    #[test]
    fn test_kind_build() {
        let data = json!({"user1": {"name": "alice"}});
        assert!(PredicateKind::Numeric.build().test("1<2", None).unwrap());
        assert!(PredicateKind::Attribute
            .build()
            .test("user1.name=alice", Some(&data))
            .unwrap());
        assert!(PredicateKind::DryRun.build().test("???", None).unwrap());
    }

    #[test]
    fn test_kind_deserialize() {
        let kind: PredicateKind = serde_yaml::from_str("dry-run").unwrap();
        assert_eq!(kind, PredicateKind::DryRun);
        let kind: PredicateKind = serde_json::from_str("\"attribute\"").unwrap();
        assert_eq!(kind, PredicateKind::Attribute);
    }

    #[test]
    fn test_blanket_impls() {
        let boxed: Box<dyn ConditionPredicate> = Box::new(NumericComparison);
        assert!(boxed.test("1<2", None).unwrap());
        let shared = Arc::new(NumericComparison);
        assert!(!shared.test("2<1", None).unwrap());
    }
}
