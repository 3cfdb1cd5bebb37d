//! Integer comparison predicate

use serde_json::Value;

use super::ConditionPredicate;
use crate::error::{ConditionError, PredicateError};

/// Accepts `x<y` or `x>y` where both sides are integers
///
/// Operands are parsed as `i64`. A side outside that range, such as
/// `99999999999999999999<1`, fails with [`ConditionError::NotAnInteger`]
/// just like a non-numeric one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericComparison;

impl NumericComparison {
    fn compare(condition: &str) -> Result<bool, ConditionError> {
        // `<` wins when both appear, so "1<2>3" is reported as a bad x<y
        let operator = if condition.contains('<') {
            '<'
        } else if condition.contains('>') {
            '>'
        } else {
            return Err(ConditionError::Malformed {
                condition: condition.to_string(),
                expected: "x>y or x<y",
            });
        };

        let parts: Vec<&str> = condition.split(operator).collect();
        if parts.len() != 2 {
            return Err(ConditionError::Malformed {
                condition: condition.to_string(),
                expected: if operator == '<' { "x<y" } else { "x>y" },
            });
        }

        let not_int = || ConditionError::NotAnInteger {
            condition: condition.to_string(),
            operator,
        };
        let left: i64 = parts[0].trim().parse().map_err(|_| not_int())?;
        let right: i64 = parts[1].trim().parse().map_err(|_| not_int())?;

        Ok(if operator == '<' {
            left < right
        } else {
            left > right
        })
    }
}

impl ConditionPredicate for NumericComparison {
    fn test(&self, condition: &str, _context: Option<&Value>) -> Result<bool, PredicateError> {
        Ok(Self::compare(condition)?)
    }
}
