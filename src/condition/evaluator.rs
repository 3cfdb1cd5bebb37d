//! Expression evaluator

use serde_json::Value;

use super::ast::Expression;
use super::trace::{Junction, TraceEvent};
use crate::error::PredicateError;
use crate::predicate::ConditionPredicate;

/// Evaluate an expression, resolving atoms through `predicate`.
///
/// `and`/`or` short-circuit: the right operand is never visited when the left
/// one decides the result. The first predicate error aborts evaluation.
pub fn evaluate<P>(
    expr: &Expression,
    predicate: &P,
    context: Option<&Value>,
) -> Result<bool, PredicateError>
where
    P: ConditionPredicate + ?Sized,
{
    evaluate_traced(expr, predicate, context, &mut |_| {})
}

/// Same as [`evaluate`], reporting each step to `sink`
pub fn evaluate_traced<P>(
    expr: &Expression,
    predicate: &P,
    context: Option<&Value>,
    sink: &mut dyn FnMut(&TraceEvent<'_>),
) -> Result<bool, PredicateError>
where
    P: ConditionPredicate + ?Sized,
{
    match expr {
        Expression::Atom(condition) => {
            let value = predicate.test(condition, context)?;
            log::trace!("condition {} => {}", condition, value);
            sink(&TraceEvent::Atom { condition, value });
            Ok(value)
        }
        Expression::Not(inner) => Ok(!evaluate_traced(inner, predicate, context, sink)?),
        Expression::And(left, right) => {
            if !evaluate_traced(left, predicate, context, sink)? {
                sink(&TraceEvent::ShortCircuit {
                    junction: Junction::And,
                    value: false,
                    skipped: right,
                });
                return Ok(false);
            }
            evaluate_traced(right, predicate, context, sink)
        }
        Expression::Or(left, right) => {
            if evaluate_traced(left, predicate, context, sink)? {
                sink(&TraceEvent::ShortCircuit {
                    junction: Junction::Or,
                    value: true,
                    skipped: right,
                });
                return Ok(true);
            }
            evaluate_traced(right, predicate, context, sink)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::parser::parse_statement;
    use crate::error::ConditionError;
    use crate::predicate::{from_fn, NumericComparison};
    use serde_json::json;
    use std::cell::RefCell;

    /// Looks atoms up as booleans in the context object
    fn lookup(condition: &str, context: Option<&Value>) -> Result<bool, PredicateError> {
        context
            .and_then(|c| c.get(condition))
            .and_then(Value::as_bool)
            .ok_or_else(|| format!("no value for {}", condition).into())
    }

    fn eval(statement: &str, context: &Value) -> bool {
        let expr = parse_statement(statement).unwrap();
        evaluate(&expr, &from_fn(lookup), Some(context)).unwrap()
    }

    #[test]
    fn test_atoms() {
        let ctx = json!({"t": true, "f": false});
        assert!(eval("t", &ctx));
        assert!(!eval("f", &ctx));
        assert!(eval("not f", &ctx));
    }

    #[test]
    fn test_truth_tables() {
        for a in [false, true] {
            for b in [false, true] {
                let ctx = json!({"a": a, "b": b});
                assert_eq!(eval("a and b", &ctx), a && b);
                assert_eq!(eval("a or b", &ctx), a || b);
                assert_eq!(eval("not a or b", &ctx), !a || b);
                assert_eq!(eval("not (a or b)", &ctx), !(a || b));
            }
        }
    }

    #[test]
    fn test_numeric_sample() {
        let expr =
            parse_statement("1<2 and (1<2 and (3>4 or 6<7)) or (0<1 and 10>10)").unwrap();
        assert!(evaluate(&expr, &NumericComparison, None).unwrap());
    }

    #[test]
    fn test_short_circuit_skips_right_operand() {
        let seen = RefCell::new(Vec::new());
        let recorder = from_fn(|condition: &str, _: Option<&Value>| {
            seen.borrow_mut().push(condition.to_string());
            Ok(condition == "yes")
        });

        let expr = parse_statement("no and x").unwrap();
        assert!(!evaluate(&expr, &recorder, None).unwrap());
        let expr = parse_statement("yes or y").unwrap();
        assert!(evaluate(&expr, &recorder, None).unwrap());

        assert_eq!(*seen.borrow(), vec!["no", "yes"]);
    }

    #[test]
    fn test_error_aborts_evaluation() {
        let seen = RefCell::new(Vec::new());
        let failing = from_fn(|condition: &str, _: Option<&Value>| {
            seen.borrow_mut().push(condition.to_string());
            if condition == "bad" {
                return Err(ConditionError::Malformed {
                    condition: condition.to_string(),
                    expected: "good",
                }
                .into());
            }
            Ok(true)
        });

        let expr = parse_statement("ok and bad and later").unwrap();
        let err = evaluate(&expr, &failing, None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConditionError>(),
            Some(&ConditionError::Malformed {
                condition: "bad".to_string(),
                expected: "good",
            })
        );
        assert_eq!(*seen.borrow(), vec!["ok", "bad"]);
    }

    #[test]
    fn test_traced_events() {
        let expr = parse_statement("1<2 or 3>4").unwrap();
        let mut events = Vec::new();
        let value = evaluate_traced(&expr, &NumericComparison, None, &mut |event| {
            events.push(event.to_string())
        })
        .unwrap();

        assert!(value);
        assert_eq!(
            events,
            vec!["1<2 => true", "or short-circuit on true, skipped 3>4"]
        );
    }
}
