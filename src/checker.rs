// SPDX-License-Identifier: MIT

//! Statement checker: tokenize, parse and evaluate in one call

use std::fmt;

use serde_json::Value;

use crate::condition::{
    evaluate_traced, parse_with_limits, tokenize, Expression, ParseLimits, TraceEvent, TraceHook,
};
use crate::error::{CheckError, ParseError};
use crate::predicate::{ConditionPredicate, NumericComparison};

/// Evaluates statements with a fixed predicate.
///
/// Holds no per-call state, so one checker can serve any number of calls
/// (concurrently too, if the predicate is `Sync`).
pub struct Checker<P> {
    predicate: P,
    limits: ParseLimits,
    trace: Option<TraceHook>,
}

impl<P: ConditionPredicate> Checker<P> {
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            limits: ParseLimits::default(),
            trace: None,
        }
    }

    /// Install a hook that receives every parse and evaluation step
    pub fn with_trace<F>(mut self, hook: F) -> Self
    where
        F: Fn(&TraceEvent<'_>) + Send + Sync + 'static,
    {
        self.trace = Some(Box::new(hook));
        self
    }

    pub fn with_limits(mut self, limits: ParseLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Parse a statement without evaluating it
    pub fn parse(&self, statement: &str) -> Result<Expression, ParseError> {
        let tokens = tokenize(statement);
        self.emit(&TraceEvent::Tokenized {
            statement,
            count: tokens.len(),
        });

        let expression = parse_with_limits(&tokens, self.limits)?;
        log::debug!("parsed \"{}\" as {}", statement, expression);
        self.emit(&TraceEvent::Parsed {
            expression: &expression,
        });
        Ok(expression)
    }

    /// Decide whether `statement` holds for `context`.
    ///
    /// Returns the first parse or predicate error encountered; there is no
    /// fallback value.
    pub fn check_match(&self, statement: &str, context: Option<&Value>) -> Result<bool, CheckError> {
        let expression = self.parse(statement)?;
        let result = evaluate_traced(&expression, &self.predicate, context, &mut |event| {
            self.emit(event)
        })
        .map_err(CheckError::Predicate)?;
        log::debug!("\"{}\" => {}", statement, result);
        Ok(result)
    }

    fn emit(&self, event: &TraceEvent<'_>) {
        if let Some(hook) = &self.trace {
            hook(event);
        }
    }
}

impl Default for Checker<NumericComparison> {
    fn default() -> Self {
        Self::new(NumericComparison)
    }
}

impl<P: fmt::Debug> fmt::Debug for Checker<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("predicate", &self.predicate)
            .field("limits", &self.limits)
            .field("trace", &self.trace.is_some())
            .finish()
    }
}

/// Check a statement with the integer comparison predicate (`x<y`, `x>y`)
pub fn check_match(statement: &str, context: Option<&Value>) -> Result<bool, CheckError> {
    Checker::default().check_match(statement, context)
}
