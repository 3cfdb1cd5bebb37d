// SPDX-License-Identifier: MIT

//! Boolean statement parsing and evaluation
//!
//! Statements combine opaque conditions with `and`, `or`, `not` and
//! parentheses:
//! - `conditionA and conditionB`
//! - `conditionA and (conditionB or not conditionC)`
//!
//! `not` binds tightest, then `and`, then `or`; binary operators associate
//! left to right.

mod ast;
mod evaluator;
mod parser;
mod token;
mod trace;


pub use ast::Expression;
pub use evaluator::{evaluate, evaluate_traced};
pub use parser::{parse, parse_statement, parse_with_limits, ParseLimits};
pub use token::{tokenize, Token};
pub use trace::{Junction, TraceEvent, TraceHook};
