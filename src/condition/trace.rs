//! Observability hook for parse and evaluation steps

use std::fmt;

use super::ast::Expression;

/// Which binary operator cut evaluation short
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Junction {
    And,
    Or,
}

/// One step reported to a trace hook
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent<'a> {
    /// Statement split into `count` tokens
    Tokenized { statement: &'a str, count: usize },
    /// Statement parsed into a tree
    Parsed { expression: &'a Expression },
    /// Predicate resolved an atom
    Atom { condition: &'a str, value: bool },
    /// Right operand skipped because the left one decided the result
    ShortCircuit {
        junction: Junction,
        value: bool,
        skipped: &'a Expression,
    },
}

/// Hook installed on a `Checker`
pub type TraceHook = Box<dyn Fn(&TraceEvent<'_>) + Send + Sync>;

impl fmt::Display for TraceEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Tokenized { statement, count } => {
                write!(f, "tokenized \"{}\" into {} tokens", statement, count)
            }
            TraceEvent::Parsed { expression } => write!(f, "parsed {}", expression),
            TraceEvent::Atom { condition, value } => write!(f, "{} => {}", condition, value),
            TraceEvent::ShortCircuit {
                junction,
                value,
                skipped,
            } => {
                let op = match junction {
                    Junction::And => "and",
                    Junction::Or => "or",
                };
                write!(f, "{} short-circuit on {}, skipped {}", op, value, skipped)
            }
        }
    }
}
