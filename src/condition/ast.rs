// SPDX-License-Identifier: MIT

//! Abstract Syntax Tree for boolean statements

use std::fmt;

/// A parsed statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Unparsed condition text, resolved by the predicate
    Atom(String),
    /// Logical NOT
    Not(Box<Expression>),
    /// Logical AND (conjunction)
    And(Box<Expression>, Box<Expression>),
    /// Logical OR (disjunction)
    Or(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn atom(text: impl Into<String>) -> Self {
        Expression::Atom(text.into())
    }

    pub fn not(operand: Expression) -> Self {
        Expression::Not(Box::new(operand))
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    /// Condition texts in left-to-right order
    pub fn atoms(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_atoms(&mut out);
        out
    }

    fn collect_atoms<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expression::Atom(text) => out.push(text),
            Expression::Not(inner) => inner.collect_atoms(out),
            Expression::And(left, right) | Expression::Or(left, right) => {
                left.collect_atoms(out);
                right.collect_atoms(out);
            }
        }
    }
}

/// Fully parenthesized form, e.g. `((a and b) or not c)`
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Atom(text) => write!(f, "{}", text),
            Expression::Not(inner) => write!(f, "not {}", inner),
            Expression::And(left, right) => write!(f, "({} and {})", left, right),
            Expression::Or(left, right) => write!(f, "({} or {})", left, right),
        }
    }
}
