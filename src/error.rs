// SPDX-License-Identifier: MIT

//! Typed error handling for verdict-rs
//!
//! Parsing failures, predicate failures and rule-file loading failures each
//! get their own type; `CheckError` is what the top-level `check_match`
//! surfaces to callers.

use std::fmt;

use thiserror::Error;

use crate::condition::Token;

/// Error raised by a condition predicate.
///
/// The core never inspects or translates it, it is handed back to the caller
/// exactly as the predicate produced it.
pub type PredicateError = Box<dyn std::error::Error + Send + Sync>;

/// Statement could not be turned into an expression tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An opening parenthesis was never closed, or a closing one has no opener
    #[error("unmatched parenthesis at token {position}")]
    UnmatchedParenthesis { position: usize },

    /// A token appeared where the grammar does not allow it
    #[error("unexpected {} at token {position}, expected {expected}", describe(.found))]
    UnexpectedToken {
        position: usize,
        found: Option<Token>,
        expected: &'static str,
    },

    /// Nothing to parse
    #[error("empty expression")]
    EmptyExpression,

    /// A complete expression was followed by more tokens
    #[error("trailing token '{found}' at token {position}")]
    TrailingTokens { position: usize, found: Token },

    /// Parentheses or `not` chains nest deeper than the configured limit
    #[error("nesting deeper than {limit} at token {position}")]
    NestingTooDeep { position: usize, limit: usize },
}

fn describe(found: &Option<Token>) -> String {
    match found {
        Some(token) => format!("'{}'", token),
        None => "end of statement".to_string(),
    }
}

/// Field-less discriminant of [`ParseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnmatchedParenthesis,
    UnexpectedToken,
    EmptyExpression,
    TrailingTokens,
    NestingTooDeep,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::UnmatchedParenthesis { .. } => ParseErrorKind::UnmatchedParenthesis,
            ParseError::UnexpectedToken { .. } => ParseErrorKind::UnexpectedToken,
            ParseError::EmptyExpression => ParseErrorKind::EmptyExpression,
            ParseError::TrailingTokens { .. } => ParseErrorKind::TrailingTokens,
            ParseError::NestingTooDeep { .. } => ParseErrorKind::NestingTooDeep,
        }
    }

    /// Token index the error points at, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnmatchedParenthesis { position }
            | ParseError::UnexpectedToken { position, .. }
            | ParseError::TrailingTokens { position, .. }
            | ParseError::NestingTooDeep { position, .. } => Some(*position),
            ParseError::EmptyExpression => None,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseErrorKind::UnmatchedParenthesis => "unmatched-parenthesis",
            ParseErrorKind::UnexpectedToken => "unexpected-token",
            ParseErrorKind::EmptyExpression => "empty-expression",
            ParseErrorKind::TrailingTokens => "trailing-tokens",
            ParseErrorKind::NestingTooDeep => "nesting-too-deep",
        };
        write!(f, "{}", name)
    }
}

/// Error returned by `check_match`
#[derive(Debug, Error)]
pub enum CheckError {
    /// The statement is malformed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The predicate rejected an atomic condition
    #[error(transparent)]
    Predicate(PredicateError),
}

impl CheckError {
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            CheckError::Parse(err) => Some(err),
            CheckError::Predicate(_) => None,
        }
    }
}

/// Errors raised by the built-in predicates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    /// Condition text does not follow the predicate's syntax
    #[error("condition \"{condition}\" is not {expected}")]
    Malformed {
        condition: String,
        expected: &'static str,
    },

    /// One side of a numeric comparison is not an integer
    #[error("condition \"{condition}\" is not (int){operator}(int)")]
    NotAnInteger { condition: String, operator: char },

    /// The predicate needs a data context and none was given
    #[error("condition \"{condition}\" needs a data context")]
    MissingContext { condition: String },

    /// Top-level key is absent from the data context
    #[error("{key} in {condition} not recognised")]
    UnknownKey { key: String, condition: String },

    /// Nested attribute is absent below a known key
    #[error("attr {attribute} in {condition} not recognised")]
    UnknownAttribute {
        attribute: String,
        condition: String,
    },
}

/// Errors raised while loading rule or data files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
