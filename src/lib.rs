// SPDX-License-Identifier: MIT

//! verdict-rs - evaluate boolean statements over pluggable conditions
//!
//! ```
//! use verdict_rs::check_match;
//!
//! assert!(check_match("1<2 and not (3>4 or 5<1)", None).unwrap());
//! ```

pub mod checker;
pub mod condition;
pub mod error;
pub mod predicate;
pub mod rules;

pub use checker::{check_match, Checker};
pub use condition::{Expression, Token};
pub use error::{CheckError, ConditionError, LoadError, ParseError, ParseErrorKind, PredicateError};
pub use predicate::{ConditionPredicate, PredicateKind};
