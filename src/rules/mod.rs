// SPDX-License-Identifier: MIT

//! Rule files: a data context plus named statements to check against it
//!
//! ```yaml
//! name: users
//! predicate: attribute
//! data:
//!   user1: { name: alice }
//! rules:
//!   - name: alice-present
//!     statement: "user1.name=alice or user2.name=bob"
//!     expect: true
//! ```

mod loader;
mod types;

pub use loader::RuleLoader;
pub use types::{Rule, RuleOutcome, RuleSet};
