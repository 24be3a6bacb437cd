//! Rule model and builtin catalog for tsfix.
//!
//! This crate owns *what* gets rewritten: the ordered rule categories and
//! their matching policies. It does not own file selection or write-back;
//! that's the `tsfix-engine` crate.

mod catalog;
mod rule;

pub use catalog::builtin_rules;
pub use rule::{ConditionalInsert, LiteralMap, MatchAnchor, RewriteRule, RuleKind, Step};
