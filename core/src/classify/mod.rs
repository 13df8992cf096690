//! Protocol-name classification rules
//!
//! Classification runs a fixed, priority-ordered rule table over each
//! series; the parsing helpers pull the structured naming fields out of the
//! underscore-delimited protocol name.

pub mod parse;
pub mod rules;

pub use rules::{evaluate, RuleOutcome};
