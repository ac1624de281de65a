//! # pc-04-interaction-check
//!
//! Interaction Matcher evaluating an unordered list of medication names
//! against a static drug-interaction rule table.
//!
//! ## Overview
//!
//! This subsystem provides:
//! - **Substring Matching**: a rule fires when each of its two drug-name
//!   fragments is a case-insensitive substring of at least one supplied
//!   name, normalizing brand/dose suffixes like `Warfarin 5mg`.
//! - **Class Rule**: Warfarin combined with any NSAID-class fragment emits
//!   a HIGH-severity class warning distinct from the pairwise rules,
//!   appended after all pairwise hits.
//! - **Dispense Gate**: any HIGH-severity warning must block dispense at
//!   the caller.
//!
//! The rule table is loaded once at process start and never mutated. Output
//! order is table insertion order with the class rule last.

pub mod error;
pub mod matcher;
pub mod rules;

pub use error::{InteractionError, InteractionResult};
pub use matcher::{check, has_blocking};
pub use rules::{InteractionRule, NSAID_FRAGMENTS, PAIRWISE_RULES};
