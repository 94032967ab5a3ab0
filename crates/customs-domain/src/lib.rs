//! Pure classification engine (no filesystem IO).
//!
//! Input: rule lists and remembered verdicts handed over by an [`store::ItemStore`].
//! Output: per-item verdicts and per-passenger go/no-go decisions.

#![forbid(unsafe_code)]

pub mod memory;
pub mod oracle;
pub mod policy;
pub mod rules;
pub mod store;

mod engine;
mod shared;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{Classification, ClassificationEngine, Rejection, RuleSource};
pub use oracle::{Oracle, UniverseOracle, evaluate_unknown_item, evaluate_unknown_item_with};
pub use shared::SharedEngine;
