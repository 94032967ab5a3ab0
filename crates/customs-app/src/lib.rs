//! Use case orchestration for customs.
//!
//! This crate wires the settings, store, and domain layers together. The CLI
//! depends on it and only handles environment, printing, and exit codes.

#![forbid(unsafe_code)]

mod inspect;
mod outcome;

pub use inspect::{InspectionInput, InspectionOutput, inspect_passengers, run_inspection};
pub use outcome::{PassengerOutcome, Summary, format_outcome, summary_exit_code};
