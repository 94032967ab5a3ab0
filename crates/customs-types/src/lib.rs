//! Stable DTOs and IDs used across the customs workspace.
//!
//! This crate is intentionally boring:
//! - the ACCEPT/REJECT verdict and its wire tokens
//! - storage categories and provider identifiers
//! - the passenger record read from a manifest

#![forbid(unsafe_code)]

pub mod ids;
pub mod passenger;
pub mod provider;
pub mod verdict;

pub use passenger::Passenger;
pub use provider::{ItemCategory, StorageProvider, UnknownProvider};
pub use verdict::{UnknownVerdict, Verdict};
