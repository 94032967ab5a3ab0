use customs_types::Verdict;
use std::collections::BTreeMap;

/// Remembered oracle verdicts keyed by the exact (case-sensitive) item name.
///
/// A `BTreeMap` keeps the persisted file stable between runs.
pub type Memory = BTreeMap<String, Verdict>;
