//! Passenger manifest reader.
//!
//! One passenger per line: `name, item1, ..., itemN, EXPECTED` where EXPECTED
//! is `ACCEPT` or `REJECT`. Fields are trimmed. Quoting is not supported, so a
//! record containing `"` is refused rather than split in the wrong places.

use anyhow::Context;
use camino::Utf8Path;
use customs_types::{Passenger, UnknownVerdict, Verdict};

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest line {line}: expected `name, items..., ACCEPT|REJECT`, got {record:?}")]
    TooFewFields { line: usize, record: String },

    #[error("manifest line {line}: quoted fields are not supported in {record:?}")]
    QuotedField { line: usize, record: String },

    #[error("manifest line {line}: passenger name is empty in {record:?}")]
    EmptyName { line: usize, record: String },

    #[error("manifest line {line}: {source} in {record:?}")]
    BadExpectation {
        line: usize,
        record: String,
        source: UnknownVerdict,
    },
}

/// Parse every non-blank line. The first malformed record aborts the parse.
pub fn parse_manifest(text: &str) -> Result<Vec<Passenger>, ManifestError> {
    text.lines()
        .enumerate()
        .filter(|(_, record)| !record.trim().is_empty())
        .map(|(idx, record)| parse_record(idx + 1, record))
        .collect()
}

/// Parse one record; `line` is 1-based and only used in errors.
pub fn parse_record(line: usize, record: &str) -> Result<Passenger, ManifestError> {
    if record.contains('"') {
        return Err(ManifestError::QuotedField {
            line,
            record: record.to_string(),
        });
    }

    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    let [name, items @ .., expected] = fields.as_slice() else {
        return Err(ManifestError::TooFewFields {
            line,
            record: record.to_string(),
        });
    };

    if name.is_empty() {
        return Err(ManifestError::EmptyName {
            line,
            record: record.to_string(),
        });
    }

    let expected: Verdict = expected
        .parse()
        .map_err(|source| ManifestError::BadExpectation {
            line,
            record: record.to_string(),
            source,
        })?;

    Ok(Passenger::new(*name, items.iter().copied(), expected))
}

pub fn read_manifest(path: &Utf8Path) -> anyhow::Result<Vec<Passenger>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read manifest {path}"))?;
    let passengers = parse_manifest(&text).with_context(|| format!("parse manifest {path}"))?;
    Ok(passengers)
}
