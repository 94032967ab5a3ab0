use camino::{Utf8Path, Utf8PathBuf};
use customs_domain::memory::Memory;
use customs_domain::store::{ItemStore, StoreError};
use customs_types::{ItemCategory, Verdict, ids};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::ErrorKind;

/// Rule lists as newline-delimited text, memory as a JSON object, all in one
/// directory:
///
/// - `safe.txt`, `dangerous.txt`: one rule per line, whitespace stripped,
///   blank lines skipped
/// - `universe.json`: `{ "<item>": "ACCEPT" | "REJECT", ... }`
#[derive(Clone, Debug)]
pub struct FileItemStore {
    dir: Utf8PathBuf,
}

impl FileItemStore {
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn items_path(&self, category: ItemCategory) -> Utf8PathBuf {
        self.dir.join(category.file_name())
    }

    pub fn memory_path(&self) -> Utf8PathBuf {
        self.dir.join(ids::FILE_UNIVERSE_MEMORY)
    }
}

/// Older memory files stored the raw oracle boolean.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredVerdict {
    Token(Verdict),
    Flag(bool),
}

impl From<StoredVerdict> for Verdict {
    fn from(v: StoredVerdict) -> Self {
        match v {
            StoredVerdict::Token(v) => v,
            StoredVerdict::Flag(b) => Verdict::from(b),
        }
    }
}

impl ItemStore for FileItemStore {
    fn get_items(&self, category: ItemCategory) -> Result<Vec<String>, StoreError> {
        read_lines(&self.items_path(category))
    }

    fn save_items(&mut self, category: ItemCategory, items: &[String]) -> Result<(), StoreError> {
        let mut text = items.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        write_file(&self.items_path(category), &text)
    }

    fn get_memory(&self) -> Result<Memory, StoreError> {
        let path = self.memory_path();
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            // First run: nothing remembered yet.
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path, "no universe memory yet");
                return Ok(Memory::new());
            }
            Err(err) => return Err(StoreError::read(path.as_str(), err)),
        };
        let stored: BTreeMap<String, StoredVerdict> =
            serde_json::from_str(&text).map_err(|err| StoreError::read(path.as_str(), err))?;
        Ok(stored.into_iter().map(|(k, v)| (k, v.into())).collect())
    }

    fn save_memory(&mut self, memory: &Memory) -> Result<(), StoreError> {
        let path = self.memory_path();
        let mut text = serde_json::to_string_pretty(memory)
            .map_err(|err| StoreError::write(path.as_str(), err))?;
        text.push('\n');
        write_file(&path, &text)
    }
}

fn read_lines(path: &Utf8Path) -> Result<Vec<String>, StoreError> {
    let text = std::fs::read_to_string(path).map_err(|err| StoreError::read(path.as_str(), err))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Write via a sibling temp file so a crash never leaves a truncated file behind.
fn write_file(path: &Utf8Path, contents: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|err| StoreError::write(parent.as_str(), err))?;
    }
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, contents).map_err(|err| StoreError::write(tmp.as_str(), err))?;
    std::fs::rename(&tmp, path).map_err(|err| StoreError::write(path.as_str(), err))
}
