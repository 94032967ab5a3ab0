//! The storage capability the engine is constructed from and writes through to.

use crate::memory::Memory;
use customs_types::ItemCategory;
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Source missing, unreadable, or malformed. Callers fall back to empty data.
    #[error("failed to read {what}: {reason}")]
    Read { what: String, reason: String },

    /// Persistence failed. The in-memory state is still valid.
    #[error("failed to write {what}: {reason}")]
    Write { what: String, reason: String },
}

impl StoreError {
    pub fn read(what: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::Read {
            what: what.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write(what: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::Write {
            what: what.into(),
            reason: reason.to_string(),
        }
    }
}

/// Key-value persistence for rule lists and remembered verdicts.
pub trait ItemStore: Send {
    fn get_items(&self, category: ItemCategory) -> Result<Vec<String>, StoreError>;

    /// Best effort: lists are normally provisioned out of band.
    fn save_items(&mut self, category: ItemCategory, items: &[String]) -> Result<(), StoreError>;

    fn get_memory(&self) -> Result<Memory, StoreError>;

    /// Replaces the whole persisted mapping.
    fn save_memory(&mut self, memory: &Memory) -> Result<(), StoreError>;
}

impl<S: ItemStore + ?Sized> ItemStore for Box<S> {
    fn get_items(&self, category: ItemCategory) -> Result<Vec<String>, StoreError> {
        (**self).get_items(category)
    }

    fn save_items(&mut self, category: ItemCategory, items: &[String]) -> Result<(), StoreError> {
        (**self).save_items(category, items)
    }

    fn get_memory(&self) -> Result<Memory, StoreError> {
        (**self).get_memory()
    }

    fn save_memory(&mut self, memory: &Memory) -> Result<(), StoreError> {
        (**self).save_memory(memory)
    }
}

/// Process-local store. Useful for embedding and for tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    items: BTreeMap<ItemCategory, Vec<String>>,
    memory: Memory,
    memory_saves: usize,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new<S, D>(safe: S, dangerous: D) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let mut items = BTreeMap::new();
        items.insert(ItemCategory::Safe, safe.into_iter().map(Into::into).collect());
        items.insert(
            ItemCategory::Dangerous,
            dangerous.into_iter().map(Into::into).collect(),
        );
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_memory(mut self, memory: Memory) -> Self {
        self.memory = memory;
        self
    }

    /// Make every `save_*` call fail, to exercise write-failure recovery.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Number of successful `save_memory` calls so far.
    pub fn memory_saves(&self) -> usize {
        self.memory_saves
    }
}

impl ItemStore for InMemoryStore {
    fn get_items(&self, category: ItemCategory) -> Result<Vec<String>, StoreError> {
        Ok(self.items.get(&category).cloned().unwrap_or_default())
    }

    fn save_items(&mut self, category: ItemCategory, items: &[String]) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::write(category.as_str(), "writes disabled"));
        }
        self.items.insert(category, items.to_vec());
        Ok(())
    }

    fn get_memory(&self) -> Result<Memory, StoreError> {
        Ok(self.memory.clone())
    }

    fn save_memory(&mut self, memory: &Memory) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::write("universe memory", "writes disabled"));
        }
        self.memory = memory.clone();
        self.memory_saves += 1;
        Ok(())
    }
}
