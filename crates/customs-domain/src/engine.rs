use crate::memory::Memory;
use crate::oracle::{Oracle, UniverseOracle};
use crate::policy::EngineConfig;
use crate::rules::RuleSet;
use crate::store::ItemStore;
use customs_types::{ItemCategory, Verdict};

/// Where a verdict came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleSource {
    SafeList,
    DangerousList,
    Memory,
    Oracle,
}

impl RuleSource {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleSource::SafeList => "safe_list",
            RuleSource::DangerousList => "dangerous_list",
            RuleSource::Memory => "memory",
            RuleSource::Oracle => "oracle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Verdict,
    pub source: RuleSource,
}

/// The item that turned an entry down, and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub item: String,
    pub source: RuleSource,
}

/// Classifies items against the static lists, falling back to remembered or
/// freshly computed oracle verdicts.
///
/// The engine owns the in-memory cache. Every newly remembered verdict is
/// written through to the store as a full-mapping overwrite.
pub struct ClassificationEngine<S, O = UniverseOracle> {
    safe: RuleSet,
    dangerous: RuleSet,
    memory: Memory,
    store: S,
    oracle: O,
}

impl<S: ItemStore> ClassificationEngine<S, UniverseOracle> {
    /// Build from a store using the configured universe oracle.
    pub fn from_config(store: S, cfg: &EngineConfig) -> Self {
        Self::new(store, UniverseOracle::new(cfg.universe_meaning))
    }
}

impl<S: ItemStore, O: Oracle> ClassificationEngine<S, O> {
    /// Read both lists and the remembered verdicts once. Unreadable sources
    /// degrade to empty data.
    pub fn new(store: S, oracle: O) -> Self {
        let safe = load_items(&store, ItemCategory::Safe);
        let dangerous = load_items(&store, ItemCategory::Dangerous);
        let memory = store.get_memory().unwrap_or_else(|err| {
            tracing::error!(error = %err, "universe memory unavailable; starting empty");
            Memory::new()
        });
        tracing::debug!(
            safe = safe.len(),
            dangerous = dangerous.len(),
            remembered = memory.len(),
            "classification engine loaded"
        );
        Self::from_parts(safe, dangerous, memory, store, oracle)
    }

    pub fn from_parts(
        safe: RuleSet,
        dangerous: RuleSet,
        memory: Memory,
        store: S,
        oracle: O,
    ) -> Self {
        Self {
            safe,
            dangerous,
            memory,
            store,
            oracle,
        }
    }

    pub fn classify_item(&mut self, item: &str) -> Verdict {
        self.classify_item_traced(item).verdict
    }

    pub fn classify_item_traced(&mut self, item: &str) -> Classification {
        let classification = self.resolve(item);
        tracing::debug!(
            item,
            verdict = %classification.verdict,
            source = classification.source.as_str(),
            "item classified"
        );
        classification
    }

    /// `true` only if every item is accepted. Stops at the first rejection, so
    /// later items are neither evaluated nor remembered.
    pub fn classify_entry<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.classify_entry_traced(items).is_none()
    }

    /// [`Self::classify_entry`] that reports the first rejected item. `None`
    /// means every item was accepted.
    pub fn classify_entry_traced<I>(&mut self, items: I) -> Option<Rejection>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        items.into_iter().find_map(|item| {
            let item = item.as_ref();
            let classification = self.classify_item_traced(item);
            (!classification.verdict.is_accept()).then(|| Rejection {
                item: item.to_string(),
                source: classification.source,
            })
        })
    }

    fn resolve(&mut self, item: &str) -> Classification {
        if self.safe.matches(item) {
            return Classification {
                verdict: Verdict::Accept,
                source: RuleSource::SafeList,
            };
        }
        if self.dangerous.matches(item) {
            return Classification {
                verdict: Verdict::Reject,
                source: RuleSource::DangerousList,
            };
        }
        if let Some(&verdict) = self.memory.get(item) {
            return Classification {
                verdict,
                source: RuleSource::Memory,
            };
        }

        let verdict = Verdict::from(self.oracle.evaluate(item));
        self.memory.insert(item.to_string(), verdict);
        self.persist_memory();
        Classification {
            verdict,
            source: RuleSource::Oracle,
        }
    }

    fn persist_memory(&mut self) {
        // O(n) per new item: the store contract is a full overwrite.
        if let Err(err) = self.store.save_memory(&self.memory) {
            tracing::warn!(
                error = %err,
                remembered = self.memory.len(),
                "universe memory not persisted; keeping in-process copy"
            );
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn safe_rules(&self) -> &RuleSet {
        &self.safe
    }

    pub fn dangerous_rules(&self) -> &RuleSet {
        &self.dangerous
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn load_items<S: ItemStore>(store: &S, category: ItemCategory) -> RuleSet {
    let entries = store.get_items(category).unwrap_or_else(|err| {
        tracing::error!(%category, error = %err, "rule list unavailable; using an empty list");
        Vec::new()
    });
    RuleSet::new(entries)
}
