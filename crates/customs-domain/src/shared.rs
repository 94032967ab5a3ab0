use crate::engine::{Classification, ClassificationEngine};
use crate::oracle::{Oracle, UniverseOracle};
use crate::store::ItemStore;
use customs_types::Verdict;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A classification engine that can be shared between threads.
///
/// One lock covers the whole lookup, so the memory check and the
/// oracle-then-insert for an unknown item happen atomically: concurrent
/// lookups of the same new item ask the oracle once and persist once.
pub struct SharedEngine<S, O = UniverseOracle> {
    inner: Mutex<ClassificationEngine<S, O>>,
}

impl<S: ItemStore, O: Oracle> SharedEngine<S, O> {
    pub fn new(engine: ClassificationEngine<S, O>) -> Self {
        Self {
            inner: Mutex::new(engine),
        }
    }

    pub fn classify_item(&self, item: &str) -> Verdict {
        self.lock().classify_item(item)
    }

    pub fn classify_item_traced(&self, item: &str) -> Classification {
        self.lock().classify_item_traced(item)
    }

    /// Same short-circuit contract as [`ClassificationEngine::classify_entry`].
    /// The lock is taken per item, so entries from other threads may interleave.
    pub fn classify_entry<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        items
            .into_iter()
            .all(|item| self.classify_item(item.as_ref()).is_accept())
    }

    pub fn with_engine<R>(&self, f: impl FnOnce(&ClassificationEngine<S, O>) -> R) -> R {
        f(&self.lock())
    }

    pub fn into_inner(self) -> ClassificationEngine<S, O> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // The cache only ever grows by complete inserts, so a poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, ClassificationEngine<S, O>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
