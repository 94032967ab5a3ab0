use crate::engine::ClassificationEngine;
use crate::oracle::{Oracle, UniverseOracle};
use crate::store::InMemoryStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn sample_safe() -> Vec<&'static str> {
    vec![
        "Candy",
        "Towel",
        "Toothbrush",
        "Toothpaste",
        "any type of Glasses",
    ]
}

pub fn sample_dangerous() -> Vec<&'static str> {
    vec!["Smokes", "any type of Cowboy Hat", "any type of gun"]
}

pub fn sample_store() -> InMemoryStore {
    InMemoryStore::new(sample_safe(), sample_dangerous())
}

pub fn engine_with(store: InMemoryStore) -> ClassificationEngine<InMemoryStore, UniverseOracle> {
    ClassificationEngine::new(store, UniverseOracle::default())
}

/// Stub oracle with a fixed answer and a shared call counter.
#[derive(Clone, Debug)]
pub struct CountingOracle {
    answer: bool,
    calls: Arc<AtomicUsize>,
}

impl CountingOracle {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Oracle for CountingOracle {
    fn evaluate(&self, _item: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}
