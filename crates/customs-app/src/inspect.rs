//! The `inspect` use case: classify every passenger of a manifest.

use crate::outcome::{PassengerOutcome, Summary};
use anyhow::Context;
use customs_domain::ClassificationEngine;
use customs_domain::oracle::Oracle;
use customs_domain::store::ItemStore;
use customs_settings::ResolvedConfig;
use customs_types::Passenger;

/// Input for the inspect use case.
#[derive(Clone, Debug)]
pub struct InspectionInput<'a> {
    /// Resolved configuration: storage, manifest path, oracle constant.
    pub config: &'a ResolvedConfig,
}

/// Output from the inspect use case.
#[derive(Clone, Debug)]
pub struct InspectionOutput {
    /// One outcome per manifest record, in manifest order.
    pub outcomes: Vec<PassengerOutcome>,
    pub summary: Summary,
    /// Size of the universe memory after the run.
    pub remembered: usize,
}

/// Read the manifest, open storage, and classify every passenger.
///
/// A malformed manifest fails before storage is touched.
pub fn run_inspection(input: InspectionInput<'_>) -> anyhow::Result<InspectionOutput> {
    let cfg = input.config;

    let passengers = customs_store::read_manifest(&cfg.manifest_path)?;
    let store = customs_store::open_store(cfg.provider, &cfg.storage_dir)
        .with_context(|| format!("open {} storage at {}", cfg.provider, cfg.storage_dir))?;

    let mut engine = ClassificationEngine::from_config(store, &cfg.engine);
    let outcomes = inspect_passengers(&mut engine, passengers);
    let summary = Summary::from_outcomes(&outcomes);

    tracing::info!(
        passengers = summary.passengers,
        accepted = summary.accepted,
        mismatches = summary.mismatches,
        remembered = engine.memory().len(),
        "manifest inspected"
    );

    Ok(InspectionOutput {
        remembered: engine.memory().len(),
        outcomes,
        summary,
    })
}

/// Classify each passenger's items with a shared engine, in order, so verdicts
/// remembered for one passenger are reused for the next.
pub fn inspect_passengers<S, O, I>(
    engine: &mut ClassificationEngine<S, O>,
    passengers: I,
) -> Vec<PassengerOutcome>
where
    S: ItemStore,
    O: Oracle,
    I: IntoIterator<Item = Passenger>,
{
    passengers
        .into_iter()
        .map(|passenger| {
            let rejection = engine.classify_entry_traced(&passenger.items);
            let outcome = PassengerOutcome::new(passenger, rejection);
            if !outcome.matches_expectation() {
                explain_mismatch(&outcome);
            }
            outcome
        })
        .collect()
}

fn explain_mismatch(outcome: &PassengerOutcome) {
    let passenger = outcome.passenger.name.as_str();
    match &outcome.rejection {
        Some(rejection) => tracing::warn!(
            passenger,
            item = rejection.item.as_str(),
            source = rejection.source.as_str(),
            "passenger rejected but the manifest expected acceptance"
        ),
        None => tracing::warn!(
            passenger,
            items = outcome.passenger.items.len(),
            "passenger accepted but the manifest expected rejection"
        ),
    }
}
