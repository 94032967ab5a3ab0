use customs_domain::Rejection;
use customs_types::{Passenger, Verdict};

/// The engine's decision for one passenger next to what the manifest expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassengerOutcome {
    pub passenger: Passenger,
    pub decision: Verdict,
    /// The item that decided a rejection; `None` when accepted.
    pub rejection: Option<Rejection>,
}

impl PassengerOutcome {
    pub fn new(passenger: Passenger, rejection: Option<Rejection>) -> Self {
        Self {
            passenger,
            decision: Verdict::from(rejection.is_none()),
            rejection,
        }
    }

    pub fn matches_expectation(&self) -> bool {
        self.decision == self.passenger.expected
    }
}

/// One report line per passenger.
pub fn format_outcome(outcome: &PassengerOutcome) -> String {
    let p = &outcome.passenger;
    if outcome.matches_expectation() {
        format!("OK - \"{}\"", p.name)
    } else {
        format!(
            "ERROR - \"{}\" was not {}. Items: {:?}",
            p.name,
            p.expected.action(),
            p.items
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub passengers: usize,
    pub accepted: usize,
    pub mismatches: usize,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[PassengerOutcome]) -> Self {
        let mut summary = Summary::default();
        for o in outcomes {
            summary.passengers += 1;
            if o.decision.is_accept() {
                summary.accepted += 1;
            }
            if !o.matches_expectation() {
                summary.mismatches += 1;
            }
        }
        summary
    }
}

/// Map a run to an exit code: 0 = every passenger as expected, 2 = mismatch.
pub fn summary_exit_code(summary: &Summary) -> i32 {
    if summary.mismatches == 0 { 0 } else { 2 }
}
