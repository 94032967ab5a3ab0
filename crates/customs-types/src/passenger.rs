use crate::Verdict;

/// One manifest record: who is travelling, what they carry, and the outcome the
/// manifest expects. The expectation is only used to validate the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passenger {
    pub name: String,
    pub items: Vec<String>,
    pub expected: Verdict,
}

impl Passenger {
    pub fn new<N, I, S>(name: N, items: I, expected: Verdict) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
            expected,
        }
    }
}
