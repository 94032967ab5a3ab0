use crate::ids;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of classifying a single item.
///
/// Serialized as the literal tokens `"ACCEPT"` / `"REJECT"`, which is also the
/// representation persisted in the universe memory file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    pub fn is_accept(self) -> bool {
        matches!(self, Verdict::Accept)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Accept => ids::TOKEN_ACCEPT,
            Verdict::Reject => ids::TOKEN_REJECT,
        }
    }

    /// Past-tense wording used when reporting an expectation that was not met.
    pub fn action(self) -> &'static str {
        match self {
            Verdict::Accept => ids::ACTION_ACCEPTED,
            Verdict::Reject => ids::ACTION_REJECTED,
        }
    }
}

impl From<bool> for Verdict {
    fn from(accept: bool) -> Self {
        if accept {
            Verdict::Accept
        } else {
            Verdict::Reject
        }
    }
}

impl From<Verdict> for bool {
    fn from(v: Verdict) -> Self {
        v.is_accept()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown verdict token: {0:?} (expected ACCEPT or REJECT)")]
pub struct UnknownVerdict(pub String);

impl FromStr for Verdict {
    type Err = UnknownVerdict;

    /// Tokens are exact: `accept` or ` ACCEPT` are not verdicts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ids::TOKEN_ACCEPT => Ok(Verdict::Accept),
            ids::TOKEN_REJECT => Ok(Verdict::Reject),
            other => Err(UnknownVerdict(other.to_string())),
        }
    }
}
