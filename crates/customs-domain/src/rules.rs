use customs_types::ids::WILDCARD_PREFIX;

/// A parsed safe/dangerous list entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Whole-name match, stored lowercased.
    Literal(String),
    /// `any type of <suffix>`: substring match, suffix stored lowercased.
    Wildcard(String),
}

impl Rule {
    pub fn parse(entry: &str) -> Self {
        match wildcard_suffix(entry) {
            Some(suffix) => Rule::Wildcard(suffix.to_lowercase()),
            None => Rule::Literal(entry.to_lowercase()),
        }
    }

    /// `item_lower` must already be lowercased.
    fn matches_lowered(&self, item_lower: &str) -> bool {
        match self {
            Rule::Literal(name) => name == item_lower,
            Rule::Wildcard(suffix) => item_lower.contains(suffix.as_str()),
        }
    }
}

fn wildcard_suffix(entry: &str) -> Option<&str> {
    let head = entry.get(..WILDCARD_PREFIX.len())?;
    if head.eq_ignore_ascii_case(WILDCARD_PREFIX) {
        entry.get(WILDCARD_PREFIX.len()..)
    } else {
        None
    }
}

/// An ordered rule list, parsed once.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = entries.into_iter().map(|e| Rule::parse(e.as_ref())).collect();
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Literal entries are checked before any wildcard entry.
    pub fn matches(&self, item: &str) -> bool {
        let lowered = item.to_lowercase();
        self.literal_match(&lowered) || self.wildcard_match(&lowered)
    }

    fn literal_match(&self, item_lower: &str) -> bool {
        self.rules
            .iter()
            .filter(|r| matches!(r, Rule::Literal(_)))
            .any(|r| r.matches_lowered(item_lower))
    }

    fn wildcard_match(&self, item_lower: &str) -> bool {
        self.rules
            .iter()
            .filter(|r| matches!(r, Rule::Wildcard(_)))
            .any(|r| r.matches_lowered(item_lower))
    }
}
