//! The "ask the universe" fallback for items no list knows about.
//!
//! The heuristic is deliberately arbitrary. Its outputs are fixed: every input
//! string must keep producing the verdict it produces today.

/// Default offset subtracted from each character code.
pub const UNIVERSE_MEANING: u32 = 42;

/// A shifted code equal to this (the character `'7'`) is an immediate yes.
const LUCKY_CODE: u32 = '7' as u32;

/// A shifted code equal to this is a yes when the original code occurs in the item.
const ANCHOR_CODE: u32 = 23;

/// Fallback verdict source for unknown items. `true` means accept.
pub trait Oracle {
    fn evaluate(&self, item: &str) -> bool;
}

impl<F> Oracle for F
where
    F: Fn(&str) -> bool,
{
    fn evaluate(&self, item: &str) -> bool {
        self(item)
    }
}

/// The production oracle, parameterised by the configured meaning constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniverseOracle {
    pub meaning: u32,
}

impl UniverseOracle {
    pub fn new(meaning: u32) -> Self {
        Self { meaning }
    }
}

impl Default for UniverseOracle {
    fn default() -> Self {
        Self::new(UNIVERSE_MEANING)
    }
}

impl Oracle for UniverseOracle {
    fn evaluate(&self, item: &str) -> bool {
        evaluate_unknown_item_with(item, self.meaning)
    }
}

/// Ask the universe with the default meaning.
pub fn evaluate_unknown_item(item: &str) -> bool {
    evaluate_unknown_item_with(item, UNIVERSE_MEANING)
}

/// Scan `item` left to right; the first character with a verdict wins.
///
/// A character whose code is below `meaning` ends the scan with `false`. At the
/// default meaning that includes space, so nothing after the first space is
/// ever examined. Exhausting the scan (including the empty item) also
/// yields `false`.
pub fn evaluate_unknown_item_with(item: &str, meaning: u32) -> bool {
    let codes: Vec<u32> = item.chars().map(u32::from).collect();
    for &code in &codes {
        let Some(shifted) = code.checked_sub(meaning) else {
            return false;
        };
        if shifted == LUCKY_CODE || (shifted == ANCHOR_CODE && codes.contains(&code)) {
            return true;
        }
    }
    false
}
