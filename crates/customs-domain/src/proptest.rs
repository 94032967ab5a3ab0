//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - list precedence and case-insensitive matching
//! - wildcard substring matching
//! - memoization (the oracle is asked at most once per distinct item)
//! - the oracle's fixed behaviour over arbitrary strings

use crate::engine::ClassificationEngine;
use crate::oracle::{evaluate_unknown_item, evaluate_unknown_item_with};
use crate::store::InMemoryStore;
use crate::test_support::CountingOracle;
use customs_types::Verdict;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_item_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z ]{0,23}").unwrap()
}

fn arb_suffix() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").unwrap()
}

fn arb_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_item_name(), 0..6)
}

/// The scan written with signed arithmetic, to compare against the
/// checked-arithmetic implementation.
fn reference_scan(item: &str, meaning: i64) -> bool {
    for y in item.chars() {
        let w = y as i64 - meaning;
        if w < 0 {
            return false;
        }
        if w == '7' as i64 || (w == 23 && item.chars().any(|c| c as i64 == y as i64)) {
            return true;
        }
    }
    false
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn oracle_matches_reference_scan(item in any::<String>()) {
        prop_assert_eq!(evaluate_unknown_item(&item), reference_scan(&item, 42));
    }

    #[test]
    fn oracle_matches_reference_for_any_meaning(item in "\\PC{0,16}", meaning in 0u32..200) {
        prop_assert_eq!(
            evaluate_unknown_item_with(&item, meaning),
            reference_scan(&item, i64::from(meaning))
        );
    }

    #[test]
    fn oracle_with_default_meaning_accepts_an_a_before_any_low_code(item in any::<String>()) {
        let head = item.split(|c: char| u32::from(c) < 42).next().unwrap_or("");
        prop_assert_eq!(evaluate_unknown_item(&item), head.contains(['a', 'A']));
    }

    #[test]
    fn nothing_after_a_space_matters(head in "[B-Zb-z]{0,8}", tail in "\\PC{0,12}") {
        let item = format!("{head} {tail}");
        prop_assert!(!evaluate_unknown_item(&item));
    }

    #[test]
    fn oracle_is_deterministic(item in any::<String>()) {
        prop_assert_eq!(evaluate_unknown_item(&item), evaluate_unknown_item(&item));
    }

    #[test]
    fn safe_literal_accepts_regardless_of_dangerous(
        safe in arb_list(),
        dangerous in arb_list(),
        pick in any::<prop::sample::Index>(),
        shout in any::<bool>(),
    ) {
        prop_assume!(!safe.is_empty());
        let entry = pick.get(&safe).clone();
        let item = if shout { entry.to_uppercase() } else { entry.to_lowercase() };

        let mut dangerous = dangerous;
        dangerous.push(entry.clone());
        let store = InMemoryStore::new(safe.clone(), dangerous);
        let mut engine = ClassificationEngine::new(store, |_: &str| false);

        prop_assert_eq!(engine.classify_item(&item), Verdict::Accept);
    }

    #[test]
    fn safe_wildcard_accepts_containing_items(
        suffix in arb_suffix(),
        before in "[A-Za-z ]{0,8}",
        after in "[A-Za-z ]{0,8}",
    ) {
        let item = format!("{before}{}{after}", suffix.to_uppercase());
        let store = InMemoryStore::new(
            [format!("any type of {suffix}")],
            [item.clone()],
        );
        let mut engine = ClassificationEngine::new(store, |_: &str| false);
        prop_assert_eq!(engine.classify_item(&item), Verdict::Accept);
    }

    #[test]
    fn dangerous_wildcard_rejects_when_no_safe_rule_matches(
        suffix in arb_suffix(),
        before in "[A-Za-z ]{0,8}",
        after in "[A-Za-z ]{0,8}",
    ) {
        let item = format!("{before}{suffix}{after}");
        let store = InMemoryStore::new(Vec::<String>::new(), [format!("ANY TYPE OF {suffix}")]);
        let oracle = CountingOracle::new(true);
        let mut engine = ClassificationEngine::new(store, oracle.clone());

        prop_assert_eq!(engine.classify_item(&item), Verdict::Reject);
        prop_assert_eq!(oracle.calls(), 0);
    }

    #[test]
    fn unknown_items_are_asked_once(items in prop::collection::vec(arb_item_name(), 1..12)) {
        let oracle = CountingOracle::new(false);
        let mut engine = ClassificationEngine::new(InMemoryStore::default(), oracle.clone());

        let first: Vec<Verdict> = items.iter().map(|i| engine.classify_item(i)).collect();
        let second: Vec<Verdict> = items.iter().map(|i| engine.classify_item(i)).collect();

        let distinct: std::collections::BTreeSet<&String> = items.iter().collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(oracle.calls(), distinct.len());
        prop_assert_eq!(engine.store().memory_saves(), distinct.len());
    }

    #[test]
    fn entry_agrees_with_itemwise_classification(
        safe in arb_list(),
        dangerous in arb_list(),
        items in prop::collection::vec(arb_item_name(), 0..8),
    ) {
        let store = InMemoryStore::new(safe, dangerous);
        let mut by_entry = ClassificationEngine::new(store.clone(), evaluate_unknown_item);
        let mut by_item = ClassificationEngine::new(store, evaluate_unknown_item);

        let expected = items.iter().all(|i| by_item.classify_item(i).is_accept());
        prop_assert_eq!(by_entry.classify_entry(&items), expected);
    }
}
