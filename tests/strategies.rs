//! Shared proptest strategies for rule-list generation.
//!
//! Included via `mod strategies;` from the property-test files.

#![allow(dead_code)]

use proptest::prelude::*;
use ruledeck::{Rule, RuleKind};

const ACTIONS: &[&str] = &["DIRECT", "DROP", "REWRITE"];

/// An arbitrary normal rule with a short alphanumeric match value.
pub fn arb_normal_rule() -> impl Strategy<Value = Rule> {
    (
        "[a-z]{1,8}",
        0..ACTIONS.len(),
        any::<bool>(),
        proptest::option::of("[A-Za-z0-9/. ]{0,16}"),
    )
        .prop_map(|(match_value, action, enabled, rewrite)| {
            let mut rule = Rule::normal(&match_value, ACTIONS[action]).with_enabled(enabled);
            if let Some(rewrite) = rewrite {
                rule.rewrite_value = rewrite;
            }
            rule
        })
}

/// A rule list of normal rules with zero or more FINAL sentinels spliced in
/// at arbitrary positions. Exercises every shape `initialize` must repair:
/// missing sentinel, misplaced sentinel, and the already-valid list.
pub fn arb_unvalidated_list() -> impl Strategy<Value = Vec<Rule>> {
    (
        proptest::collection::vec(arb_normal_rule(), 0..8),
        proptest::option::of(0usize..8),
    )
        .prop_map(|(mut rules, sentinel_at)| {
            if let Some(position) = sentinel_at {
                let position = position.min(rules.len());
                rules.insert(position, Rule::final_default("fallback"));
            }
            rules
        })
}

/// A list already satisfying the sentinel invariant: normal rules followed
/// by exactly one FINAL rule.
pub fn arb_valid_list() -> impl Strategy<Value = Vec<Rule>> {
    proptest::collection::vec(arb_normal_rule(), 0..8).prop_map(|mut rules| {
        rules.push(Rule::final_default("fallback"));
        rules
    })
}

/// Index pair plus drop bias for drag relocation, sized for lists of up to
/// nine rules so out-of-range cases are generated too.
pub fn arb_drag() -> impl Strategy<Value = (usize, usize, bool)> {
    (0usize..10, 0usize..10, any::<bool>())
}

/// Count the FINAL sentinels in a list.
pub fn sentinel_count(rules: &[Rule]) -> usize {
    rules.iter().filter(|r| r.kind == RuleKind::Final).count()
}

/// Multiset fingerprint: sorted match values of the normal rules.
pub fn normal_fingerprint(rules: &[Rule]) -> Vec<String> {
    let mut names: Vec<String> = rules
        .iter()
        .filter(|r| !r.is_final())
        .map(|r| r.match_value.clone())
        .collect();
    names.sort();
    names
}
