//! Ownership and invariant enforcement for the ordered rule list.

use tracing::debug;

use crate::reorder;
use crate::types::{EditorConfig, InsertionPolicy, Rule, StoreError};

/// The ordered rule list and its sentinel invariant.
///
/// When `has_final_rule` is configured, exactly one [`RuleKind::Final`] rule
/// exists and it is the last element; it is always enabled and refuses
/// delete, move, and toggle. All mutations here are in-memory only —
/// persistence and rollback are layered on top by
/// [`PersistenceCoordinator`](crate::PersistenceCoordinator).
#[derive(Debug, Clone)]
pub struct RuleStore {
    rules: Vec<Rule>,
    has_final_rule: bool,
    insertion_policy: InsertionPolicy,
}

impl RuleStore {
    /// Take ownership of an initial list and establish the sentinel
    /// invariant: synthesize a default FINAL rule when none exists, relocate
    /// a misplaced one to the end. Idempotent — a valid list passes through
    /// untouched.
    #[must_use]
    pub fn initialize(rules: Vec<Rule>, config: &EditorConfig) -> Self {
        let mut store = Self {
            rules,
            has_final_rule: config.has_final_rule,
            insertion_policy: config.insertion_policy,
        };
        if store.has_final_rule {
            store.ensure_final_rule(&config.final_description);
        }
        store
    }

    fn ensure_final_rule(&mut self, description: &str) {
        match self.rules.iter().position(Rule::is_final) {
            None => {
                self.rules.push(Rule::final_default(description));
            }
            Some(position) if position != self.rules.len() - 1 => {
                let sentinel = self.rules.remove(position);
                self.rules.push(sentinel);
            }
            Some(_) => {}
        }
        // The sentinel ignores any persisted enabled=false.
        if let Some(last) = self.rules.last_mut() {
            last.enabled = true;
        }
    }

    /// True iff the rule at `index` is the FINAL sentinel. Out-of-range
    /// indices are simply not final.
    #[must_use]
    pub fn is_final(&self, index: usize) -> bool {
        self.rules.get(index).is_some_and(Rule::is_final)
    }

    /// Add a new non-FINAL rule at the configured position: immediately
    /// before the sentinel, or at the head of the list.
    pub fn insert(&mut self, rule: Rule) {
        match self.insertion_policy {
            InsertionPolicy::BeforeFinal => {
                let position = if self.has_final_rule && !self.rules.is_empty() {
                    self.rules.len() - 1
                } else {
                    self.rules.len()
                };
                self.rules.insert(position, rule);
            }
            InsertionPolicy::AtHead => {
                self.rules.insert(0, rule);
            }
        }
        debug!(len = self.rules.len(), "rule inserted");
    }

    /// Replace the rule at `index` in place. The slot's kind must be
    /// preserved: overwriting the sentinel with a normal rule (or the
    /// reverse) is an [`StoreError::InvalidIndex`] programmer error.
    pub fn replace(&mut self, index: usize, rule: Rule) -> Result<(), StoreError> {
        let len = self.rules.len();
        let Some(slot) = self.rules.get_mut(index) else {
            debug_assert!(false, "replace index {index} out of range (len {len})");
            return Err(StoreError::InvalidIndex { index, len });
        };
        if slot.kind != rule.kind {
            debug_assert!(
                false,
                "replace at {index} would change rule kind {:?} -> {:?}",
                slot.kind, rule.kind
            );
            return Err(StoreError::InvalidIndex { index, len });
        }
        *slot = rule;
        Ok(())
    }

    /// Remove and return the rule at `index`. The sentinel is protected.
    pub fn delete(&mut self, index: usize) -> Result<Rule, StoreError> {
        if self.is_final(index) {
            return Err(StoreError::ProtectedRule { index });
        }
        if index >= self.rules.len() {
            return Err(StoreError::InvalidIndex {
                index,
                len: self.rules.len(),
            });
        }
        Ok(self.rules.remove(index))
    }

    /// Swap the rule with its predecessor. Boundary clicks and the sentinel
    /// are safe no-ops; returns whether a swap happened.
    pub fn move_up(&mut self, index: usize) -> bool {
        match reorder::swap_up(&self.rules, index) {
            Some((a, b)) => {
                self.rules.swap(a, b);
                true
            }
            None => false,
        }
    }

    /// Swap the rule with its successor, never displacing the sentinel from
    /// the last slot. Returns whether a swap happened.
    pub fn move_down(&mut self, index: usize) -> bool {
        match reorder::swap_down(&self.rules, index, self.has_final_rule) {
            Some((a, b)) => {
                self.rules.swap(a, b);
                true
            }
            None => false,
        }
    }

    /// Drag-relocate `source` onto `target`. Returns whether the list
    /// changed; rejected drops leave it untouched.
    pub fn relocate(&mut self, source: usize, target: usize, drop_after: bool) -> bool {
        match reorder::relocate(&self.rules, source, target, drop_after, self.has_final_rule) {
            Some(reordered) => {
                self.rules = reordered;
                debug!(source, target, drop_after, "rule relocated");
                true
            }
            None => false,
        }
    }

    /// Set a rule's enabled flag directly. The sentinel is protected; it is
    /// always enabled.
    pub fn toggle_enabled(&mut self, index: usize, value: bool) -> Result<(), StoreError> {
        if self.is_final(index) {
            return Err(StoreError::ProtectedRule { index });
        }
        let len = self.rules.len();
        let Some(rule) = self.rules.get_mut(index) else {
            return Err(StoreError::InvalidIndex { index, len });
        };
        rule.enabled = value;
        Ok(())
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Snapshot of the full list, used as the defined inverse for structural
    /// mutations.
    #[must_use]
    pub(crate) fn snapshot(&self) -> Vec<Rule> {
        self.rules.clone()
    }

    pub(crate) fn restore(&mut self, snapshot: Vec<Rule>) {
        self.rules = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EditorConfig {
        EditorConfig::default()
    }

    #[test]
    fn initialize_synthesizes_missing_sentinel() {
        let store = RuleStore::initialize(vec![Rule::normal("A", "DROP")], &config());
        assert_eq!(store.len(), 2);
        let last = store.get(1).unwrap();
        assert!(last.is_final());
        assert_eq!(last.action, "DIRECT");
        assert!(last.enabled);
    }

    #[test]
    fn initialize_relocates_misplaced_sentinel() {
        let rules = vec![
            Rule::normal("A", "DROP"),
            Rule::final_default("fallback"),
            Rule::normal("B", "DIRECT"),
        ];
        let store = RuleStore::initialize(rules, &config());
        assert_eq!(store.len(), 3);
        assert!(!store.is_final(0));
        assert!(!store.is_final(1));
        assert!(store.is_final(2));
    }

    #[test]
    fn initialize_is_idempotent() {
        let store = RuleStore::initialize(vec![Rule::normal("A", "DROP")], &config());
        let again = RuleStore::initialize(store.snapshot(), &config());
        assert_eq!(store.rules(), again.rules());
    }

    #[test]
    fn initialize_forces_sentinel_enabled() {
        let rules = vec![Rule::final_default("fallback").with_enabled(false)];
        let store = RuleStore::initialize(rules, &config());
        assert!(store.get(0).unwrap().enabled);
    }

    #[test]
    fn initialize_without_sentinel_mode_leaves_list_alone() {
        let store = RuleStore::initialize(
            vec![Rule::normal("A", "DROP")],
            &config().has_final_rule(false),
        );
        assert_eq!(store.len(), 1);
        assert!(!store.is_final(0));
    }

    #[test]
    fn insert_before_final() {
        let mut store = RuleStore::initialize(vec![Rule::normal("A", "DROP")], &config());
        store.insert(Rule::normal("B", "DIRECT"));
        assert_eq!(store.get(0).unwrap().match_value, "A");
        assert_eq!(store.get(1).unwrap().match_value, "B");
        assert!(store.is_final(2));
    }

    #[test]
    fn insert_at_head() {
        let mut store = RuleStore::initialize(
            vec![Rule::normal("A", "DROP")],
            &config().insertion_policy(InsertionPolicy::AtHead),
        );
        store.insert(Rule::normal("B", "DIRECT"));
        assert_eq!(store.get(0).unwrap().match_value, "B");
        assert_eq!(store.get(1).unwrap().match_value, "A");
        assert!(store.is_final(2));
    }

    #[test]
    fn insert_without_sentinel_appends() {
        let mut store = RuleStore::initialize(vec![], &config().has_final_rule(false));
        store.insert(Rule::normal("A", "DROP"));
        store.insert(Rule::normal("B", "DIRECT"));
        assert_eq!(store.get(1).unwrap().match_value, "B");
    }

    #[test]
    fn delete_shifts_following_rules() {
        let mut store = RuleStore::initialize(
            vec![Rule::normal("A", "DROP"), Rule::normal("B", "DIRECT")],
            &config(),
        );
        let removed = store.delete(0).unwrap();
        assert_eq!(removed.match_value, "A");
        assert_eq!(store.get(0).unwrap().match_value, "B");
        assert!(store.is_final(1));
    }

    #[test]
    fn delete_sentinel_is_protected() {
        let mut store = RuleStore::initialize(vec![Rule::normal("A", "DROP")], &config());
        assert_eq!(
            store.delete(1),
            Err(StoreError::ProtectedRule { index: 1 })
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_out_of_range() {
        let mut store = RuleStore::initialize(vec![], &config());
        assert_eq!(
            store.delete(9),
            Err(StoreError::InvalidIndex { index: 9, len: 1 })
        );
    }

    #[test]
    fn toggle_sets_flag_and_protects_sentinel() {
        let mut store = RuleStore::initialize(vec![Rule::normal("A", "DROP")], &config());
        store.toggle_enabled(0, false).unwrap();
        assert!(!store.get(0).unwrap().enabled);
        assert_eq!(
            store.toggle_enabled(1, false),
            Err(StoreError::ProtectedRule { index: 1 })
        );
    }

    #[test]
    fn move_up_down_swap_neighbours() {
        let mut store = RuleStore::initialize(
            vec![Rule::normal("A", "DROP"), Rule::normal("B", "DIRECT")],
            &config(),
        );
        assert!(store.move_down(0));
        assert_eq!(store.get(0).unwrap().match_value, "B");
        assert!(store.move_up(1));
        assert_eq!(store.get(0).unwrap().match_value, "A");
    }

    #[test]
    fn move_boundaries_are_noops() {
        let mut store = RuleStore::initialize(
            vec![Rule::normal("A", "DROP"), Rule::normal("B", "DIRECT")],
            &config(),
        );
        assert!(!store.move_up(0));
        assert!(!store.move_down(1)); // last movable row before the sentinel
        assert!(!store.move_up(2)); // sentinel
        assert!(!store.move_down(2));
        assert_eq!(store.get(0).unwrap().match_value, "A");
    }

    #[test]
    fn relocate_rejected_leaves_list_unchanged() {
        let mut store = RuleStore::initialize(vec![Rule::normal("A", "DROP")], &config());
        let before = store.snapshot();
        assert!(!store.relocate(0, 1, true)); // target is the sentinel
        assert_eq!(store.rules(), &before[..]);
    }

    #[test]
    fn replace_preserves_slot_kind() {
        let mut store = RuleStore::initialize(vec![Rule::normal("A", "DROP")], &config());

        store
            .replace(0, Rule::normal("A2", "REWRITE").rewrite("Mozilla/5.0"))
            .unwrap();
        assert_eq!(store.get(0).unwrap().match_value, "A2");

        let mut edited_final = Rule::final_default("fallback");
        edited_final.action = "DROP".to_owned();
        store.replace(1, edited_final).unwrap();
        assert_eq!(store.get(1).unwrap().action, "DROP");
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn replace_kind_mismatch_rejected_in_release() {
        let mut store = RuleStore::initialize(vec![Rule::normal("A", "DROP")], &config());
        let err = store.replace(1, Rule::normal("B", "DIRECT")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidIndex { index: 1, .. }));
        assert!(store.is_final(1));
    }

    #[test]
    fn sentinel_kind_check_applies_both_ways() {
        let mut store = RuleStore::initialize(
            vec![Rule::normal("A", "DROP")],
            &config().has_final_rule(false),
        );
        // Without a sentinel the same kind rule swaps in fine.
        store.replace(0, Rule::normal("B", "DIRECT")).unwrap();
        assert_eq!(store.get(0).unwrap().match_value, "B");
    }
}
