/// Where a newly added rule lands in the list.
///
/// Both placements exist in deployed UIs: the button-driven table inserts new
/// rules just above the FINAL sentinel, the drag-driven table puts them at
/// the head. Neither is a bug; the store supports both as configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertionPolicy {
    /// Insert immediately before the FINAL sentinel (plain append when the
    /// sentinel is disabled).
    #[default]
    BeforeFinal,
    /// Insert at index 0.
    AtHead,
}

/// Feature flags and wiring for a rule editor instance.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Maintain the terminal FINAL sentinel invariant.
    pub has_final_rule: bool,
    /// Permit up/down and drag reordering.
    pub allow_move: bool,
    /// Permit deleting non-FINAL rules.
    pub allow_delete: bool,
    /// Permit toggling a rule's enabled flag from the list.
    pub allow_toggle: bool,
    pub insertion_policy: InsertionPolicy,
    /// Key the rule array is nested under in the persisted payload.
    pub rule_key: String,
    /// Description given to a synthesized FINAL rule.
    pub final_description: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            has_final_rule: true,
            allow_move: true,
            allow_delete: true,
            allow_toggle: true,
            insertion_policy: InsertionPolicy::default(),
            rule_key: "rules".to_owned(),
            final_description: "Default fallback rule".to_owned(),
        }
    }
}

impl EditorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_final_rule(mut self, value: bool) -> Self {
        self.has_final_rule = value;
        self
    }

    #[must_use]
    pub fn allow_move(mut self, value: bool) -> Self {
        self.allow_move = value;
        self
    }

    #[must_use]
    pub fn allow_delete(mut self, value: bool) -> Self {
        self.allow_delete = value;
        self
    }

    #[must_use]
    pub fn allow_toggle(mut self, value: bool) -> Self {
        self.allow_toggle = value;
        self
    }

    #[must_use]
    pub fn insertion_policy(mut self, policy: InsertionPolicy) -> Self {
        self.insertion_policy = policy;
        self
    }

    #[must_use]
    pub fn rule_key(mut self, key: &str) -> Self {
        self.rule_key = key.to_owned();
        self
    }

    #[must_use]
    pub fn final_description(mut self, text: &str) -> Self {
        self.final_description = text.to_owned();
        self
    }
}
