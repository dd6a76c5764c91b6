use serde::{Deserialize, Serialize};

/// Discriminates ordinary rules from the terminal FINAL sentinel.
///
/// Serialized with the wire tags `NORMAL` and `FINAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleKind {
    #[default]
    Normal,
    Final,
}

/// One entry of the ordered rewrite-rule list.
///
/// `Normal` rules expose all fields; the `Final` rule is the list's catch-all
/// sentinel. It always sits at the end, is always enabled, and cannot be
/// deleted or moved. [`RuleStore`](crate::RuleStore) enforces those
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "type", default)]
    pub kind: RuleKind,
    #[serde(default)]
    pub match_value: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub rewrite_value: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Rule {
    /// A normal rule with the given match value and action, enabled.
    #[must_use]
    pub fn normal(match_value: &str, action: &str) -> Self {
        Self {
            kind: RuleKind::Normal,
            match_value: match_value.to_owned(),
            action: action.to_owned(),
            rewrite_value: String::new(),
            description: String::new(),
            enabled: true,
        }
    }

    /// The sentinel synthesized when an initial list lacks a FINAL rule:
    /// `action = DIRECT`, enabled, with the configured fallback description.
    #[must_use]
    pub fn final_default(description: &str) -> Self {
        Self {
            kind: RuleKind::Final,
            match_value: String::new(),
            action: "DIRECT".to_owned(),
            rewrite_value: String::new(),
            description: description.to_owned(),
            enabled: true,
        }
    }

    #[must_use]
    pub fn is_final(&self) -> bool {
        self.kind == RuleKind::Final
    }

    /// Builder-style rewrite value.
    #[must_use]
    pub fn rewrite(mut self, value: &str) -> Self {
        self.rewrite_value = value.to_owned();
        self
    }

    /// Builder-style description.
    #[must_use]
    pub fn describe(mut self, text: &str) -> Self {
        self.description = text.to_owned();
        self
    }

    /// Builder-style enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
