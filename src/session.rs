//! Add/edit draft lifecycle for the rule dialog.

use std::collections::HashMap;

use crate::types::{
    assign_rule_value, DraftRule, FieldSpec, FieldValue, Rule, RuleKind, ValidationError,
};
use crate::visibility::compute_visibility;

/// Caller-supplied validation hook: returns an error message to reject the
/// candidate rule, `None` to accept it.
pub type ValidateHook = Box<dyn Fn(&Rule, bool) -> Option<String>>;

/// Caller-supplied transform hook: may rewrite the candidate before it is
/// finalized.
pub type TransformHook = Box<dyn Fn(Rule, bool) -> Rule>;

/// Where a committed rule goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTarget {
    /// New rule, placed per the configured insertion policy.
    Insert,
    /// Edit-in-place of the rule at this index.
    Replace(usize),
}

/// Result of a successful commit: the finalized rule and its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    pub rule: Rule,
    pub target: CommitTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Open,
    Committed,
    Cancelled,
}

/// One open add/edit dialog.
///
/// `CLOSED -> OPEN` is construction ([`EditSession::add`] /
/// [`EditSession::edit`]); `commit` and `cancel` close the session. The
/// draft is an owned copy — nothing touches the stored list until the
/// caller applies the [`CommitOutcome`].
pub struct EditSession {
    specs: Vec<FieldSpec>,
    draft: DraftRule,
    original: Option<Rule>,
    target: CommitTarget,
    editing_final: bool,
    state: SessionState,
}

impl EditSession {
    /// Open a dialog for a new rule: every field starts at its spec default.
    #[must_use]
    pub fn add(specs: Vec<FieldSpec>) -> Self {
        let draft = DraftRule::from_defaults(&specs);
        Self {
            specs,
            draft,
            original: None,
            target: CommitTarget::Insert,
            editing_final: false,
            state: SessionState::Open,
        }
    }

    /// Open a dialog editing the existing rule at `index` (copy-on-edit).
    #[must_use]
    pub fn edit(specs: Vec<FieldSpec>, index: usize, rule: &Rule) -> Self {
        let draft = DraftRule::from_rule(&specs, rule);
        Self {
            specs,
            draft,
            editing_final: rule.is_final(),
            original: Some(rule.clone()),
            target: CommitTarget::Replace(index),
            state: SessionState::Open,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    /// True when this session edits the FINAL sentinel.
    #[must_use]
    pub fn editing_final(&self) -> bool {
        self.editing_final
    }

    /// Update one draft field. Visibility of dependent fields is derived
    /// from the live draft, so the next [`visibility`](Self::visibility)
    /// call reflects the change.
    pub fn set_field(
        &mut self,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), ValidationError> {
        if self.state != SessionState::Open {
            return Err(ValidationError::SessionClosed);
        }
        if self.draft.set(field, value.into()) {
            Ok(())
        } else {
            Err(ValidationError::UnknownField {
                field: field.to_owned(),
            })
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.draft.get(name)
    }

    /// Current visibility of every declared field.
    #[must_use]
    pub fn visibility(&self) -> HashMap<String, bool> {
        compute_visibility(&self.specs, &self.draft, self.editing_final)
    }

    /// Collect visible fields into a candidate rule, validate, transform,
    /// and close the session.
    ///
    /// Invisible fields are excluded from collection. The candidate keeps
    /// `kind = Final` for a final edit and the original rule's `enabled`
    /// (true for new rules) — the enabled flag is never settable from the
    /// dialog. A validation rejection leaves the session open.
    ///
    /// # Errors
    ///
    /// [`ValidationError::SessionClosed`] after commit/cancel, or
    /// [`ValidationError::Rejected`] with the hook's message.
    pub fn commit(
        &mut self,
        validate: Option<&ValidateHook>,
        transform: Option<&TransformHook>,
    ) -> Result<CommitOutcome, ValidationError> {
        if self.state != SessionState::Open {
            return Err(ValidationError::SessionClosed);
        }

        let visible = self.visibility();
        let mut candidate = Rule {
            kind: if self.editing_final {
                RuleKind::Final
            } else {
                RuleKind::Normal
            },
            match_value: String::new(),
            action: String::new(),
            rewrite_value: String::new(),
            description: String::new(),
            enabled: self.original.as_ref().map_or(true, |rule| rule.enabled),
        };

        for spec in &self.specs {
            if !visible.get(&spec.name).copied().unwrap_or(false) {
                continue;
            }
            if let Some(value) = self.draft.get(&spec.name) {
                assign_rule_value(&mut candidate, &spec.name, value);
            }
        }

        if let Some(validate) = validate {
            if let Some(message) = validate(&candidate, self.editing_final) {
                return Err(ValidationError::Rejected(message));
            }
        }
        if let Some(transform) = transform {
            candidate = transform(candidate, self.editing_final);
        }

        self.state = SessionState::Committed;
        Ok(CommitOutcome {
            rule: candidate,
            target: self.target,
        })
    }

    /// Discard the draft without touching the stored list.
    pub fn cancel(&mut self) {
        if self.state == SessionState::Open {
            self.state = SessionState::Cancelled;
        }
    }
}
