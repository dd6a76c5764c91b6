//! Command-level facade tying the store, dialog sessions, and persistence
//! together.
//!
//! Every user action is an explicit typed call here — no DOM events, no
//! global alert/confirm. The presentation layer decides how to surface the
//! returned errors.

use crate::error::RuledeckError;
use crate::persist::{Applied, PersistenceCoordinator, Persister, Renderer};
use crate::session::{CommitTarget, EditSession, TransformHook, ValidateHook};
use crate::store::RuleStore;
use crate::types::{EditorConfig, FieldSpec, Rule, StoreError};

/// A configured rule editor: the ordered list, its dialog schema, the
/// caller's hooks, and the persistence seam.
pub struct RuleEditor {
    config: EditorConfig,
    specs: Vec<FieldSpec>,
    store: RuleStore,
    coordinator: PersistenceCoordinator,
    validate: Option<ValidateHook>,
    transform: Option<TransformHook>,
}

impl RuleEditor {
    /// Build an editor over an initial rule list. The list passes through
    /// [`RuleStore::initialize`], so the sentinel invariant holds from the
    /// start.
    #[must_use]
    pub fn new(
        config: EditorConfig,
        specs: Vec<FieldSpec>,
        initial_rules: Vec<Rule>,
        persister: Box<dyn Persister>,
        renderer: Box<dyn Renderer>,
    ) -> Self {
        let store = RuleStore::initialize(initial_rules, &config);
        let coordinator = PersistenceCoordinator::new(persister, renderer, &config.rule_key);
        Self {
            config,
            specs,
            store,
            coordinator,
            validate: None,
            transform: None,
        }
    }

    /// Install the validation hook run against every commit candidate.
    #[must_use]
    pub fn with_validate(mut self, hook: ValidateHook) -> Self {
        self.validate = Some(hook);
        self
    }

    /// Install the transform hook that may rewrite a candidate before it is
    /// finalized.
    #[must_use]
    pub fn with_transform(mut self, hook: TransformHook) -> Self {
        self.transform = Some(hook);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        self.store.rules()
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Open an "add rule" dialog session.
    #[must_use]
    pub fn begin_add(&self) -> EditSession {
        EditSession::add(self.specs.clone())
    }

    /// Open an "edit rule" dialog session over the rule at `index`.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidIndex`] when no such rule exists.
    pub fn begin_edit(&self, index: usize) -> Result<EditSession, RuledeckError> {
        let rule = self.store.get(index).ok_or(StoreError::InvalidIndex {
            index,
            len: self.store.len(),
        })?;
        Ok(EditSession::edit(self.specs.clone(), index, rule))
    }

    /// Commit an open session: collect, validate, transform, then insert or
    /// replace through the persistence protocol.
    ///
    /// A validation rejection leaves the session open for another attempt; a
    /// persist failure rolls the list back to its pre-commit state.
    pub fn finish(&mut self, session: &mut EditSession) -> Result<(), RuledeckError> {
        let outcome = session.commit(self.validate.as_ref(), self.transform.as_ref())?;
        let snapshot = self.store.snapshot();
        self.coordinator.commit_mutation(
            &mut self.store,
            |store| {
                match outcome.target {
                    CommitTarget::Insert => store.insert(outcome.rule),
                    CommitTarget::Replace(index) => store.replace(index, outcome.rule)?,
                }
                Ok(Applied::Changed)
            },
            |store| store.restore(snapshot),
        )
    }

    /// Delete the rule at `index`. The FINAL sentinel is protected.
    pub fn delete_rule(&mut self, index: usize) -> Result<(), RuledeckError> {
        if !self.config.allow_delete {
            return Err(RuledeckError::Disabled { command: "delete" });
        }
        let snapshot = self.store.snapshot();
        self.coordinator.commit_mutation(
            &mut self.store,
            |store| {
                store.delete(index)?;
                Ok(Applied::Changed)
            },
            |store| store.restore(snapshot),
        )
    }

    /// Swap the rule at `index` with its predecessor. Boundary clicks are
    /// safe no-ops.
    pub fn move_rule_up(&mut self, index: usize) -> Result<(), RuledeckError> {
        if !self.config.allow_move {
            return Err(RuledeckError::Disabled { command: "move" });
        }
        let snapshot = self.store.snapshot();
        self.coordinator.commit_mutation(
            &mut self.store,
            |store| {
                Ok(if store.move_up(index) {
                    Applied::Changed
                } else {
                    Applied::Unchanged
                })
            },
            |store| store.restore(snapshot),
        )
    }

    /// Swap the rule at `index` with its successor. Boundary clicks are
    /// safe no-ops.
    pub fn move_rule_down(&mut self, index: usize) -> Result<(), RuledeckError> {
        if !self.config.allow_move {
            return Err(RuledeckError::Disabled { command: "move" });
        }
        let snapshot = self.store.snapshot();
        self.coordinator.commit_mutation(
            &mut self.store,
            |store| {
                Ok(if store.move_down(index) {
                    Applied::Changed
                } else {
                    Applied::Unchanged
                })
            },
            |store| store.restore(snapshot),
        )
    }

    /// Drag-relocate `source` onto `target` with the drop-side bias.
    /// Rejected drops (same row, the sentinel) are safe no-ops.
    pub fn drag_rule(
        &mut self,
        source: usize,
        target: usize,
        drop_after: bool,
    ) -> Result<(), RuledeckError> {
        if !self.config.allow_move {
            return Err(RuledeckError::Disabled { command: "move" });
        }
        let snapshot = self.store.snapshot();
        self.coordinator.commit_mutation(
            &mut self.store,
            |store| {
                Ok(if store.relocate(source, target, drop_after) {
                    Applied::Changed
                } else {
                    Applied::Unchanged
                })
            },
            |store| store.restore(snapshot),
        )
    }

    /// Set the enabled flag of the rule at `index`. Bypasses the dialog's
    /// validation path; a failed persist flips the flag back.
    pub fn toggle_rule(&mut self, index: usize, enabled: bool) -> Result<(), RuledeckError> {
        if !self.config.allow_toggle {
            return Err(RuledeckError::Disabled { command: "toggle" });
        }
        let prior = self.store.get(index).map(|rule| rule.enabled);
        self.coordinator.commit_mutation(
            &mut self.store,
            |store| {
                store.toggle_enabled(index, enabled)?;
                Ok(Applied::Changed)
            },
            |store| {
                if let Some(prior) = prior {
                    let _ = store.toggle_enabled(index, prior);
                }
            },
        )
    }
}
