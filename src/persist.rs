//! The optimistic-update/rollback persistence protocol.
//!
//! Every list mutation — insert, delete, move, drag, toggle, edit-in-place —
//! persists through [`PersistenceCoordinator::commit_mutation`], so failure
//! handling lives in exactly one place.

use tracing::{debug, warn};

use crate::error::RuledeckError;
use crate::serial;
use crate::store::RuleStore;
use crate::types::Rule;

/// Presentation-side view of the list. Called after every successful
/// mutation and after every rollback.
pub trait Renderer {
    fn render(&mut self, rules: &[Rule]);
}

/// Durable storage for the serialized list.
///
/// The payload is the keyed structure from [`serial::to_payload`]. The call
/// is synchronous from the engine's single writer thread: implementations
/// bridge whatever transport they use and report the final outcome, which
/// the coordinator awaits before deciding rollback.
pub trait Persister {
    fn save(&mut self, payload: &serde_json::Value) -> bool;
}

/// Outcome of the `apply` closure handed to
/// [`PersistenceCoordinator::commit_mutation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The list changed; persist it.
    Changed,
    /// Safe no-op (boundary move, rejected drop); nothing to persist.
    Unchanged,
}

/// Applies mutations optimistically, persists the full list, and inverts
/// the mutation when the save fails.
pub struct PersistenceCoordinator {
    persister: Box<dyn Persister>,
    renderer: Box<dyn Renderer>,
    rule_key: String,
}

impl PersistenceCoordinator {
    #[must_use]
    pub fn new(persister: Box<dyn Persister>, renderer: Box<dyn Renderer>, rule_key: &str) -> Self {
        Self {
            persister,
            renderer,
            rule_key: rule_key.to_owned(),
        }
    }

    /// Run one mutation through the optimistic protocol.
    ///
    /// `apply` mutates the store in memory (the UI reflects the new state
    /// immediately); `invert` is the defined inverse run only when the
    /// Persister reports failure — flip-back for a toggle, snapshot restore
    /// for structural changes. An `apply` error propagates without a persist
    /// call; an `Unchanged` outcome skips persist and render entirely.
    ///
    /// # Errors
    ///
    /// [`RuledeckError::PersistFailed`] after a rollback, or the error
    /// `apply` itself produced.
    pub fn commit_mutation<A, I>(
        &mut self,
        store: &mut RuleStore,
        apply: A,
        invert: I,
    ) -> Result<(), RuledeckError>
    where
        A: FnOnce(&mut RuleStore) -> Result<Applied, RuledeckError>,
        I: FnOnce(&mut RuleStore),
    {
        match apply(store)? {
            Applied::Unchanged => return Ok(()),
            Applied::Changed => {}
        }

        let payload = serial::to_payload(&self.rule_key, store.rules());
        if self.persister.save(&payload) {
            debug!(len = store.len(), "rule list persisted");
            self.renderer.render(store.rules());
            Ok(())
        } else {
            warn!("persist failed; rolling back optimistic mutation");
            invert(store);
            self.renderer.render(store.rules());
            Err(RuledeckError::PersistFailed)
        }
    }
}
