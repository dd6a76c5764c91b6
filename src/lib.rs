//! Invariant-preserving editor core for an ordered list of traffic-rewrite
//! rules.
//!
//! The list ends in a mandatory FINAL sentinel that can be edited but never
//! deleted, disabled, or moved. Reordering (up/down buttons or pointer drag),
//! schema-driven dialog visibility, and the optimistic-save/rollback
//! persistence protocol all live here; rendering and transport stay behind
//! the [`Renderer`] and [`Persister`] traits.

mod editor;
mod error;
mod persist;
mod reorder;
mod session;
mod store;
mod types;

pub mod serial;
pub mod visibility;

pub use editor::RuleEditor;
pub use error::RuledeckError;
pub use persist::{Applied, PersistenceCoordinator, Persister, Renderer};
pub use reorder::{relocate, swap_down, swap_up};
pub use session::{CommitOutcome, CommitTarget, EditSession, TransformHook, ValidateHook};
pub use store::RuleStore;
pub use visibility::compute_visibility;
pub use types::{
    DraftRule, EditorConfig, FieldSpec, FieldValue, InputKind, InsertionPolicy, Rule, RuleKind,
    StoreError, ValidationError, VisibilityRule,
};
