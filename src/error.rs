use thiserror::Error;

use crate::types::{StoreError, ValidationError};

/// Unified error type covering store rejections, dialog validation, and
/// persistence failures.
///
/// Returned by the [`RuleEditor`](crate::RuleEditor) command API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuledeckError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The Persister reported failure; the optimistic mutation was rolled
    /// back and a re-render requested. Surface as a notice.
    #[error("failed to persist rule list; change was rolled back")]
    PersistFailed,

    /// The command is switched off by configuration (`allow_move`,
    /// `allow_delete`, `allow_toggle`).
    #[error("'{command}' is disabled by configuration")]
    Disabled { command: &'static str },
}
