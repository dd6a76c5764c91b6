use thiserror::Error;

/// Rejections raised by [`RuleStore`](crate::RuleStore) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Out-of-range index, or an edit-in-place that would change the slot's
    /// rule kind. A programmer error: asserted in debug builds, rejected
    /// without mutating in release builds.
    #[error("invalid index {index} for rule list of length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// Delete, move, or toggle aimed at the FINAL sentinel.
    #[error("rule at index {index} is the FINAL rule and cannot be modified")]
    ProtectedRule { index: usize },
}

/// Rejections raised while driving an [`EditSession`](crate::EditSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The caller-supplied validation hook refused the candidate rule.
    /// The session stays open so the dialog can surface the message.
    #[error("{0}")]
    Rejected(String),

    /// `set_field` named a field the specs never declared.
    #[error("unknown dialog field '{field}'")]
    UnknownField { field: String },

    /// The session was already committed or cancelled.
    #[error("edit session is no longer open")]
    SessionClosed,
}
