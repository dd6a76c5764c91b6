mod config;
mod draft;
mod error;
mod field;
mod rule;
mod value;

pub use config::{EditorConfig, InsertionPolicy};
pub use draft::DraftRule;
pub(crate) use draft::assign_rule_value;
pub use error::{StoreError, ValidationError};
pub use field::{FieldSpec, InputKind, VisibilityRule};
pub use rule::{Rule, RuleKind};
pub use value::FieldValue;
