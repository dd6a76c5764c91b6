//! Declarative field-visibility evaluation for the edit dialog.
//!
//! Each [`FieldSpec`] may carry visibility rules referencing sibling fields;
//! the dialog re-runs [`compute_visibility`] whenever a referenced value
//! changes, and fields that are invisible at commit time are excluded from
//! the collected value set.

use std::collections::HashMap;

use crate::types::{DraftRule, FieldSpec, FieldValue};

/// Evaluate every spec's visibility against the live draft.
///
/// A field is visible iff all of the following hold:
/// - it is not `hide_for_final` while editing the FINAL rule;
/// - it is not `show_only_for_final` while editing a normal rule;
/// - every attached [`VisibilityRule`](crate::VisibilityRule) passes. A
///   `show_when` rule passes when the referenced field's draft value is in
///   the set; a `hide_when` rule passes when it is not. Rules referencing a
///   field absent from the draft are skipped.
#[must_use]
pub fn compute_visibility(
    specs: &[FieldSpec],
    draft: &DraftRule,
    editing_final: bool,
) -> HashMap<String, bool> {
    specs
        .iter()
        .map(|spec| (spec.name.clone(), field_visible(spec, draft, editing_final)))
        .collect()
}

fn field_visible(spec: &FieldSpec, draft: &DraftRule, editing_final: bool) -> bool {
    if spec.hide_for_final && editing_final {
        return false;
    }
    if spec.show_only_for_final && !editing_final {
        return false;
    }

    spec.visibility_rules.iter().all(|rule| {
        let Some(value) = draft.get(&rule.reference_field) else {
            return true;
        };
        let current = match value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(b) => b.to_string(),
        };
        if let Some(show) = &rule.show_when {
            if !show.contains(&current) {
                return false;
            }
        }
        if let Some(hide) = &rule.hide_when {
            if hide.contains(&current) {
                return false;
            }
        }
        true
    })
}
