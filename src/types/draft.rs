use std::collections::HashMap;

use super::field::FieldSpec;
use super::rule::Rule;
use super::value::FieldValue;

/// Mutable working copy of a rule scoped to one edit session.
///
/// Holds a typed `field name -> value` mapping seeded from the field specs.
/// A draft never aliases a stored rule: opening an edit copies the values
/// out, and only [`EditSession::commit`](crate::EditSession::commit) merges
/// them back.
#[derive(Debug, Clone, Default)]
pub struct DraftRule {
    values: HashMap<String, FieldValue>,
}

impl DraftRule {
    /// Fresh draft for an "add" dialog: every spec starts at its default.
    #[must_use]
    pub fn from_defaults(specs: &[FieldSpec]) -> Self {
        let values = specs
            .iter()
            .map(|spec| (spec.name.clone(), spec.default.clone()))
            .collect();
        Self { values }
    }

    /// Draft seeded from an existing rule. Specs naming one of the rule's
    /// attributes copy its current value; other specs fall back to their
    /// default.
    #[must_use]
    pub fn from_rule(specs: &[FieldSpec], rule: &Rule) -> Self {
        let values = specs
            .iter()
            .map(|spec| {
                let value = rule_value(rule, &spec.name).unwrap_or_else(|| spec.default.clone());
                (spec.name.clone(), value)
            })
            .collect();
        Self { values }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Overwrite a field's value. Returns false when the draft has no such
    /// field (the specs never declared it).
    pub fn set(&mut self, field: &str, value: FieldValue) -> bool {
        match self.values.get_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

/// Look up a rule attribute by its field name.
///
/// Returns `None` for names outside the rule record (such specs exist only
/// to drive visibility of their siblings).
#[must_use]
pub fn rule_value(rule: &Rule, field: &str) -> Option<FieldValue> {
    match field {
        "match_value" => Some(FieldValue::Text(rule.match_value.clone())),
        "action" => Some(FieldValue::Text(rule.action.clone())),
        "rewrite_value" => Some(FieldValue::Text(rule.rewrite_value.clone())),
        "description" => Some(FieldValue::Text(rule.description.clone())),
        "enabled" => Some(FieldValue::Flag(rule.enabled)),
        _ => None,
    }
}

/// Write a collected value onto a rule attribute. Values for names outside
/// the rule record, and type-mismatched values, are ignored.
pub fn assign_rule_value(rule: &mut Rule, field: &str, value: &FieldValue) {
    match (field, value) {
        ("match_value", FieldValue::Text(v)) => rule.match_value = v.clone(),
        ("action", FieldValue::Text(v)) => rule.action = v.clone(),
        ("rewrite_value", FieldValue::Text(v)) => rule.rewrite_value = v.clone(),
        ("description", FieldValue::Text(v)) => rule.description = v.clone(),
        _ => {}
    }
}
