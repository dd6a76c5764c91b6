//! Wire form of the rule list: an ordered array nested under a configured
//! key, `{ "<rule_key>": [Rule, ...] }`, sentinel trailing when present.

use serde_json::{json, Value};

use crate::types::Rule;

/// Serialize the full list into the keyed payload handed to the Persister.
#[must_use]
pub fn to_payload(rule_key: &str, rules: &[Rule]) -> Value {
    json!({ rule_key: rules })
}

/// Decode a keyed payload back into an ordered rule list.
///
/// A missing key decodes as an empty list (a fresh install has no rules
/// persisted yet).
///
/// # Errors
///
/// Returns the underlying `serde_json` error when the array or one of its
/// entries does not match the rule shape.
pub fn from_payload(rule_key: &str, payload: &Value) -> Result<Vec<Rule>, serde_json::Error> {
    match payload.get(rule_key) {
        Some(array) => serde_json::from_value(array.clone()),
        None => Ok(Vec::new()),
    }
}
