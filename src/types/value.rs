use std::fmt;

/// A single draft field value.
///
/// Dialog inputs come in two shapes: text-like inputs (`select` and `text`
/// fields) carry a string, checkboxes carry a flag. Replaces stringly-typed
/// widget lookup with a typed mapping from field name to current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Value of a `select` or `text` input.
    Text(String),
    /// Value of a `checkbox` input.
    Flag(bool),
}

impl FieldValue {
    /// Returns the text content, or `None` for a flag.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    /// Returns the flag, or `None` for text.
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::Flag(b) => Some(*b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Flag(v)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(v) => write!(f, "\"{v}\""),
            FieldValue::Flag(v) => write!(f, "{v}"),
        }
    }
}
