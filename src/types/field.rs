use super::value::FieldValue;

/// The input widget a field is edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Select,
    Text,
    Checkbox,
}

/// One declarative visibility condition attached to a [`FieldSpec`].
///
/// The rule references a sibling field by name and passes when that field's
/// current draft value is in `show_when` (if set) and not in `hide_when`
/// (if set). A field is visible only if every attached rule passes.
#[derive(Debug, Clone)]
pub struct VisibilityRule {
    pub reference_field: String,
    pub show_when: Option<Vec<String>>,
    pub hide_when: Option<Vec<String>>,
}

impl VisibilityRule {
    /// Show the field only while `reference_field` holds one of `values`.
    #[must_use]
    pub fn show_when(reference_field: &str, values: &[&str]) -> Self {
        Self {
            reference_field: reference_field.to_owned(),
            show_when: Some(values.iter().map(|v| (*v).to_owned()).collect()),
            hide_when: None,
        }
    }

    /// Hide the field while `reference_field` holds one of `values`.
    #[must_use]
    pub fn hide_when(reference_field: &str, values: &[&str]) -> Self {
        Self {
            reference_field: reference_field.to_owned(),
            show_when: None,
            hide_when: Some(values.iter().map(|v| (*v).to_owned()).collect()),
        }
    }
}

/// Declarative descriptor of one editable rule attribute.
///
/// # Example
///
/// ```
/// use ruledeck::{FieldSpec, VisibilityRule};
///
/// let rewrite = FieldSpec::text("rewrite_value")
///     .visible_when(VisibilityRule::show_when("action", &["REWRITE"]))
///     .hide_for_final();
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub kind: InputKind,
    pub default: FieldValue,
    pub visibility_rules: Vec<VisibilityRule>,
    pub hide_for_final: bool,
    pub show_only_for_final: bool,
    pub optional: bool,
}

impl FieldSpec {
    fn new(name: &str, kind: InputKind, default: FieldValue) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            default,
            visibility_rules: Vec::new(),
            hide_for_final: false,
            show_only_for_final: false,
            optional: false,
        }
    }

    /// A dropdown field collecting one of a configured value set.
    #[must_use]
    pub fn select(name: &str) -> Self {
        Self::new(name, InputKind::Select, FieldValue::Text(String::new()))
    }

    /// A free-text field.
    #[must_use]
    pub fn text(name: &str) -> Self {
        Self::new(name, InputKind::Text, FieldValue::Text(String::new()))
    }

    /// A checkbox field.
    #[must_use]
    pub fn checkbox(name: &str) -> Self {
        Self::new(name, InputKind::Checkbox, FieldValue::Flag(false))
    }

    /// Value a fresh draft starts with.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = value.into();
        self
    }

    /// Attach a visibility rule. May be called repeatedly; all rules must
    /// pass for the field to be visible.
    #[must_use]
    pub fn visible_when(mut self, rule: VisibilityRule) -> Self {
        self.visibility_rules.push(rule);
        self
    }

    /// Never shown while editing the FINAL rule.
    #[must_use]
    pub fn hide_for_final(mut self) -> Self {
        self.hide_for_final = true;
        self
    }

    /// Shown only while editing the FINAL rule.
    #[must_use]
    pub fn show_only_for_final(mut self) -> Self {
        self.show_only_for_final = true;
        self
    }

    /// Mark the field optional (presentation hint; no validation effect).
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}
