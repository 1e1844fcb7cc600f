//! Declarative configuration schema for the settings UI
//!
//! Each provider publishes the fields its settings section contains; the UI
//! renders them as input controls and writes values back through the host
//! configuration.

use serde::{Deserialize, Serialize};

/// Input control type for a configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free-form text input
    String,

    /// Checkbox
    Boolean,

    /// Numeric input
    Number,

    /// Dropdown over a fixed options list
    Select,
}

/// One field in a provider's settings section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationField {
    /// Key under the provider's settings namespace
    pub id: String,

    /// Label shown next to the control
    pub name: String,

    /// Help text shown under the control
    pub description: String,

    /// Whether the provider cannot operate without a value
    pub required: bool,

    /// Control type
    pub kind: FieldKind,

    /// Options for [`FieldKind::Select`] fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl ConfigurationField {
    /// Create a new field
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        kind: FieldKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            required,
            kind,
            options: None,
        }
    }

    /// Attach a fixed options list (select fields)
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let field = ConfigurationField::new("api_key", "API key", "Key used for auth", true, FieldKind::String);
        assert_eq!(field.id, "api_key");
        assert!(field.required);
        assert!(field.options.is_none());
    }

    #[test]
    fn test_select_field_options() {
        let field = ConfigurationField::new("model", "Model", "Default model", false, FieldKind::Select)
            .with_options(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(field.options.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&FieldKind::Select).unwrap();
        assert_eq!(json, "\"select\"");
    }
}
