//! Provider configuration snapshot and update types

use serde::{Deserialize, Serialize};

/// Read-only snapshot of a provider's effective configuration
///
/// Values are cloned out of the adapter; mutating a snapshot has no effect
/// on adapter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Currently loaded API key, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model used when a request does not name one
    pub default_model: String,
}

/// Partial configuration update from the settings UI
///
/// Absent fields keep their current values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfigUpdate {
    /// New API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// New default model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
}

impl ProviderConfigUpdate {
    /// Whether the update carries no changes
    pub fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.default_model.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update() {
        assert!(ProviderConfigUpdate::default().is_empty());

        let update = ProviderConfigUpdate {
            api_key: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_update_deserializes_partial_json() {
        let update: ProviderConfigUpdate = serde_json::from_str(r#"{"default_model":"gemini-pro"}"#).unwrap();
        assert!(update.api_key.is_none());
        assert_eq!(update.default_model.as_deref(), Some("gemini-pro"));
    }
}
