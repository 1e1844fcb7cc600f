//! Credential store access
//!
//! API keys live in the host's secret storage. Adapters only read them; the
//! settings UI writes through the host's own persistence path.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Read access to per-provider API keys
#[cfg_attr(test, mockall::automock)]
pub trait CredentialStore: Send + Sync {
    /// API key for the given provider id, if one has been stored
    fn api_key(&self, provider_id: &str) -> Option<String>;
}

/// In-memory credential store
///
/// Backs tests and the development shell. Production hosts wrap their
/// platform keychain behind [`CredentialStore`] instead.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    keys: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a key for a provider
    pub fn set_api_key(&self, provider_id: impl Into<String>, key: impl Into<String>) {
        let mut keys = self.keys.write().unwrap_or_else(PoisonError::into_inner);
        keys.insert(provider_id.into(), key.into());
    }

    /// Remove a provider's key
    pub fn clear_api_key(&self, provider_id: &str) {
        let mut keys = self.keys.write().unwrap_or_else(PoisonError::into_inner);
        keys.remove(provider_id);
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn api_key(&self, provider_id: &str) -> Option<String> {
        let keys = self.keys.read().unwrap_or_else(PoisonError::into_inner);
        keys.get(provider_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.api_key("googleai"), None);

        store.set_api_key("googleai", "abc");
        assert_eq!(store.api_key("googleai"), Some("abc".to_string()));
    }

    #[test]
    fn test_clear() {
        let store = MemoryCredentialStore::new();
        store.set_api_key("googleai", "abc");
        store.clear_api_key("googleai");
        assert_eq!(store.api_key("googleai"), None);
    }

    #[test]
    fn test_keys_are_per_provider() {
        let store = MemoryCredentialStore::new();
        store.set_api_key("googleai", "abc");
        assert_eq!(store.api_key("openai"), None);
    }
}
