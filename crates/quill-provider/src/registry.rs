//! Provider registry
//!
//! Holds every registered provider behind the uniform capability trait so
//! routing and display code never inspect concrete types.

use std::sync::Arc;

use tracing::debug;

use crate::events::ConfigChangeEvent;
use crate::identity::ProviderIdentity;
use crate::provider::ModelProvider;

/// Uniform set of registered providers
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn ModelProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider
    pub fn register(&mut self, provider: Arc<dyn ModelProvider>) {
        debug!(provider = provider.identity().id, "registering provider");
        self.providers.push(provider);
    }

    /// Look up a provider by id
    pub fn get(&self, provider_id: &str) -> Option<Arc<dyn ModelProvider>> {
        self.providers
            .iter()
            .find(|provider| provider.identity().id == provider_id)
            .cloned()
    }

    /// Identities of every registered provider, in registration order
    pub fn identities(&self) -> Vec<ProviderIdentity> {
        self.providers
            .iter()
            .map(|provider| *provider.identity())
            .collect()
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no providers are registered
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Fan a configuration change out to every provider
    pub fn handle_config_change(&self, event: &ConfigChangeEvent) {
        for provider in &self.providers {
            provider.handle_config_change(event);
        }
    }
}
