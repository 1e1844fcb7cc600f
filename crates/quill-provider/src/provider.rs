//! Provider capability trait
//!
//! Every model backend exposes the same surface to the host, whether or not
//! the underlying integration is implemented. The registry and the settings
//! UI only ever talk to this trait, so a real implementation can replace a
//! stub without changing callers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cancel::CancelToken;
use crate::config::{ProviderConfig, ProviderConfigUpdate};
use crate::error::Result;
use crate::events::ConfigChangeEvent;
use crate::fields::ConfigurationField;
use crate::generation::{GenerateRequest, GenerateResult};
use crate::identity::ProviderIdentity;

/// One model offered by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Provider-scoped model id
    pub id: String,
}

impl ModelDescriptor {
    /// Create a descriptor for the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Outcome of a connection test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionReport {
    /// Whether the provider is reachable with the current configuration
    pub success: bool,

    /// Human-readable outcome, including remediation on failure
    pub message: String,
}

impl ConnectionReport {
    /// Successful report
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Failed report
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Capability surface of one AI model provider
///
/// Gating conditions (missing key, unknown model) surface as result values,
/// never as `Err`; callers branch on the outcome without error-handling
/// machinery.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Static identity consumed by the registry
    fn identity(&self) -> &ProviderIdentity;

    /// Whether a non-empty API key is currently loaded
    ///
    /// Pure read; no side effects.
    fn is_configured(&self) -> bool;

    /// Re-read credentials from the store
    ///
    /// Called at construction and whenever a change event for this
    /// provider's namespace fires. Idempotent; safe to call repeatedly.
    fn refresh_credentials(&self);

    /// Generate text
    ///
    /// Not-configured, cancelled, and not-implemented outcomes are reported
    /// in the returned [`GenerateResult`]; `Err` is reserved for faults at
    /// the adapter boundary.
    async fn generate(
        &self,
        request: GenerateRequest,
        cancel: Option<CancelToken>,
    ) -> Result<GenerateResult>;

    /// Ids of the models this provider offers; empty while unconfigured
    fn list_model_ids(&self) -> Vec<String>;

    /// Models this provider offers
    ///
    /// Agrees with [`list_model_ids`](Self::list_model_ids) in content and
    /// order.
    fn list_models(&self) -> Vec<ModelDescriptor> {
        let models: Vec<ModelDescriptor> = self
            .list_model_ids()
            .into_iter()
            .map(ModelDescriptor::new)
            .collect();
        debug!(
            provider = self.identity().id,
            count = models.len(),
            "listing models"
        );
        models
    }

    /// Check whether `model_id` is usable with the current configuration
    async fn test_connection(&self, model_id: &str) -> ConnectionReport;

    /// Snapshot of the effective configuration
    fn config(&self) -> ProviderConfig;

    /// Apply a partial configuration update
    async fn update_config(&self, update: ProviderConfigUpdate) -> Result<()>;

    /// Fields rendered by the settings UI for this provider
    fn configuration_fields(&self) -> Vec<ConfigurationField>;

    /// Settings namespace this provider reacts to
    fn settings_namespace(&self) -> String {
        quill_utils::config::provider_namespace(self.identity().id)
    }

    /// React to a host configuration change
    ///
    /// Events outside this provider's namespace are ignored.
    fn handle_config_change(&self, event: &ConfigChangeEvent) {
        if event.affects_configuration(&self.settings_namespace()) {
            self.refresh_credentials();
        }
    }
}
