//! Google AI (Gemini) provider adapter
//!
//! Placeholder integration: the capability surface is complete and gated on
//! configuration, but the request path is not wired up yet. `generate`
//! reports a not-implemented outcome instead of calling the Google AI
//! endpoints, and no operation here issues a network call.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::cancel::CancelToken;
use crate::config::{ProviderConfig, ProviderConfigUpdate};
use crate::credentials::CredentialStore;
use crate::error::{ProviderError, Result};
use crate::fields::{ConfigurationField, FieldKind};
use crate::generation::{FinishReason, GenerateRequest, GenerateResult};
use crate::identity::ProviderIdentity;
use crate::provider::{ConnectionReport, ModelProvider};

const IDENTITY: ProviderIdentity = ProviderIdentity {
    id: "googleai",
    display_name: "Google AI",
    description: "Gemini models served through the Google AI API",
    website: "https://ai.google.dev",
    requires_api_key: true,
    supports_endpoint_configuration: false,
    default_model: "gemini-pro",
};

/// Models offered while the integration is stubbed; the real implementation
/// will list them from the API instead
const MODELS: [&str; 2] = ["gemini-pro", "gemini-pro-vision"];

const REQUEST_TIMEOUT_SECS: u64 = 120;

fn configure_hint() -> String {
    format!(
        "Set your Google AI API key under '{}.api_key' in settings.",
        quill_utils::config::provider_namespace(IDENTITY.id)
    )
}

/// Google AI provider adapter
///
/// Credential state has a single logical writer (`refresh_credentials`); the
/// lock only guards readers against a concurrent refresh.
pub struct GoogleAiProvider {
    identity: ProviderIdentity,
    client: Client,
    store: Arc<dyn CredentialStore>,
    api_key: RwLock<Option<String>>,
}

impl GoogleAiProvider {
    /// Create the adapter and load credentials from the store
    pub fn new(store: Arc<dyn CredentialStore>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let provider = Self {
            identity: IDENTITY,
            client,
            store,
            api_key: RwLock::new(None),
        };
        provider.refresh_credentials();
        Ok(provider)
    }

    fn current_key(&self) -> Option<String> {
        self.api_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ModelProvider for GoogleAiProvider {
    fn identity(&self) -> &ProviderIdentity {
        &self.identity
    }

    fn is_configured(&self) -> bool {
        self.current_key().is_some()
    }

    fn refresh_credentials(&self) {
        // Empty keys count as absent so is_configured stays a plain
        // presence check
        let key = self
            .store
            .api_key(self.identity.id)
            .filter(|key| !key.is_empty());

        match &key {
            Some(_) => info!(provider = self.identity.id, "API key loaded"),
            None => warn!(
                provider = self.identity.id,
                "no API key configured; provider is inactive"
            ),
        }

        *self.api_key.write().unwrap_or_else(PoisonError::into_inner) = key;
    }

    #[instrument(skip(self, request, cancel), fields(model = %request.model.as_deref().unwrap_or(IDENTITY.default_model)))]
    async fn generate(
        &self,
        request: GenerateRequest,
        cancel: Option<CancelToken>,
    ) -> Result<GenerateResult> {
        if !self.is_configured() {
            warn!(
                provider = self.identity.id,
                "generate called without configuration"
            );
            return Ok(GenerateResult::failure(
                FinishReason::Error,
                format!("Google AI provider is not configured. {}", configure_hint()),
            ));
        }

        if cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Ok(GenerateResult::failure(
                FinishReason::Cancelled,
                "Generation was cancelled before the request was sent.",
            ));
        }

        // The client is configured but the request path is not wired up yet
        let _ = (&self.client, &request);
        Ok(GenerateResult::failure(
            FinishReason::NotImplemented,
            "Google AI text generation is not implemented yet.",
        ))
    }

    fn list_model_ids(&self) -> Vec<String> {
        if !self.is_configured() {
            return Vec::new();
        }
        MODELS.iter().map(|id| (*id).to_string()).collect()
    }

    async fn test_connection(&self, model_id: &str) -> ConnectionReport {
        if !self.is_configured() {
            return ConnectionReport::failed(format!(
                "Google AI provider is not configured. {}",
                configure_hint()
            ));
        }

        if !MODELS.contains(&model_id) {
            return ConnectionReport::failed(format!(
                "Model '{model_id}' not found. Available models: {}",
                MODELS.join(", ")
            ));
        }

        // A real implementation performs a lightweight round-trip here; the
        // stub only validates membership in the static list
        ConnectionReport::ok(format!("Model '{model_id}' is available."))
    }

    fn config(&self) -> ProviderConfig {
        ProviderConfig {
            api_key: self.current_key(),
            default_model: self.identity.default_model.to_string(),
        }
    }

    async fn update_config(&self, update: ProviderConfigUpdate) -> Result<()> {
        if update.is_empty() {
            return Ok(());
        }

        info!(
            provider = self.identity.id,
            updates_key = update.api_key.is_some(),
            updates_model = update.default_model.is_some(),
            "configuration update requested"
        );

        // The credential store is read-only from this adapter; persistence
        // lands with the real integration
        Err(ProviderError::NotImplemented(
            "persisting Google AI configuration is not implemented yet".to_string(),
        ))
    }

    fn configuration_fields(&self) -> Vec<ConfigurationField> {
        vec![
            ConfigurationField::new(
                "api_key",
                "API key",
                "Google AI API key used to authenticate requests",
                true,
                FieldKind::String,
            ),
            ConfigurationField::new(
                "default_model",
                "Default model",
                "Model used when a request does not name one",
                false,
                FieldKind::Select,
            )
            .with_options(MODELS.iter().map(|id| (*id).to_string()).collect()),
        ]
    }
}
