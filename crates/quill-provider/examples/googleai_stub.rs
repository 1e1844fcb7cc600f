//! Example demonstrating the Google AI provider stub
//!
//! This example shows how to:
//! - Wire a provider to a credential store and the config change signal
//! - Observe the gating behavior while no API key is configured
//! - List models and test connections once a key is present

use std::sync::Arc;

use quill_provider::providers::GoogleAiProvider;
use quill_provider::{
    ConfigChangeEvent, ConfigSignal, GenerateRequest, MemoryCredentialStore, ModelProvider,
    ProviderRegistry, spawn_config_listener,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    quill_utils::init_tracing();

    let store = Arc::new(MemoryCredentialStore::new());
    let provider: Arc<dyn ModelProvider> = Arc::new(GoogleAiProvider::new(store.clone())?);

    let mut registry = ProviderRegistry::new();
    registry.register(provider.clone());

    let signal = ConfigSignal::new();
    let _subscription = spawn_config_listener(provider.clone(), signal.subscribe());

    println!("=== Google AI provider stub ===\n");

    // 1. Nothing is configured yet; every operation short-circuits
    println!("1. Without an API key:");
    println!("   configured: {}", provider.is_configured());
    let result = provider
        .generate(GenerateRequest::builder("Hello Gemini").build(), None)
        .await?;
    println!("   generate -> {:?}: {}", result.finish_reason, result.error.unwrap_or_default());
    println!("   models: {:?}\n", provider.list_model_ids());

    // 2. Store a key and notify, as the settings UI would
    println!("2. After saving an API key in settings:");
    store.set_api_key("googleai", "demo-key");
    signal.emit(ConfigChangeEvent::single("quill.providers.googleai.api_key"));
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    println!("   configured: {}", provider.is_configured());
    for model in provider.list_models() {
        println!("   model: {}", model.id);
    }

    // 3. Connection tests validate against the model list
    println!("\n3. Connection tests:");
    for model_id in ["gemini-pro", "unknown-model"] {
        let report = provider.test_connection(model_id).await;
        println!("   {model_id}: success={} ({})", report.success, report.message);
    }

    // 4. The request path itself is still a stub
    println!("\n4. Generation is not wired up yet:");
    let result = provider
        .generate(GenerateRequest::builder("Hello Gemini").build(), None)
        .await?;
    println!("   generate -> {:?}: {}", result.finish_reason, result.error.unwrap_or_default());

    Ok(())
}
