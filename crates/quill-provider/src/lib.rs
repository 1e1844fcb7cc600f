//! AI provider abstraction layer for quill-rs
//!
//! This crate defines the capability surface every model provider exposes to
//! the host, plus the collaborator interfaces the host supplies. It includes:
//!
//! - Generation request/result types and finish reasons
//! - The `ModelProvider` capability trait and the provider registry
//! - Credential store access and configuration-change events
//! - Declarative configuration field schemas for the settings UI
//! - Concrete provider adapters (behind feature flags)

pub mod cancel;
pub mod config;
pub mod credentials;
pub mod error;
pub mod events;
pub mod fields;
pub mod generation;
pub mod identity;
pub mod provider;
pub mod registry;

// Re-export main types
pub use cancel::{CancelHandle, CancelToken, cancel_pair};
pub use config::{ProviderConfig, ProviderConfigUpdate};
pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use error::{ProviderError, Result};
pub use events::{ConfigChangeEvent, ConfigSignal, ConfigSubscription, spawn_config_listener};
pub use fields::{ConfigurationField, FieldKind};
pub use generation::{FinishReason, GenerateRequest, GenerateResult};
pub use identity::ProviderIdentity;
pub use provider::{ConnectionReport, ModelDescriptor, ModelProvider};
pub use registry::ProviderRegistry;

// Provider implementations (feature-gated)
#[cfg(feature = "googleai")]
pub mod providers;
