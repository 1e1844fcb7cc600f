//! Provider identity metadata
//!
//! Static facts the registry needs to display and route a provider without
//! touching provider-specific logic.

use serde::Serialize;

/// Immutable identity record for one provider
///
/// Created once at adapter construction and handed to the registry by
/// reference. None of the fields change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderIdentity {
    /// Stable provider id (e.g. "googleai")
    pub id: &'static str,

    /// Human-readable name shown in the provider picker
    pub display_name: &'static str,

    /// Short description for the settings UI
    pub description: &'static str,

    /// Provider homepage
    pub website: &'static str,

    /// Whether the provider needs an API key before any call can succeed
    pub requires_api_key: bool,

    /// Whether a custom endpoint can be configured
    pub supports_endpoint_configuration: bool,

    /// Model used when a request does not name one
    pub default_model: &'static str,
}
