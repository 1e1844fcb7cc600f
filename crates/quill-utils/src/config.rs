//! Settings namespace helpers
//!
//! Provider settings live under a common root in the host configuration,
//! one section per provider id. Change notifications are scoped to these
//! sections, so every piece of code that names a section goes through here.

/// Root of the provider settings tree in host configuration
pub const SETTINGS_ROOT: &str = "quill.providers";

/// Settings namespace for a single provider (e.g. `quill.providers.googleai`)
pub fn provider_namespace(provider_id: &str) -> String {
    format!("{SETTINGS_ROOT}.{provider_id}")
}
