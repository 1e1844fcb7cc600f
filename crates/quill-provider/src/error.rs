//! Error types for provider operations

use thiserror::Error;

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors that can occur during provider operations
///
/// Ordinary gating conditions on the generation path (missing key, unknown
/// model, the stubbed request path) are reported inside
/// [`GenerateResult`](crate::GenerateResult) or
/// [`ConnectionReport`](crate::ConnectionReport); this enum covers faults at
/// the adapter boundary.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Provider has no usable credentials
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// Requested model is not offered by this provider
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// Operation has no real implementation yet
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// Operation was cancelled by the caller
    #[error("operation cancelled")]
    Cancelled,

    /// Transient provider failure, safe to retry
    #[error("transient provider failure: {0}")]
    Transient(String),

    /// Configuration update rejected
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
