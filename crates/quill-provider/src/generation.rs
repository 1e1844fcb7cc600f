//! Generation request and result types

use serde::{Deserialize, Serialize};

/// Request for text generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier; falls back to the provider's default model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// User prompt
    pub prompt: String,

    /// Optional system prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0-1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl GenerateRequest {
    /// Create a builder for generation requests
    pub fn builder(prompt: impl Into<String>) -> GenerateRequestBuilder {
        GenerateRequestBuilder::new(prompt)
    }
}

/// Builder for GenerateRequest
pub struct GenerateRequestBuilder {
    model: Option<String>,
    prompt: String,
    system: Option<String>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl GenerateRequestBuilder {
    /// Create a new builder
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            model: None,
            prompt: prompt.into(),
            system: None,
            max_tokens: None,
            temperature: None,
        }
    }

    /// Name the model to use instead of the provider default
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the system prompt
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the maximum tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Build the generation request
    pub fn build(self) -> GenerateRequest {
        GenerateRequest {
            model: self.model,
            prompt: self.prompt,
            system: self.system,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

/// Reason a generation call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural completion
    Stop,

    /// Hit the max token limit
    Length,

    /// The integration has no request path yet
    NotImplemented,

    /// Caller cancelled the in-flight call
    Cancelled,

    /// Generation failed before producing content
    Error,
}

impl FinishReason {
    /// Whether this reason describes a completed generation
    pub fn is_success(self) -> bool {
        matches!(self, Self::Stop | Self::Length)
    }
}

/// Outcome of a generation call
///
/// Failures surface here as values so orchestration code can branch on the
/// finish reason without unwinding through error machinery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Generated text; empty when the call did not complete
    pub content: String,

    /// Why the call ended
    pub finish_reason: FinishReason,

    /// Human-readable failure message, present iff the call did not complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResult {
    /// Completed generation with the given content
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finish_reason: FinishReason::Stop,
            error: None,
        }
    }

    /// Failed generation with empty content and a descriptive message
    pub fn failure(finish_reason: FinishReason, message: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            finish_reason,
            error: Some(message.into()),
        }
    }
}
