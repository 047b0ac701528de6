//! LLM Gateway port
//!
//! Defines the interface for communicating with LLM providers.
//! The system depends only on this minimal invoke contract and is
//! agnostic to provider-specific capabilities.

use async_trait::async_trait;
use planforge_domain::Model;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// Response from a single prompt execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmResponse {
    /// The generated text, unmodified.
    pub content: String,
    /// Identifier of the model that produced it, as reported by the backend.
    pub model: String,
}

impl LlmResponse {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to LLM providers.
/// Implementations (adapters) live in the infrastructure layer and are
/// populated once at construction; the registry is read-only afterwards.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Whether a provider is registered for this model.
    ///
    /// Used by the router to fail configuration errors before any
    /// network call is attempted.
    fn supports_model(&self, model: &Model) -> bool;

    /// Execute a single prompt against the given model and return its
    /// response. May suspend on the external call; no timeout, no retry.
    async fn invoke(&self, model: &Model, prompt: &str) -> Result<LlmResponse, GatewayError>;
}
