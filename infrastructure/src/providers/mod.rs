pub mod anthropic;
pub mod openai;
pub mod routing;

use async_trait::async_trait;
use planforge_application::ports::llm_gateway::{GatewayError, LlmResponse};
use planforge_domain::Model;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Anthropic => write!(f, "anthropic"),
        }
    }
}

/// A single LLM backend.
///
/// Adapters are registered with the [`routing::RoutingGateway`] once at
/// construction and never removed.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;
    fn supports_model(&self, model: &Model) -> bool;
    async fn invoke(&self, model: &Model, prompt: &str) -> Result<LlmResponse, GatewayError>;
}
