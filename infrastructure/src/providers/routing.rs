//! Routing gateway — the model registry.
//!
//! Holds the provider adapters registered at construction and resolves
//! each model to the adapter that claims it. Resolution is strict: a
//! model no registered adapter claims is a configuration error, not a
//! reason to fall back to some other backend.

use super::ProviderAdapter;
use async_trait::async_trait;
use planforge_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmResponse};
use planforge_domain::Model;
use std::sync::Arc;
use tracing::debug;

pub struct RoutingGateway {
    providers: Vec<Arc<dyn ProviderAdapter>>,
}

impl RoutingGateway {
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>) -> Self {
        Self { providers }
    }

    fn resolve_provider(&self, model: &Model) -> Result<&dyn ProviderAdapter, GatewayError> {
        self.providers
            .iter()
            .find(|p| p.supports_model(model))
            .map(|p| p.as_ref())
            .ok_or_else(|| GatewayError::ModelNotAvailable(model.to_string()))
    }
}

#[async_trait]
impl LlmGateway for RoutingGateway {
    fn supports_model(&self, model: &Model) -> bool {
        self.resolve_provider(model).is_ok()
    }

    async fn invoke(&self, model: &Model, prompt: &str) -> Result<LlmResponse, GatewayError> {
        let provider = self.resolve_provider(model)?;
        debug!("Dispatching {} to {} provider", model, provider.kind());
        provider.invoke(model, prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderKind;

    // -- Mock ProviderAdapter --------------------------------------------------

    struct MockProvider {
        kind: ProviderKind,
        claims_claude: bool,
    }

    impl MockProvider {
        fn openai() -> Arc<dyn ProviderAdapter> {
            Arc::new(Self {
                kind: ProviderKind::OpenAi,
                claims_claude: false,
            })
        }

        fn anthropic() -> Arc<dyn ProviderAdapter> {
            Arc::new(Self {
                kind: ProviderKind::Anthropic,
                claims_claude: true,
            })
        }
    }

    #[async_trait]
    impl ProviderAdapter for MockProvider {
        fn kind(&self) -> ProviderKind {
            self.kind
        }

        fn supports_model(&self, model: &Model) -> bool {
            if self.claims_claude {
                model.is_claude()
            } else {
                model.is_gpt()
            }
        }

        async fn invoke(
            &self,
            model: &Model,
            _prompt: &str,
        ) -> Result<LlmResponse, GatewayError> {
            Ok(LlmResponse::new(self.kind.to_string(), model.to_string()))
        }
    }

    #[test]
    fn gpt_model_resolves_to_openai() {
        let gw = RoutingGateway::new(vec![MockProvider::openai(), MockProvider::anthropic()]);
        let provider = gw.resolve_provider(&Model::Gpt4o).unwrap();
        assert_eq!(provider.kind(), ProviderKind::OpenAi);
    }

    #[test]
    fn claude_model_resolves_to_anthropic() {
        let gw = RoutingGateway::new(vec![MockProvider::openai(), MockProvider::anthropic()]);
        let provider = gw.resolve_provider(&Model::Claude3Opus).unwrap();
        assert_eq!(provider.kind(), ProviderKind::Anthropic);
    }

    #[test]
    fn unclaimed_model_is_not_available() {
        let gw = RoutingGateway::new(vec![MockProvider::openai()]);
        let result = gw.resolve_provider(&Model::Claude3Opus);
        assert!(matches!(result, Err(GatewayError::ModelNotAvailable(_))));
        // No fallback to an unrelated provider
        assert!(!gw.supports_model(&Model::Claude3Opus));
    }

    #[test]
    fn custom_model_is_never_claimed() {
        let gw = RoutingGateway::new(vec![MockProvider::openai(), MockProvider::anthropic()]);
        assert!(!gw.supports_model(&Model::Custom("llama3".into())));
    }

    #[test]
    fn empty_registry_supports_nothing() {
        let gw = RoutingGateway::new(vec![]);
        assert!(!gw.supports_model(&Model::Gpt4o));
    }

    #[tokio::test]
    async fn invoke_dispatches_to_claiming_provider() {
        let gw = RoutingGateway::new(vec![MockProvider::openai(), MockProvider::anthropic()]);
        let response = gw.invoke(&Model::Claude3Opus, "hi").await.unwrap();
        assert_eq!(response.content, "anthropic");
    }
}
