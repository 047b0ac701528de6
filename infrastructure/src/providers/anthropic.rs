//! Anthropic messages adapter.
//!
//! Single non-streaming request per invoke; the response's first text
//! block is the content. No timeout on the client.

use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use planforge_application::ports::llm_gateway::{GatewayError, LlmResponse};
use planforge_domain::Model;
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;

pub struct AnthropicAdapter {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AnthropicAdapter {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    model: String,
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    fn supports_model(&self, model: &Model) -> bool {
        model.is_claude()
    }

    async fn invoke(&self, model: &Model, prompt: &str) -> Result<LlmResponse, GatewayError> {
        let request = MessagesRequest {
            model: model.as_str(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!("Anthropic request: model={}", model);

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "Anthropic returned {status}: {body}"
            )));
        }

        let message: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        let content = message
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .ok_or_else(|| {
                GatewayError::RequestFailed(
                    "Anthropic response contained no text block".to_string(),
                )
            })?;

        Ok(LlmResponse::new(content, message.model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_claude_models_only() {
        let adapter = AnthropicAdapter::new("sk-ant-test");
        assert!(adapter.supports_model(&Model::Claude3Opus));
        assert!(adapter.supports_model(&Model::Claude35Sonnet));
        assert!(!adapter.supports_model(&Model::Gpt4o));
    }

    #[test]
    fn test_request_serialization() {
        let request = MessagesRequest {
            model: "claude-3-opus-20240229",
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: "hello",
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-3-opus-20240229");
        assert_eq!(json["max_tokens"], 4096);
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "id": "msg_abc",
            "type": "message",
            "role": "assistant",
            "model": "claude-3-opus-20240229",
            "content": [
                { "type": "text", "text": "Here is the plan." }
            ],
            "stop_reason": "end_turn",
            "usage": { "input_tokens": 10, "output_tokens": 5 }
        }"#;

        let message: MessagesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(message.model, "claude-3-opus-20240229");
        assert!(matches!(
            &message.content[0],
            ContentBlock::Text { text } if text == "Here is the plan."
        ));
    }

    #[test]
    fn test_non_text_blocks_are_skipped() {
        let body = r#"{
            "model": "claude-3-opus-20240229",
            "content": [
                { "type": "thinking", "thinking": "hmm" },
                { "type": "text", "text": "Answer." }
            ]
        }"#;

        let message: MessagesResponse = serde_json::from_str(body).unwrap();
        let text = message.content.into_iter().find_map(|b| match b {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        });
        assert_eq!(text.as_deref(), Some("Answer."));
    }
}
