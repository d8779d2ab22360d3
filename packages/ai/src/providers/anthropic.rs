//! Anthropic Claude provider implementation.

use serde::{Deserialize, Serialize};

use super::{LlmProvider, Message, error_message};
use crate::AiError;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const MAX_TOKENS: u32 = 4096;

/// Anthropic Claude API provider.
pub struct AnthropicProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl AnthropicProvider {
    /// Creates a new Anthropic provider.
    #[must_use]
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            model,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

/// Anthropic API request body.
#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Serialize)]
struct AnthropicMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Anthropic API response body.
#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum AnthropicContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

fn build_request<'a>(
    model: &'a str,
    system_prompt: &'a str,
    messages: &'a [Message],
) -> AnthropicRequest<'a> {
    AnthropicRequest {
        model,
        max_tokens: MAX_TOKENS,
        system: system_prompt,
        messages: messages
            .iter()
            .map(|m| AnthropicMessage {
                role: m.role.into(),
                content: &m.content,
            })
            .collect(),
    }
}

fn parse_response(body: &str) -> Result<String, AiError> {
    let response: AnthropicResponse = serde_json::from_str(body)?;

    let text = response
        .content
        .into_iter()
        .filter_map(|block| match block {
            AnthropicContentBlock::Text { text } => Some(text),
            AnthropicContentBlock::Other => None,
        })
        .collect::<Vec<_>>()
        .join("\n");

    if text.is_empty() {
        return Err(AiError::Provider {
            message: "Anthropic response contained no text".to_string(),
        });
    }

    Ok(text)
}

#[async_trait::async_trait]
impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> Result<String, AiError> {
        let request = build_request(&self.model, system_prompt, messages);

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(AiError::Provider {
                message: error_message(status, &body),
            });
        }

        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_system_prompt_separately() {
        let messages = vec![Message::user("hi"), Message::assistant("hello")];
        let request = build_request("claude-test", "be brief", &messages);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "claude-test");
        assert_eq!(json["system"], "be brief");
        assert_eq!(json["max_tokens"], 4096);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][1]["role"], "assistant");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    #[test]
    fn joins_text_blocks_and_skips_others() {
        let body = r#"{"content":[
            {"type":"text","text":"Water weekly."},
            {"type":"thinking","thinking":"..."},
            {"type":"text","text":"Avoid direct sun."}
        ]}"#;
        assert_eq!(
            parse_response(body).unwrap(),
            "Water weekly.\nAvoid direct sun."
        );
    }

    #[test]
    fn empty_content_is_an_error() {
        assert!(matches!(
            parse_response(r#"{"content":[]}"#),
            Err(AiError::Provider { .. })
        ));
    }

    #[test]
    fn base_url_override_is_used() {
        let provider = AnthropicProvider::new(
            "k".to_string(),
            "m".to_string(),
            Some("http://localhost:8080/".to_string()),
        );
        assert_eq!(provider.endpoint(), "http://localhost:8080/v1/messages");
    }
}
