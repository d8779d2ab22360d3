//! `OpenAI` chat-completions provider implementation.
//!
//! Also works against `OpenAI`-compatible servers when `AI_BASE_URL` points
//! at them.

use serde::{Deserialize, Serialize};

use super::{LlmProvider, Message, error_message};
use crate::AiError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const MAX_TOKENS: u32 = 4096;

/// `OpenAI` API provider.
pub struct OpenAiProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    /// Creates a new `OpenAI` provider.
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
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

fn build_request<'a>(
    model: &'a str,
    system_prompt: &'a str,
    messages: &'a [Message],
) -> OpenAiRequest<'a> {
    let mut api_messages = Vec::with_capacity(messages.len() + 1);
    api_messages.push(OpenAiMessage {
        role: "system",
        content: system_prompt,
    });
    api_messages.extend(messages.iter().map(|m| OpenAiMessage {
        role: m.role.into(),
        content: &m.content,
    }));

    OpenAiRequest {
        model,
        messages: api_messages,
        max_tokens: MAX_TOKENS,
    }
}

fn parse_response(body: &str) -> Result<String, AiError> {
    let response: OpenAiResponse = serde_json::from_str(body)?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AiError::Provider {
            message: "No response from OpenAI".to_string(),
        })
}

#[async_trait::async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> Result<String, AiError> {
        let request = build_request(&self.model, system_prompt, messages);

        let resp = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
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
    fn system_prompt_is_first_message() {
        let messages = vec![Message::user("Which plant for a dark room?")];
        let request = build_request("gpt-test", "You are helpful.", &messages);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "You are helpful.");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn reads_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Try a ZZ plant."},"finish_reason":"stop"}]}"#;
        assert_eq!(parse_response(body).unwrap(), "Try a ZZ plant.");
    }

    #[test]
    fn missing_content_is_an_error() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert!(matches!(
            parse_response(body),
            Err(AiError::Provider { .. })
        ));
        assert!(parse_response(r#"{"choices":[]}"#).is_err());
    }

    #[test]
    fn default_endpoint() {
        let provider = OpenAiProvider::new("k".to_string(), "m".to_string(), None);
        assert_eq!(
            provider.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
