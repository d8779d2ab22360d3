//! LLM provider abstraction and implementations.
//!
//! Supports Google Gemini, Anthropic Claude, and `OpenAI` via a common trait.

pub mod anthropic;
pub mod gemini;
pub mod openai;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, IntoStaticStr};

use crate::AiError;
use crate::config::{AssistantConfig, ProviderKind};

/// Who wrote a message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// The end user.
    User,
    /// The assistant.
    Assistant,
}

impl Role {
    /// Maps a client-supplied role name. Anything other than `"user"` is
    /// treated as the assistant.
    #[must_use]
    pub fn from_client(role: &str) -> Self {
        if role == "user" {
            Self::User
        } else {
            Self::Assistant
        }
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who wrote it.
    pub role: Role,
    /// Plain-text content.
    pub content: String,
}

impl Message {
    /// A message from the end user.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// A message from the assistant.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Trait for LLM providers.
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a chat completion request and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] if the request fails.
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> Result<String, AiError>;
}

/// Creates an LLM provider from configuration.
///
/// If `AI_PROVIDER` is set, that provider is used and its key must be
/// present. Otherwise the first provider with a key wins (see
/// [`AssistantConfig::detect_provider`]). Returns `Ok(None)` when no
/// credentials are configured at all.
///
/// # Errors
///
/// Returns [`AiError::Config`] if the explicitly requested provider is
/// unknown or has no API key.
pub fn create_provider(config: &AssistantConfig) -> Result<Option<Box<dyn LlmProvider>>, AiError> {
    let kind = match config.provider.as_deref() {
        Some(name) => name
            .trim()
            .parse::<ProviderKind>()
            .map_err(|_| AiError::Config {
                message: format!(
                    "Unknown AI provider: {name}. Use 'gemini', 'anthropic', or 'openai'."
                ),
            })?,
        None => match config.detect_provider() {
            Some(kind) => {
                log::info!(
                    "Auto-detected AI provider: {kind} ({} found)",
                    kind.key_var()
                );
                kind
            }
            None => {
                log::warn!(
                    "No AI credentials detected. Set one of: GEMINI_API_KEY, \
                     ANTHROPIC_API_KEY, or OPENAI_API_KEY. The chat assistant \
                     will report itself unavailable."
                );
                return Ok(None);
            }
        },
    };

    let api_key = config
        .api_key(kind)
        .ok_or_else(|| AiError::Config {
            message: format!("{} environment variable not set", kind.key_var()),
        })?
        .to_string();
    let model = config.model_for(kind);
    let base_url = config.base_url.clone();

    let provider: Box<dyn LlmProvider> = match kind {
        ProviderKind::Gemini => Box::new(gemini::GeminiProvider::new(api_key, model, base_url)),
        ProviderKind::Anthropic => {
            Box::new(anthropic::AnthropicProvider::new(api_key, model, base_url))
        }
        ProviderKind::OpenAi => Box::new(openai::OpenAiProvider::new(api_key, model, base_url)),
    };

    Ok(Some(provider))
}

/// Extracts `error.message` from a provider error body, falling back to the
/// raw status and body.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map_or_else(|_| format!("HTTP {status}: {body}"), |e| e.error.message)
}
