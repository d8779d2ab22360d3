//! The "Poke Enviro" chat assistant.
//!
//! Relays one user turn (plus any earlier turns the client sends back) to
//! the configured provider under a fixed, topic-restricted system prompt.
//! Nothing is stored between calls.

use std::time::Duration;

use crate::AiError;
use crate::config::AssistantConfig;
use crate::providers::{self, LlmProvider, Message};

/// Reply the assistant is instructed to give for off-topic questions.
pub const OUT_OF_SCOPE_REPLY: &str =
    "I'm here to help with environmental decisions and features within EnviroSense.";

/// System prompt restricting the assistant to the app's subject matter.
pub const SYSTEM_PROMPT: &str = r#"Chatbot Identity:
- Name: Poke Enviro
- Role: Environmental guidance assistant
- Personality: Calm, informative, practical, non-preachy
- Tone: Clear, neutral, supportive, decision-focused
- Audience: General users with little technical or environmental expertise

Primary Purpose:
Poke Enviro helps users understand environmental choices and features within EnviroSense. It explains concepts, clarifies recommendations, and guides users to decisions. It must NOT behave like a general-purpose chatbot.

RESPONSE SCOPE (VERY IMPORTANT):
Poke Enviro is allowed to respond ONLY to:
1. Questions related to: Solar feasibility and solar intelligence, Plant recommendations and gardening basics, "Your Garden" environmental impact (CO2/O2 estimates), AQI, air quality, heat impact, Green Credits awareness and process, Sustainability actions relevant to individuals.
2. Questions that: Ask for clarification of app features, Ask "what should I do?" type guidance, Ask "why is this recommended?" explanations.

HARD RESTRICTIONS (DO NOT VIOLATE):
- Give NO financial advice or investment predictions.
- Predict NO profits, savings guarantees, or credit values.
- Claim NO scientific precision or certifications.
- Generate NO legal advice or government confirmations.
- Act NOT as a generic AI assistant.
- Answer NO unrelated questions (politics, coding, math, etc.)

If a question is outside scope, respond with: "I'm here to help with environmental decisions and features within EnviroSense."

RESPONSE STYLE RULES:
1. Prefer interpretation over raw data.
2. Use approximate language (generally, typically, approximately).
3. Keep responses concise (3-6 sentences).
4. Avoid alarmist or preachy language.
5. Do not overclaim accuracy."#;

/// A configured chat assistant.
pub struct ChatAssistant {
    provider: Box<dyn LlmProvider>,
    timeout: Duration,
}

impl std::fmt::Debug for ChatAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatAssistant")
            .field("provider", &self.provider.name())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ChatAssistant {
    /// Wraps an existing provider.
    #[must_use]
    pub fn new(provider: Box<dyn LlmProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Builds the assistant from configuration. `Ok(None)` means no
    /// credentials are configured and the assistant is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Config`] if the configuration names a provider
    /// that cannot be built.
    pub fn from_config(config: &AssistantConfig) -> Result<Option<Self>, AiError> {
        let provider = providers::create_provider(config)?;
        Ok(provider.map(|provider| {
            log::info!(
                "Chat assistant ready: provider={} timeout={:?}",
                provider.name(),
                config.timeout
            );
            Self::new(provider, config.timeout)
        }))
    }

    /// Name of the backing provider.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Sends `content` after `history` and returns the trimmed reply text.
    ///
    /// # Errors
    ///
    /// * [`AiError::EmptyMessage`] if `content` is blank
    /// * [`AiError::Timeout`] if the provider does not answer in time
    /// * any provider error otherwise
    pub async fn reply(&self, content: &str, history: &[Message]) -> Result<String, AiError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AiError::EmptyMessage);
        }

        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.extend_from_slice(history);
        messages.push(Message::user(content));

        log::debug!(
            "Chat request: provider={} turns={}",
            self.provider.name(),
            messages.len()
        );

        let chat = self.provider.chat(SYSTEM_PROMPT, &messages);
        let reply = tokio::time::timeout(self.timeout, chat)
            .await
            .map_err(|_| AiError::Timeout {
                timeout: self.timeout,
            })??;

        let reply = reply.trim().to_string();
        log::debug!("Chat reply: {} chars", reply.len());
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::providers::Role;

    /// Records what it was sent and answers with a fixed reply after an
    /// optional delay.
    struct MockProvider {
        seen: Arc<Mutex<Vec<Message>>>,
        delay: Duration,
        result: Result<String, String>,
    }

    #[async_trait::async_trait]
    impl LlmProvider for MockProvider {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn chat(&self, system_prompt: &str, messages: &[Message]) -> Result<String, AiError> {
            assert_eq!(system_prompt, SYSTEM_PROMPT);
            self.seen.lock().unwrap().extend_from_slice(messages);
            tokio::time::sleep(self.delay).await;
            self.result
                .clone()
                .map_err(|message| AiError::Provider { message })
        }
    }

    fn assistant(
        delay: Duration,
        result: Result<String, String>,
    ) -> (ChatAssistant, Arc<Mutex<Vec<Message>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let provider = MockProvider {
            seen: Arc::clone(&seen),
            delay,
            result,
        };
        (
            ChatAssistant::new(Box::new(provider), Duration::from_secs(30)),
            seen,
        )
    }

    #[tokio::test]
    async fn appends_user_turn_after_history() {
        let (assistant, seen) = assistant(Duration::ZERO, Ok("Try tulsi.".to_string()));
        let history = vec![
            Message::user("Hi"),
            Message::assistant("Hello! How can I help?"),
        ];

        let reply = assistant
            .reply("  Which plant helps with cough?  ", &history)
            .await
            .unwrap();

        assert_eq!(reply, "Try tulsi.");
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2].role, Role::User);
        assert_eq!(seen[2].content, "Which plant helps with cough?");
    }

    #[tokio::test]
    async fn blank_content_is_rejected_without_calling_provider() {
        let (assistant, seen) = assistant(Duration::ZERO, Ok("unused".to_string()));
        let err = assistant.reply("   ", &[]).await.unwrap_err();
        assert!(matches!(err, AiError::EmptyMessage));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn provider_errors_propagate() {
        let (assistant, _) = assistant(Duration::ZERO, Err("quota exceeded".to_string()));
        let err = assistant.reply("hello", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), "Provider error: quota exceeded");
    }

    #[tokio::test(start_paused = true)]
    async fn slow_provider_times_out() {
        let (assistant, _) = assistant(Duration::from_secs(120), Ok("late".to_string()));
        let err = assistant.reply("hello", &[]).await.unwrap_err();
        assert!(matches!(
            err,
            AiError::Timeout { timeout } if timeout == Duration::from_secs(30)
        ));
        assert_eq!(err.to_string(), "Provider did not respond within 30s");
    }

    #[tokio::test(start_paused = true)]
    async fn sub_second_timeout_is_reported_exactly() {
        let provider = MockProvider {
            seen: Arc::default(),
            delay: Duration::from_secs(1),
            result: Ok("late".to_string()),
        };
        let assistant = ChatAssistant::new(Box::new(provider), Duration::from_millis(250));
        let err = assistant.reply("hello", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), "Provider did not respond within 250ms");
    }

    #[test]
    fn no_credentials_means_unavailable() {
        let assistant = ChatAssistant::from_config(&AssistantConfig::default()).unwrap();
        assert!(assistant.is_none());
    }

    #[test]
    fn prompt_contains_out_of_scope_reply() {
        assert!(SYSTEM_PROMPT.contains(OUT_OF_SCOPE_REPLY));
    }
}
