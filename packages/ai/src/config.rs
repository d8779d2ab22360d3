//! Assistant configuration from environment variables.
//!
//! | Variable | Meaning |
//! |---|---|
//! | `AI_PROVIDER` | `gemini`, `anthropic`, or `openai`; auto-detected when unset |
//! | `GEMINI_API_KEY` | Google Gemini key |
//! | `ANTHROPIC_API_KEY` | Anthropic key |
//! | `OPENAI_API_KEY` | `OpenAI` (or compatible server) key |
//! | `AI_MODEL` | Model override |
//! | `AI_BASE_URL` | API base URL override |
//! | `AI_TIMEOUT_SECS` | Per-request timeout, default 30 |
//!
//! Empty values are treated as unset.

use std::time::Duration;

use strum_macros::{AsRefStr, Display, EnumString};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Supported LLM backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProviderKind {
    /// Google Gemini.
    #[strum(to_string = "gemini", serialize = "google")]
    Gemini,
    /// Anthropic Claude.
    #[strum(to_string = "anthropic", serialize = "claude")]
    Anthropic,
    /// `OpenAI` or an `OpenAI`-compatible server.
    #[strum(to_string = "openai", serialize = "gpt")]
    OpenAi,
}

impl ProviderKind {
    /// Environment variable holding this provider's API key.
    #[must_use]
    pub const fn key_var(self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }

    /// Model used when `AI_MODEL` is not set.
    #[must_use]
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::Gemini => "gemini-2.0-flash",
            Self::Anthropic => "claude-sonnet-4-20250514",
            Self::OpenAi => "gpt-4o",
        }
    }
}

/// Settings for building a [`crate::ChatAssistant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Explicitly requested provider (raw `AI_PROVIDER` value).
    pub provider: Option<String>,
    /// `GEMINI_API_KEY`
    pub gemini_api_key: Option<String>,
    /// `ANTHROPIC_API_KEY`
    pub anthropic_api_key: Option<String>,
    /// `OPENAI_API_KEY`
    pub openai_api_key: Option<String>,
    /// Model override.
    pub model: Option<String>,
    /// API base URL override.
    pub base_url: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider: None,
            gemini_api_key: None,
            anthropic_api_key: None,
            openai_api_key: None,
            model: None,
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AssistantConfig {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = get("AI_TIMEOUT_SECS")
            .and_then(|v| match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(secs),
                _ => {
                    log::warn!("Ignoring invalid AI_TIMEOUT_SECS={v:?}");
                    None
                }
            })
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            provider: get("AI_PROVIDER"),
            gemini_api_key: get("GEMINI_API_KEY"),
            anthropic_api_key: get("ANTHROPIC_API_KEY"),
            openai_api_key: get("OPENAI_API_KEY"),
            model: get("AI_MODEL"),
            base_url: get("AI_BASE_URL"),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// The API key configured for `kind`, if any.
    #[must_use]
    pub fn api_key(&self, kind: ProviderKind) -> Option<&str> {
        match kind {
            ProviderKind::Gemini => self.gemini_api_key.as_deref(),
            ProviderKind::Anthropic => self.anthropic_api_key.as_deref(),
            ProviderKind::OpenAi => self.openai_api_key.as_deref(),
        }
    }

    /// The first provider with a configured key, checked in the order
    /// Gemini, Anthropic, `OpenAI`.
    #[must_use]
    pub fn detect_provider(&self) -> Option<ProviderKind> {
        [
            ProviderKind::Gemini,
            ProviderKind::Anthropic,
            ProviderKind::OpenAi,
        ]
        .into_iter()
        .find(|kind| self.api_key(*kind).is_some())
    }

    /// The model to use for `kind`.
    #[must_use]
    pub fn model_for(&self, kind: ProviderKind) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| kind.default_model().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AssistantConfig {
        let map: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AssistantConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_has_no_provider() {
        let cfg = config(&[]);
        assert_eq!(cfg.detect_provider(), None);
        assert_eq!(cfg.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn detects_in_priority_order() {
        let cfg = config(&[("OPENAI_API_KEY", "sk-o"), ("ANTHROPIC_API_KEY", "sk-a")]);
        assert_eq!(cfg.detect_provider(), Some(ProviderKind::Anthropic));

        let cfg = config(&[("OPENAI_API_KEY", "sk-o"), ("GEMINI_API_KEY", "g")]);
        assert_eq!(cfg.detect_provider(), Some(ProviderKind::Gemini));
    }

    #[test]
    fn blank_values_are_unset() {
        let cfg = config(&[("GEMINI_API_KEY", "  "), ("AI_MODEL", "")]);
        assert_eq!(cfg.gemini_api_key, None);
        assert_eq!(cfg.model, None);
        assert_eq!(cfg.detect_provider(), None);
    }

    #[test]
    fn parses_timeout() {
        assert_eq!(
            config(&[("AI_TIMEOUT_SECS", "5")]).timeout,
            Duration::from_secs(5)
        );
        assert_eq!(
            config(&[("AI_TIMEOUT_SECS", "soon")]).timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
        assert_eq!(
            config(&[("AI_TIMEOUT_SECS", "0")]).timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn provider_names_parse_with_aliases() {
        assert_eq!(
            "Gemini".parse::<ProviderKind>().unwrap(),
            ProviderKind::Gemini
        );
        assert_eq!(
            "claude".parse::<ProviderKind>().unwrap(),
            ProviderKind::Anthropic
        );
        assert_eq!("GPT".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert!("bard".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn model_override_applies_to_any_provider() {
        let cfg = config(&[("AI_MODEL", "local-model")]);
        assert_eq!(cfg.model_for(ProviderKind::OpenAi), "local-model");
        assert_eq!(
            config(&[]).model_for(ProviderKind::Gemini),
            ProviderKind::Gemini.default_model()
        );
    }
}
