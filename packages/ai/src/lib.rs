#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Topic-restricted chat assistant with LLM provider abstraction.
//!
//! Supports Google Gemini, Anthropic Claude, and `OpenAI` (or any
//! `OpenAI`-compatible server via `AI_BASE_URL`). The assistant is a single
//! request/response relay: the conversation so far plus a fixed system
//! prompt goes to the provider, bounded by a timeout, and the reply text
//! comes back. When no provider credentials are configured the assistant
//! is simply unavailable.

pub mod assistant;
pub mod config;
pub mod providers;

pub use assistant::ChatAssistant;
pub use config::AssistantConfig;

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during AI operations.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request to LLM provider failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider-specific error.
    #[error("Provider error: {message}")]
    Provider {
        /// Description of what went wrong.
        message: String,
    },

    /// The provider did not answer in time.
    #[error("Provider did not respond within {timeout:?}")]
    Timeout {
        /// The configured timeout.
        timeout: Duration,
    },

    /// The user message was empty.
    #[error("Message content is required")]
    EmptyMessage,

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// Description.
        message: String,
    },
}
