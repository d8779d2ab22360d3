#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Static informational content.
//!
//! The Green Credit Programme explainer and the daily sustainability tips
//! are kept in TOML files embedded at compile time, parsed once at startup,
//! and served as-is.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const GREEN_CREDITS_TOML: &str = include_str!("../green_credits.toml");
const TIPS_TOML: &str = include_str!("../tips.toml");

/// One step of the Green Credit Programme process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ProgrammeStep {
    /// Step heading.
    pub title: String,
    /// What happens in this step.
    pub description: String,
    /// Extra detail line.
    #[serde(default)]
    pub details: Option<String>,
    /// Eligible action categories, for the step that lists them.
    #[serde(default)]
    pub eligible_actions: Vec<String>,
    /// Worked example.
    #[serde(default)]
    pub example: Option<String>,
}

/// An app feature that helps with programme participation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportFeature {
    /// Feature name.
    pub title: String,
    /// How it helps.
    pub description: String,
}

/// The Green Credit Programme explainer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct GreenCreditsGuide {
    /// What Green Credits are.
    pub overview: String,
    /// How credits are earned, in order.
    pub steps: Vec<ProgrammeStep>,
    /// App features relevant to the programme.
    pub features: Vec<SupportFeature>,
    /// What the app does and does not do with credits.
    pub support_statement: String,
    /// Legal disclaimer.
    pub disclaimer: String,
}

impl GreenCreditsGuide {
    /// Returns the built-in guide.
    ///
    /// # Panics
    ///
    /// Panics if the embedded `green_credits.toml` is malformed (covered by
    /// this crate's tests).
    #[must_use]
    pub fn embedded() -> Self {
        toml::de::from_str(GREEN_CREDITS_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse green_credits.toml: {e}"))
    }
}

/// Fixed rotation of daily tips.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DailyTips {
    tips: Vec<String>,
}

impl DailyTips {
    /// Returns the built-in tips.
    ///
    /// # Panics
    ///
    /// Panics if the embedded `tips.toml` is malformed or empty (covered by
    /// this crate's tests).
    #[must_use]
    pub fn embedded() -> Self {
        let tips: Self = toml::de::from_str(TIPS_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse tips.toml: {e}"));
        assert!(!tips.tips.is_empty(), "tips.toml has no tips");
        tips
    }

    /// The tip for a calendar day. Consecutive days walk through the list
    /// in order, restarting every January 1st.
    #[must_use]
    pub fn for_date(&self, date: NaiveDate) -> &str {
        let idx = date.ordinal0() as usize % self.tips.len();
        &self.tips[idx]
    }

    /// All tips in rotation order.
    #[must_use]
    pub fn all(&self) -> &[String] {
        &self.tips
    }
}
