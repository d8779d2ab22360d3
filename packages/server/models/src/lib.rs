#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the `EnviroSense` server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the domain types to allow independent evolution of the API
//! contract.

use enviro_sense_air::{AqiCategory, AqiColor, AqiReading, EnvironmentSnapshot};
use enviro_sense_plant_models::{CareIntensity, FilterCriteria, PlantRecord, Sunlight, Watering};
use enviro_sense_plants::garden::{GardenImpact, PlantImpact, PlantSize};
use enviro_sense_solar::{MAX_DAILY_KWH, SolarEstimate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response header naming the recommendation cascade step.
pub const MATCH_TIER_HEADER: &str = "X-Match-Tier";

/// Request values that deserialize but are not acceptable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// `dailyKwh` is not a finite, non-negative number.
    #[error("Invalid dailyKwh: {value}")]
    InvalidDailyKwh {
        /// The rejected value as received.
        value: String,
    },
}

/// Body of every 4xx/5xx response that is not chat-specific.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message.
    pub message: String,
}

impl ApiError {
    /// Message used for every rejected request body, path, or query string.
    pub const INVALID_INPUT: &'static str = "Invalid Input";

    /// Creates an error body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The generic validation failure body.
    #[must_use]
    pub fn invalid_input() -> Self {
        Self::new(Self::INVALID_INPUT)
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Always `true` while the server is answering.
    pub healthy: bool,
    /// Server package version.
    pub version: String,
}

// ---------------------------------------------------------------------------
// Plants
// ---------------------------------------------------------------------------

/// A plant as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPlant {
    /// Catalog ID.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Light requirement.
    pub sunlight: Sunlight,
    /// Watering frequency.
    pub watering: Watering,
    /// Care effort.
    pub care_intensity: CareIntensity,
    /// Free-text medicinal description.
    pub medicinal_value: String,
    /// Ailment keywords.
    pub disease_tags: Vec<String>,
}

impl From<&PlantRecord> for ApiPlant {
    fn from(plant: &PlantRecord) -> Self {
        Self {
            id: plant.id,
            name: plant.name.clone(),
            sunlight: plant.sunlight,
            watering: plant.watering,
            care_intensity: plant.care_intensity,
            medicinal_value: plant.medicinal_value.clone(),
            disease_tags: plant.disease_tags.clone(),
        }
    }
}

/// Plant recommendation filters, accepted both as query parameters and as a
/// JSON body. Unknown enum values are rejected during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantFilterParams {
    /// Light requirement.
    pub sunlight: Option<Sunlight>,
    /// Watering frequency.
    pub watering: Option<Watering>,
    /// Care effort.
    pub care_intensity: Option<CareIntensity>,
    /// Ailment keyword.
    pub disease: Option<String>,
}

impl From<PlantFilterParams> for FilterCriteria {
    fn from(params: PlantFilterParams) -> Self {
        Self {
            sunlight: params.sunlight,
            watering: params.watering,
            care_intensity: params.care_intensity,
            disease: params.disease,
        }
    }
}

// ---------------------------------------------------------------------------
// Solar
// ---------------------------------------------------------------------------

/// A kWh figure sent either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KwhInput {
    /// `25`
    Number(f64),
    /// `"25"`
    Text(String),
}

impl KwhInput {
    /// Coerces to a finite number between zero and [`MAX_DAILY_KWH`]. A
    /// blank string counts as zero.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDailyKwh`] if the value is not a
    /// number, is negative, is not finite, or exceeds [`MAX_DAILY_KWH`].
    pub fn to_kwh(&self) -> Result<f64, ValidationError> {
        let value = match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
        };

        match value {
            Some(v) if (0.0..=MAX_DAILY_KWH).contains(&v) => Ok(v),
            _ => Err(ValidationError::InvalidDailyKwh {
                value: match self {
                    Self::Number(n) => n.to_string(),
                    Self::Text(s) => s.clone(),
                },
            }),
        }
    }
}

/// Solar feasibility request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarRequest {
    /// Postal code. Accepted for compatibility; the estimate ignores it.
    #[serde(default)]
    pub zip: Option<String>,
    /// Average daily household consumption in kWh.
    pub daily_kwh: KwhInput,
}

/// Solar feasibility result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSolarEstimate {
    /// Consumption is high enough for solar to pay off.
    pub worth_it: bool,
    /// 500 W panels needed.
    pub panels: u32,
    /// System size in kW.
    pub system_size_kw: f64,
    /// Share of consumption covered, capped at 100.
    pub energy_offset_percent: u32,
    /// Annual CO2 avoided in tonnes.
    pub annual_co2_reduction_tons: f64,
    /// Annual savings in rupees.
    pub annual_savings_inr: u64,
    /// Advisory summary.
    pub summary: String,
}

impl From<SolarEstimate> for ApiSolarEstimate {
    fn from(estimate: SolarEstimate) -> Self {
        Self {
            worth_it: estimate.worth_it,
            panels: estimate.panels,
            system_size_kw: estimate.system_size_kw,
            energy_offset_percent: estimate.energy_offset_percent,
            annual_co2_reduction_tons: estimate.annual_co2_reduction_tons,
            annual_savings_inr: estimate.annual_savings_inr,
            summary: estimate.summary.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Air quality
// ---------------------------------------------------------------------------

/// AQI reading as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAqi {
    /// Always 1; readings are not stored.
    pub id: u32,
    /// Postal code as given.
    pub zip: String,
    /// AQI value.
    pub value: u32,
    /// Category name.
    pub category: AqiCategory,
    /// Color tag.
    pub color: AqiColor,
}

impl From<AqiReading> for ApiAqi {
    fn from(reading: AqiReading) -> Self {
        Self {
            id: 1,
            zip: reading.zip,
            value: reading.value,
            category: reading.category,
            color: reading.color,
        }
    }
}

/// Dashboard snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvironment {
    /// Air quality.
    pub aqi: ApiAqi,
    /// Outdoor CO2 (ppm).
    pub co2_ppm: u32,
    /// Relative humidity (%).
    pub humidity_percent: u32,
}

impl From<EnvironmentSnapshot> for ApiEnvironment {
    fn from(snapshot: EnvironmentSnapshot) -> Self {
        Self {
            aqi: snapshot.aqi.into(),
            co2_ppm: snapshot.co2_ppm,
            humidity_percent: snapshot.humidity_percent,
        }
    }
}

// ---------------------------------------------------------------------------
// Garden
// ---------------------------------------------------------------------------

/// Garden impact request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenImpactRequest {
    /// Catalog IDs of the plants in the garden. Repeats count separately.
    pub plant_ids: Vec<u32>,
}

/// Per-plant impact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPlantImpact {
    /// Catalog ID.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Size class.
    pub size: PlantSize,
    /// Lower annual CO2 estimate (kg).
    pub co2_min_kg: u32,
    /// Upper annual CO2 estimate (kg).
    pub co2_max_kg: u32,
    /// People whose oxygen needs this plant covers.
    pub oxygen_people: u32,
}

impl From<PlantImpact> for ApiPlantImpact {
    fn from(impact: PlantImpact) -> Self {
        Self {
            id: impact.id,
            name: impact.name,
            size: impact.size,
            co2_min_kg: impact.co2_min_kg,
            co2_max_kg: impact.co2_max_kg,
            oxygen_people: impact.oxygen_people,
        }
    }
}

/// Garden impact totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGardenImpact {
    /// Number of resolved plants.
    pub plant_count: usize,
    /// Lower annual CO2 estimate (kg).
    pub co2_min_kg: u32,
    /// Upper annual CO2 estimate (kg).
    pub co2_max_kg: u32,
    /// People whose oxygen needs the garden covers.
    pub oxygen_people: u32,
    /// Per-plant breakdown in request order.
    pub plants: Vec<ApiPlantImpact>,
    /// Requested IDs not found in the catalog.
    pub unknown_ids: Vec<u32>,
}

impl ApiGardenImpact {
    /// Builds the response from computed totals and the IDs that did not
    /// resolve.
    #[must_use]
    pub fn new(impact: GardenImpact, unknown_ids: Vec<u32>) -> Self {
        Self {
            plant_count: impact.plants.len(),
            co2_min_kg: impact.co2_min_kg,
            co2_max_kg: impact.co2_max_kg,
            oxygen_people: impact.oxygen_people,
            plants: impact.plants.into_iter().map(Into::into).collect(),
            unknown_ids,
        }
    }
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// Query parameters for the daily tip endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TipQueryParams {
    /// Calendar day (`YYYY-MM-DD`); today (UTC) when omitted.
    pub date: Option<chrono::NaiveDate>,
}

/// The tip for a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTip {
    /// The day the tip is for.
    pub date: chrono::NaiveDate,
    /// Tip text.
    pub tip: String,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// An earlier conversation turn sent back by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiChatTurn {
    /// `user`, or anything else for the assistant.
    pub role: String,
    /// Message text.
    pub content: String,
}

/// Chat request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The new user message.
    #[serde(default)]
    pub content: String,
    /// Earlier turns, oldest first.
    #[serde(default)]
    pub history: Vec<ApiChatTurn>,
}

/// Successful chat reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply text.
    pub content: String,
    /// Always `true`.
    pub available: bool,
}

/// Chat error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatError {
    /// What went wrong.
    pub error: String,
    /// Whether the assistant is configured.
    pub available: bool,
}

/// Whether the chat assistant is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatStatus {
    /// The assistant can answer.
    pub available: bool,
    /// Backing provider, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}
