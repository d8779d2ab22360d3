#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Plant record types and recommendation filter criteria.
//!
//! These are the canonical types shared by the plant catalog, the garden
//! impact estimator, and the API layer. The three growing-condition
//! dimensions (sunlight, watering, care intensity) are closed enums that
//! serialize as lowercase strings.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// How much direct light a plant needs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sunlight {
    /// Shade-tolerant, indoor-friendly.
    Low,
    /// Bright indirect or partial sun.
    Moderate,
    /// Full sun for most of the day.
    High,
}

impl Sunlight {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Moderate, Self::High]
    }
}

/// How often a plant needs watering.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Watering {
    /// Drought tolerant; water when the soil is fully dry.
    Rare,
    /// Roughly weekly.
    Moderate,
    /// Keep the soil consistently moist.
    Frequent,
}

impl Watering {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Rare, Self::Moderate, Self::Frequent]
    }
}

/// How much ongoing attention a plant needs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CareIntensity {
    /// Tolerates neglect.
    Easy,
    /// Occasional pruning, feeding, or repotting.
    Moderate,
    /// Needs regular, attentive care.
    High,
}

impl CareIntensity {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Easy, Self::Moderate, Self::High]
    }
}

/// A single plant in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRecord {
    /// Unique positive identifier.
    pub id: u32,
    /// Common name.
    pub name: String,
    /// Light requirement.
    pub sunlight: Sunlight,
    /// Watering frequency.
    pub watering: Watering,
    /// Care intensity.
    pub care_intensity: CareIntensity,
    /// Free-text description of the plant's medicinal or household value.
    pub medicinal_value: String,
    /// Ailments the plant is traditionally associated with. May be empty.
    pub disease_tags: Vec<String>,
}

impl PlantRecord {
    /// Whether any disease tag or the medicinal-value text contains
    /// `keyword_lower` as a substring.
    ///
    /// The keyword must already be lowercased; the record's text is
    /// lowercased on comparison.
    #[must_use]
    pub fn mentions_ailment(&self, keyword_lower: &str) -> bool {
        self.disease_tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(keyword_lower))
            || self.medicinal_value.to_lowercase().contains(keyword_lower)
    }
}

/// Criteria for narrowing the plant catalog.
///
/// Every field is independently optional; `None` means "no constraint on
/// this dimension".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Required light level.
    pub sunlight: Option<Sunlight>,
    /// Required watering frequency.
    pub watering: Option<Watering>,
    /// Required care intensity.
    pub care_intensity: Option<CareIntensity>,
    /// Free-text ailment keyword, matched case-insensitively.
    pub disease: Option<String>,
}

impl FilterCriteria {
    /// Whether no constraint at all is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sunlight.is_none()
            && self.watering.is_none()
            && self.care_intensity.is_none()
            && self.ailment_keyword().is_none()
    }

    /// The ailment keyword, lowercased, or `None` if absent or empty.
    #[must_use]
    pub fn ailment_keyword(&self) -> Option<String> {
        self.disease
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether `plant` satisfies every categorical constraint that is set.
    #[must_use]
    pub fn matches_conditions(&self, plant: &PlantRecord) -> bool {
        allows(self.sunlight, plant.sunlight)
            && allows(self.watering, plant.watering)
            && allows(self.care_intensity, plant.care_intensity)
    }
}

/// An unset constraint allows anything; a set one must equal `actual`.
fn allows<T: PartialEq + Copy>(wanted: Option<T>, actual: T) -> bool {
    wanted.is_none_or(|w| w == actual)
}

/// Which step of the recommendation cascade produced a result.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchTier {
    /// Plants matching the growing conditions (or the whole catalog when no
    /// conditions were given).
    Filtered,
    /// Plants matching both the growing conditions and the ailment keyword.
    AilmentInFiltered,
    /// No condition-matching plant mentions the ailment, so the whole
    /// catalog was searched for it instead.
    AilmentInCatalog,
    /// Nothing matched the conditions; a fixed set of general medicinal
    /// plants is returned instead.
    MedicinalFallback,
}

/// The outcome of a recommendation query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// Which cascade step produced `plants`.
    pub tier: MatchTier,
    /// Recommended plants in catalog order.
    pub plants: Vec<PlantRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aloe() -> PlantRecord {
        PlantRecord {
            id: 6,
            name: "Aloe Vera".to_string(),
            sunlight: Sunlight::Moderate,
            watering: Watering::Rare,
            care_intensity: CareIntensity::Easy,
            medicinal_value: "Skin burns and digestion".to_string(),
            disease_tags: vec!["skin".to_string(), "digestion".to_string()],
        }
    }

    #[test]
    fn enums_parse_lowercase() {
        assert_eq!("low".parse::<Sunlight>().unwrap(), Sunlight::Low);
        assert_eq!("frequent".parse::<Watering>().unwrap(), Watering::Frequent);
        assert_eq!(
            "easy".parse::<CareIntensity>().unwrap(),
            CareIntensity::Easy
        );
        assert!("medium".parse::<Sunlight>().is_err());
        assert_eq!(Sunlight::High.to_string(), "high");
    }

    #[test]
    fn enums_serialize_lowercase() {
        let json = serde_json::to_string(&Watering::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
        let parsed: CareIntensity = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, CareIntensity::High);
    }

    #[test]
    fn ailment_match_checks_tags_and_description() {
        let plant = aloe();
        assert!(plant.mentions_ailment("skin"));
        assert!(plant.mentions_ailment("burn"));
        assert!(plant.mentions_ailment("dig"));
        assert!(!plant.mentions_ailment("stress"));
    }

    #[test]
    fn empty_ailment_keyword_is_absent() {
        let criteria = FilterCriteria {
            disease: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert!(criteria.ailment_keyword().is_none());
        assert!(criteria.is_empty());

        let criteria = FilterCriteria {
            disease: Some("StReSs".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(criteria.ailment_keyword().as_deref(), Some("stress"));
    }

    #[test]
    fn conditions_are_conjunctive() {
        let plant = aloe();
        let criteria = FilterCriteria {
            sunlight: Some(Sunlight::Moderate),
            watering: Some(Watering::Rare),
            ..FilterCriteria::default()
        };
        assert!(criteria.matches_conditions(&plant));

        let criteria = FilterCriteria {
            sunlight: Some(Sunlight::Moderate),
            care_intensity: Some(CareIntensity::High),
            ..FilterCriteria::default()
        };
        assert!(!criteria.matches_conditions(&plant));
    }
}
