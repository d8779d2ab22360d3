//! Approximate environmental impact of a personal garden.
//!
//! Each plant is bucketed into a size class by keywords in its name, and
//! each class carries a rough annual CO2 absorption range and the number of
//! people whose yearly oxygen needs it roughly covers. These are indicative
//! figures for display, not measurements.

use enviro_sense_plant_models::PlantRecord;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Coarse size class used for impact estimates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlantSize {
    /// Small herbs and houseplants.
    Herb,
    /// Medium shrubs.
    Shrub,
    /// Trees.
    Tree,
}

impl PlantSize {
    /// Classifies a plant by keywords in its name (case-insensitive).
    ///
    /// Tree keywords are checked before shrub keywords.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        let lower = name.to_lowercase();
        if contains_any(&lower, &["tree", "neem", "banyan", "peepal"]) {
            return Self::Tree;
        }
        if contains_any(&lower, &["shrub", "hibiscus", "rose", "aloe"]) {
            return Self::Shrub;
        }
        Self::Herb
    }

    /// Annual CO2 absorption range in kilograms, as `(min, max)`.
    #[must_use]
    pub const fn co2_range_kg(self) -> (u32, u32) {
        match self {
            Self::Herb => (1, 5),
            Self::Shrub => (5, 15),
            Self::Tree => (20, 40),
        }
    }

    /// Number of people whose annual oxygen needs this plant roughly covers.
    #[must_use]
    pub const fn oxygen_people(self) -> u32 {
        match self {
            Self::Herb => 1,
            Self::Shrub => 2,
            Self::Tree => 4,
        }
    }
}

/// Impact estimate for a single plant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantImpact {
    /// Catalog id.
    pub id: u32,
    /// Plant name.
    pub name: String,
    /// Size class the estimate is based on.
    pub size: PlantSize,
    /// Lower bound of annual CO2 absorption (kg).
    pub co2_min_kg: u32,
    /// Upper bound of annual CO2 absorption (kg).
    pub co2_max_kg: u32,
    /// People whose oxygen needs are roughly covered.
    pub oxygen_people: u32,
}

impl From<&PlantRecord> for PlantImpact {
    fn from(plant: &PlantRecord) -> Self {
        let size = PlantSize::classify(&plant.name);
        let (co2_min_kg, co2_max_kg) = size.co2_range_kg();
        Self {
            id: plant.id,
            name: plant.name.clone(),
            size,
            co2_min_kg,
            co2_max_kg,
            oxygen_people: size.oxygen_people(),
        }
    }
}

/// Totals for a whole garden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GardenImpact {
    /// Per-plant breakdown, in input order.
    pub plants: Vec<PlantImpact>,
    /// Sum of lower CO2 bounds (kg/year).
    pub co2_min_kg: u32,
    /// Sum of upper CO2 bounds (kg/year).
    pub co2_max_kg: u32,
    /// Sum of oxygen-equivalent people.
    pub oxygen_people: u32,
}

/// Estimates the impact of a garden. Repeated plants count once per
/// occurrence.
#[must_use]
pub fn garden_impact<'a>(plants: impl IntoIterator<Item = &'a PlantRecord>) -> GardenImpact {
    plants
        .into_iter()
        .map(PlantImpact::from)
        .fold(GardenImpact::default(), |mut acc, impact| {
            acc.co2_min_kg += impact.co2_min_kg;
            acc.co2_max_kg += impact.co2_max_kg;
            acc.oxygen_people += impact.oxygen_people;
            acc.plants.push(impact);
            acc
        })
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
