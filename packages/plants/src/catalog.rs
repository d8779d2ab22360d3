//! Plant catalog construction and lookup.
//!
//! The seed data lives in `packages/plants/catalog.toml` and is baked into
//! the binary at compile time via [`include_str!`]. Record order in that
//! file is the order recommendations are returned in.

use std::collections::BTreeSet;

use enviro_sense_plant_models::PlantRecord;
use serde::Deserialize;

use crate::CatalogError;

/// Seed catalog embedded at compile time.
const CATALOG_TOML: &str = include_str!("../catalog.toml");

#[derive(Deserialize)]
struct CatalogFile {
    plants: Vec<PlantRecord>,
}

/// An immutable, ordered collection of plant records.
#[derive(Debug, Clone)]
pub struct PlantCatalog {
    plants: Vec<PlantRecord>,
}

impl PlantCatalog {
    /// Builds a catalog from records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if any id is zero or repeated.
    pub fn new(plants: Vec<PlantRecord>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for plant in &plants {
            if plant.id == 0 {
                return Err(CatalogError::ZeroId {
                    name: plant.name.clone(),
                });
            }
            if !seen.insert(plant.id) {
                return Err(CatalogError::DuplicateId { id: plant.id });
            }
        }
        Ok(Self { plants })
    }

    /// Parses a catalog from TOML containing a `[[plants]]` array.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the TOML is malformed or the records fail
    /// validation.
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::de::from_str(toml_str)?;
        Self::new(file.plants)
    }

    /// Returns the built-in seed catalog.
    ///
    /// # Panics
    ///
    /// Panics if the embedded `catalog.toml` is malformed (covered by this
    /// crate's tests, since the file is embedded at compile time).
    #[must_use]
    pub fn seeded() -> Self {
        let catalog = Self::from_toml(CATALOG_TOML)
            .unwrap_or_else(|e| panic!("Failed to load embedded catalog.toml: {e}"));
        log::debug!("Loaded {} plants from embedded catalog", catalog.len());
        catalog
    }

    /// All records in catalog order.
    #[must_use]
    pub fn plants(&self) -> &[PlantRecord] {
        &self.plants
    }

    /// Looks a record up by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&PlantRecord> {
        self.plants.iter().find(|p| p.id == id)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    /// Whether the catalog has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_PLANT_COUNT: usize = 34;

    #[test]
    fn loads_seed_catalog() {
        let catalog = PlantCatalog::seeded();
        assert_eq!(catalog.len(), EXPECTED_PLANT_COUNT);
        assert_eq!(catalog.plants()[0].name, "Snake Plant");
        assert_eq!(
            catalog.plants()[EXPECTED_PLANT_COUNT - 1].name,
            "High Sun Easy Herb"
        );
    }

    #[test]
    fn seed_records_have_required_fields() {
        for plant in PlantCatalog::seeded().plants() {
            assert!(!plant.name.is_empty(), "plant {} has no name", plant.id);
            assert!(
                !plant.medicinal_value.is_empty(),
                "{}: no medicinal value",
                plant.name
            );
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = PlantCatalog::seeded();
        assert_eq!(
            catalog.get(13).map(|p| p.name.as_str()),
            Some("Tulsi (Holy Basil)")
        );
        assert!(catalog.get(17).is_none());
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let toml = r#"
            [[plants]]
            id = 1
            name = "A"
            sunlight = "low"
            watering = "rare"
            care_intensity = "easy"
            medicinal_value = "x"
            disease_tags = []

            [[plants]]
            id = 1
            name = "B"
            sunlight = "high"
            watering = "rare"
            care_intensity = "easy"
            medicinal_value = "y"
            disease_tags = []
        "#;
        assert!(matches!(
            PlantCatalog::from_toml(toml),
            Err(CatalogError::DuplicateId { id: 1 })
        ));
    }

    #[test]
    fn rejects_unknown_enum_value() {
        let toml = r#"
            [[plants]]
            id = 1
            name = "A"
            sunlight = "blinding"
            watering = "rare"
            care_intensity = "easy"
            medicinal_value = "x"
            disease_tags = []
        "#;
        assert!(matches!(
            PlantCatalog::from_toml(toml),
            Err(CatalogError::Parse(_))
        ));
    }
}
