//! The recommendation cascade.
//!
//! Order of precedence:
//!
//! 1. Narrow the catalog by every growing condition that is set.
//! 2. With an ailment keyword: plants in the narrowed set that mention it,
//!    else plants anywhere in the catalog that mention it.
//! 3. Narrowed set empty: the general medicinal fallback list.
//! 4. Otherwise the narrowed set.
//!
//! An ailment keyword that matches nothing anywhere is dropped rather than
//! producing an empty result.

use enviro_sense_plant_models::{FilterCriteria, MatchTier, PlantRecord, Recommendation};

use crate::PlantCatalog;

/// Name fragments of the plants offered when nothing matches the growing
/// conditions. Matched case-sensitively against plant names.
pub const MEDICINAL_FALLBACK_NAMES: &[&str] = &["Tulsi", "Neem", "Aloe Vera", "Giloy", "Mint"];

impl PlantCatalog {
    /// Recommends plants for the given criteria.
    ///
    /// Never returns an empty list for the seed catalog: when nothing fits,
    /// the general medicinal fallback plants are returned.
    #[must_use]
    pub fn recommend(&self, criteria: &FilterCriteria) -> Recommendation {
        let narrowed: Vec<&PlantRecord> = self
            .plants()
            .iter()
            .filter(|p| criteria.matches_conditions(p))
            .collect();

        if let Some(keyword) = criteria.ailment_keyword() {
            let in_narrowed = mentioning(narrowed.iter().copied(), &keyword);
            if !in_narrowed.is_empty() {
                return Recommendation {
                    tier: MatchTier::AilmentInFiltered,
                    plants: in_narrowed,
                };
            }

            let in_catalog = mentioning(self.plants().iter(), &keyword);
            if !in_catalog.is_empty() {
                log::debug!(
                    "No condition-matching plant mentions '{keyword}'; widened to whole catalog"
                );
                return Recommendation {
                    tier: MatchTier::AilmentInCatalog,
                    plants: in_catalog,
                };
            }

            log::debug!("Ailment '{keyword}' matched nothing; ignoring it");
        }

        if narrowed.is_empty() {
            return Recommendation {
                tier: MatchTier::MedicinalFallback,
                plants: self.medicinal_fallback(),
            };
        }

        Recommendation {
            tier: MatchTier::Filtered,
            plants: narrowed.into_iter().cloned().collect(),
        }
    }

    /// Plants whose name contains one of [`MEDICINAL_FALLBACK_NAMES`], in
    /// catalog order.
    #[must_use]
    pub fn medicinal_fallback(&self) -> Vec<PlantRecord> {
        self.plants()
            .iter()
            .filter(|p| MEDICINAL_FALLBACK_NAMES.iter().any(|f| p.name.contains(f)))
            .cloned()
            .collect()
    }
}

fn mentioning<'a>(
    plants: impl Iterator<Item = &'a PlantRecord>,
    keyword_lower: &str,
) -> Vec<PlantRecord> {
    plants
        .filter(|p| p.mentions_ailment(keyword_lower))
        .cloned()
        .collect()
}
