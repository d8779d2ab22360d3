#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Plant catalog, recommendation cascade, and garden impact estimates.
//!
//! The catalog is an immutable [`PlantCatalog`] value built once at startup
//! from the embedded `catalog.toml` and handed to whoever serves requests.
//! [`PlantCatalog::recommend`] narrows it by growing conditions and an
//! optional ailment keyword, falling back through progressively looser
//! searches so that a query never comes back empty.

pub mod catalog;
pub mod garden;
mod recommend;

pub use catalog::PlantCatalog;

use thiserror::Error;

/// Errors that can occur while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog TOML could not be parsed.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two records share the same id.
    #[error("Duplicate plant id {id}")]
    DuplicateId {
        /// The repeated id.
        id: u32,
    },

    /// A record has id 0.
    #[error("Plant '{name}' has invalid id 0")]
    ZeroId {
        /// Name of the offending record.
        name: String,
    },
}
