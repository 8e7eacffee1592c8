//! irum-core: the naming engine pair behind the 작명 service.
//!
//! Two deterministic components composed linearly:
//! - the **saju calendar engine**, a pure function from a birth instant to a
//!   four-pillar elemental profile, and
//! - the **name generator**, which searches a read-only character catalog for
//!   combinations that compensate the profile's deficient elements and ranks
//!   them on five sub-scores.
//!
//! Presentation, session flow, and catalog storage live outside this crate;
//! the catalog is reached only through the [`CharacterCatalog`] trait.

mod config;
pub mod catalog;
pub mod naming;
pub mod saju;
mod shared;

// Configuration
pub use config::NamingConfig;

// Calendar engine
pub use saju::{
    compute_profile, Branch, ElementBalance, Pillar, Polarity, SajuProfile, Stem, Yongsin,
};

// Shared request/response types
pub use shared::{
    CharacterInfo, Element, Gender, NameAnalysis, NameRecommendation, NameScores, NamingRequest,
    ValueTag, ALL_ELEMENTS,
};

// Catalog collaborator seam
pub use catalog::{
    CatalogError, CatalogResult, CharacterCatalog, CharacterRecord, MemoryCatalog,
};

// Name generation
pub use naming::{NameGenerator, NamingError, NamingResult};
