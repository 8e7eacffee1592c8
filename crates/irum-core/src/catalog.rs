//! CharacterCatalog trait: the read-only collaborator that owns the hanja
//! catalog. The naming core only ever reads from it; storage, seeding, and
//! mutation live entirely on the other side of this seam.
//!
//! `MemoryCatalog` is the in-process implementation used by tests and by
//! deployments that preload the catalog into memory. It reproduces the same
//! retrieval ordering contract a backing database would apply.

use crate::shared::Element;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors surfaced by the catalog collaborator. Any of these terminates the
/// whole generation request; the core never retries.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("malformed catalog data: {0}")]
    Malformed(String),

    #[error("character '{0}' missing from catalog details")]
    MissingCharacter(char),
}

// -----------------------------------------------------------------------------
// Catalog records
// -----------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

/// One hanja row of the character catalog, read-only from the core's side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub character: char,
    /// Codepoint label, e.g. "U+6F64".
    #[serde(default)]
    pub unicode: Option<String>,
    pub stroke_count: u32,
    #[serde(default)]
    pub radical: Option<String>,
    /// Pronounced syllable, e.g. "윤".
    pub korean_sound: String,
    /// Short human meaning, e.g. "윤택하다".
    pub korean_meaning: String,
    pub primary_element: Element,
    /// How strongly the character expresses its element (0–100).
    #[serde(default)]
    pub element_strength: i32,
    #[serde(default)]
    pub element_reason: Option<String>,
    /// Catalog-assigned fitness for use in names (0–100).
    pub name_suitability: i32,
    /// "남성", "여성", or "중성".
    #[serde(default)]
    pub gender_preference: Option<String>,
    /// Free-text meaning category, e.g. "재물/풍요".
    #[serde(default)]
    pub meaning_category: Option<String>,
    /// Free-text positive reading, e.g. "재물이 풍성하고 윤택함".
    #[serde(default)]
    pub positive_meaning: Option<String>,
    /// Traditional luck label, e.g. "길" or "대길".
    #[serde(default)]
    pub numerology_luck: Option<String>,
    #[serde(default)]
    pub usage_count: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CharacterRecord {
    /// Minimal constructor; optional columns start empty and can be filled in
    /// directly on the struct.
    pub fn new(
        character: char,
        primary_element: Element,
        korean_sound: impl Into<String>,
        korean_meaning: impl Into<String>,
        stroke_count: u32,
        name_suitability: i32,
    ) -> Self {
        Self {
            character,
            unicode: None,
            stroke_count,
            radical: None,
            korean_sound: korean_sound.into(),
            korean_meaning: korean_meaning.into(),
            primary_element,
            element_strength: 0,
            element_reason: None,
            name_suitability,
            gender_preference: None,
            meaning_category: None,
            positive_meaning: None,
            numerology_luck: None,
            usage_count: 0,
            is_active: true,
        }
    }

    /// True when the meaning category, positive meaning, or meaning label
    /// contains any of the given keywords.
    pub fn matches_keywords(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| {
            self.meaning_category
                .as_deref()
                .is_some_and(|text| text.contains(keyword))
                || self
                    .positive_meaning
                    .as_deref()
                    .is_some_and(|text| text.contains(keyword))
                || self.korean_meaning.contains(keyword)
        })
    }
}

// -----------------------------------------------------------------------------
// Collaborator trait
// -----------------------------------------------------------------------------

/// Read interface over the character catalog. Implementations must tolerate
/// arbitrary concurrent reads; the scorer fans out one `fetch_details` call
/// per combination.
#[async_trait]
pub trait CharacterCatalog: Send + Sync {
    /// Characters whose primary element is one of `elements`, with suitability
    /// of at least `min_suitability`, ordered by suitability descending then
    /// usage count descending, capped at `limit`.
    async fn find_candidates(
        &self,
        elements: [Element; 2],
        min_suitability: i32,
        active_only: bool,
        limit: usize,
    ) -> CatalogResult<Vec<CharacterRecord>>;

    /// Full records for the given characters, keyed by character.
    async fn fetch_details(&self, characters: &[char])
        -> CatalogResult<HashMap<char, CharacterRecord>>;
}

// -----------------------------------------------------------------------------
// In-memory implementation
// -----------------------------------------------------------------------------

/// `Vec`-backed catalog for tests and preloaded deployments.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    records: Vec<CharacterRecord>,
}

impl MemoryCatalog {
    pub fn new(records: Vec<CharacterRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CharacterCatalog for MemoryCatalog {
    async fn find_candidates(
        &self,
        elements: [Element; 2],
        min_suitability: i32,
        active_only: bool,
        limit: usize,
    ) -> CatalogResult<Vec<CharacterRecord>> {
        let mut hits: Vec<CharacterRecord> = self
            .records
            .iter()
            .filter(|record| {
                (!active_only || record.is_active)
                    && record.name_suitability >= min_suitability
                    && (record.primary_element == elements[0]
                        || record.primary_element == elements[1])
            })
            .cloned()
            .collect();

        hits.sort_by(|a, b| {
            b.name_suitability
                .cmp(&a.name_suitability)
                .then(b.usage_count.cmp(&a.usage_count))
        });
        hits.truncate(limit);
        Ok(hits)
    }

    async fn fetch_details(
        &self,
        characters: &[char],
    ) -> CatalogResult<HashMap<char, CharacterRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|record| characters.contains(&record.character))
            .map(|record| (record.character, record.clone()))
            .collect())
    }
}
