//! Name candidate generator: retrieve compensating characters from the
//! catalog, reorder them by requested value themes, enumerate combinations,
//! score each combination on its own task, and rank the results.
//!
//! ## Pipeline
//!
//! 1. Catalog retrieval filtered to the profile's 용신 elements.
//! 2. Stable partition pulling value-relevant characters to the front.
//! 3. Early-exit combination enumeration (hard cap, fixed-position filters).
//! 4. One scoring task per combination — one catalog detail read plus pure
//!    computation, no shared state between tasks.
//! 5. Join, sort by total descending (ties keep generation order), top 10.
//!
//! Zero viable combinations is a valid outcome, not an error: the generator
//! returns an empty list and the caller renders "no recommendations".

pub mod scoring;
pub mod values;

use crate::catalog::{CatalogError, CharacterCatalog, CharacterRecord};
use crate::config::NamingConfig;
use crate::saju::SajuProfile;
use crate::shared::{NameRecommendation, NamingRequest};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Result type for name generation.
pub type NamingResult<T> = Result<T, NamingError>;

/// Failures of a generation request. Catalog trouble terminates the whole
/// request with no internal retry; invalid input is rejected up front.
#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    #[error("invalid naming request: {0}")]
    InvalidRequest(String),

    #[error("character catalog failure: {0}")]
    Catalog(#[from] CatalogError),

    #[error("scoring task aborted: {0}")]
    ScoringJoin(#[from] tokio::task::JoinError),
}

/// Generates ranked name recommendations against a read-only character
/// catalog.
pub struct NameGenerator {
    catalog: Arc<dyn CharacterCatalog>,
    config: NamingConfig,
}

impl NameGenerator {
    pub fn new(catalog: Arc<dyn CharacterCatalog>) -> Self {
        Self::with_config(catalog, NamingConfig::default())
    }

    pub fn with_config(catalog: Arc<dyn CharacterCatalog>, config: NamingConfig) -> Self {
        Self { catalog, config }
    }

    /// Produce up to `max_results` ranked recommendations for the request.
    pub async fn generate(
        &self,
        profile: &SajuProfile,
        request: &NamingRequest,
    ) -> NamingResult<Vec<NameRecommendation>> {
        validate(request)?;

        let candidates = self
            .catalog
            .find_candidates(
                [profile.yongsin.primary, profile.yongsin.secondary],
                self.config.min_suitability,
                true,
                self.config.candidate_limit,
            )
            .await?;
        debug!(
            candidates = candidates.len(),
            primary = %profile.yongsin.primary,
            secondary = %profile.yongsin.secondary,
            "catalog retrieval complete"
        );

        let keywords = values::collect_keywords(&request.values);
        let candidates = prioritize_by_values(candidates, &keywords);

        let combinations = build_combinations(
            &candidates,
            request.name_length,
            &request.fixed_chars,
            self.config.combination_limit,
        );
        if combinations.is_empty() {
            info!(surname = %request.surname, "no viable combinations for request");
            return Ok(Vec::new());
        }
        debug!(combinations = combinations.len(), "scoring combinations");

        let mut handles = Vec::with_capacity(combinations.len());
        for combination in combinations {
            let catalog = Arc::clone(&self.catalog);
            let profile = profile.clone();
            let surname = request.surname.clone();
            let tags = request.values.clone();
            handles.push(tokio::spawn(async move {
                let details = catalog.fetch_details(&combination).await?;
                let recommendation =
                    scoring::evaluate(&surname, &combination, &details, &profile, &tags)?;
                Ok::<NameRecommendation, NamingError>(recommendation)
            }));
        }

        // Join barrier: ranking must not start until every combination has a
        // score.
        let mut scored = Vec::with_capacity(handles.len());
        for handle in handles {
            scored.push(handle.await??);
        }

        scored.sort_by(|a, b| b.scores.total.cmp(&a.scores.total));
        scored.truncate(self.config.max_results);
        info!(results = scored.len(), surname = %request.surname, "name generation complete");
        Ok(scored)
    }
}

fn validate(request: &NamingRequest) -> NamingResult<()> {
    if !(1..=2).contains(&request.name_length) {
        return Err(NamingError::InvalidRequest(format!(
            "name length must be 1 or 2, got {}",
            request.name_length
        )));
    }
    Ok(())
}

/// Stable partition: characters whose meaning fields match any requested
/// keyword move ahead of the rest, both groups keeping their retrieval order.
/// Deliberately not a sort.
fn prioritize_by_values(
    candidates: Vec<CharacterRecord>,
    keywords: &[&str],
) -> Vec<CharacterRecord> {
    if keywords.is_empty() {
        return candidates;
    }
    let (mut relevant, rest): (Vec<CharacterRecord>, Vec<CharacterRecord>) = candidates
        .into_iter()
        .partition(|record| record.matches_keywords(keywords));
    relevant.extend(rest);
    relevant
}

/// Enumerate combinations in candidate order, honoring fixed-position
/// constraints, skipping repeated characters, and stopping at `cap`. The cap
/// bounds all downstream scoring work; enumeration is first-found, and the
/// final ranking re-sorts by score.
fn build_combinations(
    candidates: &[CharacterRecord],
    length: usize,
    fixed: &HashMap<usize, char>,
    cap: usize,
) -> Vec<Vec<char>> {
    let mut combinations = Vec::new();
    match length {
        1 => {
            for record in candidates {
                if fixed.get(&0).is_some_and(|&c| c != record.character) {
                    continue;
                }
                combinations.push(vec![record.character]);
                if combinations.len() >= cap {
                    break;
                }
            }
        }
        2 => {
            'outer: for first in candidates {
                if fixed.get(&0).is_some_and(|&c| c != first.character) {
                    continue;
                }
                for second in candidates {
                    if fixed.get(&1).is_some_and(|&c| c != second.character) {
                        continue;
                    }
                    if first.character == second.character {
                        continue;
                    }
                    combinations.push(vec![first.character, second.character]);
                    if combinations.len() >= cap {
                        break 'outer;
                    }
                }
            }
        }
        _ => {}
    }
    combinations
}
