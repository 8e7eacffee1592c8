//! Generator configuration loaded from the environment.
//!
//! The defaults reproduce the catalog retrieval and enumeration bounds the
//! scoring pipeline was tuned for; the env keys exist so operators can tune
//! limits without code edits.
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | IRUM_MIN_SUITABILITY | 70 | Minimum catalog suitability for candidates. |
//! | IRUM_CANDIDATE_LIMIT | 200 | Retrieval cap on candidate characters. |
//! | IRUM_COMBINATION_LIMIT | 200 | Early-exit cap on enumerated combinations. |
//! | IRUM_MAX_RESULTS | 10 | Recommendations returned after ranking. |

use serde::{Deserialize, Serialize};

fn default_min_suitability() -> i32 {
    70
}

fn default_candidate_limit() -> usize {
    200
}

fn default_combination_limit() -> usize {
    200
}

fn default_max_results() -> usize {
    10
}

/// Bounds for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Minimum `name_suitability` a catalog character needs to be considered.
    #[serde(default = "default_min_suitability")]
    pub min_suitability: i32,
    /// Cap on characters fetched from the catalog; bounds all downstream work.
    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,
    /// Hard stop for combination enumeration.
    #[serde(default = "default_combination_limit")]
    pub combination_limit: usize,
    /// Ranked recommendations returned to the caller.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            min_suitability: default_min_suitability(),
            candidate_limit: default_candidate_limit(),
            combination_limit: default_combination_limit(),
            max_results: default_max_results(),
        }
    }
}

impl NamingConfig {
    /// Read the configuration from environment variables, falling back to the
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            min_suitability: env_i32("IRUM_MIN_SUITABILITY", default_min_suitability()),
            candidate_limit: env_usize("IRUM_CANDIDATE_LIMIT", default_candidate_limit()),
            combination_limit: env_usize("IRUM_COMBINATION_LIMIT", default_combination_limit()),
            max_results: env_usize("IRUM_MAX_RESULTS", default_max_results()),
        }
    }
}

fn env_i32(name: &str, default: i32) -> i32 {
    match std::env::var(name) {
        Ok(v) => v.trim().parse().unwrap_or(default),
        Err(_) => default,
    }
}

fn env_usize(name: &str, default: usize) -> usize {
    match std::env::var(name) {
        Ok(v) => v.trim().parse().unwrap_or(default),
        Err(_) => default,
    }
}
