//! Shared types used across the saju engine and the name generator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// -----------------------------------------------------------------------------
// Five elements (오행)
// -----------------------------------------------------------------------------

/// The five elements, in canonical enumeration order. Every stem, branch, and
/// catalog character carries exactly one. The canonical order is the tie-break
/// order for deficiency ranking, so keep the variants in this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "목")]
    Wood,
    #[serde(rename = "화")]
    Fire,
    #[serde(rename = "토")]
    Earth,
    #[serde(rename = "금")]
    Metal,
    #[serde(rename = "수")]
    Water,
}

/// Canonical enumeration order (목, 화, 토, 금, 수).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Hangul label used in catalog data and user-facing text.
    pub fn hangul(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// The element this one produces under the generative cycle (상생):
    /// 목 → 화 → 토 → 금 → 수 → 목.
    pub fn generates(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// Position in the canonical order, used as the stable tie-break key.
    pub fn canonical_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hangul())
    }
}

// -----------------------------------------------------------------------------
// Birth input
// -----------------------------------------------------------------------------

/// Gender of the child. Accepted by the calendar engine for future
/// school-specific branching; no current rule reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

// -----------------------------------------------------------------------------
// Naming request
// -----------------------------------------------------------------------------

/// Value themes a parent can ask the name to express. Each maps to a fixed set
/// of meaning keywords (see `naming::values`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueTag {
    Wealth,
    Health,
    Wisdom,
    Leadership,
    Creativity,
    Harmony,
    Success,
    Fame,
}

/// User constraints for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingRequest {
    /// Family name, also used as a sound label in the harmony check.
    pub surname: String,
    /// Given-name length in characters. Only 1 and 2 are accepted.
    pub name_length: usize,
    /// Sparse position → required character constraints (0-based).
    #[serde(default)]
    pub fixed_chars: HashMap<usize, char>,
    /// Requested value themes; empty means no preference.
    #[serde(default)]
    pub values: Vec<ValueTag>,
}

impl NamingRequest {
    pub fn new(surname: impl Into<String>, name_length: usize) -> Self {
        Self {
            surname: surname.into(),
            name_length,
            fixed_chars: HashMap::new(),
            values: Vec::new(),
        }
    }
}

// -----------------------------------------------------------------------------
// Recommendation output
// -----------------------------------------------------------------------------

/// Display info for one character of a recommended name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterInfo {
    pub character: char,
    pub meaning: String,
    pub element: Element,
    pub sound: String,
}

/// The five sub-scores and their weighted total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NameScores {
    pub element: i32,
    pub sound: i32,
    pub meaning: i32,
    pub numerology: i32,
    pub value: i32,
    pub total: i32,
}

/// Human-readable analysis of a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameAnalysis {
    /// Which deficient elements the name compensates.
    pub element_balance: String,
    /// Sound harmony statement naming the surname.
    pub sound_harmony: String,
    /// Combined reading of the characters' meanings.
    pub meaning_combination: String,
}

/// One ranked name candidate. Produced fresh per request, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameRecommendation {
    /// The joined given name.
    pub name: String,
    pub characters: Vec<char>,
    pub character_info: Vec<CharacterInfo>,
    pub scores: NameScores,
    pub analysis: NameAnalysis,
}
