//! Sexagenary cycle tables: the ten heavenly stems (천간) and twelve earthly
//! branches (지지), their elemental tags, and the civil-date boundary tables
//! used to place a birth instant inside the cycles.
//!
//! Everything here is fixed lookup data. The boundary ranges are a civil-date
//! approximation of the solar-term transitions (입춘 ≈ Feb 4 and so on), not
//! astronomical data.

use crate::shared::Element;
use serde::{Deserialize, Serialize};
use std::fmt;

// -----------------------------------------------------------------------------
// Heavenly stems (천간)
// -----------------------------------------------------------------------------

/// The ten heavenly stems, in cycle order (갑 = index 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "갑")]
    Gap,
    #[serde(rename = "을")]
    Eul,
    #[serde(rename = "병")]
    Byeong,
    #[serde(rename = "정")]
    Jeong,
    #[serde(rename = "무")]
    Mu,
    #[serde(rename = "기")]
    Gi,
    #[serde(rename = "경")]
    Gyeong,
    #[serde(rename = "신")]
    Sin,
    #[serde(rename = "임")]
    Im,
    #[serde(rename = "계")]
    Gye,
}

/// All ten stems in cycle order (index 0 = 갑).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

/// Polarity (음양) carried by each stem. Not used by any downstream rule yet;
/// kept on the type because the cycle defines it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    #[serde(rename = "양")]
    Yang,
    #[serde(rename = "음")]
    Eum,
}

impl Stem {
    /// Position in the ten-stem cycle (갑 = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stem at `index mod 10` of the cycle.
    pub fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Hangul symbol for display.
    pub fn hangul(self) -> char {
        match self {
            Self::Gap => '갑',
            Self::Eul => '을',
            Self::Byeong => '병',
            Self::Jeong => '정',
            Self::Mu => '무',
            Self::Gi => '기',
            Self::Gyeong => '경',
            Self::Sin => '신',
            Self::Im => '임',
            Self::Gye => '계',
        }
    }

    /// Elemental tag of the stem.
    pub fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    /// Yang for even cycle positions, 음 for odd.
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Eum
        }
    }

    /// Starting month stem for years led by this stem (오호둔법): the stem of
    /// the 인 month, from which the rest of the year's month stems count
    /// forward. Five stem pairs share each seed.
    pub fn month_stem_seed(self) -> Stem {
        match self {
            Self::Gap | Self::Gi => Self::Byeong,
            Self::Eul | Self::Gyeong => Self::Mu,
            Self::Byeong | Self::Sin => Self::Gyeong,
            Self::Jeong | Self::Im => Self::Im,
            Self::Mu | Self::Gye => Self::Gap,
        }
    }

    /// Starting hour stem for days led by this stem: the stem of the 자 hour.
    /// Same five-pair structure as the month rule.
    pub fn hour_stem_seed(self) -> Stem {
        match self {
            Self::Gap | Self::Gi => Self::Gap,
            Self::Eul | Self::Gyeong => Self::Byeong,
            Self::Byeong | Self::Sin => Self::Mu,
            Self::Jeong | Self::Im => Self::Gyeong,
            Self::Mu | Self::Gye => Self::Im,
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hangul())
    }
}

// -----------------------------------------------------------------------------
// Earthly branches (지지)
// -----------------------------------------------------------------------------

/// The twelve earthly branches, in cycle order (자 = index 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "자")]
    Ja,
    #[serde(rename = "축")]
    Chuk,
    #[serde(rename = "인")]
    In,
    #[serde(rename = "묘")]
    Myo,
    #[serde(rename = "진")]
    Jin,
    #[serde(rename = "사")]
    Sa,
    #[serde(rename = "오")]
    O,
    #[serde(rename = "미")]
    Mi,
    #[serde(rename = "신")]
    Sin,
    #[serde(rename = "유")]
    Yu,
    #[serde(rename = "술")]
    Sul,
    #[serde(rename = "해")]
    Hae,
}

/// All twelve branches in cycle order (index 0 = 자).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

/// Month cycle order: the solar year opens at 인 (start of spring), so month
/// stem offsets count from 인, not 자.
pub const MONTH_BRANCH_CYCLE: [Branch; 12] = [
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
    Branch::Ja,
    Branch::Chuk,
];

impl Branch {
    /// Position in the twelve-branch cycle (자 = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Branch at `index mod 12` of the cycle.
    pub fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Hangul symbol for display.
    pub fn hangul(self) -> char {
        match self {
            Self::Ja => '자',
            Self::Chuk => '축',
            Self::In => '인',
            Self::Myo => '묘',
            Self::Jin => '진',
            Self::Sa => '사',
            Self::O => '오',
            Self::Mi => '미',
            Self::Sin => '신',
            Self::Yu => '유',
            Self::Sul => '술',
            Self::Hae => '해',
        }
    }

    /// Elemental tag of the branch.
    pub fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Ja | Self::Hae => Element::Water,
        }
    }

    /// Offset of this branch inside the month cycle (인 = 0).
    pub fn month_cycle_offset(self) -> usize {
        (self.index() + 12 - Branch::In.index()) % 12
    }

    /// Month branch for a civil date. Each range approximates one solar-term
    /// month (입춘 Feb 4 opens the 인 month, and so on around the year).
    pub fn for_civil_date(month: u32, day: u32) -> Self {
        match (month, day) {
            (2, 4..) | (3, ..=5) => Self::In,
            (3, 6..) | (4, ..=4) => Self::Myo,
            (4, 5..) | (5, ..=5) => Self::Jin,
            (5, 6..) | (6, ..=5) => Self::Sa,
            (6, 6..) | (7, ..=6) => Self::O,
            (7, 7..) | (8, ..=7) => Self::Mi,
            (8, 8..) | (9, ..=7) => Self::Sin,
            (9, 8..) | (10, ..=7) => Self::Yu,
            (10, 8..) | (11, ..=6) => Self::Sul,
            (11, 7..) | (12, ..=6) => Self::Hae,
            (12, 7..) | (1, ..=5) => Self::Ja,
            _ => Self::Chuk,
        }
    }

    /// Hour branch for an hour of day: twelve fixed two-hour bins starting at
    /// 23:00 (23:00–00:59 is the 자 hour).
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            23 | 0 => Self::Ja,
            1 | 2 => Self::Chuk,
            3 | 4 => Self::In,
            5 | 6 => Self::Myo,
            7 | 8 => Self::Jin,
            9 | 10 => Self::Sa,
            11 | 12 => Self::O,
            13 | 14 => Self::Mi,
            15 | 16 => Self::Sin,
            17 | 18 => Self::Yu,
            19 | 20 => Self::Sul,
            _ => Self::Hae,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hangul())
    }
}

// -----------------------------------------------------------------------------
// Pillars
// -----------------------------------------------------------------------------

/// One (stem, branch) pair for a time unit of the birth instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Elemental tags of the stem and branch slots, in that order.
    pub fn elements(self) -> [Element; 2] {
        [self.stem.element(), self.branch.element()]
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}
