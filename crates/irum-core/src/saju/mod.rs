//! Saju calendar engine: derive the four pillars (사주) and an elemental
//! balance profile from a birth instant.
//!
//! The engine is a total, pure function of its inputs. It uses the fixed
//! civil-date approximation of solar-term boundaries from [`cycles`] rather
//! than ephemeris data, so no call can fail and no I/O happens here.

pub mod cycles;

use crate::shared::{Element, Gender, ALL_ELEMENTS};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

pub use cycles::{Branch, Pillar, Polarity, Stem};

/// 1984 is 갑자년, the start of the current sexagenary cycle.
const CYCLE_START_YEAR: i32 = 1984;

/// Day-count reference: 1900-01-01 is 갑진일 (stem index 0, branch index 4).
const DAY_REFERENCE: (i32, u32, u32) = (1900, 1, 1);
const DAY_REFERENCE_BRANCH_OFFSET: i64 = 4;

// -----------------------------------------------------------------------------
// Profile types
// -----------------------------------------------------------------------------

/// Percentage share of each element across the profile's 8 stem/branch slots.
///
/// Each share is rounded independently, so the five values may sum to a few
/// points above or below 100. That drift is part of the contract; callers must
/// not renormalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementBalance {
    #[serde(rename = "목")]
    pub wood: u8,
    #[serde(rename = "화")]
    pub fire: u8,
    #[serde(rename = "토")]
    pub earth: u8,
    #[serde(rename = "금")]
    pub metal: u8,
    #[serde(rename = "수")]
    pub water: u8,
}

impl ElementBalance {
    fn from_counts(counts: [u32; 5], total: u32) -> Self {
        let percent = |count: u32| (f64::from(count) / f64::from(total) * 100.0).round() as u8;
        Self {
            wood: percent(counts[Element::Wood.canonical_index()]),
            fire: percent(counts[Element::Fire.canonical_index()]),
            earth: percent(counts[Element::Earth.canonical_index()]),
            metal: percent(counts[Element::Metal.canonical_index()]),
            water: percent(counts[Element::Water.canonical_index()]),
        }
    }

    /// Percentage for one element.
    pub fn percent(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// All five elements sorted ascending by share. The sort is stable over
    /// the canonical enumeration order, so ties keep 목화토금수 ordering.
    pub fn ranked_ascending(&self) -> [Element; 5] {
        let mut ranked = ALL_ELEMENTS;
        ranked.sort_by_key(|e| self.percent(*e));
        ranked
    }
}

/// The elements the profile is most deficient in (용신), plus the element that
/// generatively supports the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yongsin {
    pub primary: Element,
    pub secondary: Element,
    pub helpful: Option<Element>,
}

/// Birth-chart profile: the four pillars and everything derived from them.
/// Immutable once computed; lives only for the request that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SajuProfile {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub elements: ElementBalance,
    pub yongsin: Yongsin,
    /// The day-pillar stem, the profile's reference self-element.
    pub day_master: Stem,
}

// -----------------------------------------------------------------------------
// Engine
// -----------------------------------------------------------------------------

/// Compute the full saju profile for a birth instant.
///
/// `gender` is reserved for school-specific rules and does not affect the
/// current computation.
pub fn compute_profile(birth: NaiveDateTime, gender: Gender) -> SajuProfile {
    let _ = gender;

    let date = birth.date();
    let year = year_pillar(date);
    let month = month_pillar(date, year.stem);
    let day = day_pillar(date);
    let hour = hour_pillar(birth.hour(), day.stem);

    let elements = element_balance(&[year, month, day, hour]);
    let yongsin = find_yongsin(&elements, day.stem);

    SajuProfile {
        year,
        month,
        day,
        hour,
        elements,
        yongsin,
        day_master: day.stem,
    }
}

/// Year pillar, on the start-of-spring boundary: January, and February before
/// the 4th, count as the previous year.
fn year_pillar(date: NaiveDate) -> Pillar {
    let mut year = date.year();
    if date.month() == 1 || (date.month() == 2 && date.day() < 4) {
        year -= 1;
    }

    let diff = i64::from(year - CYCLE_START_YEAR);
    Pillar::new(Stem::from_index(diff), Branch::from_index(diff))
}

/// Month pillar: branch from the civil-date boundary table, stem counted
/// forward from the year stem's seed (오호둔법).
fn month_pillar(date: NaiveDate, year_stem: Stem) -> Pillar {
    let branch = Branch::for_civil_date(date.month(), date.day());
    let stem_index = year_stem.month_stem_seed().index() + branch.month_cycle_offset();
    Pillar::new(Stem::from_index(stem_index as i64), branch)
}

/// Day pillar: whole days since the 1900-01-01 reference day, wrapped onto the
/// 60-day cycle.
fn day_pillar(date: NaiveDate) -> Pillar {
    let (y, m, d) = DAY_REFERENCE;
    // The reference constants are a valid civil date.
    let reference = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    let days = date.signed_duration_since(reference).num_days();
    Pillar::new(
        Stem::from_index(days),
        Branch::from_index(days + DAY_REFERENCE_BRANCH_OFFSET),
    )
}

/// Hour pillar: branch from the two-hour bins, stem counted forward from the
/// day stem's seed.
fn hour_pillar(hour: u32, day_stem: Stem) -> Pillar {
    let branch = Branch::for_hour(hour);
    let stem_index = day_stem.hour_stem_seed().index() + branch.index();
    Pillar::new(Stem::from_index(stem_index as i64), branch)
}

/// Tally the 8 stem/branch slots into the five element buckets and convert to
/// independently-rounded percentages.
fn element_balance(pillars: &[Pillar; 4]) -> ElementBalance {
    let mut counts = [0u32; 5];
    for pillar in pillars {
        for element in pillar.elements() {
            counts[element.canonical_index()] += 1;
        }
    }
    ElementBalance::from_counts(counts, 8)
}

/// The two most deficient elements become the primary/secondary 용신; the
/// helpful element is whatever the day master's element produces.
fn find_yongsin(elements: &ElementBalance, day_stem: Stem) -> Yongsin {
    let ranked = elements.ranked_ascending();
    Yongsin {
        primary: ranked[0],
        secondary: ranked[1],
        helpful: Some(day_stem.element().generates()),
    }
}
