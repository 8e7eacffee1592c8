//! The five sub-scores of a name combination and their weighted total.
//!
//! Every function here is a pure function of the combination, the fetched
//! catalog records, the profile, and the request — no shared state, so the
//! generator can score combinations on independent tasks and only join for
//! the final ranking.

use super::values;
use crate::catalog::{CatalogError, CharacterRecord};
use crate::saju::{SajuProfile, Yongsin};
use crate::shared::{CharacterInfo, NameAnalysis, NameRecommendation, NameScores, ValueTag};
use std::collections::HashMap;

/// The 81-number luck table: stroke-count sums reducing to one of these are
/// traditionally auspicious.
const LUCKY_NUMBERS: [u32; 35] = [
    1, 3, 5, 6, 7, 8, 11, 13, 15, 16, 17, 18, 21, 23, 24, 25, 29, 31, 32, 33, 35, 37, 39, 41, 45,
    47, 48, 52, 57, 61, 63, 65, 67, 68, 81,
];

/// Consonant clusters that read poorly. Checked as literal substrings of the
/// concatenated whole-syllable sound labels; the labels are never decomposed
/// into jamo first, so a match requires a bare-jamo label in the data.
const HARD_SOUND_CLUSTERS: [&str; 3] = ["ㅈㅈ", "ㅊㅊ", "ㅅㅅ"];

/// Score one combination and assemble the full recommendation.
///
/// Every character of the combination must be present in `details`; a missing
/// record means the catalog returned malformed data for this request.
pub(crate) fn evaluate(
    surname: &str,
    combination: &[char],
    details: &HashMap<char, CharacterRecord>,
    profile: &SajuProfile,
    tags: &[ValueTag],
) -> Result<NameRecommendation, CatalogError> {
    let records: Vec<&CharacterRecord> = combination
        .iter()
        .map(|c| details.get(c).ok_or(CatalogError::MissingCharacter(*c)))
        .collect::<Result<_, _>>()?;

    let element = element_score(&records, &profile.yongsin);
    let sound = sound_score(surname, &records);
    let meaning = meaning_score(&records);
    let numerology = numerology_score(&records);
    let value = value_score(&records, tags);
    let total = weighted_total(element, sound, meaning, numerology, value);

    Ok(NameRecommendation {
        name: combination.iter().collect(),
        characters: combination.to_vec(),
        character_info: records
            .iter()
            .map(|record| CharacterInfo {
                character: record.character,
                meaning: record.korean_meaning.clone(),
                element: record.primary_element,
                sound: record.korean_sound.clone(),
            })
            .collect(),
        scores: NameScores {
            element,
            sound,
            meaning,
            numerology,
            value,
            total,
        },
        analysis: analysis(surname, &records, &profile.yongsin),
    })
}

/// Weighted total: element 30%, sound/meaning/numerology 20% each, value 10%.
pub(crate) fn weighted_total(
    element: i32,
    sound: i32,
    meaning: i32,
    numerology: i32,
    value: i32,
) -> i32 {
    (f64::from(element) * 0.3
        + f64::from(sound) * 0.2
        + f64::from(meaning) * 0.2
        + f64::from(numerology) * 0.2
        + f64::from(value) * 0.1)
        .round() as i32
}

/// Element compensation: 50 base, +25 per primary-용신 match, +15 per
/// secondary match, +10 once when any adjacent pair follows the generative
/// cycle. Capped at 100.
pub(crate) fn element_score(records: &[&CharacterRecord], yongsin: &Yongsin) -> i32 {
    let mut score = 50;
    for record in records {
        if record.primary_element == yongsin.primary {
            score += 25;
        } else if record.primary_element == yongsin.secondary {
            score += 15;
        }
    }

    let generative_pair = records
        .windows(2)
        .any(|pair| pair[0].primary_element.generates() == pair[1].primary_element);
    if generative_pair {
        score += 10;
    }

    score.min(100)
}

/// Sound harmony: 80 base, −20 once for any duplicated sound label among
/// surname plus characters, −10 per hard cluster appearing in the
/// concatenated labels. Floored at 0.
pub(crate) fn sound_score(surname: &str, records: &[&CharacterRecord]) -> i32 {
    let mut score = 80;

    let sounds: Vec<&str> = std::iter::once(surname)
        .chain(records.iter().map(|record| record.korean_sound.as_str()))
        .collect();

    let mut seen: Vec<&str> = Vec::with_capacity(sounds.len());
    let mut duplicated = false;
    for &sound in &sounds {
        if seen.contains(&sound) {
            duplicated = true;
            break;
        }
        seen.push(sound);
    }
    if duplicated {
        score -= 20;
    }

    let combined: String = sounds.concat();
    for cluster in HARD_SOUND_CLUSTERS {
        if combined.contains(cluster) {
            score -= 10;
        }
    }

    score.max(0)
}

/// Meaning quality: 70 base, +15 per character carrying a positive meaning.
/// Capped at 100.
pub(crate) fn meaning_score(records: &[&CharacterRecord]) -> i32 {
    let mut score = 70;
    for record in records {
        if record
            .positive_meaning
            .as_deref()
            .is_some_and(|text| !text.is_empty())
        {
            score += 15;
        }
    }
    score.min(100)
}

/// 81-number numerology: reduce the stroke-count sum modulo 81 (0 counts as
/// 81) and look it up in the luck table. Exactly 90 or 60.
pub(crate) fn numerology_score(records: &[&CharacterRecord]) -> i32 {
    let total_strokes: u32 = records.iter().map(|record| record.stroke_count).sum();
    let mut number = total_strokes % 81;
    if number == 0 {
        number = 81;
    }
    if LUCKY_NUMBERS.contains(&number) {
        90
    } else {
        60
    }
}

/// Value-theme fit: flat 70 when no tags were requested, otherwise 50 base
/// plus 25 per character whose meaning fields contain a requested keyword.
/// Capped at 100.
pub(crate) fn value_score(records: &[&CharacterRecord], tags: &[ValueTag]) -> i32 {
    if tags.is_empty() {
        return 70;
    }

    let keywords = values::collect_keywords(tags);
    let mut score = 50;
    for record in records {
        if record.matches_keywords(&keywords) {
            score += 25;
        }
    }
    score.min(100)
}

/// The three analysis statements shown alongside the scores.
fn analysis(surname: &str, records: &[&CharacterRecord], yongsin: &Yongsin) -> NameAnalysis {
    let meanings: Vec<&str> = records
        .iter()
        .map(|record| record.korean_meaning.as_str())
        .collect();

    NameAnalysis {
        element_balance: format!(
            "{}과 {} 오행을 보완하여 균형을 맞춥니다.",
            yongsin.primary, yongsin.secondary
        ),
        sound_harmony: format!(
            "{}씨와 조화로운 발음으로 부르기 쉽고 듣기 좋습니다.",
            surname
        ),
        meaning_combination: format!("{}의 의미가 조화를 이룹니다.", meanings.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Element;

    fn record(
        character: char,
        element: Element,
        sound: &str,
        strokes: u32,
    ) -> CharacterRecord {
        CharacterRecord::new(character, element, sound, "뜻", strokes, 80)
    }

    #[test]
    fn stroke_sum_fifteen_is_auspicious() {
        let first = record('潤', Element::Water, "윤", 7);
        let second = record('澈', Element::Water, "철", 8);
        assert_eq!(numerology_score(&[&first, &second]), 90);
    }

    #[test]
    fn numerology_is_binary_and_wraps_at_eighty_one() {
        // 2 is not in the luck table.
        let unlucky = record('二', Element::Metal, "이", 2);
        assert_eq!(numerology_score(&[&unlucky]), 60);
        // A sum reducing to 0 counts as 81, which is in the table.
        let heavy = record('重', Element::Metal, "중", 81);
        assert_eq!(numerology_score(&[&heavy]), 90);
    }

    #[test]
    fn value_score_is_flat_seventy_without_tags() {
        let mut rich = record('潤', Element::Water, "윤", 15);
        rich.meaning_category = Some("재물/풍요".to_string());
        assert_eq!(value_score(&[&rich], &[]), 70);
    }

    #[test]
    fn value_score_rewards_keyword_matches() {
        let mut rich = record('潤', Element::Water, "윤", 15);
        rich.meaning_category = Some("재물/풍요".to_string());
        let plain = record('二', Element::Metal, "이", 2);
        assert_eq!(value_score(&[&rich, &plain], &[ValueTag::Wealth]), 75);
        assert_eq!(value_score(&[&rich, &rich], &[ValueTag::Wealth]), 100);
        assert_eq!(value_score(&[&plain], &[ValueTag::Wealth]), 50);
    }

    #[test]
    fn element_score_rewards_yongsin_matches_and_generative_flow() {
        let yongsin = Yongsin {
            primary: Element::Metal,
            secondary: Element::Fire,
            helpful: Some(Element::Fire),
        };
        let metal = record('鉉', Element::Metal, "현", 13);
        let fire = record('炫', Element::Fire, "현", 9);
        let water = record('潤', Element::Water, "윤", 15);

        // Two primary matches, no generative adjacency (metal→metal).
        assert_eq!(element_score(&[&metal, &metal], &yongsin), 100);
        // Primary + secondary, fire→metal is not generative.
        assert_eq!(element_score(&[&fire, &metal], &yongsin), 90);
        // Primary + off-yongsin water, metal→water generative adjacency.
        assert_eq!(element_score(&[&metal, &water], &yongsin), 85);
        // Single secondary match.
        assert_eq!(element_score(&[&fire], &yongsin), 65);
    }

    #[test]
    fn sound_score_penalizes_duplicates_once() {
        let first = record('鉉', Element::Metal, "현", 13);
        let second = record('炫', Element::Fire, "현", 9);
        assert_eq!(sound_score("김", &[&first, &second]), 60);

        let distinct = record('潤', Element::Water, "윤", 15);
        assert_eq!(sound_score("김", &[&first, &distinct]), 80);
        // Surname participates in the duplicate check.
        assert_eq!(sound_score("현", &[&first, &distinct]), 60);
    }

    #[test]
    fn sound_score_checks_clusters_on_whole_labels_only() {
        // Whole-syllable labels cannot contain a bare jamo pair, so realistic
        // data never triggers the cluster penalty.
        let jang = record('章', Element::Fire, "장", 11);
        let ju = record('珠', Element::Metal, "주", 10);
        assert_eq!(sound_score("정", &[&jang, &ju]), 80);

        // A bare-jamo label does trigger it, on top of the duplicate penalty.
        let first = record('一', Element::Metal, "ㅈ", 1);
        let second = record('二', Element::Metal, "ㅈ", 2);
        assert_eq!(sound_score("가", &[&first, &second]), 50);
    }

    #[test]
    fn meaning_score_counts_positive_meanings() {
        let mut positive = record('潤', Element::Water, "윤", 15);
        positive.positive_meaning = Some("재물이 풍성하고 윤택함".to_string());
        let blank = record('二', Element::Metal, "이", 2);

        assert_eq!(meaning_score(&[&blank, &blank]), 70);
        assert_eq!(meaning_score(&[&positive, &blank]), 85);
        assert_eq!(meaning_score(&[&positive, &positive]), 100);

        // An empty string is not a positive meaning.
        let mut empty = record('三', Element::Metal, "삼", 3);
        empty.positive_meaning = Some(String::new());
        assert_eq!(meaning_score(&[&empty]), 70);
    }

    #[test]
    fn weighted_total_rounds_the_blend() {
        // 100·0.3 + 80·0.2 + 70·0.2 + 90·0.2 + 70·0.1 = 85.0
        assert_eq!(weighted_total(100, 80, 70, 90, 70), 85);
        // 65·0.3 + 60·0.2 + 70·0.2 + 60·0.2 + 50·0.1 = 62.5 → 63
        assert_eq!(weighted_total(65, 60, 70, 60, 50), 63);
    }
}
