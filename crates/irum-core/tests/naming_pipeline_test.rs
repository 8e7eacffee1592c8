//! Integration test: full naming pipeline — verifies that a birth instant
//! turns into a profile, and that the generator ranks catalog combinations
//! against that profile end to end over an in-memory catalog.
//!
//! ## Scenario
//! 1. Compute the profile for 1900-01-01 00:00 (the reference chart, whose
//!    deficient elements are 금 and 화).
//! 2. Load a small hanja catalog with metal, fire, and water characters.
//! 3. Generate two-character names for surname 김 and **confirm** the results
//!    are ranked, deduplicated, capped at ten, and drawn only from the
//!    compensating elements.

use chrono::NaiveDate;
use irum_core::{
    compute_profile, CatalogError, CatalogResult, CharacterCatalog, CharacterRecord, Element,
    Gender, MemoryCatalog, NameGenerator, NamingError, NamingRequest, ValueTag,
};
use std::collections::HashMap;
use std::sync::Arc;

fn reference_profile() -> irum_core::SajuProfile {
    let birth = NaiveDate::from_ymd_opt(1900, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    compute_profile(birth, Gender::Male)
}

fn fixture_record(
    character: char,
    element: Element,
    sound: &str,
    meaning: &str,
    strokes: u32,
    suitability: i32,
    usage: i64,
) -> CharacterRecord {
    let mut record =
        CharacterRecord::new(character, element, sound, meaning, strokes, suitability);
    record.usage_count = usage;
    record
}

/// Catalog modeled on the production seed data: metal and fire characters
/// compensate the reference chart; the water rows must never surface.
fn fixture_catalog() -> MemoryCatalog {
    let mut silver = fixture_record('銀', Element::Metal, "은", "은", 14, 82, 15);
    silver.meaning_category = Some("재물/풍요".to_string());
    silver.positive_meaning = Some("은처럼 빛나는 재물".to_string());

    let mut hyeon_metal = fixture_record('鉉', Element::Metal, "현", "솥귀", 13, 85, 10);
    hyeon_metal.meaning_category = Some("권위/통솔".to_string());
    hyeon_metal.positive_meaning = Some("권위와 통솔력".to_string());

    let mut hwan = fixture_record('煥', Element::Fire, "환", "빛나다", 13, 83, 7);
    hwan.positive_meaning = Some("환하게 빛남".to_string());

    let mut hyeon_fire = fixture_record('炫', Element::Fire, "현", "밝다", 9, 84, 6);
    hyeon_fire.positive_meaning = Some("밝게 빛남".to_string());

    MemoryCatalog::new(vec![
        silver,
        hyeon_metal,
        fixture_record('錫', Element::Metal, "석", "주석", 16, 80, 8),
        fixture_record('鎭', Element::Metal, "진", "진압하다", 18, 78, 4),
        hwan,
        hyeon_fire,
        fixture_record('晟', Element::Fire, "성", "밝다", 11, 81, 5),
        fixture_record('燦', Element::Fire, "찬", "빛나다", 17, 79, 3),
        // Water rows: right element family for other charts, wrong for this one.
        fixture_record('潤', Element::Water, "윤", "윤택하다", 15, 85, 20),
        fixture_record('海', Element::Water, "해", "바다", 10, 80, 12),
    ])
}

#[tokio::test]
async fn generates_ranked_recommendations_for_the_reference_chart() {
    let profile = reference_profile();
    assert_eq!(profile.yongsin.primary, Element::Metal);
    assert_eq!(profile.yongsin.secondary, Element::Fire);

    let generator = NameGenerator::new(Arc::new(fixture_catalog()));
    let request = NamingRequest::new("김", 2);
    let recommendations = generator.generate(&profile, &request).await.unwrap();

    assert!(!recommendations.is_empty());
    assert!(recommendations.len() <= 10);

    for pair in recommendations.windows(2) {
        assert!(
            pair[0].scores.total >= pair[1].scores.total,
            "results must be sorted by total descending"
        );
    }

    for recommendation in &recommendations {
        assert_eq!(recommendation.characters.len(), 2);
        assert_ne!(
            recommendation.characters[0], recommendation.characters[1],
            "a name must not repeat a character"
        );
        // No value tags were requested: flat 70 for every combination.
        assert_eq!(recommendation.scores.value, 70);
        for info in &recommendation.character_info {
            assert!(
                matches!(info.element, Element::Metal | Element::Fire),
                "only compensating elements may appear, got {}",
                info.element
            );
        }
        assert_eq!(recommendation.name.chars().count(), 2);
        assert!(recommendation.analysis.element_balance.contains("금"));
        assert!(recommendation.analysis.sound_harmony.contains("김"));
    }
}

#[tokio::test]
async fn single_character_names_are_supported() {
    let profile = reference_profile();
    let generator = NameGenerator::new(Arc::new(fixture_catalog()));
    let recommendations = generator
        .generate(&profile, &NamingRequest::new("이", 1))
        .await
        .unwrap();

    assert!(!recommendations.is_empty());
    for recommendation in &recommendations {
        assert_eq!(recommendation.characters.len(), 1);
    }
}

#[tokio::test]
async fn fixed_position_constraints_bind_the_results() {
    let profile = reference_profile();
    let generator = NameGenerator::new(Arc::new(fixture_catalog()));

    let mut request = NamingRequest::new("박", 2);
    request.fixed_chars = HashMap::from([(0, '鉉')]);
    let recommendations = generator.generate(&profile, &request).await.unwrap();

    assert!(!recommendations.is_empty());
    for recommendation in &recommendations {
        assert_eq!(recommendation.characters[0], '鉉');
    }
}

#[tokio::test]
async fn value_tags_lift_matching_characters() {
    let profile = reference_profile();
    let generator = NameGenerator::new(Arc::new(fixture_catalog()));

    let mut request = NamingRequest::new("김", 2);
    request.values = vec![ValueTag::Wealth];
    let recommendations = generator.generate(&profile, &request).await.unwrap();

    let silver = recommendations
        .iter()
        .find(|r| r.characters.contains(&'銀'))
        .expect("the wealth-tagged character should appear in the results");
    assert!(silver.scores.value >= 75);
}

#[tokio::test]
async fn an_exhausted_catalog_is_not_an_error() {
    let profile = reference_profile();
    let generator = NameGenerator::new(Arc::new(MemoryCatalog::default()));
    let recommendations = generator
        .generate(&profile, &NamingRequest::new("김", 2))
        .await
        .unwrap();
    assert!(recommendations.is_empty());
}

#[tokio::test]
async fn an_impossible_fixed_character_yields_an_empty_list() {
    let profile = reference_profile();
    let generator = NameGenerator::new(Arc::new(fixture_catalog()));

    let mut request = NamingRequest::new("김", 2);
    request.fixed_chars = HashMap::from([(0, '龍')]);
    let recommendations = generator.generate(&profile, &request).await.unwrap();
    assert!(recommendations.is_empty());
}

#[tokio::test]
async fn invalid_name_length_is_rejected_up_front() {
    let profile = reference_profile();
    let generator = NameGenerator::new(Arc::new(fixture_catalog()));
    let result = generator
        .generate(&profile, &NamingRequest::new("김", 3))
        .await;
    assert!(matches!(result, Err(NamingError::InvalidRequest(_))));
}

/// Catalog stub whose reads always fail, standing in for an unreachable
/// backing store.
struct UnreachableCatalog;

#[async_trait::async_trait]
impl CharacterCatalog for UnreachableCatalog {
    async fn find_candidates(
        &self,
        _elements: [Element; 2],
        _min_suitability: i32,
        _active_only: bool,
        _limit: usize,
    ) -> CatalogResult<Vec<CharacterRecord>> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }

    async fn fetch_details(
        &self,
        _characters: &[char],
    ) -> CatalogResult<HashMap<char, CharacterRecord>> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }
}

#[tokio::test]
async fn catalog_failures_terminate_the_request() {
    let profile = reference_profile();
    let generator = NameGenerator::new(Arc::new(UnreachableCatalog));
    let result = generator
        .generate(&profile, &NamingRequest::new("김", 2))
        .await;
    assert!(matches!(result, Err(NamingError::Catalog(_))));
}
