//! Value-theme keyword tables: each tag a parent can pick maps to three fixed
//! meaning keywords matched against catalog text fields.

use crate::shared::ValueTag;

/// Meaning keywords for one value tag.
pub fn keywords(tag: ValueTag) -> [&'static str; 3] {
    match tag {
        ValueTag::Wealth => ["재물", "풍요", "번영"],
        ValueTag::Health => ["건강", "장수", "활력"],
        ValueTag::Wisdom => ["지혜", "학문", "총명"],
        ValueTag::Leadership => ["리더십", "통솔", "권위"],
        ValueTag::Creativity => ["창의", "예술", "재능"],
        ValueTag::Harmony => ["화합", "인연", "배려"],
        ValueTag::Success => ["성공", "성취", "발전"],
        ValueTag::Fame => ["명예", "명성", "영광"],
    }
}

/// Flattened keyword set for a whole request, in tag order.
pub fn collect_keywords(tags: &[ValueTag]) -> Vec<&'static str> {
    tags.iter().flat_map(|tag| keywords(*tag)).collect()
}
