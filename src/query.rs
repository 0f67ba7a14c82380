//! Small lookups used by rendering layers.

use crate::catalog::Emoji;

/// First codepoint of the private use block reserved for Mutant Standard.
pub const PUA_START: u32 = 0x10_1600;
/// Last codepoint (inclusive) of the reserved block.
pub const PUA_END: u32 = 0x10_16FF;

// Category identifiers and their English titles.
const CATEGORY_NAMES: &[(&str, &str)] = &[
    ("expressions", "Expressions"),
    ("people", "People"),
    ("gsr", "Gender, Sexuality & Relationships"),
    ("food_drink", "Food & Drink"),
    ("activities_clothing", "Activities & Clothing"),
    ("travel_places", "Travel & Places"),
    ("objects", "Objects"),
    ("nature", "Nature"),
    ("symbols", "Symbols"),
    ("flags", "Flags"),
];

/// True when any of the entry's codepoints sits in the reserved block.
pub fn is_in_private_use_area(emoji: &Emoji) -> bool {
    emoji
        .code
        .iter()
        .any(|codepoint| (PUA_START..=PUA_END).contains(codepoint))
}

pub fn category_display_name(cat: &str) -> Option<&'static str> {
    CATEGORY_NAMES
        .iter()
        .find(|(id, _)| *id == cat)
        .map(|(_, title)| *title)
}

/// Known category identifiers in table order.
pub fn known_categories() -> impl Iterator<Item = &'static str> {
    CATEGORY_NAMES.iter().map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_code(code: Vec<u32>) -> Emoji {
        Emoji {
            short: "x".to_string(),
            root: "x".to_string(),
            desc: "x".to_string(),
            cat: "symbols".to_string(),
            code,
            color: None,
            morph: None,
        }
    }

    #[test]
    fn private_use_range_is_inclusive() {
        assert_eq!(PUA_START, 1_054_208);
        assert_eq!(PUA_END, 1_054_463);
        assert!(is_in_private_use_area(&with_code(vec![PUA_START])));
        assert!(is_in_private_use_area(&with_code(vec![PUA_END])));
        assert!(!is_in_private_use_area(&with_code(vec![PUA_START - 1])));
        assert!(!is_in_private_use_area(&with_code(vec![PUA_END + 1])));
    }

    #[test]
    fn any_codepoint_in_range_counts() {
        assert!(is_in_private_use_area(&with_code(vec![
            128169, 1_054_300, 65039
        ])));
        assert!(!is_in_private_use_area(&with_code(Vec::new())));
        assert!(!is_in_private_use_area(&with_code(vec![128169])));
    }

    #[test]
    fn category_titles() {
        assert_eq!(category_display_name("food_drink"), Some("Food & Drink"));
        assert_eq!(category_display_name("flags"), Some("Flags"));
        assert_eq!(category_display_name("food"), None);
        assert_eq!(known_categories().count(), 10);
        for cat in known_categories() {
            assert!(category_display_name(cat).is_some());
        }
    }
}
