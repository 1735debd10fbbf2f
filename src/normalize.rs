//! Keyword normalization for kana-equivalence matching.
//!
//! Clipboard stores hold precomposed text, but keyboard input may carry the
//! spacing voiced/semi-voiced sound marks (U+309B, U+309C) typed separately
//! from their base kana. Mapping those to the combining forms and applying
//! canonical composition lets both spellings match the same records.

use unicode_normalization::UnicodeNormalization;

const VOICED_SOUND_MARK: char = '\u{309B}';
const COMBINING_VOICED_SOUND_MARK: char = '\u{3099}';
const SEMI_VOICED_SOUND_MARK: char = '\u{309C}';
const COMBINING_SEMI_VOICED_SOUND_MARK: char = '\u{309A}';

/// Normalize a search keyword: spacing sound marks become their combining
/// forms, then the whole keyword is NFC-composed.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword
        .chars()
        .map(|c| match c {
            VOICED_SOUND_MARK => COMBINING_VOICED_SOUND_MARK,
            SEMI_VOICED_SOUND_MARK => COMBINING_SEMI_VOICED_SOUND_MARK,
            other => other,
        })
        .nfc()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_voiced_mark_composes() {
        // か + spacing dakuten becomes precomposed が
        assert_eq!(normalize_keyword("か\u{309B}"), "が");
    }

    #[test]
    fn test_spacing_semi_voiced_mark_composes() {
        // は + spacing handakuten becomes precomposed ぱ
        assert_eq!(normalize_keyword("は\u{309C}"), "ぱ");
    }

    #[test]
    fn test_combining_mark_composes() {
        assert_eq!(normalize_keyword("か\u{3099}"), "が");
    }

    #[test]
    fn test_precomposed_passes_through() {
        assert_eq!(normalize_keyword("がぎぐげご"), "がぎぐげご");
    }

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(normalize_keyword("hello world"), "hello world");
    }

    #[test]
    fn test_empty_keyword() {
        assert_eq!(normalize_keyword(""), "");
    }

    #[test]
    fn test_marks_inside_longer_keyword() {
        assert_eq!(normalize_keyword("ta\u{304B}\u{309B}ko"), "taがko");
    }
}
