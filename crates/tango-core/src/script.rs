//! Script detection used to tell which field of a word pair is Japanese.

/// Hiragana, Katakana and CJK Unified Ideographs (up to U+9FAF)
pub fn is_japanese_char(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FAF}')
}

/// True if `text` contains at least one Japanese character.
///
/// This only looks at code points. Mixed text such as "Tokyo 東京" counts as
/// Japanese, and nothing is normalized or validated.
pub fn is_japanese(text: &str) -> bool {
    text.chars().any(is_japanese_char)
}

/// Same as [`is_japanese`], but absent text is never Japanese
pub fn is_japanese_opt(text: Option<&str>) -> bool {
    text.is_some_and(is_japanese)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_absent_are_not_japanese() {
        assert!(!is_japanese(""));
        assert!(!is_japanese_opt(None));
        assert!(!is_japanese_opt(Some("")));
    }

    #[test]
    fn test_each_script_is_detected() {
        assert!(is_japanese("ひらがな"));
        assert!(is_japanese("カタカナ"));
        assert!(is_japanese("漢字"));
        assert!(is_japanese("see you 又ね"));
    }

    #[test]
    fn test_range_edges() {
        assert!(is_japanese("\u{3040}"));
        assert!(is_japanese("\u{30FF}"));
        assert!(is_japanese("\u{4E00}"));
        assert!(is_japanese("\u{9FAF}"));

        assert!(!is_japanese("\u{303F}"));
        assert!(!is_japanese("\u{9FB0}"));
    }

    #[test]
    fn test_latin_and_other_scripts_are_not_japanese() {
        assert!(!is_japanese("Hello, world"));
        assert!(!is_japanese("안녕하세요"));
        // Full-width Latin is outside the detected ranges
        assert!(!is_japanese("ＡＢＣ"));
    }
}
