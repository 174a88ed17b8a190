//! Character-level Unicode classification for Chinese text and pinyin.

/// Characters that may appear inside an unformatted ASCII run:
/// letters, digits, underscore and hyphen.
pub fn is_latin_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Vowels carrying a tone mark, plus `ü` and the alternate `ɑ`.
pub fn is_tone_vowel(c: char) -> bool {
    matches!(
        c,
        'ā' | 'á'
            | 'ǎ'
            | 'à'
            | 'ē'
            | 'é'
            | 'ě'
            | 'è'
            | 'ī'
            | 'í'
            | 'ǐ'
            | 'ì'
            | 'ō'
            | 'ó'
            | 'ǒ'
            | 'ò'
            | 'ū'
            | 'ú'
            | 'ǔ'
            | 'ù'
            | 'ǖ'
            | 'ǘ'
            | 'ǚ'
            | 'ǜ'
            | 'ü'
            | 'ɑ'
    )
}

/// A character that belongs to a pinyin word: ASCII letters, digits and
/// the tone vowels. Everything else separates words.
pub fn is_pinyin_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_tone_vowel(c)
}

/// Check if a string is a usable dictionary key: non-empty and made only
/// of non-whitespace characters.
pub fn is_dict_key(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_latin_word('a'));
        assert!(is_latin_word('Z'));
        assert!(is_latin_word('7'));
        assert!(is_latin_word('-'));
        assert!(is_latin_word('_'));
        assert!(!is_latin_word('中'));
        assert!(!is_latin_word(' '));
    }

    #[test]
    fn test_pinyin_chars() {
        for c in "āáǎàēéěèīíǐìōóǒòūúǔùǖǘǚǜüɑ".chars() {
            assert!(is_tone_vowel(c), "{c} should be a tone vowel");
            assert!(is_pinyin_char(c));
        }
        assert!(!is_tone_vowel('a'));
        assert!(is_pinyin_char('a'));
        assert!(is_pinyin_char('3'));
        assert!(!is_pinyin_char('-'));
        assert!(!is_pinyin_char('\t'));
        assert!(!is_pinyin_char('中'));
    }

    #[test]
    fn test_is_dict_key() {
        assert!(is_dict_key("中国"));
        assert!(!is_dict_key(""));
        assert!(!is_dict_key("中 国"));
    }
}
