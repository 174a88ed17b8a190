//! Tone-mark formatting.
//!
//! Rewrites diacritic vowels into plain ASCII, optionally recording the tone
//! as a trailing digit (`hǎo` → `hao3`).

use crate::unicode::{is_pinyin_char, is_tone_vowel};

/// Diacritic → (ASCII replacement, tone digit).
///
/// `ü` + toned `e` compounds come before any single-vowel entry so that
/// `nüè` reads as `nue4` rather than `nve4`.
const TONE_TABLE: [(&str, &str, Option<char>); 30] = [
    ("üē", "ue", Some('1')),
    ("üé", "ue", Some('2')),
    ("üě", "ue", Some('3')),
    ("üè", "ue", Some('4')),
    ("ā", "a", Some('1')),
    ("ē", "e", Some('1')),
    ("ī", "i", Some('1')),
    ("ō", "o", Some('1')),
    ("ū", "u", Some('1')),
    ("ǖ", "v", Some('1')),
    ("á", "a", Some('2')),
    ("é", "e", Some('2')),
    ("í", "i", Some('2')),
    ("ó", "o", Some('2')),
    ("ú", "u", Some('2')),
    ("ǘ", "v", Some('2')),
    ("ǎ", "a", Some('3')),
    ("ě", "e", Some('3')),
    ("ǐ", "i", Some('3')),
    ("ǒ", "o", Some('3')),
    ("ǔ", "u", Some('3')),
    ("ǚ", "v", Some('3')),
    ("à", "a", Some('4')),
    ("è", "e", Some('4')),
    ("ì", "i", Some('4')),
    ("ò", "o", Some('4')),
    ("ù", "u", Some('4')),
    ("ǜ", "v", Some('4')),
    ("ü", "v", None),
    ("ɑ", "a", None),
];

/// Replace every diacritic vowel with its ASCII form.
///
/// With `include_tone`, each replaced toned vowel contributes one digit,
/// emitted at the end of the word it belongs to. Input without any
/// diacritic is returned unchanged.
///
/// Digits attach to the word, not the syllable: a value written without
/// spaces such as `zhōngguó` becomes `zhongguo12`. Dictionary values should
/// separate syllables (`zhōng guó`) to get `zhong1 guo2`.
pub fn format(pinyin: &str, include_tone: bool) -> String {
    if !pinyin.chars().any(is_tone_vowel) {
        return pinyin.to_string();
    }

    let mut out = String::with_capacity(pinyin.len() + 4);
    let mut pending = String::new();
    let mut rest = pinyin;

    while let Some(c) = rest.chars().next() {
        if is_tone_vowel(c) {
            if let Some((key, plain, tone)) =
                TONE_TABLE.iter().find(|(key, ..)| rest.starts_with(*key))
            {
                out.push_str(plain);
                if include_tone {
                    pending.extend(*tone);
                }
                rest = &rest[key.len()..];
                continue;
            }
        }

        if !is_pinyin_char(c) && !pending.is_empty() {
            out.push_str(&pending);
            pending.clear();
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out.push_str(&pending);
    out
}
