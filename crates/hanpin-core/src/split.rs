//! Word splitting and output modes.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::pinyin::PinyinError;
use crate::tone::format;
use crate::unicode::is_pinyin_char;

/// How each word is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Plain ASCII, tone marks dropped (`hao`).
    #[default]
    #[serde(rename = "none")]
    Plain,
    /// ASCII with a tone digit (`hao3`).
    Ascii,
    /// Tone marks kept (`hǎo`).
    Unicode,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Plain => "none",
            OutputMode::Ascii => "ascii",
            OutputMode::Unicode => "unicode",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = PinyinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "plain" => Ok(OutputMode::Plain),
            "ascii" => Ok(OutputMode::Ascii),
            "unicode" => Ok(OutputMode::Unicode),
            _ => Err(PinyinError::InvalidMode(s.to_string())),
        }
    }
}

/// Split romanized text into words and render each per `mode`.
///
/// Words are maximal runs of ASCII letters, digits and tone vowels; every
/// other character separates words and is dropped. Empty words never
/// appear in the output.
pub fn split_words(pinyin: &str, mode: OutputMode) -> Vec<String> {
    pinyin
        .split(|c: char| !is_pinyin_char(c))
        .filter(|word| !word.is_empty())
        .map(|word| match mode {
            OutputMode::Unicode => word.to_string(),
            OutputMode::Plain => format(word, false),
            OutputMode::Ascii => format(word, true),
        })
        .collect()
}
