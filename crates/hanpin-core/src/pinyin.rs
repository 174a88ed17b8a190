//! User-facing conversions.
//!
//! `Pinyin` owns a dictionary loader and composes the romanizer, the word
//! splitter and the tone formatter into the six public operations.


use std::sync::Arc;

use tracing::debug_span;

use crate::dict::DictLoader;
use crate::romanize::romanize;
use crate::split::{split_words, OutputMode};
use crate::tone::format;
use crate::unicode::is_pinyin_char;

/// Delimiters accepted by [`Pinyin::permalink`].
pub const PERMALINK_DELIMITERS: [&str; 4] = ["_", "-", ".", ""];

/// Full-width punctuation rewritten by [`Pinyin::sentence`].
pub const PUNCTUATIONS: [(char, char); 9] = [
    ('，', ','),
    ('。', '.'),
    ('！', '!'),
    ('？', '?'),
    ('：', ':'),
    ('“', '"'),
    ('”', '"'),
    ('‘', '\''),
    ('’', '\''),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PinyinError {
    #[error("delimiter must be one of '_', '-', '.' or '' (got {0:?})")]
    InvalidDelimiter(String),
    #[error("unknown output mode {0:?} (expected none, ascii or unicode)")]
    InvalidMode(String),
}

#[derive(Clone)]
pub struct Pinyin {
    loader: Arc<dyn DictLoader>,
}

impl Pinyin {
    pub fn new(loader: impl DictLoader + 'static) -> Self {
        Self::with_loader(Arc::new(loader))
    }

    /// Share one loader (and its cache) between several converters.
    pub fn with_loader(loader: Arc<dyn DictLoader>) -> Self {
        Self { loader }
    }

    pub fn set_loader(&mut self, loader: impl DictLoader + 'static) -> &mut Self {
        self.loader = Arc::new(loader);
        self
    }

    pub fn loader(&self) -> &dyn DictLoader {
        self.loader.as_ref()
    }

    /// Convert text to a list of pinyin words.
    pub fn convert(&self, text: &str, mode: OutputMode) -> Vec<String> {
        split_words(&romanize(self.loader(), text, false), mode)
    }

    /// Like [`convert`](Self::convert), but reads a leading surname from the
    /// surname table first.
    pub fn name(&self, text: &str, mode: OutputMode) -> Vec<String> {
        split_words(&romanize(self.loader(), text, true), mode)
    }

    /// Join plain pinyin words with one of [`PERMALINK_DELIMITERS`].
    pub fn permalink(&self, text: &str, delimiter: &str) -> Result<String, PinyinError> {
        if !PERMALINK_DELIMITERS.contains(&delimiter) {
            return Err(PinyinError::InvalidDelimiter(delimiter.to_string()));
        }
        Ok(self.convert(text, OutputMode::Plain).join(delimiter))
    }

    /// First letter of every word.
    pub fn abbr(&self, text: &str, delimiter: &str) -> String {
        self.convert(text, OutputMode::Plain)
            .iter()
            .filter_map(|word| word.chars().next())
            .map(String::from)
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    pub fn phrase(&self, text: &str, delimiter: &str, mode: OutputMode) -> String {
        self.convert(text, mode).join(delimiter)
    }

    /// Romanize a sentence, keeping its punctuation in ASCII form.
    ///
    /// Characters that are neither pinyin, whitespace, `_` nor known
    /// punctuation are dropped and whitespace runs collapse to one space.
    /// With `include_tone` the tone marks are kept; otherwise they are
    /// stripped.
    pub fn sentence(&self, text: &str, include_tone: bool) -> String {
        let _span = debug_span!("sentence", include_tone).entered();
        let romanized = romanize(self.loader(), text, false);

        let mut kept = String::with_capacity(romanized.len());
        for c in romanized.chars() {
            if let Some(ascii) = ascii_punctuation(c) {
                kept.push(ascii);
            } else if is_pinyin_char(c) || c == '_' || is_ascii_punctuation(c) {
                kept.push(c);
            } else if c.is_whitespace() {
                kept.push(' ');
            }
        }

        let sentence = kept.split_whitespace().collect::<Vec<_>>().join(" ");
        if include_tone {
            sentence
        } else {
            format(&sentence, false)
        }
    }
}

fn ascii_punctuation(c: char) -> Option<char> {
    PUNCTUATIONS
        .iter()
        .find(|&&(full, _)| full == c)
        .map(|&(_, ascii)| ascii)
}

fn is_ascii_punctuation(c: char) -> bool {
    PUNCTUATIONS.iter().any(|&(_, ascii)| ascii == c)
}
