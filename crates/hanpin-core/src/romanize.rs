//! Chinese text → diacritic pinyin.
//!
//! The input is first classified into runs: ASCII words (`[A-Za-z0-9_-]+`)
//! pass through whole, everything else stays eligible for dictionary
//! substitution. Substituted pinyin is never matched again, so a key can
//! only ever match text no earlier entry has claimed.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, debug_span};

use crate::dict::{DictLoader, DictSegment};
use crate::unicode::is_latin_word;

/// Emitted before each pinyin or ASCII piece when rendering. Tabs in the
/// input are stripped by `prepare`, so the separator cannot collide with it.
pub const SEPARATOR: char = '\t';

/// Anything outside Han, punctuation, separators, marks, digits and letters.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{Han}\p{P}\p{Z}\p{M}\p{N}\p{L}]+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Text still eligible for substitution.
    Text(String),
    /// A run of ASCII letters, digits, `_` or `-`.
    Latin(String),
    /// Dictionary output.
    Pinyin(String),
}

impl Piece {
    pub fn is_text(&self) -> bool {
        matches!(self, Piece::Text(_))
    }
}

/// Split the input into text and ASCII runs, dropping unsupported
/// characters. A dropped character always ends the current run, so it never
/// joins the words on either side of it.
pub fn prepare(input: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();

    for fragment in DISALLOWED.split(input).filter(|f| !f.is_empty()) {
        let mut run = String::new();
        let mut run_is_latin = false;
        for c in fragment.chars() {
            let latin = is_latin_word(c);
            if latin != run_is_latin && !run.is_empty() {
                pieces.push(make_run(std::mem::take(&mut run), run_is_latin));
            }
            run_is_latin = latin;
            run.push(c);
        }
        if !run.is_empty() {
            pieces.push(make_run(run, run_is_latin));
        }
    }
    pieces
}

fn make_run(run: String, latin: bool) -> Piece {
    if latin {
        Piece::Latin(run)
    } else {
        Piece::Text(run)
    }
}

/// Replace the leading surname of a name with its pinyin.
///
/// Only a prefix of the first piece is considered, and only the first
/// matching entry (in table order) is applied. Returns whether a surname
/// was replaced.
pub fn apply_surname(pieces: &mut Vec<Piece>, surnames: &DictSegment) -> bool {
    let Some(Piece::Text(first)) = pieces.first() else {
        return false;
    };
    let Some((key, value)) = surnames
        .iter()
        .find(|(key, _)| !key.is_empty() && first.starts_with(*key))
    else {
        return false;
    };

    let rest = first[key.len()..].to_string();
    pieces[0] = Piece::Pinyin(value.to_string());
    if !rest.is_empty() {
        pieces.insert(1, Piece::Text(rest));
    }
    true
}

/// Replace every non-overlapping occurrence of `key` in the text pieces,
/// scanning left to right.
pub fn substitute(pieces: &mut Vec<Piece>, key: &str, value: &str) {
    let contains = |p: &Piece| matches!(p, Piece::Text(text) if text.contains(key));
    if key.is_empty() || !pieces.iter().any(contains) {
        return;
    }

    let mut out = Vec::with_capacity(pieces.len() + 2);
    for piece in pieces.drain(..) {
        match piece {
            Piece::Text(text) if text.contains(key) => {
                let mut rest = text.as_str();
                while let Some(pos) = rest.find(key) {
                    if pos > 0 {
                        out.push(Piece::Text(rest[..pos].to_string()));
                    }
                    out.push(Piece::Pinyin(value.to_string()));
                    rest = &rest[pos + key.len()..];
                }
                if !rest.is_empty() {
                    out.push(Piece::Text(rest.to_string()));
                }
            }
            other => out.push(other),
        }
    }
    *pieces = out;
}

/// Flatten pieces back to a string, prefixing pinyin and ASCII pieces with
/// `SEPARATOR`.
pub fn render(pieces: &[Piece]) -> String {
    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Latin(word) | Piece::Pinyin(word) => {
                out.push(SEPARATOR);
                out.push_str(word);
            }
        }
    }
    out
}

/// Run the preprocessor, the surname pass (names only) and every dictionary
/// segment in order. Characters with no entry pass through untouched.
pub fn romanize_pieces(loader: &dyn DictLoader, input: &str, is_name: bool) -> Vec<Piece> {
    let mut pieces = prepare(input);
    let _span = debug_span!("romanize", is_name, pieces = pieces.len()).entered();

    if is_name {
        loader.for_each_surname(&mut |surnames| {
            if apply_surname(&mut pieces, surnames) {
                debug!("surname matched");
            }
        });
    }

    loader.for_each_segment(&mut |segment| {
        if !pieces.iter().any(Piece::is_text) {
            return;
        }
        for (key, value) in segment.iter() {
            substitute(&mut pieces, key, value);
        }
    });

    pieces
}

pub fn romanize(loader: &dyn DictLoader, input: &str, is_name: bool) -> String {
    render(&romanize_pieces(loader, input, is_name))
}
