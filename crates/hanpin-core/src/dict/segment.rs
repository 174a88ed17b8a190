use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use super::DictError;
use crate::unicode::is_dict_key;

/// One dictionary segment: an insertion-ordered `key → pinyin` table.
///
/// Keys are unique; inserting an existing key keeps the first value.
#[derive(Debug, Clone, Default)]
pub struct DictSegment {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl DictSegment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut segment = Self::new();
        for (key, value) in entries {
            segment.insert(key, value);
        }
        segment
    }

    /// Parse `key:value` lines. Blank lines are ignored; malformed lines and
    /// duplicate keys are logged and skipped.
    pub fn parse(text: &str) -> Self {
        let mut segment = Self::new();
        for (n, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Ok((key, value)) => {
                    if !segment.insert(key, value) {
                        warn!(line = n + 1, key, "duplicate key, keeping first");
                    }
                }
                Err(e) => warn!(line = n + 1, error = %e, "skipping dictionary line"),
            }
        }
        segment
    }

    pub fn read(path: &Path) -> Result<Self, DictError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Append an entry. Returns `false` if the key was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value.into()));
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for DictSegment {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for DictSegment {}

fn parse_line(line: &str) -> Result<(&str, &str), DictError> {
    let (key, value) = line
        .split_once(':')
        .ok_or_else(|| DictError::Parse(format!("missing ':' in {line:?}")))?;
    if !is_dict_key(key) {
        return Err(DictError::Parse(format!("invalid key in {line:?}")));
    }
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_file_order() {
        let segment = DictSegment::parse("中国:zhōng guó\n中:zhōng\n国:guó\n");
        let keys: Vec<&str> = segment.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["中国", "中", "国"]);
        assert_eq!(segment.get("国"), Some("guó"));
        assert_eq!(segment.len(), 3);
    }

    #[test]
    fn parse_skips_blank_and_malformed_lines() {
        let segment = DictSegment::parse("你:nǐ\r\n\nbroken line\n:empty\n好:hǎo");
        assert_eq!(segment.len(), 2);
        assert_eq!(segment.get("你"), Some("nǐ"));
        assert_eq!(segment.get("好"), Some("hǎo"));
    }

    #[test]
    fn parse_splits_at_first_colon() {
        let segment = DictSegment::parse("比:bǐ:x");
        assert_eq!(segment.get("比"), Some("bǐ:x"));
    }

    #[test]
    fn duplicate_key_keeps_first() {
        let mut segment = DictSegment::from_entries([("长", "cháng")]);
        assert!(!segment.insert("长", "zhǎng"));
        assert_eq!(segment.get("长"), Some("cháng"));
        assert_eq!(segment.len(), 1);
    }

    #[test]
    fn parse_line_errors() {
        assert!(matches!(parse_line("abc"), Err(DictError::Parse(_))));
        assert!(matches!(parse_line(":x"), Err(DictError::Parse(_))));
        assert!(matches!(parse_line("中 国:x"), Err(DictError::Parse(_))));
        assert_eq!(parse_line("中:zhōng").unwrap(), ("中", "zhōng"));
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DictSegment::read(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, DictError::Io(_)));
    }
}
