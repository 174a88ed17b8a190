use std::path::{Path, PathBuf};

use super::{read_optional, DictLayout, DictLoader, DictSegment};

/// Reads segment files from disk on every enumeration.
///
/// Nothing is cached, so edits to the dictionary directory are picked up by
/// the next conversion.
pub struct FileDictLoader {
    dir: PathBuf,
    layout: DictLayout,
}

impl FileDictLoader {
    /// Use the file layout from the global settings.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_layout(dir, DictLayout::default())
    }

    pub fn with_layout(dir: impl Into<PathBuf>, layout: DictLayout) -> Self {
        Self {
            dir: dir.into(),
            layout,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DictLoader for FileDictLoader {
    fn for_each_segment(&self, f: &mut dyn FnMut(&DictSegment)) {
        for path in self.layout.segment_paths(&self.dir) {
            if let Some(segment) = read_optional(&path) {
                f(&segment);
            }
        }
    }

    fn for_each_surname(&self, f: &mut dyn FnMut(&DictSegment)) {
        if let Some(surnames) = read_optional(&self.layout.surname_path(&self.dir)) {
            f(&surnames);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::dict::DictStats;

    fn layout() -> DictLayout {
        DictLayout {
            segment_pattern: "words_{}.txt".to_string(),
            max_segments: 5,
            surname_file: "surnames.txt".to_string(),
        }
    }

    #[test]
    fn enumerates_present_segments_in_index_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words_3.txt"), "国:guó\n").unwrap();
        fs::write(dir.path().join("words_0.txt"), "中国:zhōng guó\n中:zhōng\n").unwrap();
        // beyond max_segments
        fs::write(dir.path().join("words_9.txt"), "你:nǐ\n").unwrap();

        let loader = FileDictLoader::with_layout(dir.path(), layout());
        let mut seen = Vec::new();
        loader.for_each_segment(&mut |segment| {
            seen.push(segment.iter().map(|(k, _)| k.to_string()).collect::<Vec<_>>());
        });
        assert_eq!(seen, [vec!["中国", "中"], vec!["国"]]);
    }

    #[test]
    fn rereads_on_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FileDictLoader::with_layout(dir.path(), layout());
        assert_eq!(loader.stats(), DictStats::default());

        fs::write(dir.path().join("words_1.txt"), "好:hǎo\n").unwrap();
        fs::write(dir.path().join("surnames.txt"), "张:zhāng\n曾:zēng\n").unwrap();
        assert_eq!(
            loader.stats(),
            DictStats {
                segments: 1,
                entries: 1,
                surnames: 2,
            }
        );
    }

    #[test]
    fn missing_surname_file_skips_callback() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FileDictLoader::with_layout(dir.path(), layout());
        let mut called = false;
        loader.for_each_surname(&mut |_| called = true);
        assert!(!called);
    }

    #[test]
    fn unreadable_segment_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words_0.txt"), [0xff, 0xfe, b':', b'x']).unwrap();
        fs::write(dir.path().join("words_1.txt"), "好:hǎo\n").unwrap();
        let loader = FileDictLoader::with_layout(dir.path(), layout());
        let stats = loader.stats();
        assert_eq!(stats.segments, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn default_layout_uses_settings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words_42.txt"), "好:hǎo\n").unwrap();
        let loader = FileDictLoader::new(dir.path());
        assert_eq!(loader.dir(), dir.path());
        assert_eq!(loader.stats().entries, 1);
    }
}
