use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::debug;

use super::{read_optional, DictLayout, DictLoader, DictSegment};

/// Keeps word segments in memory after a single load.
///
/// Segments are read when the loader is built. The surname file is read on
/// the first `for_each_surname` call and cached from then on.
pub struct MemoryDictLoader {
    segments: Vec<DictSegment>,
    surnames: OnceLock<DictSegment>,
    surname_path: Option<PathBuf>,
}

impl MemoryDictLoader {
    /// Load from `dir` using the file layout from the global settings.
    pub fn open(dir: &Path) -> Self {
        Self::with_layout(dir, &DictLayout::default())
    }

    pub fn with_layout(dir: &Path, layout: &DictLayout) -> Self {
        let segments: Vec<DictSegment> = layout
            .segment_paths(dir)
            .filter_map(|path| read_optional(&path))
            .collect();
        debug!(
            dir = %dir.display(),
            segments = segments.len(),
            "dictionary segments cached"
        );
        Self {
            segments,
            surnames: OnceLock::new(),
            surname_path: Some(layout.surname_path(dir)),
        }
    }

    /// Build from segments already in memory.
    pub fn from_segments(segments: Vec<DictSegment>, surnames: DictSegment) -> Self {
        Self {
            segments,
            surnames: OnceLock::from(surnames),
            surname_path: None,
        }
    }

    fn surnames(&self) -> &DictSegment {
        self.surnames.get_or_init(|| {
            self.surname_path
                .as_deref()
                .and_then(read_optional)
                .unwrap_or_default()
        })
    }
}

impl DictLoader for MemoryDictLoader {
    fn for_each_segment(&self, f: &mut dyn FnMut(&DictSegment)) {
        for segment in &self.segments {
            f(segment);
        }
    }

    fn for_each_surname(&self, f: &mut dyn FnMut(&DictSegment)) {
        f(self.surnames());
    }
}
