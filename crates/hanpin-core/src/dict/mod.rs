//! Dictionary providers.
//!
//! A `DictLoader` hands the romanizer its word segments (in enumeration
//! order) and its surname table. `FileDictLoader` re-reads the segment files
//! on every call; `MemoryDictLoader` keeps them in memory.

mod file;
mod memory;
mod segment;

pub use file::FileDictLoader;
pub use memory::MemoryDictLoader;
pub use segment::DictSegment;

pub use crate::settings::DictLayout;

use std::io;
use std::path::Path;

use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Segment and entry counts reported by a loader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictStats {
    pub segments: usize,
    pub entries: usize,
    pub surnames: usize,
}

pub trait DictLoader: Send + Sync {
    /// Call `f` once per word segment, in enumeration order.
    fn for_each_segment(&self, f: &mut dyn FnMut(&DictSegment));

    /// Call `f` with the surname table. Compound surnames must precede
    /// any shorter surname they start with.
    fn for_each_surname(&self, f: &mut dyn FnMut(&DictSegment));

    /// Count segments and entries by walking both enumerations.
    fn stats(&self) -> DictStats {
        let mut stats = DictStats::default();
        self.for_each_segment(&mut |segment| {
            stats.segments += 1;
            stats.entries += segment.len();
        });
        self.for_each_surname(&mut |surnames| stats.surnames += surnames.len());
        stats
    }
}

/// Read a dictionary file, treating a missing or unreadable file as absent.
pub(crate) fn read_optional(path: &Path) -> Option<DictSegment> {
    if !path.is_file() {
        debug!(path = %path.display(), "segment absent");
        return None;
    }
    match DictSegment::read(path) {
        Ok(segment) => {
            debug!(path = %path.display(), entries = segment.len(), "segment loaded");
            Some(segment)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping unreadable segment");
            None
        }
    }
}
