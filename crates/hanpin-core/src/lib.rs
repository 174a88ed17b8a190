//! Dictionary-driven Chinese → pinyin romanization.
//!
//! ```no_run
//! use hanpin_core::{MemoryDictLoader, OutputMode, Pinyin};
//!
//! let pinyin = Pinyin::new(MemoryDictLoader::open("data".as_ref()));
//! let words = pinyin.convert("你好", OutputMode::Ascii); // ["ni3", "hao3"]
//! let slug = pinyin.permalink("你好", "-")?; // "ni-hao"
//! # Ok::<(), hanpin_core::PinyinError>(())
//! ```

pub mod dict;
pub mod pinyin;
pub mod romanize;
pub mod settings;
pub mod split;
#[cfg(test)]
mod testutil;
pub mod tone;
pub mod unicode;

pub use dict::{DictLoader, DictSegment, FileDictLoader, MemoryDictLoader};
pub use pinyin::{Pinyin, PinyinError};
pub use split::OutputMode;
