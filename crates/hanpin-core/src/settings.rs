//! Process-wide defaults read from TOML.
//!
//! The embedded `default_settings.toml` describes where dictionary files
//! live (`[dictionary]`) and which delimiters and output mode the CLI uses
//! when none is given (`[output]`). A replacement file can be installed once
//! with `init_custom`; it has to happen before the first `settings()` call,
//! which freezes whichever TOML is current. Conversions never read these
//! values implicitly and always take their options as arguments.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::pinyin::PERMALINK_DELIMITERS;
use crate::split::OutputMode;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Validate `toml_content` and install it in place of the embedded defaults.
/// Fails once settings have been read or a custom file was already set.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if SETTINGS.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Settings in effect: the custom TOML if one was installed, otherwise the
/// embedded defaults.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings validated by build.rs or init_custom")
    })
}

/// The embedded defaults, as printed by `pinyintool settings-export`.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("malformed settings TOML: {0}")]
    Parse(String),
    #[error("bad {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("custom settings must be installed before settings are first read")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub dictionary: DictLayout,
    pub output: OutputSettings,
}

/// Where a file-backed loader finds its segments and surnames.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictLayout {
    pub segment_pattern: String,
    pub max_segments: usize,
    pub surname_file: String,
}

impl DictLayout {
    pub fn segment_file_name(&self, index: usize) -> String {
        self.segment_pattern.replace("{}", &index.to_string())
    }

    /// Candidate segment paths under `dir`, in enumeration order.
    pub fn segment_paths<'a>(&'a self, dir: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        (0..self.max_segments).map(move |i| dir.join(self.segment_file_name(i)))
    }

    pub fn surname_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.surname_file)
    }
}

impl Default for DictLayout {
    fn default() -> Self {
        settings().dictionary.clone()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub mode: OutputMode,
    pub permalink_delimiter: String,
    pub phrase_delimiter: String,
    pub abbr_delimiter: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    fn invalid(field: &str, reason: &str) -> SettingsError {
        SettingsError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    if s.dictionary.max_segments == 0 {
        return Err(invalid("dictionary.max_segments", "must be positive"));
    }
    if !s.dictionary.segment_pattern.contains("{}") {
        return Err(invalid(
            "dictionary.segment_pattern",
            "must contain a {} index placeholder",
        ));
    }
    if s.dictionary.surname_file.is_empty() {
        return Err(invalid("dictionary.surname_file", "must not be empty"));
    }
    if !PERMALINK_DELIMITERS.contains(&s.output.permalink_delimiter.as_str()) {
        return Err(invalid(
            "output.permalink_delimiter",
            "must be one of \"_\", \"-\", \".\" or \"\"",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOM: &str = r#"
[dictionary]
segment_pattern = "dict-{}.txt"
max_segments = 3
surname_file = "names.txt"

[output]
mode = "ascii"
permalink_delimiter = "_"
phrase_delimiter = "/"
abbr_delimiter = "."
"#;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.dictionary.segment_pattern, "words_{}.txt");
        assert_eq!(s.dictionary.max_segments, 100);
        assert_eq!(s.dictionary.surname_file, "surnames.txt");
        assert_eq!(s.output.mode, OutputMode::Plain);
        assert_eq!(s.output.permalink_delimiter, "-");
        assert_eq!(s.output.phrase_delimiter, " ");
        assert_eq!(s.output.abbr_delimiter, "");
    }

    #[test]
    fn custom_after_first_read_is_rejected() {
        let before = settings().dictionary.clone();
        assert!(matches!(
            init_custom(CUSTOM.to_string()),
            Err(SettingsError::AlreadyInitialized)
        ));
        assert_eq!(settings().dictionary, before);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let s = parse_settings_toml(CUSTOM).unwrap();
        assert_eq!(s.dictionary.max_segments, 3);
        assert_eq!(s.output.mode, OutputMode::Ascii);
        assert_eq!(s.output.permalink_delimiter, "_");
    }

    #[test]
    fn layout_paths() {
        let s = parse_settings_toml(CUSTOM).unwrap();
        let dir = Path::new("/data");
        let paths: Vec<PathBuf> = s.dictionary.segment_paths(dir).collect();
        assert_eq!(
            paths,
            [
                dir.join("dict-0.txt"),
                dir.join("dict-1.txt"),
                dir.join("dict-2.txt")
            ]
        );
        assert_eq!(s.dictionary.surname_path(dir), dir.join("names.txt"));
    }

    #[test]
    fn default_layout_matches_embedded_settings() {
        let layout = DictLayout::default();
        assert_eq!(layout.segment_file_name(7), "words_7.txt");
    }

    #[test]
    fn error_zero_segments() {
        let toml = CUSTOM.replace("max_segments = 3", "max_segments = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("dictionary.max_segments"));
    }

    #[test]
    fn error_pattern_without_placeholder() {
        let toml = CUSTOM.replace("dict-{}.txt", "dict.txt");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("dictionary.segment_pattern"));
    }

    #[test]
    fn error_bad_permalink_delimiter() {
        let toml = CUSTOM.replace(r#"permalink_delimiter = "_""#, r#"permalink_delimiter = "+""#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("output.permalink_delimiter"));
    }

    #[test]
    fn error_unknown_mode() {
        let toml = CUSTOM.replace(r#"mode = "ascii""#, r#"mode = "pinyin""#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[dictionary]
segment_pattern = "words_{}.txt"
max_segments = 100
surname_file = "surnames.txt"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
