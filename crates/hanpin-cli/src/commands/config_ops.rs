use std::fs;

pub fn settings_export() {
    print!("{}", hanpin_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        hanpin_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: dictionary.segment_pattern={}, dictionary.max_segments={}, output.mode={}",
        s.dictionary.segment_pattern, s.dictionary.max_segments, s.output.mode
    );
}

/// Install a custom settings file; must run before anything reads settings.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        hanpin_core::settings::init_custom(content),
        "Error loading settings: {}"
    );
}
