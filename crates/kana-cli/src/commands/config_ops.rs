use std::fs;

use kana_engine::romaji::{self, RomajiTable};
use kana_engine::settings;

pub fn romaji_export() {
    print!("{}", romaji::default_toml());
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(RomajiTable::from_toml(&content), "Error: {}");
    println!(
        "OK: {} mappings, geminate fallback = {}",
        table.len(),
        table.geminate_spellings().join(" | ")
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: enumeration.max_results={}, input.case_insensitive={}",
        s.enumeration.max_results, s.input.case_insensitive
    );
}

/// Install custom romaji/settings TOML files before the globals are first used.
pub fn load_overrides(romaji_file: Option<&str>, settings_file: Option<&str>) {
    if let Some(file) = romaji_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(RomajiTable::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
}
