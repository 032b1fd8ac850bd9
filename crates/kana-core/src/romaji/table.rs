use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::config::{parse_romaji_toml, RomajiConfigError};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

/// Longest kana unit the table may hold, in characters.
pub const MAX_UNIT_LEN: usize = 3;

/// Small tsu. Doubles the first consonant of the following mora.
pub const GEMINATE_MARK: char = 'っ';

/// Used when a custom table has no entry for the geminate mark.
const GEMINATE_SPELLINGS: [&str; 3] = ["ltu", "xtu", "ltsu"];

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default romaji TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Immutable kana unit -> romaji variants lookup.
#[derive(Debug, Clone)]
pub struct RomajiTable {
    map: HashMap<String, Vec<String>>,
    geminate_spellings: Vec<String>,
}

impl RomajiTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomajiTable {
        static INSTANCE: OnceLock<RomajiTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            RomajiTable::from_toml(toml_str).expect("romaji TOML must be valid")
        })
    }

    /// Build a standalone table from TOML, independent of the global one.
    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        parse_romaji_toml(toml_str).map(Self::from_mappings)
    }

    pub fn from_mappings(mappings: BTreeMap<String, Vec<String>>) -> Self {
        let map: HashMap<String, Vec<String>> = mappings.into_iter().collect();
        let geminate_spellings = map
            .get(&GEMINATE_MARK.to_string())
            .cloned()
            .unwrap_or_else(|| GEMINATE_SPELLINGS.iter().map(|s| s.to_string()).collect());
        Self {
            map,
            geminate_spellings,
        }
    }

    /// Variants for an exact kana unit, preferred spelling first.
    pub fn get(&self, unit: &str) -> Option<&[String]> {
        self.map.get(unit).map(Vec::as_slice)
    }

    /// Spellings for a geminate mark that cannot double the next consonant.
    pub fn geminate_spellings(&self) -> &[String] {
        &self.geminate_spellings
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
