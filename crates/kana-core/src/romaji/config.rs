use std::collections::BTreeMap;

use serde::Deserialize;

use super::table::MAX_UNIT_LEN;

#[derive(Deserialize)]
struct RomajiConfig {
    mappings: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key must be 1 to 3 characters: {0:?}")]
    KeyLength(String),
    #[error("ASCII in kana key: {0}")]
    AsciiKey(String),
    #[error("no variants for key: {0}")]
    NoVariants(String),
    #[error("empty variant for key: {0}")]
    EmptyVariant(String),
    #[error("non-ASCII variant {variant:?} for key: {key}")]
    NonAsciiVariant { key: String, variant: String },
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a `BTreeMap<kana, variants>`.
///
/// Variant order is kept as written: the first variant is the preferred one.
pub fn parse_romaji_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, Vec<String>>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (key, variants) in &config.mappings {
        let len = key.chars().count();
        if len == 0 || len > MAX_UNIT_LEN {
            return Err(RomajiConfigError::KeyLength(key.clone()));
        }
        if key.chars().any(|c| c.is_ascii()) {
            return Err(RomajiConfigError::AsciiKey(key.clone()));
        }
        if variants.is_empty() {
            return Err(RomajiConfigError::NoVariants(key.clone()));
        }
        for variant in variants {
            if variant.is_empty() {
                return Err(RomajiConfigError::EmptyVariant(key.clone()));
            }
            if !variant.is_ascii() {
                return Err(RomajiConfigError::NonAsciiVariant {
                    key: key.clone(),
                    variant: variant.clone(),
                });
            }
        }
    }

    Ok(config.mappings)
}
