//! Kana-to-romaji enumeration engine.
//!
//! A TOML-backed table maps kana units (1 to 3 characters) to every accepted
//! spelling. `RomajiTable::convert` tokenizes a kana string longest-match first
//! and expands the token variants into the full ordered set of romanizations,
//! doubling the next consonant for the geminate mark (っ).

mod candidates;
mod config;
mod convert;
pub mod explain;
mod matcher;
mod table;

#[cfg(test)]
mod tests;

pub use candidates::{acceptable_prefixes, Candidates};
pub use config::{parse_romaji_toml, RomajiConfigError};
pub use convert::{Token, TokenKind};
pub use matcher::PrefixMatcher;
pub use table::{default_toml, RomajiTable, GEMINATE_MARK, MAX_UNIT_LEN};
