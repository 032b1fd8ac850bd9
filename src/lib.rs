//! Kana typing engine.
//!
//! The two functions below are the whole boundary a typing UI needs: enumerate
//! the romanizations of a problem once, then filter them by what has been
//! typed. `TypingSession` wraps the same contract in a per-keystroke state
//! machine.

mod trace_init;

pub use kana_core::romaji::{Candidates, PrefixMatcher, RomajiTable, Token, TokenKind};
pub use kana_core::{romaji, settings, unicode};
pub use kana_session::{KeyResponse, KeystrokeStats, SessionConfig, TypingSession};
pub use trace_init::init_tracing;

/// Every valid romanization of `kana`, using the global table.
pub fn convert(kana: &str) -> Vec<String> {
    RomajiTable::global().convert(kana)
}

/// The members of `convert(kana)` that start with `partial`, in order.
pub fn acceptable_prefixes(kana: &str, partial: &str) -> Vec<String> {
    romaji::acceptable_prefixes(RomajiTable::global(), kana, partial)
}
