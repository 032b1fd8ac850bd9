//! Per-problem typing session.
//!
//! `TypingSession` tokenizes one kana problem once and then judges each
//! keystroke against the token variants: accepted while some romanization
//! still starts with the input, completed on an exact match, rejected
//! otherwise. The romanizations themselves are never enumerated.

mod key_handlers;
mod types;

#[cfg(test)]
mod tests;

use kana_core::romaji::{PrefixMatcher, RomajiTable};

pub use types::{KeyResponse, KeystrokeStats, SessionConfig};

pub struct TypingSession {
    matcher: PrefixMatcher,
    config: SessionConfig,
    input: String,
    target: String,
    stats: KeystrokeStats,
    finished: bool,
}

impl TypingSession {
    /// Session over the global romaji table and settings.
    pub fn new(kana: &str) -> Self {
        Self::with_table(RomajiTable::global(), kana, SessionConfig::default())
    }

    pub fn with_table(table: &RomajiTable, kana: &str, config: SessionConfig) -> Self {
        let matcher = PrefixMatcher::new(table, kana);
        // Only the empty problem has "" among its romanizations.
        let finished = matcher.is_complete("");
        let target = matcher.target("");
        Self {
            matcher,
            config,
            input: String::new(),
            target,
            stats: KeystrokeStats::default(),
            finished,
        }
    }

    pub fn kana(&self) -> &str {
        self.matcher.kana()
    }

    /// Romaji typed so far. Always a prefix of some romanization.
    pub fn typed(&self) -> &str {
        &self.input
    }

    /// Romanization to highlight: the first one matching the typed input.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Untyped tail of `target()`.
    pub fn remaining(&self) -> &str {
        self.target
            .strip_prefix(self.input.as_str())
            .unwrap_or(self.target.as_str())
    }

    /// Romanizations still reachable from the typed input, at most
    /// `max_results` of them.
    pub fn acceptable(&self) -> Vec<String> {
        self.matcher.matching(&self.input, self.config.max_results)
    }

    pub fn is_complete(&self) -> bool {
        self.finished
    }

    pub fn stats(&self) -> KeystrokeStats {
        self.stats
    }
}
