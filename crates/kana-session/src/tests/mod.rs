mod basic;

use kana_core::romaji::RomajiTable;

use super::{KeyResponse, SessionConfig, TypingSession};

pub(super) fn session(kana: &str) -> TypingSession {
    let config = SessionConfig {
        max_results: 4096,
        case_insensitive: true,
    };
    TypingSession::with_table(RomajiTable::global(), kana, config)
}

pub(super) fn type_string(session: &mut TypingSession, keys: &str) -> Vec<KeyResponse> {
    keys.chars().map(|c| session.handle_char(c)).collect()
}
