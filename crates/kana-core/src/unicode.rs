//! Character-level Unicode classification for Japanese text.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Convert katakana to hiragana.
///
/// Only ァ..ヶ (U+30A1..U+30F6) have hiragana counterparts. Everything else,
/// including ー, full-width punctuation and ASCII, is passed through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// True when every character is kana (either script) or Japanese
/// punctuation that the default table knows about.
pub fn is_kana_text(s: &str) -> bool {
    s.chars()
        .all(|c| is_hiragana(c) || is_katakana(c) || matches!(c, '、' | '。' | '！' | '？'))
}
