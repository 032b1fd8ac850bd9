use kana_engine::romaji::explain;
use kana_engine::unicode::{is_kana_text, katakana_to_hiragana};
use kana_engine::{RomajiTable, TypingSession};

/// Apply the optional katakana fold and warn about pass-through characters.
pub fn prepare_kana(kana: &str, katakana: bool) -> String {
    let kana = if katakana {
        katakana_to_hiragana(kana)
    } else {
        kana.to_string()
    };
    if !is_kana_text(&kana) {
        eprintln!("note: non-kana characters in {kana:?} are kept literally");
    }
    kana
}

pub fn convert_cmd(kana: &str, katakana: bool, limit: Option<usize>) {
    let kana = prepare_kana(kana, katakana);
    let table = RomajiTable::global();
    let results = match limit {
        Some(n) => table.convert_bounded(&kana, n),
        None => table.convert(&kana),
    };
    for (i, r) in results.iter().enumerate() {
        println!("#{:>3}: {}", i + 1, r);
    }
}

/// Replay `keys` through a typing session and report each keystroke.
pub fn accept_cmd(kana: &str, keys: &str, katakana: bool) {
    let kana = prepare_kana(kana, katakana);
    let mut session = TypingSession::new(&kana);
    for key in keys.chars() {
        let resp = session.handle_char(key);
        println!("  {key} -> {resp:?}");
    }

    let stats = session.stats();
    println!("typed:     {}", session.typed());
    println!("target:    {}", session.target());
    println!("remaining: {}", session.remaining());
    println!("complete:  {}", session.is_complete());
    println!(
        "keys:      {} total, {} correct, {} mistyped",
        stats.total, stats.correct, stats.mistypes
    );
    let acceptable = session.acceptable();
    println!("acceptable ({}):", acceptable.len());
    for r in acceptable {
        println!("  {r}");
    }
}

pub fn explain_cmd(kana: &str, katakana: bool, n: usize, json: bool) {
    let kana = prepare_kana(kana, katakana);
    let result = explain::explain(RomajiTable::global(), &kana, n);
    if json {
        let out = die!(serde_json::to_string_pretty(&result), "JSON serialization failed: {}");
        println!("{out}");
    } else {
        print!("{}", explain::format_text(&result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_kana_folds_katakana_on_request() {
        assert_eq!(prepare_kana("ネコ", true), "ねこ");
        assert_eq!(prepare_kana("ネコ", false), "ネコ");
        assert_eq!(prepare_kana("ねこ", true), "ねこ");
    }
}
