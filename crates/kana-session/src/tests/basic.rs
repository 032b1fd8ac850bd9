use kana_core::romaji::RomajiTable;

use super::*;
use crate::KeystrokeStats;

// --- Acceptance ---

#[test]
fn test_type_full_word() {
    let mut s = session("がっこう");
    let responses = type_string(&mut s, "gakkou");
    assert_eq!(
        responses,
        [
            KeyResponse::Accepted,
            KeyResponse::Accepted,
            KeyResponse::Accepted,
            KeyResponse::Accepted,
            KeyResponse::Accepted,
            KeyResponse::Completed,
        ]
    );
    assert!(s.is_complete());
    assert_eq!(s.typed(), "gakkou");
    assert_eq!(s.remaining(), "");
}

#[test]
fn test_alternate_spelling_accepted() {
    let mut s = session("しゃしん");
    assert_eq!(s.target(), "syasinn");
    type_string(&mut s, "sh");
    assert_eq!(s.target(), "shasinn");
    assert_eq!(s.remaining(), "asinn");
    assert_eq!(s.handle_str("ashin"), KeyResponse::Completed);
    assert_eq!(s.typed(), "shashin");
}

#[test]
fn test_single_n_completes_final_nasal() {
    let mut s = session("ほん");
    assert_eq!(s.handle_str("hon"), KeyResponse::Completed);
}

#[test]
fn test_single_n_mid_word() {
    let mut s = session("かんじ");
    assert_eq!(s.handle_str("kanji"), KeyResponse::Completed);
    let mut s = session("かんじ");
    assert_eq!(s.handle_str("kannzi"), KeyResponse::Completed);
}

#[test]
fn test_acceptable_narrows() {
    let mut s = session("ふじ");
    assert_eq!(s.acceptable().len(), 4);
    s.handle_char('f');
    assert_eq!(s.acceptable(), ["fuzi", "fuji"]);
}

// --- Rejection ---

#[test]
fn test_wrong_key_rejected_and_input_kept() {
    let mut s = session("かさ");
    assert_eq!(s.handle_char('k'), KeyResponse::Accepted);
    assert_eq!(s.handle_char('x'), KeyResponse::Rejected);
    assert_eq!(s.typed(), "k");
    assert_eq!(s.target(), "kasa");
    assert_eq!(s.handle_char('a'), KeyResponse::Accepted);
    assert_eq!(
        s.stats(),
        KeystrokeStats {
            total: 3,
            correct: 2,
            mistypes: 1,
        }
    );
}

#[test]
fn test_case_folding() {
    let mut s = session("かさ");
    assert_eq!(s.handle_str("KASA"), KeyResponse::Completed);
}

#[test]
fn test_case_folding_is_ascii_only() {
    let mut s = session("かさ");
    // Fullwidth letters are not folded and never match an ASCII variant.
    assert_eq!(s.handle_char('Ｋ'), KeyResponse::Rejected);
    assert_eq!(s.handle_char('K'), KeyResponse::Accepted);
    assert_eq!(s.typed(), "k");
}

#[test]
fn test_case_sensitive_config() {
    let config = SessionConfig {
        max_results: 16,
        case_insensitive: false,
    };
    let mut s = TypingSession::with_table(RomajiTable::global(), "かさ", config);
    assert_eq!(s.handle_char('K'), KeyResponse::Rejected);
    assert_eq!(s.handle_char('k'), KeyResponse::Accepted);
}

// --- Completion ---

#[test]
fn test_keys_after_completion_ignored() {
    let mut s = session("あ");
    assert_eq!(s.handle_char('a'), KeyResponse::Completed);
    assert_eq!(s.handle_char('a'), KeyResponse::Ignored);
    assert!(!s.backspace());
    assert_eq!(s.stats().total, 1);
}

#[test]
fn test_empty_problem_is_complete() {
    let mut s = session("");
    assert!(s.is_complete());
    assert_eq!(s.target(), "");
    assert_eq!(s.handle_char('a'), KeyResponse::Ignored);
    assert_eq!(s.handle_str(""), KeyResponse::Ignored);
}

#[test]
fn test_unknown_characters_typed_literally() {
    let mut s = session("a字");
    assert_eq!(s.handle_char('a'), KeyResponse::Accepted);
    assert_eq!(s.handle_char('字'), KeyResponse::Completed);
}

// --- Backspace ---

#[test]
fn test_backspace_removes_last_char() {
    let mut s = session("ちず");
    type_string(&mut s, "chi");
    assert!(s.backspace());
    assert_eq!(s.typed(), "ch");
    assert_eq!(s.handle_str("izu"), KeyResponse::Completed);
}

#[test]
fn test_backspace_on_empty_input() {
    let mut s = session("ちず");
    assert!(!s.backspace());
    assert_eq!(s.typed(), "");
}

#[test]
fn test_backspace_not_counted() {
    let mut s = session("ちず");
    type_string(&mut s, "ti");
    s.backspace();
    assert_eq!(s.stats().total, 2);
}

// --- Misc ---

#[test]
fn test_response_is_correct() {
    assert!(KeyResponse::Accepted.is_correct());
    assert!(KeyResponse::Completed.is_correct());
    assert!(!KeyResponse::Rejected.is_correct());
    assert!(!KeyResponse::Ignored.is_correct());
}

#[test]
fn test_new_uses_global_defaults() {
    let s = TypingSession::new("きょう");
    assert_eq!(s.kana(), "きょう");
    assert_eq!(s.target(), "kyou");
}

#[test]
fn test_result_cap_only_limits_listing() {
    let config = SessionConfig {
        max_results: 1,
        case_insensitive: true,
    };
    let mut s = TypingSession::with_table(RomajiTable::global(), "しち", config);
    assert_eq!(s.acceptable(), ["siti"]);
    assert_eq!(s.handle_char('s'), KeyResponse::Accepted);
    assert_eq!(s.handle_char('h'), KeyResponse::Accepted);
    assert_eq!(s.acceptable(), ["shiti"]);
    assert_eq!(s.handle_str("ichi"), KeyResponse::Completed);
}

#[test]
fn test_late_spelling_of_long_phrase_accepted() {
    // Sixteen two-way morae: the Hepburn "sh" of the first mora is far past
    // the first 4096 romanizations in enumeration order.
    let kana = "しんじつはつねにしんじることからしかしょうめいできないちしきをしんじつと";
    let mut s = session(kana);
    assert_eq!(s.handle_char('s'), KeyResponse::Accepted);
    assert_eq!(s.handle_char('h'), KeyResponse::Accepted);
    assert!(s.target().starts_with("sh"));
    assert_eq!(s.handle_str("injitsu"), KeyResponse::Accepted);
    assert_eq!(s.typed(), "shinjitsu");
    assert_eq!(s.stats().mistypes, 0);
    assert!(s.acceptable().iter().all(|r| r.starts_with("shinjitsu")));
}

#[test]
fn test_backspace_moves_target_back() {
    let mut s = session("しゃしん");
    type_string(&mut s, "sh");
    assert_eq!(s.target(), "shasinn");
    assert!(s.backspace());
    assert_eq!(s.target(), "syasinn");
    assert_eq!(s.remaining(), "yasinn");
}
