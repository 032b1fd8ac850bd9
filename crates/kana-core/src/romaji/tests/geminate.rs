use super::super::{RomajiTable, TokenKind};
use super::convert;

#[test]
fn doubles_following_consonant() {
    assert_eq!(convert("っか"), ["kka"]);
    assert_eq!(convert("がっこう"), ["gakkou"]);
    assert!(convert("がっこう").iter().all(|r| r.contains("kk")));
}

#[test]
fn doubles_every_distinct_consonant() {
    assert_eq!(convert("っち"), ["tti", "tchi", "cti", "cchi"]);
    assert_eq!(convert("っし"), ["ssi", "sshi"]);
}

#[test]
fn looks_ahead_two_characters_first() {
    assert_eq!(convert("っしゃ"), ["ssya", "ssha"]);
    assert_eq!(convert("っちゃ"), ["ttya", "tcha", "ctya", "ccha"]);
}

#[test]
fn falls_back_before_vowel() {
    assert_eq!(convert("っあ"), ["ltua", "xtua", "ltsua"]);
}

#[test]
fn falls_back_before_nasal_and_n_row() {
    assert_eq!(
        convert("っん"),
        ["ltunn", "ltun", "xtunn", "xtun", "ltsunn", "ltsun"]
    );
    assert_eq!(convert("っな"), ["ltuna", "xtuna", "ltsuna"]);
}

#[test]
fn falls_back_before_prolongation_and_unknown() {
    assert_eq!(convert("っー"), ["ltu-", "xtu-", "ltsu-"]);
    assert_eq!(convert("っ字"), ["ltu字", "xtu字", "ltsu字"]);
    assert_eq!(convert("っ。"), ["ltu.", "xtu.", "ltsu."]);
}

#[test]
fn trailing_mark_passes_through() {
    assert_eq!(convert("っ"), ["っ"]);
    assert_eq!(convert("あっ"), ["aっ"]);
    let tokens = RomajiTable::global().tokenize("あっ");
    assert_eq!(tokens[1].kind, TokenKind::Literal);
    assert_eq!(tokens[1].variants, ["っ"]);
}

#[test]
fn mark_consumes_only_itself() {
    let tokens = RomajiTable::global().tokenize("まって");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Geminate);
    assert_eq!((tokens[1].start, tokens[1].end), (1, 2));
    assert_eq!(tokens[1].variants, ["t"]);
    assert_eq!(tokens[2].unit, "て");
    assert_eq!(convert("まって"), ["matte"]);
}

#[test]
fn consecutive_marks() {
    // The first mark looks at the second, whose spellings start with l/x.
    assert_eq!(convert("っっか"), ["lkka", "xkka"]);
}

#[test]
fn custom_table_without_mark_entry_uses_builtin_spellings() {
    let table = RomajiTable::from_toml(
        r#"
[mappings]
"あ" = ["a"]
"#,
    )
    .unwrap();
    assert_eq!(table.convert("っあ"), ["ltua", "xtua", "ltsua"]);
    assert_eq!(table.convert("っ"), ["っ"]);
}
