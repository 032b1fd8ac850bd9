//! Human- and machine-readable breakdown of how a kana string is tokenized.

use serde::Serialize;

use super::convert::{Token, TokenKind};
use super::table::RomajiTable;

#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub kana: String,
    pub char_count: usize,
    pub tokens: Vec<Token>,
    /// Size of the full result set (saturating).
    pub result_count: usize,
    /// Leading romanizations, at most the requested number.
    pub results: Vec<String>,
}

/// Tokenize `kana` and collect up to `max_results` romanizations.
pub fn explain(table: &RomajiTable, kana: &str, max_results: usize) -> ExplainResult {
    let tokens = table.tokenize(kana);
    let result_count = tokens
        .iter()
        .fold(1usize, |acc, t| acc.saturating_mul(t.variants.len()));
    ExplainResult {
        kana: kana.to_string(),
        char_count: kana.chars().count(),
        tokens,
        result_count,
        results: table.convert_bounded(kana, max_results),
    }
}

fn kind_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Table => "table",
        TokenKind::Geminate => "geminate",
        TokenKind::GeminateFallback => "geminate*",
        TokenKind::Literal => "literal",
    }
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    use unicode_width::UnicodeWidthStr;
    let mut out = String::new();

    out.push_str(&format!(
        "=== Tokens for \"{}\" ({} chars, {} tokens) ===\n",
        result.kana,
        result.char_count,
        result.tokens.len(),
    ));

    let pad_width = 8;
    for t in &result.tokens {
        let display_width = UnicodeWidthStr::width(t.unit.as_str());
        let padded = if display_width < pad_width {
            format!("{}{}", t.unit, " ".repeat(pad_width - display_width))
        } else {
            t.unit.clone()
        };
        out.push_str(&format!(
            "  [{},{}] {} {:<10} {}\n",
            t.start,
            t.end,
            padded,
            kind_label(t.kind),
            t.variants.join(" | "),
        ));
    }

    out.push_str(&format!(
        "\n=== Romanizations ({} total, showing {}) ===\n",
        result.result_count,
        result.results.len(),
    ));
    for (i, r) in result.results.iter().enumerate() {
        out.push_str(&format!("  #{:<3} {}\n", i + 1, r));
    }
    out
}
