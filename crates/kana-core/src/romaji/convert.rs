use serde::Serialize;
use tracing::{debug, debug_span};

use super::table::{RomajiTable, GEMINATE_MARK, MAX_UNIT_LEN};

/// How a token was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A table unit of 1 to `MAX_UNIT_LEN` characters.
    Table,
    /// っ before a mora whose spellings start with a consonant. Variants are
    /// the doubled consonants.
    Geminate,
    /// っ before a vowel, nasal or unknown mora.
    GeminateFallback,
    /// A character the table does not know, passed through as-is.
    Literal,
}

/// One tokenization step: the consumed kana and the spellings it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Start position (char index, inclusive)
    pub start: usize,
    /// End position (char index, exclusive)
    pub end: usize,
    pub unit: String,
    pub kind: TokenKind,
    pub variants: Vec<String>,
}

/// Char positions mapped to byte offsets, with a trailing end offset so that
/// `kana[offsets[i]..offsets[j]]` slices chars `i..j` without allocating.
struct CharSlicer<'a> {
    kana: &'a str,
    offsets: Vec<usize>,
}

impl<'a> CharSlicer<'a> {
    fn new(kana: &'a str) -> Self {
        let offsets = kana
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(kana.len()))
            .collect();
        Self { kana, offsets }
    }

    fn char_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// `width` chars starting at `start`, or `None` past the end of input.
    fn get(&self, start: usize, width: usize) -> Option<&'a str> {
        let end = start + width;
        if end > self.char_count() {
            return None;
        }
        Some(&self.kana[self.offsets[start]..self.offsets[end]])
    }
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Distinct leading consonants of `variants`, in first-seen order.
///
/// Vowel-initial, `n`-initial and non-letter (`-`, punctuation) spellings
/// cannot be doubled and are skipped.
fn leading_consonants(variants: &[String]) -> Vec<String> {
    let mut consonants: Vec<String> = Vec::new();
    for variant in variants {
        let Some(first) = variant.chars().next() else {
            continue;
        };
        if !first.is_ascii_alphabetic() || is_vowel(first) || first == 'n' {
            continue;
        }
        if !consonants.iter().any(|c| c.starts_with(first)) {
            consonants.push(first.to_string());
        }
    }
    consonants
}

impl RomajiTable {
    /// Split `kana` into the tokens `convert` expands.
    ///
    /// Each position is resolved in order: geminate mark with a following
    /// character, then the longest table unit (3, 2, 1 chars), then a literal
    /// pass-through of a single character.
    ///
    /// A geminate mark at the end of input has nothing to double and becomes a
    /// `Literal` token (`convert("っ") == ["っ"]`). The table's っ entry only
    /// supplies the `GeminateFallback` spellings.
    pub fn tokenize(&self, kana: &str) -> Vec<Token> {
        let slicer = CharSlicer::new(kana);
        let char_count = slicer.char_count();
        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < char_count {
            let token = self.next_token(&slicer, pos);
            pos = token.end;
            tokens.push(token);
        }
        tokens
    }

    fn next_token(&self, slicer: &CharSlicer<'_>, pos: usize) -> Token {
        let first = slicer.get(pos, 1).unwrap_or_default();
        let is_geminate = first.starts_with(GEMINATE_MARK);

        if is_geminate && pos + 1 < slicer.char_count() {
            // 2-char lookahead first so that e.g. っしゃ doubles via しゃ.
            let following = [2, 1]
                .into_iter()
                .find_map(|width| slicer.get(pos + 1, width).and_then(|u| self.get(u)));
            let consonants = following.map(leading_consonants).unwrap_or_default();
            let (kind, variants) = if consonants.is_empty() {
                (
                    TokenKind::GeminateFallback,
                    self.geminate_spellings().to_vec(),
                )
            } else {
                (TokenKind::Geminate, consonants)
            };
            return Token {
                start: pos,
                end: pos + 1,
                unit: first.to_string(),
                kind,
                variants,
            };
        }

        for width in (1..=MAX_UNIT_LEN).rev() {
            // A trailing っ is never a table unit; it passes through literally.
            if width == 1 && is_geminate {
                break;
            }
            let Some(unit) = slicer.get(pos, width) else {
                continue;
            };
            if let Some(variants) = self.get(unit) {
                return Token {
                    start: pos,
                    end: pos + width,
                    unit: unit.to_string(),
                    kind: TokenKind::Table,
                    variants: variants.to_vec(),
                };
            }
        }

        Token {
            start: pos,
            end: pos + 1,
            unit: first.to_string(),
            kind: TokenKind::Literal,
            variants: vec![first.to_string()],
        }
    }

    /// Every romanization of `kana`, in pre-order of the branching choices.
    ///
    /// Total over all input: the empty string yields `[""]` and unknown
    /// characters pass through unchanged. Duplicates are kept.
    pub fn convert(&self, kana: &str) -> Vec<String> {
        self.expand(kana, None)
    }

    /// Like `convert`, but keeps only the first `limit` results (at least one).
    ///
    /// The kept results are exactly the first `limit` entries `convert` would
    /// return.
    pub fn convert_bounded(&self, kana: &str, limit: usize) -> Vec<String> {
        self.expand(kana, Some(limit.max(1)))
    }

    fn expand(&self, kana: &str, limit: Option<usize>) -> Vec<String> {
        let _span = debug_span!("convert", char_count = kana.chars().count()).entered();
        let mut results = vec![String::new()];
        let mut truncated = false;

        for token in self.tokenize(kana) {
            if let [only] = token.variants.as_slice() {
                for result in &mut results {
                    result.push_str(only);
                }
                continue;
            }

            let product = results.len().saturating_mul(token.variants.len());
            let mut next = Vec::with_capacity(limit.map_or(product, |l| product.min(l)));
            'prefixes: for prefix in &results {
                for variant in &token.variants {
                    if limit.is_some_and(|l| next.len() >= l) {
                        truncated = true;
                        break 'prefixes;
                    }
                    next.push(format!("{prefix}{variant}"));
                }
            }
            results = next;
        }

        if truncated {
            debug!(kana, kept = results.len(), "romanizations truncated");
        }
        debug!(count = results.len(), "romanizations");
        results
    }
}
