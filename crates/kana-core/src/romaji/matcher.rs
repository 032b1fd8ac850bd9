use std::collections::HashSet;

use super::convert::Token;
use super::table::RomajiTable;

/// Prefix queries over the token list of one kana string.
///
/// Answers the same questions as `Candidates` by walking token variants
/// against the typed input, so the result set is never enumerated and no
/// spelling is lost to a result cap. Each walk visits every
/// `(token, input offset)` state at most once.
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    kana: String,
    tokens: Vec<Token>,
}

impl PrefixMatcher {
    pub fn new(table: &RomajiTable, kana: &str) -> Self {
        Self {
            kana: kana.to_string(),
            tokens: table.tokenize(kana),
        }
    }

    pub fn kana(&self) -> &str {
        &self.kana
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True when `partial` can still be extended into a full romanization.
    pub fn accepts(&self, partial: &str) -> bool {
        self.first_match(partial).is_some()
    }

    /// True when `partial` is itself a full romanization.
    pub fn is_complete(&self, partial: &str) -> bool {
        self.completes(partial, 0, 0, &mut HashSet::new())
    }

    /// The first romanization in enumeration order that starts with
    /// `partial`, or the first overall when nothing matches.
    pub fn target(&self, partial: &str) -> String {
        let path = self
            .first_match(partial)
            .unwrap_or_else(|| vec![0; self.tokens.len()]);
        self.spell(&path)
    }

    /// Up to `limit` romanizations starting with `partial`, in enumeration
    /// order.
    pub fn matching(&self, partial: &str, limit: usize) -> Vec<String> {
        let mut out = Vec::new();
        let mut prefix = String::new();
        self.collect(partial, 0, &mut prefix, limit, &mut out, &mut HashSet::new());
        out
    }

    fn spell(&self, path: &[usize]) -> String {
        self.tokens
            .iter()
            .zip(path)
            .map(|(token, &i)| token.variants[i].as_str())
            .collect()
    }

    /// Variant index per token of the earliest romanization starting with
    /// `partial`.
    fn first_match(&self, partial: &str) -> Option<Vec<usize>> {
        let mut path = Vec::with_capacity(self.tokens.len());
        self.descend(partial, 0, 0, &mut path, &mut HashSet::new())
            .then_some(path)
    }

    /// Depth-first in variant order, so the first path found is the earliest
    /// in enumeration order. A state seen before has already failed.
    fn descend(
        &self,
        partial: &str,
        index: usize,
        offset: usize,
        path: &mut Vec<usize>,
        seen: &mut HashSet<(usize, usize)>,
    ) -> bool {
        let rest = &partial[offset..];
        if rest.is_empty() {
            path.resize(self.tokens.len(), 0);
            return true;
        }
        let Some(token) = self.tokens.get(index) else {
            return false;
        };
        if !seen.insert((index, offset)) {
            return false;
        }
        for (i, variant) in token.variants.iter().enumerate() {
            path.push(i);
            // Input ends inside this variant.
            if variant.starts_with(rest) {
                path.resize(self.tokens.len(), 0);
                return true;
            }
            if rest.starts_with(variant.as_str())
                && self.descend(partial, index + 1, offset + variant.len(), path, seen)
            {
                return true;
            }
            path.pop();
        }
        false
    }

    fn completes(
        &self,
        partial: &str,
        index: usize,
        offset: usize,
        seen: &mut HashSet<(usize, usize)>,
    ) -> bool {
        let Some(token) = self.tokens.get(index) else {
            return offset == partial.len();
        };
        if !seen.insert((index, offset)) {
            return false;
        }
        let rest = &partial[offset..];
        token.variants.iter().any(|variant| {
            rest.starts_with(variant.as_str())
                && self.completes(partial, index + 1, offset + variant.len(), seen)
        })
    }

    /// Pre-order walk that prunes every branch disagreeing with `partial`.
    /// `dead` holds states, still inside `partial`, that yielded nothing.
    fn collect(
        &self,
        partial: &str,
        index: usize,
        prefix: &mut String,
        limit: usize,
        out: &mut Vec<String>,
        dead: &mut HashSet<(usize, usize)>,
    ) {
        if out.len() >= limit {
            return;
        }
        let Some(token) = self.tokens.get(index) else {
            if prefix.starts_with(partial) {
                out.push(prefix.clone());
            }
            return;
        };
        let offset = prefix.len();
        let inside = offset < partial.len();
        if inside && dead.contains(&(index, offset)) {
            return;
        }
        let found = out.len();
        for variant in &token.variants {
            prefix.push_str(variant);
            let shared = prefix.len().min(partial.len());
            if prefix.as_bytes()[..shared] == partial.as_bytes()[..shared] {
                self.collect(partial, index + 1, prefix, limit, out, dead);
            }
            prefix.truncate(offset);
            if out.len() >= limit {
                return;
            }
        }
        if inside && out.len() == found {
            dead.insert((index, offset));
        }
    }
}
