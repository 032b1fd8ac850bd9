use super::table::RomajiTable;

/// The romanizations of one kana string, computed once and queried per
/// keystroke.
#[derive(Debug, Clone)]
pub struct Candidates {
    kana: String,
    results: Vec<String>,
}

impl Candidates {
    pub fn new(table: &RomajiTable, kana: &str) -> Self {
        Self {
            kana: kana.to_string(),
            results: table.convert(kana),
        }
    }

    /// Keep at most `limit` romanizations (see `RomajiTable::convert_bounded`).
    pub fn bounded(table: &RomajiTable, kana: &str, limit: usize) -> Self {
        Self {
            kana: kana.to_string(),
            results: table.convert_bounded(kana, limit),
        }
    }

    pub fn kana(&self) -> &str {
        &self.kana
    }

    /// Every romanization, in enumeration order.
    pub fn all(&self) -> &[String] {
        &self.results
    }

    /// Romanizations that start with `partial`, in enumeration order.
    pub fn matching<'a>(&'a self, partial: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.results
            .iter()
            .map(String::as_str)
            .filter(move |r| r.starts_with(partial))
    }

    /// True when `partial` can still be extended into a full romanization.
    pub fn accepts(&self, partial: &str) -> bool {
        self.matching(partial).next().is_some()
    }

    /// True when `partial` is itself a full romanization.
    pub fn is_complete(&self, partial: &str) -> bool {
        self.results.iter().any(|r| r == partial)
    }

    /// The romanization to highlight against: the first one matching
    /// `partial`, or the first overall when nothing matches.
    pub fn target(&self, partial: &str) -> &str {
        self.results
            .iter()
            .find(|r| r.starts_with(partial))
            .or_else(|| self.results.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The untyped tail of `target(partial)`.
    pub fn remaining(&self, partial: &str) -> &str {
        let target = self.target(partial);
        target.strip_prefix(partial).unwrap_or(target)
    }
}

/// Members of `table.convert(kana)` that start with `partial`.
pub fn acceptable_prefixes(table: &RomajiTable, kana: &str, partial: &str) -> Vec<String> {
    table
        .convert(kana)
        .into_iter()
        .filter(|r| r.starts_with(partial))
        .collect()
}
