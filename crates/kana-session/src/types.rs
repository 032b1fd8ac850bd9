use kana_core::settings::{settings, Settings};

/// Outcome of a single keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// The key extends the input towards at least one romanization.
    Accepted,
    /// The key completes a full romanization; the session is finished.
    Completed,
    /// No romanization continues with this key. Input is unchanged.
    Rejected,
    /// The session already finished.
    Ignored,
}

impl KeyResponse {
    /// True when the key was appended to the input.
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Accepted | Self::Completed)
    }
}

/// Raw keystroke counters for one problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeystrokeStats {
    /// Keys handled while the session was active.
    pub total: usize,
    /// Keys appended to the input.
    pub correct: usize,
    /// Keys rejected.
    pub mistypes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Cap on the listing returned by `TypingSession::acceptable`.
    /// Keystroke judgement is never capped.
    pub max_results: usize,
    /// Fold ASCII letters to lowercase before matching.
    pub case_insensitive: bool,
}

impl SessionConfig {
    pub fn from_settings(s: &Settings) -> Self {
        Self {
            max_results: s.enumeration.max_results,
            case_insensitive: s.input.case_insensitive,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_settings(settings())
    }
}
