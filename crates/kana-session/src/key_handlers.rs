use tracing::debug;

use super::types::KeyResponse;
use super::TypingSession;

impl TypingSession {
    pub fn handle_char(&mut self, key: char) -> KeyResponse {
        if self.finished {
            return KeyResponse::Ignored;
        }
        let key = if self.config.case_insensitive {
            key.to_ascii_lowercase()
        } else {
            key
        };
        self.stats.total += 1;

        let mut next = String::with_capacity(self.input.len() + key.len_utf8());
        next.push_str(&self.input);
        next.push(key);

        if !self.matcher.accepts(&next) {
            self.stats.mistypes += 1;
            return KeyResponse::Rejected;
        }

        self.stats.correct += 1;
        self.input = next;
        self.target = self.matcher.target(&self.input);
        if self.matcher.is_complete(&self.input) {
            self.finished = true;
            debug!(kana = self.kana(), typed = %self.input, "problem completed");
            return KeyResponse::Completed;
        }
        KeyResponse::Accepted
    }

    /// Feed every char of `keys`, returning the last response.
    ///
    /// Returns `Ignored` for an empty string.
    pub fn handle_str(&mut self, keys: &str) -> KeyResponse {
        keys.chars()
            .map(|c| self.handle_char(c))
            .last()
            .unwrap_or(KeyResponse::Ignored)
    }

    /// Remove the last typed char. Returns false when nothing was removed.
    pub fn backspace(&mut self) -> bool {
        if self.finished {
            return false;
        }
        if self.input.pop().is_none() {
            return false;
        }
        self.target = self.matcher.target(&self.input);
        true
    }
}
