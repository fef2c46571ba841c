//! Time carry-forward.
//!
//! The calendar prints a time only on the first row of a group; following
//! rows leave the cell blank and inherit it.

/// Tracks the last non-empty time seen during one extraction run.
#[derive(Debug, Default)]
pub struct TimeCarryForward {
    last_seen: String,
}

impl TimeCarryForward {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a row's time. A non-empty `time_text` becomes the new carried
    /// value; an empty one returns whatever was carried so far (possibly empty).
    pub fn resolve(&mut self, time_text: &str) -> String {
        let time_text = time_text.trim();
        if !time_text.is_empty() {
            self.last_seen = time_text.to_string();
        }
        self.last_seen.clone()
    }

    #[cfg(test)]
    fn last_seen(&self) -> &str {
        &self.last_seen
    }
}
