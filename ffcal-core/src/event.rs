//! Extracted calendar events.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Impact levels that make it into the output. Low, holiday and unknown
/// impacts are dropped during classification and have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::High => "High",
            Impact::Medium => "Medium",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single economic event for the selected day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Resolved display time. Empty only if no earlier row carried a time.
    pub time_label: String,
    pub name: String,
    pub impact: Impact,
}

impl Event {
    pub fn new(time_label: impl Into<String>, name: impl Into<String>, impact: Impact) -> Self {
        Event {
            time_label: time_label.into(),
            name: name.into(),
            impact,
        }
    }

    /// Identity used to detect duplicates: (time, name, impact).
    pub fn key(&self) -> (&str, &str, Impact) {
        (&self.time_label, &self.name, self.impact)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} ({})", self.time_label, self.name, self.impact)
    }
}
