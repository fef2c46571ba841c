//! Normalized calendar rows.
//!
//! A `RowRecord` is what the document source hands to the extractor: one row
//! of the day's calendar with the markup already stripped away.

use crate::error::RowParseError;

/// One row of the source calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    /// Currency code such as "USD". Empty if the cell had no text.
    pub currency: String,
    /// Raw time text ("8:30am", "All Day"). Empty means "same as the previous row".
    pub time_text: String,
    /// Free-form impact label, e.g. "High Impact Expected".
    pub impact_title: Option<String>,
    /// Event names in this row, in display order. May contain empty strings.
    pub event_titles: Vec<String>,
}

/// A row as read from the document. Unreadable rows stay in the stream as
/// `Err` so the extractor can drop them explicitly.
pub type RowResult = Result<RowRecord, RowParseError>;

impl RowRecord {
    pub fn new(
        currency: impl Into<String>,
        time_text: impl Into<String>,
        impact_title: Option<&str>,
        event_titles: &[&str],
    ) -> Self {
        RowRecord {
            currency: currency.into(),
            time_text: time_text.into(),
            impact_title: impact_title.map(str::to_string),
            event_titles: event_titles.iter().map(|t| t.to_string()).collect(),
        }
    }
}
