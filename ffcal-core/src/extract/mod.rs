//! Event extraction pipeline.
//!
//! Turns the rows of one day's calendar into typed events:
//! currency filter, time carry-forward, impact classification, then one
//! event per non-empty title. Output follows document order.

mod carry;
mod dedup;
mod impact;

pub use carry::TimeCarryForward;
pub use dedup::dedup;
pub use impact::classify;

use tracing::debug;

use crate::event::Event;
use crate::row::{RowRecord, RowResult};

/// Accumulates events from a stream of rows for a single extraction run.
#[derive(Debug)]
pub struct Extractor<'a> {
    currency: &'a str,
    times: TimeCarryForward,
    events: Vec<Event>,
}

impl<'a> Extractor<'a> {
    pub fn new(currency: &'a str) -> Self {
        Extractor {
            currency,
            times: TimeCarryForward::new(),
            events: Vec::new(),
        }
    }

    /// Feed one row. Rows in another currency leave no trace, not even on
    /// the carried time. Rows with an ignored impact still update it.
    pub fn push(&mut self, row: &RowRecord) {
        if row.currency != self.currency {
            return;
        }

        let time_label = self.times.resolve(&row.time_text);

        let Some(impact) = classify(row.impact_title.as_deref()) else {
            return;
        };

        for title in &row.event_titles {
            let name = title.trim();
            if name.is_empty() {
                continue;
            }
            self.events.push(Event::new(time_label.clone(), name, impact));
        }
    }

    /// Feed a row read from the document. Unreadable rows are skipped.
    pub fn push_result(&mut self, row: &RowResult) {
        match row {
            Ok(row) => self.push(row),
            Err(e) => debug!("skipping calendar row: {e}"),
        }
    }

    pub fn finish(self) -> Vec<Event> {
        self.events
    }
}

/// Extract events for `currency` from rows in document order.
pub fn extract(rows: &[RowRecord], currency: &str) -> Vec<Event> {
    let mut extractor = Extractor::new(currency);
    for row in rows {
        extractor.push(row);
    }
    extractor.finish()
}

/// Like [`extract`], for rows straight from the document source, where a
/// row may have failed to parse.
pub fn extract_results(rows: &[RowResult], currency: &str) -> Vec<Event> {
    let mut extractor = Extractor::new(currency);
    for row in rows {
        extractor.push_result(row);
    }
    extractor.finish()
}
