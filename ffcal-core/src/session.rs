//! Selected-day navigation.

use chrono::{Local, NaiveDate};

/// The day the user is looking at. Navigation returns a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    selected: NaiveDate,
}

impl Session {
    pub fn today() -> Self {
        Session::on(Local::now().date_naive())
    }

    pub fn on(date: NaiveDate) -> Self {
        Session { selected: date }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// One day back. Stays put at the earliest representable date.
    pub fn prev_day(self) -> Self {
        Session::on(self.selected.pred_opt().unwrap_or(self.selected))
    }

    /// One day forward. Stays put at the latest representable date.
    pub fn next_day(self) -> Self {
        Session::on(self.selected.succ_opt().unwrap_or(self.selected))
    }

    /// Heading shown above the day's events, e.g. "Events for Monday, October 19, 2026".
    pub fn date_label(&self) -> String {
        format!("Events for {}", self.selected.format("%A, %B %d, %Y"))
    }
}
