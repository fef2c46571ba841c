//! One fetch, extract and dedup cycle for a day.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::FetchError;
use crate::event::Event;
use crate::extract::{dedup, extract_results};
use crate::source::DocumentFetcher;

#[derive(Debug)]
pub enum Status {
    Loaded,
    Unavailable(FetchError),
}

/// Events for one day, ready for display.
#[derive(Debug)]
pub struct DayReport {
    pub date: NaiveDate,
    pub currency: String,
    pub events: Vec<Event>,
    pub status: Status,
}

impl DayReport {
    pub fn is_available(&self) -> bool {
        matches!(self.status, Status::Loaded)
    }

    pub fn status_line(&self) -> String {
        match &self.status {
            Status::Loaded => format!("{} {} events found.", self.events.len(), self.currency),
            Status::Unavailable(e) => format!("Calendar unavailable: {e}"),
        }
    }
}

/// Fetch `date` and extract its events. A fetch failure becomes an empty,
/// unavailable report instead of an error.
pub async fn load_day<F: DocumentFetcher>(
    fetcher: &F,
    date: NaiveDate,
    currency: &str,
) -> DayReport {
    let (events, status) = match fetcher.fetch(date).await {
        Ok(rows) => (dedup(&extract_results(&rows, currency)), Status::Loaded),
        Err(e) => {
            warn!(%date, "calendar unavailable: {e}");
            (Vec::new(), Status::Unavailable(e))
        }
    };

    if matches!(status, Status::Loaded) {
        info!(%date, "{} {} events found", events.len(), currency);
    }

    DayReport {
        date,
        currency: currency.to_string(),
        events,
        status,
    }
}
