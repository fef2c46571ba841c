//! Calendar document sources.
//!
//! A source turns a date into the ordered rows of that day's calendar.
//! The extraction pipeline only ever sees `RowResult`s, never markup.

mod address;
mod forexfactory;
mod parse;

pub use address::{calendar_url, day_param};
pub use forexfactory::ForexFactoryFetcher;
pub use parse::parse_calendar;

use std::future::Future;

use chrono::NaiveDate;

use crate::error::FetchError;
use crate::row::RowResult;

/// Obtains the rows of the calendar for one day.
pub trait DocumentFetcher {
    fn fetch(&self, date: NaiveDate)
    -> impl Future<Output = Result<Vec<RowResult>, FetchError>> + Send;
}
