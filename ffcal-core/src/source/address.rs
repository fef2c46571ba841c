//! Calendar page addresses.

use chrono::NaiveDate;
use url::Url;

use crate::error::FetchError;

/// The `day` query value for a date: lowercase month abbreviation, two-digit
/// day, a dot, then the year (e.g. `oct19.2026`).
pub fn day_param(date: NaiveDate) -> String {
    date.format("%b%d.%Y").to_string().to_lowercase()
}

/// Build the calendar page URL for `date` under `base`.
pub fn calendar_url(base: &str, date: NaiveDate) -> Result<Url, FetchError> {
    let mut url = Url::parse(base).map_err(|e| FetchError::InvalidUrl(format!("{base}: {e}")))?;
    url.query_pairs_mut().append_pair("day", &day_param(date));
    Ok(url)
}
