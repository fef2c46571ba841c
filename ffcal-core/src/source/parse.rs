//! Calendar page parsing using scraper.

use scraper::{ElementRef, Html, Selector};

use crate::error::{FetchError, RowParseError};
use crate::row::{RowRecord, RowResult};

struct Selectors {
    row: Selector,
    currency: Selector,
    span: Selector,
    time: Selector,
    impact: Selector,
    event_title: Selector,
}

impl Selectors {
    fn new() -> Result<Self, FetchError> {
        Ok(Selectors {
            row: selector("tr.calendar__row")?,
            currency: selector(".calendar__cell.calendar__currency")?,
            span: selector("span")?,
            time: selector(".calendar__cell.calendar__time span")?,
            impact: selector(".calendar__cell.calendar__impact span")?,
            event_title: selector(".calendar__event-title")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Selector(format!("{css}: {e}")))
}

/// Parse a calendar page into rows, in document order.
///
/// A page without any calendar rows never finished loading (or is a block
/// page) and is reported as `FetchError::NotReady`. Rows that lack a
/// currency or impact cell come back as `Err` in place.
pub fn parse_calendar(html: &str) -> Result<Vec<RowResult>, FetchError> {
    let selectors = Selectors::new()?;
    let document = Html::parse_document(html);

    let rows: Vec<RowResult> = document
        .select(&selectors.row)
        .map(|row| read_row(row, &selectors))
        .collect();

    if rows.is_empty() {
        return Err(FetchError::NotReady);
    }

    Ok(rows)
}

fn read_row(row: ElementRef, selectors: &Selectors) -> RowResult {
    let currency_cell = row
        .select(&selectors.currency)
        .next()
        .ok_or(RowParseError::MissingField("currency"))?;
    // The code usually sits in a span, but older markup puts it in the cell.
    let currency = currency_cell
        .select(&selectors.span)
        .next()
        .map(element_text)
        .unwrap_or_else(|| element_text(currency_cell));

    let time_text = row
        .select(&selectors.time)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let impact = row
        .select(&selectors.impact)
        .next()
        .ok_or(RowParseError::MissingField("impact"))?;
    let impact_title = impact.value().attr("title").map(str::to_string);

    let event_titles = row.select(&selectors.event_title).map(element_text).collect();

    Ok(RowRecord {
        currency,
        time_text,
        impact_title,
        event_titles,
    })
}

/// Visible text of an element with whitespace collapsed.
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
