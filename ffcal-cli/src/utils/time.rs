use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Abbreviation of the local timezone (e.g. "PDT"), used as a display label
/// next to calendar times. Falls back to "Local Time".
pub fn local_tz_label() -> String {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse::<Tz>().ok())
        .map(|tz| Utc::now().with_timezone(&tz).format("%Z").to_string())
        .unwrap_or_else(|| "Local Time".to_string())
}

/// Parse a YYYY-MM-DD command line date.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2026-10-19"), Ok(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()));
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_date("oct19.2026").is_err());
        assert!(parse_date("2026-02-30").is_err());
    }

    #[test]
    fn tz_label_is_never_empty() {
        assert!(!local_tz_label().is_empty());
    }
}
