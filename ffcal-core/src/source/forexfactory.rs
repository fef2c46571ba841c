//! Forex Factory calendar over HTTP.

use std::time::Duration;

use chrono::NaiveDate;
use tokio::time::timeout;
use tracing::debug;
use url::Url;

use super::{DocumentFetcher, calendar_url, parse_calendar};
use crate::config::FfcalConfig;
use crate::error::{FetchError, FfcalError, FfcalResult};
use crate::row::RowResult;

/// Fetches and parses the calendar page for a day.
#[derive(Clone, Debug)]
pub struct ForexFactoryFetcher {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ForexFactoryFetcher {
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> FfcalResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| FfcalError::Config(format!("Could not build HTTP client: {e}")))?;

        Ok(ForexFactoryFetcher {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    pub fn from_config(config: &FfcalConfig) -> FfcalResult<Self> {
        Self::new(&config.base_url, &config.user_agent, config.fetch_timeout()?)
    }

    async fn download(&self, url: Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(format!("calendar page returned HTTP {status}")));
        }

        response.text().await.map_err(|e| FetchError::Http(e.to_string()))
    }
}

impl DocumentFetcher for ForexFactoryFetcher {
    async fn fetch(&self, date: NaiveDate) -> Result<Vec<RowResult>, FetchError> {
        let url = calendar_url(&self.base_url, date)?;
        debug!(%url, "fetching calendar page");

        let html = timeout(self.timeout, self.download(url))
            .await
            .map_err(|_| FetchError::Timeout {
                after: self.timeout,
            })??;

        let rows = parse_calendar(&html)?;
        let unreadable = rows.iter().filter(|r| r.is_err()).count();
        debug!(rows = rows.len(), unreadable, "parsed calendar page");

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[tokio::test]
    async fn invalid_base_url_is_reported() {
        let fetcher =
            ForexFactoryFetcher::new("not a url", "ffcal-test", Duration::from_secs(1)).unwrap();
        let err = fetcher.fetch(date()).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_an_http_error() {
        let fetcher = ForexFactoryFetcher::new(
            "http://127.0.0.1:9/calendar",
            "ffcal-test",
            Duration::from_secs(5),
        )
        .unwrap();
        let err = fetcher.fetch(date()).await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Http(_) | FetchError::Timeout { .. }
        ));
    }
}
