/// Only events in this currency are shown unless configured otherwise.
pub const DEFAULT_CURRENCY: &str = "USD";

pub const DEFAULT_BASE_URL: &str = "https://www.forexfactory.com/calendar";

/// How often the watch loop re-fetches the selected day.
pub const DEFAULT_REFRESH_INTERVAL: &str = "8h";

/// Upper bound on waiting for the calendar page.
pub const DEFAULT_FETCH_TIMEOUT: &str = "15s";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";
