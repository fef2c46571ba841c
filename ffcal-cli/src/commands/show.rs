use anyhow::Result;
use chrono::NaiveDate;
use ffcal_core::config::FfcalConfig;
use ffcal_core::report::load_day;
use ffcal_core::session::Session;
use ffcal_core::source::ForexFactoryFetcher;
use owo_colors::OwoColorize;

use crate::render::Renderer;
use crate::utils::tui::create_spinner;

/// Fetch one day and print it once.
pub async fn run(config: &FfcalConfig, currency: &str, date: NaiveDate, json: bool) -> Result<()> {
    let fetcher = ForexFactoryFetcher::from_config(config)?;

    let spinner = create_spinner(Session::on(date).date_label());
    let report = load_day(&fetcher, date, currency).await;
    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&report.events)?);
        if !report.is_available() {
            eprintln!("{}", report.status_line().red());
        }
        return Ok(());
    }

    println!("{}", Renderer::from_config(config).report(&report));
    Ok(())
}
