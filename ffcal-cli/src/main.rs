mod commands;
mod icons;
mod render;
mod utils;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ffcal_core::config::FfcalConfig;
use ffcal_core::session::Session;
use tracing_subscriber::EnvFilter;

use crate::utils::time::parse_date;

#[derive(Parser)]
#[command(name = "ffcal")]
#[command(about = "High and medium impact economic calendar events for one currency")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the events for one day and exit
    Show {
        /// Day to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Currency to show events for (defaults to the configured one)
        #[arg(short, long)]
        currency: Option<String>,

        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse days interactively, refreshing on a timer (default)
    Watch {
        /// Day to start on (YYYY-MM-DD, defaults to today)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Currency to show events for (defaults to the configured one)
        #[arg(short, long)]
        currency: Option<String>,
    },
    /// Show the config file location and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = FfcalConfig::load()?;

    match cli.command {
        Some(Commands::Show {
            date,
            currency,
            json,
        }) => {
            let currency = currency.unwrap_or_else(|| config.currency.clone());
            commands::show::run(&config, &currency, start_date(date), json).await
        }
        Some(Commands::Watch { date, currency }) => {
            let currency = currency.unwrap_or_else(|| config.currency.clone());
            commands::watch::run(&config, currency, start_date(date)).await
        }
        Some(Commands::Config) => commands::config::run(&config),
        None => {
            let currency = config.currency.clone();
            commands::watch::run(&config, currency, start_date(None)).await
        }
    }
}

fn start_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Session::today().selected())
}

/// Logs go to stderr so stdout only carries rendered events.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,ffcal=debug,ffcal_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
