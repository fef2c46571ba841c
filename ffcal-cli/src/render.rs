//! TUI rendering for ffcal types.
//!
//! Extension traits and a `Renderer` that add colored terminal output to
//! ffcal-core types using owo_colors.

use ffcal_core::config::FfcalConfig;
use ffcal_core::report::DayReport;
use ffcal_core::session::Session;
use ffcal_core::{Event, Impact};
use owo_colors::OwoColorize;

use crate::icons::IconSet;
use crate::utils::time::local_tz_label;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Impact {
    fn render(&self) -> String {
        match self {
            Impact::High => self.as_str().red().to_string(),
            Impact::Medium => self.as_str().yellow().to_string(),
        }
    }
}

/// Renders day reports with the icon set and timezone label chosen at startup.
pub struct Renderer {
    icons: IconSet,
    tz_label: String,
}

impl Renderer {
    pub fn new(icons: IconSet, tz_label: impl Into<String>) -> Self {
        Renderer {
            icons,
            tz_label: tz_label.into(),
        }
    }

    pub fn from_config(config: &FfcalConfig) -> Self {
        Renderer::new(IconSet::load(&config.icons), local_tz_label())
    }

    fn icon(&self, impact: Impact) -> String {
        let icon = self.icons.get(impact);
        match impact {
            Impact::High => icon.red().to_string(),
            Impact::Medium => icon.yellow().to_string(),
        }
    }

    /// e.g. "■ 8:30am EDT - Initial Jobless Claims (High)"
    pub fn event_line(&self, event: &Event) -> String {
        let time = if event.time_label.is_empty() {
            String::new()
        } else {
            format!("{} {} - ", event.time_label, self.tz_label)
        };

        format!(
            "{} {}{} ({})",
            self.icon(event.impact),
            time,
            event.name,
            event.impact.render()
        )
    }

    pub fn report(&self, report: &DayReport) -> String {
        let mut lines = vec![Session::on(report.date).date_label().bold().to_string()];

        if report.events.is_empty() {
            lines.push(
                format!(
                    "   No high or medium impact {} events found.",
                    report.currency
                )
                .dimmed()
                .to_string(),
            );
        } else {
            lines.extend(
                report
                    .events
                    .iter()
                    .map(|event| format!("   {}", self.event_line(event))),
            );
        }

        let status = report.status_line();
        if report.is_available() {
            lines.push(status.dimmed().to_string());
        } else {
            lines.push(status.red().to_string());
        }

        lines.join("\n")
    }
}
