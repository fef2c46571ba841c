//! Impact icons, loaded once at startup and shared by reference.

use ffcal_core::Impact;
use ffcal_core::config::IconConfig;
use ffcal_core::error::IconLoadError;
use tracing::warn;

const DEFAULT_ICON: &str = "■";

#[derive(Debug, Clone)]
pub struct IconSet {
    high: String,
    medium: String,
}

impl Default for IconSet {
    fn default() -> Self {
        IconSet {
            high: DEFAULT_ICON.to_string(),
            medium: DEFAULT_ICON.to_string(),
        }
    }
}

impl IconSet {
    /// Build the icon set from config. A bad override is logged and replaced
    /// by the default glyph.
    pub fn load(config: &IconConfig) -> Self {
        IconSet {
            high: load_or_default(Impact::High, config.high.as_deref()),
            medium: load_or_default(Impact::Medium, config.medium.as_deref()),
        }
    }

    pub fn get(&self, impact: Impact) -> &str {
        match impact {
            Impact::High => &self.high,
            Impact::Medium => &self.medium,
        }
    }
}

fn load_or_default(impact: Impact, glyph: Option<&str>) -> String {
    match load_icon(impact, glyph) {
        Ok(icon) => icon,
        Err(e) => {
            warn!("Failed to load {impact} icon: {e}");
            DEFAULT_ICON.to_string()
        }
    }
}

fn load_icon(impact: Impact, glyph: Option<&str>) -> Result<String, IconLoadError> {
    let Some(glyph) = glyph else {
        return Ok(DEFAULT_ICON.to_string());
    };

    let glyph = glyph.trim();
    if glyph.is_empty() {
        return Err(IconLoadError::Empty(impact.as_str()));
    }
    if glyph.contains('\n') {
        return Err(IconLoadError::Multiline(impact.as_str()));
    }

    Ok(glyph.to_string())
}
