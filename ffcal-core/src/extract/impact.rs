//! Impact label classification.

use crate::event::Impact;

/// Classify a free-text impact label.
///
/// Matching is a case-insensitive substring test, with "high" checked before
/// "medium". Returns `None` for anything else, including a missing label.
pub fn classify(impact_title: Option<&str>) -> Option<Impact> {
    let title = impact_title?.to_lowercase();

    if title.contains("high") {
        Some(Impact::High)
    } else if title.contains("medium") {
        Some(Impact::Medium)
    } else {
        None
    }
}
