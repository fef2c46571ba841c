//! Stale-result suppression for overlapping refreshes.
//!
//! Every fetch is started with a `Ticket` carrying a generation number. Only
//! the newest ticket, for the date currently selected, may be rendered.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub date: NaiveDate,
}

#[derive(Debug, Default)]
pub struct RefreshCoordinator {
    generation: u64,
    current: Option<NaiveDate>,
    last_rendered: Option<NaiveDate>,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh for `date`. Any earlier ticket becomes stale.
    pub fn begin(&mut self, date: NaiveDate) -> Ticket {
        self.generation += 1;
        self.current = Some(date);
        Ticket {
            generation: self.generation,
            date,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation && self.current == Some(ticket.date)
    }

    /// Decide whether a finished refresh may be rendered, and record it if so.
    pub fn accept(&mut self, ticket: &Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.last_rendered = Some(ticket.date);
        true
    }

    pub fn last_rendered(&self) -> Option<NaiveDate> {
        self.last_rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn latest_ticket_is_accepted() {
        let mut coordinator = RefreshCoordinator::new();
        let ticket = coordinator.begin(date(19));

        assert!(coordinator.accept(&ticket));
        assert_eq!(coordinator.last_rendered(), Some(date(19)));
    }

    #[test]
    fn superseded_ticket_is_dropped() {
        let mut coordinator = RefreshCoordinator::new();
        let old = coordinator.begin(date(19));
        let new = coordinator.begin(date(20));

        assert!(!coordinator.accept(&old));
        assert_eq!(coordinator.last_rendered(), None);
        assert!(coordinator.accept(&new));
        assert_eq!(coordinator.last_rendered(), Some(date(20)));
    }

    #[test]
    fn timer_refresh_of_same_date_supersedes_too() {
        let mut coordinator = RefreshCoordinator::new();
        let first = coordinator.begin(date(19));
        let second = coordinator.begin(date(19));

        assert!(!coordinator.is_current(&first));
        assert!(coordinator.accept(&second));
    }

    #[test]
    fn nothing_is_current_before_begin() {
        let coordinator = RefreshCoordinator::new();
        let forged = Ticket {
            generation: 0,
            date: date(19),
        };
        assert!(!coordinator.is_current(&forged));
    }
}
