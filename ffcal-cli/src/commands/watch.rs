//! Interactive day viewer with periodic refresh.
//!
//! Navigation and the refresh timer both trigger the same fetch + extract +
//! render cycle. Only one cycle runs at a time: starting a new one aborts the
//! previous task, and any result that still arrives for an older ticket is
//! dropped by the `RefreshCoordinator`.

use std::future::Future;
use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use ffcal_core::config::FfcalConfig;
use ffcal_core::refresh::{RefreshCoordinator, Ticket};
use ffcal_core::report::{DayReport, load_day};
use ffcal_core::session::Session;
use ffcal_core::source::{DocumentFetcher, ForexFactoryFetcher};
use owo_colors::OwoColorize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

use crate::render::Renderer;

const HELP: &str = "Commands: [p]rev, [n]ext, [t]oday, [r]efresh, [q]uit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Prev,
    Next,
    Today,
    Refresh,
    Quit,
}

impl Action {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "p" | "prev" => Some(Action::Prev),
            "n" | "next" => Some(Action::Next),
            "t" | "today" => Some(Action::Today),
            "r" | "refresh" => Some(Action::Refresh),
            "q" | "quit" | "exit" => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Where the watch loop sends what the user should see.
pub trait View {
    fn loading(&mut self, session: &Session);
    fn show(&mut self, report: &DayReport);
    fn message(&mut self, text: &str);
}

pub struct TerminalView {
    renderer: Renderer,
}

impl TerminalView {
    pub fn new(renderer: Renderer) -> Self {
        TerminalView { renderer }
    }
}

impl View for TerminalView {
    fn loading(&mut self, session: &Session) {
        println!("{}", format!("Loading {}...", session.selected()).dimmed());
    }

    fn show(&mut self, report: &DayReport) {
        println!();
        println!("{}", self.renderer.report(report));
    }

    fn message(&mut self, text: &str) {
        println!("{}", text.dimmed());
    }
}

type Delivery = (Ticket, DayReport);

/// Owns the session and the single in-flight refresh.
struct Watch<F, V> {
    fetcher: Arc<F>,
    currency: String,
    session: Session,
    coordinator: RefreshCoordinator,
    in_flight: Option<JoinHandle<()>>,
    deliveries: mpsc::Sender<Delivery>,
    view: V,
}

impl<F, V> Watch<F, V>
where
    F: DocumentFetcher + Send + Sync + 'static,
    V: View,
{
    fn new(
        fetcher: Arc<F>,
        currency: String,
        session: Session,
        deliveries: mpsc::Sender<Delivery>,
        view: V,
    ) -> Self {
        Watch {
            fetcher,
            currency,
            session,
            coordinator: RefreshCoordinator::new(),
            in_flight: None,
            deliveries,
            view,
        }
    }

    /// Apply an action. Returns false once the session should end.
    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Prev => self.session = self.session.prev_day(),
            Action::Next => self.session = self.session.next_day(),
            Action::Today => self.session = Session::today(),
            Action::Refresh => {}
            Action::Quit => return false,
        }
        self.refresh();
        true
    }

    fn handle_line(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }
        match Action::parse(line) {
            Some(action) => self.apply(action),
            None => {
                self.view.message(HELP);
                true
            }
        }
    }

    fn scheduled_refresh(&mut self) {
        info!(date = %self.session.selected(), "scheduled refresh");
        self.refresh();
    }

    /// Start a cycle for the selected date, replacing any running one.
    fn refresh(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        let date = self.session.selected();
        let ticket = self.coordinator.begin(date);
        self.view.loading(&self.session);

        let fetcher = Arc::clone(&self.fetcher);
        let currency = self.currency.clone();
        let deliveries = self.deliveries.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let report = load_day(fetcher.as_ref(), date, &currency).await;
            // The receiver only goes away on shutdown.
            let _ = deliveries.send((ticket, report)).await;
        }));
    }

    fn receive(&mut self, ticket: Ticket, report: DayReport) {
        if self.coordinator.accept(&ticket) {
            self.in_flight = None;
            self.view.show(&report);
        } else {
            debug!(date = %ticket.date, generation = ticket.generation, "dropping stale result");
        }
    }

    fn shutdown(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

/// Drive the session until the user quits or `shutdown` resolves. Closed
/// input leaves the timer running.
async fn event_loop<F, V>(
    watch: &mut Watch<F, V>,
    deliveries: &mut mpsc::Receiver<Delivery>,
    mut input: mpsc::Receiver<String>,
    period: Duration,
    shutdown: impl Future<Output = ()>,
) where
    F: DocumentFetcher + Send + Sync + 'static,
    V: View,
{
    watch.view.message(HELP);
    watch.refresh();

    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut input_open = true;
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            line = input.recv(), if input_open => match line {
                Some(line) => {
                    if !watch.handle_line(&line) {
                        break;
                    }
                }
                None => {
                    debug!("input closed");
                    input_open = false;
                }
            },
            _ = timer.tick() => watch.scheduled_refresh(),
            Some((ticket, report)) = deliveries.recv() => watch.receive(ticket, report),
            _ = &mut shutdown => break,
        }
    }

    watch.shutdown();
}

/// Forward stdin lines from a plain thread. A blocking stdin read cannot be
/// cancelled, so it must not run on the runtime.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("could not read input: {e}");
                    break;
                }
            };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    rx
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("could not listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

pub async fn run(config: &FfcalConfig, currency: String, start: NaiveDate) -> Result<()> {
    let fetcher = Arc::new(ForexFactoryFetcher::from_config(config)?);
    let period = config.refresh_interval()?;
    let view = TerminalView::new(Renderer::from_config(config));

    let (tx, mut rx) = mpsc::channel(8);
    let mut watch = Watch::new(fetcher, currency, Session::on(start), tx, view);

    event_loop(&mut watch, &mut rx, spawn_stdin_reader(), period, ctrl_c()).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ffcal_core::error::FetchError;
    use ffcal_core::{Event, Impact, RowRecord, RowResult};

    /// Serves one event named after the requested date, or fails on `fail_on`.
    struct DatedFetcher {
        fail_on: Option<NaiveDate>,
    }

    impl DocumentFetcher for DatedFetcher {
        async fn fetch(&self, date: NaiveDate) -> Result<Vec<RowResult>, FetchError> {
            if self.fail_on == Some(date) {
                return Err(FetchError::NotReady);
            }
            let name = date.to_string();
            Ok(vec![Ok(RowRecord::new(
                "USD",
                "8:30am",
                Some("High Impact Expected"),
                &[name.as_str()],
            ))])
        }
    }

    #[derive(Default)]
    struct RecordingView {
        shown: Vec<(NaiveDate, Vec<Event>, bool)>,
        loading: usize,
    }

    impl View for RecordingView {
        fn loading(&mut self, _session: &Session) {
            self.loading += 1;
        }

        fn show(&mut self, report: &DayReport) {
            self.shown
                .push((report.date, report.events.clone(), report.is_available()));
        }

        fn message(&mut self, _text: &str) {}
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn watch(
        fail_on: Option<NaiveDate>,
    ) -> (Watch<DatedFetcher, RecordingView>, mpsc::Receiver<Delivery>) {
        let (tx, rx) = mpsc::channel(8);
        let watch = Watch::new(
            Arc::new(DatedFetcher { fail_on }),
            "USD".to_string(),
            Session::on(date(19)),
            tx,
            RecordingView::default(),
        );
        (watch, rx)
    }

    async fn drain(
        watch: &mut Watch<DatedFetcher, RecordingView>,
        rx: &mut mpsc::Receiver<Delivery>,
    ) {
        let wait = Duration::from_millis(200);
        while let Ok(Some((ticket, report))) = tokio::time::timeout(wait, rx.recv()).await {
            watch.receive(ticket, report);
        }
    }

    #[test]
    fn parses_actions() {
        assert_eq!(Action::parse("p"), Some(Action::Prev));
        assert_eq!(Action::parse(" Next \n"), Some(Action::Next));
        assert_eq!(Action::parse("today"), Some(Action::Today));
        assert_eq!(Action::parse("r"), Some(Action::Refresh));
        assert_eq!(Action::parse("QUIT"), Some(Action::Quit));
        assert_eq!(Action::parse("x"), None);
    }

    #[tokio::test]
    async fn only_the_latest_navigation_is_rendered() {
        let (mut watch, mut rx) = watch(None);

        watch.refresh();
        watch.apply(Action::Next);
        watch.apply(Action::Next);
        drain(&mut watch, &mut rx).await;

        assert_eq!(watch.view.loading, 3);
        assert_eq!(
            watch.view.shown,
            vec![(
                date(21),
                vec![Event::new("8:30am", "2026-10-21", Impact::High)],
                true
            )]
        );
        assert_eq!(watch.coordinator.last_rendered(), Some(date(21)));
    }

    #[tokio::test]
    async fn late_result_for_previous_day_is_dropped() {
        let (mut watch, mut rx) = watch(None);

        watch.refresh();
        let Some((stale_ticket, stale_report)) = rx.recv().await else {
            panic!("refresh produced no result");
        };

        watch.apply(Action::Prev);
        watch.receive(stale_ticket, stale_report);
        assert!(watch.view.shown.is_empty());

        drain(&mut watch, &mut rx).await;
        assert_eq!(watch.view.shown.len(), 1);
        assert_eq!(watch.view.shown[0].0, date(18));
    }

    #[tokio::test]
    async fn scheduled_refresh_keeps_the_selected_day() {
        let (mut watch, mut rx) = watch(None);

        watch.apply(Action::Next);
        drain(&mut watch, &mut rx).await;
        watch.scheduled_refresh();
        drain(&mut watch, &mut rx).await;

        let dates: Vec<NaiveDate> = watch.view.shown.iter().map(|(d, _, _)| *d).collect();
        assert_eq!(dates, vec![date(20), date(20)]);
        assert_eq!(watch.session.selected(), date(20));
    }

    #[tokio::test]
    async fn failed_cycle_renders_unavailable_and_loop_continues() {
        let (mut watch, mut rx) = watch(Some(date(19)));

        watch.refresh();
        drain(&mut watch, &mut rx).await;
        watch.apply(Action::Next);
        drain(&mut watch, &mut rx).await;

        assert_eq!(watch.view.shown.len(), 2);
        assert_eq!(watch.view.shown[0], (date(19), vec![], false));
        assert!(watch.view.shown[1].2);
    }

    #[tokio::test]
    async fn quit_does_not_start_a_fetch() {
        let (mut watch, _rx) = watch(None);

        assert!(!watch.apply(Action::Quit));
        assert!(!watch.handle_line("q"));
        assert_eq!(watch.view.loading, 0);
        assert!(watch.in_flight.is_none());
    }

    #[tokio::test]
    async fn unknown_and_blank_lines_keep_going() {
        let (mut watch, _rx) = watch(None);

        assert!(watch.handle_line(""));
        assert!(watch.handle_line("zzz"));
        assert_eq!(watch.view.loading, 0);
    }

    #[tokio::test]
    async fn loop_exits_on_quit_from_input() {
        let (mut watch, mut rx) = watch(None);
        let (input_tx, input_rx) = mpsc::channel(4);
        input_tx.send("n".to_string()).await.unwrap();
        input_tx.send("q".to_string()).await.unwrap();

        let finished = tokio::time::timeout(
            Duration::from_secs(5),
            event_loop(
                &mut watch,
                &mut rx,
                input_rx,
                Duration::from_secs(3600),
                std::future::pending(),
            ),
        )
        .await;

        assert!(finished.is_ok());
        assert_eq!(watch.session.selected(), date(20));
        assert!(watch.in_flight.is_none());
    }

    #[tokio::test]
    async fn loop_exits_on_shutdown_while_input_is_open() {
        let (mut watch, mut rx) = watch(None);
        let (_input_tx, input_rx) = mpsc::channel(4);

        let finished = tokio::time::timeout(
            Duration::from_secs(5),
            event_loop(
                &mut watch,
                &mut rx,
                input_rx,
                Duration::from_secs(3600),
                tokio::time::sleep(Duration::from_millis(200)),
            ),
        )
        .await;

        assert!(finished.is_ok());
        let dates: Vec<NaiveDate> = watch.view.shown.iter().map(|(d, _, _)| *d).collect();
        assert_eq!(dates, vec![date(19)]);
    }

    #[tokio::test]
    async fn closed_input_keeps_refreshing_on_the_timer() {
        let (mut watch, mut rx) = watch(None);
        let (input_tx, input_rx) = mpsc::channel::<String>(4);
        drop(input_tx);

        event_loop(
            &mut watch,
            &mut rx,
            input_rx,
            Duration::from_millis(50),
            tokio::time::sleep(Duration::from_millis(400)),
        )
        .await;

        assert!(watch.view.loading >= 3);
        assert!(watch.view.shown.len() >= 2);
        assert!(watch.view.shown.iter().all(|(d, _, _)| *d == date(19)));
    }
}
