use crate::clock::Clock;
use crate::errors::TrackerError;
use crate::format::format_hms;
use crate::ledger;
use crate::models::{Activity, SessionResponse, TotalsResponse};
use crate::registry::ActivityRegistry;
use crate::session::Session;
use crate::stats::build_totals;
use crate::store::KvStore;
use tracing::info;

/// What changed, for subscribers refreshing a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Activities,
    Session,
    Totals,
}

type Observer = Box<dyn Fn(Change) + Send>;

/// Orchestrating façade over registry, ledger and session. All
/// cross-component obligations live here: removal cascades into the ledger
/// and the selection, stop commits into the ledger, and conflicting requests
/// are rejected before any mutation. Observers are notified synchronously
/// after mutation and persistence.
pub struct Tracker {
    store: Box<dyn KvStore>,
    clock: Box<dyn Clock>,
    registry: ActivityRegistry,
    session: Session,
    observers: Vec<Observer>,
}

impl Tracker {
    pub fn new(store: Box<dyn KvStore>, clock: Box<dyn Clock>) -> Self {
        let registry = ActivityRegistry::load(store.as_ref());
        Self {
            store,
            clock,
            registry,
            session: Session::default(),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    fn notify(&self, change: Change) {
        for observer in &self.observers {
            observer(change);
        }
    }

    pub fn activities(&self) -> &[Activity] {
        self.registry.list()
    }

    /// Adds an activity and, as a convenience, selects it when the session
    /// is idle.
    pub fn add_activity(&mut self, label: &str, emoji: &str) -> Result<Activity, TrackerError> {
        let activity = self
            .registry
            .add(self.store.as_mut(), label, emoji)?;
        self.notify(Change::Activities);
        if !self.session.is_running() {
            self.session.select(&activity.key);
            self.notify(Change::Session);
        }
        Ok(activity)
    }

    /// Removes an activity and cascades: drops its entry from today's
    /// ledger, clears the selection if it pointed at the removed key.
    /// Removing the activity a running session is timing is rejected.
    pub fn remove_activity(&mut self, key: &str) -> Result<(), TrackerError> {
        if !self.registry.contains(key) {
            return Err(TrackerError::NotFound(format!("unknown activity '{key}'")));
        }
        if self.session.is_running() && self.session.selected() == Some(key) {
            return Err(TrackerError::Conflict(
                "cannot delete the activity being timed".into(),
            ));
        }
        self.registry.remove(self.store.as_mut(), key)?;
        ledger::drop_key(self.store.as_mut(), self.clock.today(), key);
        if self.session.selected() == Some(key) {
            self.session.clear_selection();
            self.notify(Change::Session);
        }
        self.notify(Change::Activities);
        self.notify(Change::Totals);
        Ok(())
    }

    /// Selects an activity for the next run. No-op while running.
    pub fn select(&mut self, key: &str) -> Result<SessionResponse, TrackerError> {
        if !self.registry.contains(key) {
            return Err(TrackerError::NotFound(format!("unknown activity '{key}'")));
        }
        if !self.session.is_running() {
            self.session.select(key);
            self.notify(Change::Session);
        }
        Ok(self.view())
    }

    /// Starts the stopwatch. No-op without a selection or while running.
    pub fn start(&mut self) -> SessionResponse {
        let was_running = self.session.is_running();
        self.session.start(self.clock.now_ms());
        if !was_running && self.session.is_running() {
            info!("session started for '{}'", self.session.selected().unwrap_or(""));
            self.notify(Change::Session);
        }
        self.view()
    }

    /// Stops a running session and commits its elapsed time into the ledger
    /// under the day key in effect now. A session straddling midnight
    /// commits wholly to the day of the stop. No-op while idle.
    pub fn stop_and_save(&mut self) -> Result<SessionResponse, TrackerError> {
        let now_ms = self.clock.now_ms();
        if let Some((key, elapsed_ms)) = self.session.finish(now_ms) {
            // A backwards wall-clock jump can make this negative; record
            // nothing rather than fail the stop.
            let elapsed_ms = elapsed_ms.max(0);
            ledger::add(self.store.as_mut(), self.clock.today(), &key, elapsed_ms)?;
            info!("committed {elapsed_ms}ms to '{key}'");
            self.notify(Change::Totals);
            self.notify(Change::Session);
        }
        Ok(self.view())
    }

    /// Recomputes the live elapsed time and returns the session view. This
    /// is the tick the page polls while running.
    pub fn tick(&mut self) -> SessionResponse {
        self.session.tick(self.clock.now_ms());
        self.view()
    }

    /// Clears every total for today. Rejected while running.
    pub fn reset_today(&mut self) -> Result<(), TrackerError> {
        if self.session.is_running() {
            return Err(TrackerError::Conflict(
                "cannot reset totals while the timer is running".into(),
            ));
        }
        ledger::reset(self.store.as_mut(), self.clock.today());
        self.notify(Change::Totals);
        Ok(())
    }

    pub fn totals(&self) -> TotalsResponse {
        let today = self.clock.today();
        let snapshot = ledger::snapshot(self.store.as_ref(), today);
        build_totals(today, self.registry.list(), &snapshot)
    }

    fn view(&self) -> SessionResponse {
        let elapsed_ms = self.session.live_elapsed_ms();
        SessionResponse {
            selected: self.session.selected().map(str::to_string),
            running: self.session.is_running(),
            elapsed_ms,
            clock: format_hms(elapsed_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::store::MemoryStore;
    use chrono::{Local, TimeZone};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn tracker_at(y: i32, mo: u32, d: u32, h: u32) -> Tracker {
        let clock = ManualClock::new(Local.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap());
        Tracker::new(Box::new(MemoryStore::default()), Box::new(clock))
    }

    fn tracker_with_clock(clock: Arc<ManualClock>) -> Tracker {
        struct SharedClock(Arc<ManualClock>);
        impl Clock for SharedClock {
            fn now(&self) -> chrono::DateTime<Local> {
                self.0.now()
            }
        }
        Tracker::new(Box::new(MemoryStore::default()), Box::new(SharedClock(clock)))
    }

    fn manual(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Arc<ManualClock> {
        Arc::new(ManualClock::new(
            Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap(),
        ))
    }

    #[test]
    fn full_session_commits_elapsed() {
        let clock = manual(2024, 1, 1, 9, 0);
        let mut tracker = tracker_with_clock(Arc::clone(&clock));

        tracker.select("gym").unwrap();
        let view = tracker.start();
        assert!(view.running);

        clock.advance_ms(90_000);
        let view = tracker.tick();
        assert_eq!(view.elapsed_ms, 90_000);
        assert_eq!(view.clock, "00:01:30");

        let view = tracker.stop_and_save().unwrap();
        assert!(!view.running);
        assert_eq!(view.selected, None);
        assert_eq!(view.elapsed_ms, 0);

        let totals = tracker.totals();
        let gym = totals.rows.iter().find(|r| r.key == "gym").unwrap();
        assert_eq!(gym.ms, 90_000);
        assert_eq!(gym.pct, 100.0);
    }

    #[test]
    fn stop_recomputes_past_the_last_tick() {
        let clock = manual(2024, 1, 1, 9, 0);
        let mut tracker = tracker_with_clock(Arc::clone(&clock));
        tracker.select("work").unwrap();
        tracker.start();
        clock.advance_ms(1000);
        tracker.tick();
        clock.advance_ms(900);
        tracker.stop_and_save().unwrap();
        let totals = tracker.totals();
        let work = totals.rows.iter().find(|r| r.key == "work").unwrap();
        assert_eq!(work.ms, 1900);
    }

    #[test]
    fn start_without_selection_is_a_noop() {
        let mut tracker = tracker_at(2024, 1, 1, 9);
        let view = tracker.start();
        assert!(!view.running);
        let view = tracker.stop_and_save().unwrap();
        assert!(!view.running);
    }

    #[test]
    fn select_unknown_key_errors() {
        let mut tracker = tracker_at(2024, 1, 1, 9);
        assert!(matches!(
            tracker.select("no_such"),
            Err(TrackerError::NotFound(_))
        ));
    }

    #[test]
    fn reset_rejected_while_running() {
        let clock = manual(2024, 1, 1, 9, 0);
        let mut tracker = tracker_with_clock(Arc::clone(&clock));
        tracker.select("gym").unwrap();
        tracker.start();
        assert!(matches!(
            tracker.reset_today(),
            Err(TrackerError::Conflict(_))
        ));
        tracker.stop_and_save().unwrap();
        tracker.reset_today().unwrap();
        assert!(tracker.totals().rows.iter().all(|r| r.ms == 0));
    }

    #[test]
    fn deleting_the_running_activity_is_rejected() {
        let clock = manual(2024, 1, 1, 9, 0);
        let mut tracker = tracker_with_clock(Arc::clone(&clock));
        tracker.select("gym").unwrap();
        tracker.start();
        assert!(matches!(
            tracker.remove_activity("gym"),
            Err(TrackerError::Conflict(_))
        ));
        // Other activities may still be removed mid-run.
        tracker.remove_activity("work").unwrap();
        assert!(tracker.tick().running);
    }

    #[test]
    fn removal_cascades_into_ledger_and_selection() {
        let clock = manual(2024, 1, 1, 9, 0);
        let mut tracker = tracker_with_clock(Arc::clone(&clock));
        tracker.select("gym").unwrap();
        tracker.start();
        clock.advance_ms(5000);
        tracker.stop_and_save().unwrap();

        tracker.select("gym").unwrap();
        tracker.remove_activity("gym").unwrap();

        assert_eq!(tracker.tick().selected, None);
        assert!(tracker.totals().rows.iter().all(|r| r.key != "gym"));
        assert!(!tracker.activities().iter().any(|a| a.key == "gym"));
    }

    #[test]
    fn add_activity_auto_selects_when_idle() {
        let mut tracker = tracker_at(2024, 1, 1, 9);
        let added = tracker.add_activity("Study", "📖").unwrap();
        assert_eq!(tracker.tick().selected.as_deref(), Some(added.key.as_str()));
    }

    #[test]
    fn midnight_straddle_commits_to_stop_day() {
        let clock = manual(2024, 1, 1, 23, 59);
        let mut tracker = tracker_with_clock(Arc::clone(&clock));
        tracker.select("gym").unwrap();
        tracker.start();
        clock.advance_ms(2 * 60 * 1000);
        tracker.stop_and_save().unwrap();

        // The whole two minutes land on Jan 2.
        assert_eq!(tracker.totals().date, "2024-01-02");
        let gym = tracker
            .totals()
            .rows
            .into_iter()
            .find(|r| r.key == "gym")
            .unwrap();
        assert_eq!(gym.ms, 120_000);
    }

    #[test]
    fn observers_fire_after_mutations() {
        let clock = manual(2024, 1, 1, 9, 0);
        let mut tracker = tracker_with_clock(Arc::clone(&clock));
        let totals_events = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&totals_events);
        tracker.subscribe(Box::new(move |change| {
            if change == Change::Totals {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        }));

        tracker.select("gym").unwrap();
        tracker.start();
        clock.advance_ms(1000);
        tracker.stop_and_save().unwrap();
        tracker.reset_today().unwrap();
        assert_eq!(totals_events.load(Ordering::SeqCst), 2);
    }
}
