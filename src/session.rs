//! The single timing session. Pure state machine over caller-supplied
//! timestamps; committing the result into the ledger is the façade's job.

/// Invariant: `running` implies both `selected` and `started_at_ms` are set.
/// Transitions called in the wrong state are no-ops.
#[derive(Debug, Default)]
pub struct Session {
    selected: Option<String>,
    running: bool,
    started_at_ms: Option<i64>,
    live_elapsed_ms: i64,
}

impl Session {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn live_elapsed_ms(&self) -> i64 {
        self.live_elapsed_ms
    }

    /// Changes the selection while idle. The caller validates the key
    /// against the registry first.
    pub fn select(&mut self, key: &str) {
        if self.running {
            return;
        }
        self.selected = Some(key.to_string());
    }

    /// Starts the stopwatch against the current selection.
    pub fn start(&mut self, now_ms: i64) {
        if self.running || self.selected.is_none() {
            return;
        }
        self.started_at_ms = Some(now_ms);
        self.live_elapsed_ms = 0;
        self.running = true;
    }

    /// Refreshes the displayed elapsed time. Display only; never touches
    /// totals.
    pub fn tick(&mut self, now_ms: i64) {
        if let (true, Some(start)) = (self.running, self.started_at_ms) {
            self.live_elapsed_ms = now_ms - start;
        }
    }

    /// Stops the stopwatch and returns the commit payload: the selected key
    /// and the elapsed time recomputed at this instant (not the last tick,
    /// which would drop the final partial interval). Resets to idle with no
    /// selection. Returns `None` when not running.
    pub fn finish(&mut self, now_ms: i64) -> Option<(String, i64)> {
        if !self.running {
            return None;
        }
        let start = self.started_at_ms?;
        let key = self.selected.take()?;
        self.running = false;
        self.started_at_ms = None;
        self.live_elapsed_ms = 0;
        Some((key, now_ms - start))
    }

    /// Drops the selection while idle. Cascade target for activity removal.
    pub fn clear_selection(&mut self) {
        if !self.running {
            self.selected = None;
        }
    }
}
