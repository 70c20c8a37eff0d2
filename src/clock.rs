use chrono::{DateTime, Local, NaiveDate};

/// Single source of wall-clock time for the engine. Swapping this for a
/// settable implementation is what makes session and ledger tests
/// deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    fn now_ms(&self) -> i64 {
        self.now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at an explicit instant, advanced manually. Test-only in
/// spirit, but exported so both unit and integration-style tests can use it.
pub struct ManualClock {
    now: std::sync::Mutex<DateTime<Local>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            now: std::sync::Mutex::new(start),
        }
    }

    pub fn advance_ms(&self, ms: i64) {
        let mut now = self.now.lock().unwrap();
        *now = *now + chrono::Duration::milliseconds(ms);
    }

    pub fn set(&self, instant: DateTime<Local>) {
        *self.now.lock().unwrap() = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap()
    }
}
