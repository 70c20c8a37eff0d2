//! Day-scoped totals. The ledger is the sole writer of `totals:<date>`
//! store entries. Nothing is cached between operations: every call loads the
//! mapping for the date it is given and mutating calls persist before
//! returning, so a day rollover is just the caller passing a new date.

use crate::errors::TrackerError;
use crate::store::KvStore;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::warn;

pub fn totals_key(date: NaiveDate) -> String {
    format!("totals:{}", date.format("%Y-%m-%d"))
}

fn load(store: &dyn KvStore, date: NaiveDate) -> BTreeMap<String, u64> {
    match store.get(&totals_key(date)) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(totals) => totals,
            Err(err) => {
                warn!("malformed totals for {date}, treating as empty: {err}");
                BTreeMap::new()
            }
        },
        None => BTreeMap::new(),
    }
}

fn persist(store: &mut dyn KvStore, date: NaiveDate, totals: &BTreeMap<String, u64>) {
    match serde_json::to_string(totals) {
        Ok(raw) => store.set(&totals_key(date), raw),
        Err(err) => warn!("failed to serialize totals for {date}: {err}"),
    }
}

/// Accumulated milliseconds for one activity, 0 when absent.
pub fn get(store: &dyn KvStore, date: NaiveDate, key: &str) -> u64 {
    load(store, date).get(key).copied().unwrap_or(0)
}

/// Adds `delta_ms` to the activity's total, creating the entry if needed.
pub fn add(
    store: &mut dyn KvStore,
    date: NaiveDate,
    key: &str,
    delta_ms: i64,
) -> Result<(), TrackerError> {
    if delta_ms < 0 {
        return Err(TrackerError::Validation(format!(
            "duration must be non-negative, got {delta_ms}"
        )));
    }
    let mut totals = load(store, date);
    let entry = totals.entry(key.to_string()).or_insert(0);
    *entry = entry.saturating_add(delta_ms as u64);
    persist(store, date, &totals);
    Ok(())
}

/// Drops the activity's entry. No-op when no time was recorded for it.
pub fn drop_key(store: &mut dyn KvStore, date: NaiveDate, key: &str) {
    let mut totals = load(store, date);
    if totals.remove(key).is_some() {
        persist(store, date, &totals);
    }
}

/// Clears every entry for the date. The façade rejects this while a session
/// is running; the ledger itself has no notion of sessions.
pub fn reset(store: &mut dyn KvStore, date: NaiveDate) {
    persist(store, date, &BTreeMap::new());
}

/// Read-only copy for presentation and bar scaling.
pub fn snapshot(store: &dyn KvStore, date: NaiveDate) -> BTreeMap<String, u64> {
    load(store, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn add_accumulates() {
        let mut store = MemoryStore::default();
        add(&mut store, day(1), "work", 1000).unwrap();
        add(&mut store, day(1), "work", 2500).unwrap();
        assert_eq!(get(&store, day(1), "work"), 3500);
        assert_eq!(get(&store, day(1), "gym"), 0);
    }

    #[test]
    fn add_rejects_negative_delta() {
        let mut store = MemoryStore::default();
        assert!(matches!(
            add(&mut store, day(1), "work", -1),
            Err(TrackerError::Validation(_))
        ));
        assert_eq!(get(&store, day(1), "work"), 0);
    }

    #[test]
    fn drop_key_removes_only_that_entry() {
        let mut store = MemoryStore::default();
        add(&mut store, day(1), "work", 1000).unwrap();
        add(&mut store, day(1), "gym", 4000).unwrap();
        drop_key(&mut store, day(1), "work");
        drop_key(&mut store, day(1), "never_tracked");
        let totals = snapshot(&store, day(1));
        assert_eq!(totals.get("work"), None);
        assert_eq!(totals.get("gym"), Some(&4000));
    }

    #[test]
    fn reset_clears_and_persists_empty() {
        let mut store = MemoryStore::default();
        add(&mut store, day(1), "work", 1000).unwrap();
        reset(&mut store, day(1));
        assert_eq!(get(&store, day(1), "work"), 0);
        assert_eq!(store.get(&totals_key(day(1))).as_deref(), Some("{}"));
    }

    #[test]
    fn days_are_independent() {
        let mut store = MemoryStore::default();
        add(&mut store, day(1), "work", 1000).unwrap();
        add(&mut store, day(2), "work", 7).unwrap();
        assert_eq!(get(&store, day(1), "work"), 1000);
        assert_eq!(get(&store, day(2), "work"), 7);
        reset(&mut store, day(2));
        assert_eq!(get(&store, day(1), "work"), 1000);
    }

    #[test]
    fn malformed_totals_treated_as_empty() {
        let mut store = MemoryStore::default();
        store.set(&totals_key(day(1)), "[1,2,3]".to_string());
        assert_eq!(get(&store, day(1), "work"), 0);
        add(&mut store, day(1), "work", 10).unwrap();
        assert_eq!(get(&store, day(1), "work"), 10);
    }
}
