use crate::errors::TrackerError;
use crate::models::{default_activities, Activity};
use crate::store::KvStore;
use std::collections::BTreeSet;
use tracing::warn;

pub const ACTIVITIES_KEY: &str = "activities:v1";

/// Ordered registry of activities. Sole writer of the `activities:v1` store
/// entry; every mutation persists the full list before returning.
pub struct ActivityRegistry {
    items: Vec<Activity>,
}

impl ActivityRegistry {
    /// Loads the persisted list, seeding the defaults when the stored value
    /// is absent or malformed.
    pub fn load(store: &dyn KvStore) -> Self {
        let items = match store.get(ACTIVITIES_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<Activity>>(&raw) {
                Ok(items) => items,
                Err(err) => {
                    warn!("malformed activity list in store, seeding defaults: {err}");
                    default_activities()
                }
            },
            None => default_activities(),
        };
        Self { items }
    }

    pub fn list(&self) -> &[Activity] {
        &self.items
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.iter().any(|a| a.key == key)
    }

    /// Validates the inputs, derives a unique key from the label and appends
    /// the activity. Selection of the new activity is the caller's business.
    pub fn add(
        &mut self,
        store: &mut dyn KvStore,
        label: &str,
        emoji: &str,
    ) -> Result<Activity, TrackerError> {
        let label = label.trim();
        let emoji = emoji.trim();
        if label.is_empty() {
            return Err(TrackerError::Validation("label must not be empty".into()));
        }
        if emoji.is_empty() {
            return Err(TrackerError::Validation("emoji must not be empty".into()));
        }

        let existing: BTreeSet<&str> = self.items.iter().map(|a| a.key.as_str()).collect();
        let key = make_key(label, &existing);
        let activity = Activity::new(key, label, emoji);
        self.items.push(activity.clone());
        self.persist(store);
        Ok(activity)
    }

    /// Removes the activity, preserving the order of the rest. The caller
    /// must cascade into the ledger and the session.
    pub fn remove(&mut self, store: &mut dyn KvStore, key: &str) -> Result<(), TrackerError> {
        let before = self.items.len();
        self.items.retain(|a| a.key != key);
        if self.items.len() == before {
            return Err(TrackerError::NotFound(format!("unknown activity '{key}'")));
        }
        self.persist(store);
        Ok(())
    }

    fn persist(&self, store: &mut dyn KvStore) {
        match serde_json::to_string(&self.items) {
            Ok(raw) => store.set(ACTIVITIES_KEY, raw),
            Err(err) => warn!("failed to serialize activity list: {err}"),
        }
    }
}

/// Deterministic slug: lowercased, whitespace runs become `_`, everything
/// else non-alphanumeric is dropped. Empty result falls back to "activity";
/// collisions append `_2`, `_3`, ...
pub fn make_key(label: &str, existing: &BTreeSet<&str>) -> String {
    let mut base = String::new();
    let mut last_was_space = false;
    for ch in label.trim().to_lowercase().chars() {
        if ch.is_whitespace() {
            if !last_was_space && !base.is_empty() {
                base.push('_');
                last_was_space = true;
            }
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            base.push(ch);
            last_was_space = false;
        }
    }
    let base = base.trim_end_matches('_');
    let base = if base.is_empty() { "activity" } else { base };

    if !existing.contains(base) {
        return base.to_string();
    }
    let mut i = 2;
    loop {
        let candidate = format!("{base}_{i}");
        if !existing.contains(candidate.as_str()) {
            return candidate;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn make_key_slugs_and_disambiguates() {
        let empty = BTreeSet::new();
        assert_eq!(make_key("Study", &empty), "study");
        assert_eq!(make_key("Deep  Work!", &empty), "deep_work");
        assert_eq!(make_key("   ", &empty), "activity");
        assert_eq!(make_key("🎹🎹", &empty), "activity");

        let taken: BTreeSet<&str> = ["study", "study_2"].into_iter().collect();
        assert_eq!(make_key("Study", &taken), "study_3");
    }

    #[test]
    fn add_rejects_blank_fields() {
        let mut store = MemoryStore::default();
        let mut registry = ActivityRegistry::load(&store);
        assert!(matches!(
            registry.add(&mut store, "   ", "📖"),
            Err(TrackerError::Validation(_))
        ));
        assert!(matches!(
            registry.add(&mut store, "Study", ""),
            Err(TrackerError::Validation(_))
        ));
    }

    #[test]
    fn add_and_remove_preserve_order_and_uniqueness() {
        let mut store = MemoryStore::default();
        let mut registry = ActivityRegistry::load(&store);
        let seeded = registry.list().len();

        let a = registry.add(&mut store, "Study", "📖").unwrap();
        let b = registry.add(&mut store, "Study", "📚").unwrap();
        assert_eq!(a.key, "study");
        assert_eq!(b.key, "study_2");

        registry.remove(&mut store, "study").unwrap();
        let keys: Vec<&str> = registry.list().iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys.len(), seeded + 1);
        assert!(keys.contains(&"study_2"));
        assert!(!keys.contains(&"study"));

        let unique: BTreeSet<&str> = keys.iter().copied().collect();
        assert_eq!(unique.len(), keys.len());

        assert!(matches!(
            registry.remove(&mut store, "study"),
            Err(TrackerError::NotFound(_))
        ));
    }

    #[test]
    fn round_trips_through_store() {
        let mut store = MemoryStore::default();
        let mut registry = ActivityRegistry::load(&store);
        registry.add(&mut store, "Reading", "📖").unwrap();

        let reloaded = ActivityRegistry::load(&store);
        assert_eq!(reloaded.list(), registry.list());
    }

    #[test]
    fn malformed_store_value_seeds_defaults() {
        let mut store = MemoryStore::default();
        store.set(ACTIVITIES_KEY, "{\"not\":\"an array\"}".to_string());
        let registry = ActivityRegistry::load(&store);
        assert_eq!(registry.list(), default_activities().as_slice());
    }
}
