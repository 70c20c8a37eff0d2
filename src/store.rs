use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::{error, warn};

/// Durable string-keyed store backing the registry and the ledger. Get and
/// set are synchronous; a mutation is durable by the time `set` returns
/// (best effort, see `FileStore::flush`).
pub trait KvStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }
    PathBuf::from("data/store.json")
}

/// File-backed store: one JSON object on disk mapping key -> serialized
/// value, rewritten after every `set`. Missing or malformed files load as
/// empty; a failed flush loses at most the current day's unsaved totals and
/// is reported as a warning, never an error to the caller.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn load(path: &Path) -> Self {
        let entries = match fs::read(path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    error!("failed to parse store file {}: {err}", path.display());
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                error!("failed to read store file {}: {err}", path.display());
                BTreeMap::new()
            }
        };
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    fn flush(&self) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(err) = fs::create_dir_all(parent) {
                    warn!("failed to create data dir {}: {err}", parent.display());
                    return;
                }
            }
        }
        let payload = match serde_json::to_vec_pretty(&self.entries) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("failed to serialize store: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, payload) {
            warn!("failed to write store file {}: {err}", self.path.display());
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        self.flush();
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("tracker_store_{tag}_{}_{nanos}.json", std::process::id()));
        path
    }

    #[test]
    fn file_store_round_trips() {
        let path = temp_path("round_trip");
        {
            let mut store = FileStore::load(&path);
            store.set("activities:v1", "[]".to_string());
            store.set("totals:2026-01-05", "{\"gym\":90000}".to_string());
        }
        let store = FileStore::load(&path);
        assert_eq!(store.get("activities:v1").as_deref(), Some("[]"));
        assert_eq!(
            store.get("totals:2026-01-05").as_deref(),
            Some("{\"gym\":90000}")
        );
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn file_store_recovers_from_garbage() {
        let path = temp_path("garbage");
        fs::write(&path, b"not json at all").unwrap();
        let store = FileStore::load(&path);
        assert_eq!(store.get("activities:v1"), None);
        let _ = fs::remove_file(&path);
    }
}
