use serde::{Deserialize, Serialize};

/// One trackable activity. `key` is the stable identifier derived from the
/// label at creation time; `label` and `emoji` are display-only. The field
/// names are part of the stored `activities:v1` contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub key: String,
    pub label: String,
    pub emoji: String,
}

impl Activity {
    pub fn new(key: impl Into<String>, label: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            emoji: emoji.into(),
        }
    }
}

/// Seeded on first run, when no registry has been persisted yet.
pub fn default_activities() -> Vec<Activity> {
    vec![
        Activity::new("work", "Work", "\u{1F9E0}"),
        Activity::new("gym", "Gym", "\u{1F3CB}\u{FE0F}"),
        Activity::new("gaming", "Gaming", "\u{1F3AE}"),
        Activity::new("social", "Social", "\u{1F465}"),
        Activity::new("class", "Class", "\u{1F4DA}"),
        Activity::new("transportation", "Transit", "\u{1F697}"),
    ]
}

#[derive(Debug, Deserialize)]
pub struct AddActivityRequest {
    pub label: String,
    pub emoji: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub selected: Option<String>,
    pub running: bool,
    pub elapsed_ms: i64,
    pub clock: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TotalRow {
    pub key: String,
    pub label: String,
    pub emoji: String,
    pub ms: u64,
    pub display: String,
    pub pct: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TotalsResponse {
    pub date: String,
    pub rows: Vec<TotalRow>,
}
