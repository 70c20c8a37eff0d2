use crate::format::format_minutes;
use crate::models::{Activity, TotalRow, TotalsResponse};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Builds the totals view in registry order: formatted duration plus a bar
/// width proportional to the largest total of the day. The max is floored at
/// 1 so a day with no recorded time yields all-zero widths instead of a
/// division by zero.
pub fn build_totals(
    date: NaiveDate,
    activities: &[Activity],
    totals: &BTreeMap<String, u64>,
) -> TotalsResponse {
    let max_ms = activities
        .iter()
        .map(|a| totals.get(&a.key).copied().unwrap_or(0))
        .max()
        .unwrap_or(0)
        .max(1);

    let rows = activities
        .iter()
        .map(|a| {
            let ms = totals.get(&a.key).copied().unwrap_or(0);
            let pct = (ms as f64 / max_ms as f64 * 100.0).clamp(0.0, 100.0);
            TotalRow {
                key: a.key.clone(),
                label: a.label.clone(),
                emoji: a.emoji.clone(),
                ms,
                display: if ms > 0 { format_minutes(ms) } else { "0m".to_string() },
                pct,
            }
        })
        .collect();

    TotalsResponse {
        date: date.format("%Y-%m-%d").to_string(),
        rows,
    }
}
