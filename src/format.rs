//! Duration formatting for the timer readout and the totals rows.

/// `HH:MM:SS`, truncating sub-second remainders.
pub fn format_hms(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

/// Whole minutes below one hour, one-decimal hours above. Minutes use
/// round-half-up, so 30s renders as "1m".
pub fn format_minutes(ms: u64) -> String {
    let mins = ms as f64 / 60_000.0;
    if mins >= 60.0 {
        format!("{:.1}h", mins / 60.0)
    } else {
        format!("{}m", mins.round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hms_pads_and_floors() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(999), "00:00:00");
        assert_eq!(format_hms(90_000), "00:01:30");
        assert_eq!(format_hms(3_661_999), "01:01:01");
        assert_eq!(format_hms(-5), "00:00:00");
    }

    #[test]
    fn minutes_round_half_up() {
        assert_eq!(format_minutes(0), "0m");
        assert_eq!(format_minutes(29_999), "0m");
        assert_eq!(format_minutes(30_000), "1m");
        assert_eq!(format_minutes(59 * 60_000 + 29_999), "59m");
    }

    #[test]
    fn hours_at_sixty_minutes_and_up() {
        assert_eq!(format_minutes(3_600_000), "1.0h");
        assert_eq!(format_minutes(5_400_000), "1.5h");
        assert_eq!(format_minutes(2 * 3_600_000), "2.0h");
    }
}
