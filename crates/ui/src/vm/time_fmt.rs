use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.to_rfc3339()
}

/// Running timer label, `MM:SS`. Minutes keep growing past 99.
#[must_use]
pub fn format_clock(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Summary duration label, e.g. `4m 5s`.
#[must_use]
pub fn format_duration(total_secs: u32) -> String {
    format!("{}m {}s", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(6_000), "100:00");
    }

    #[test]
    fn duration_is_unpadded() {
        assert_eq!(format_duration(245), "4m 5s");
        assert_eq!(format_duration(59), "0m 59s");
    }

    #[test]
    fn datetime_is_rfc3339() {
        let at = aptitude_core::time::fixed_now();
        assert_eq!(format_datetime(at), "2023-11-14T22:13:20+00:00");
    }
}
