/// Format a countdown readout. Values of an hour or more render as
/// `H:MM:SS`, shorter values as `MM:SS`. Negative input renders as zero.
pub fn format_time(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Format a session length for history rows, e.g. "1h 5m" or "25m"
pub fn format_duration(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_minutes_and_seconds() {
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(90), "01:30");
        assert_eq!(format_time(45), "00:45");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(60), "01:00");
    }

    #[test]
    fn test_format_time_with_hours() {
        assert_eq!(format_time(3661), "1:01:01");
        assert_eq!(format_time(3600), "1:00:00");
        assert_eq!(format_time(7200), "2:00:00");
    }

    #[test]
    fn test_format_time_hour_boundary() {
        assert_eq!(format_time(3599), "59:59");
        assert_eq!(format_time(3600), "1:00:00");
    }

    #[test]
    fn test_format_time_zero_and_negative() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(-10), "00:00");
        assert_eq!(format_time(-10), format_time(0));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(1500), "25m");
        assert_eq!(format_duration(3600), "1h 0m");
        assert_eq!(format_duration(3900), "1h 5m");
        assert_eq!(format_duration(45), "0m");
        assert_eq!(format_duration(86399), "23h 59m");
    }
}
