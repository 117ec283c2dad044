//! Relative-time formatting for feed timestamps.

use chrono::{DateTime, Utc};

/// Render an RFC3339 timestamp as "just now" / "5 minutes ago" /
/// "2 hours ago" / "3 days ago". Unparseable input is echoed back.
pub fn format_distance_to_now(rfc3339: &str) -> String {
    let Ok(then) = DateTime::parse_from_rfc3339(rfc3339) else {
        return rfc3339.to_string();
    };
    let seconds = (Utc::now() - then.with_timezone(&Utc)).num_seconds().max(0);

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        plural(seconds / 60, "minute")
    } else if seconds < 86400 {
        plural(seconds / 3600, "hour")
    } else {
        plural(seconds / 86400, "day")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_just_now() {
        assert_eq!(format_distance_to_now(&Utc::now().to_rfc3339()), "just now");
    }

    #[test]
    fn test_minutes_and_hours() {
        let five_min = (Utc::now() - Duration::minutes(5)).to_rfc3339();
        assert_eq!(format_distance_to_now(&five_min), "5 minutes ago");

        let one_min = (Utc::now() - Duration::minutes(1)).to_rfc3339();
        assert_eq!(format_distance_to_now(&one_min), "1 minute ago");

        let two_hours = (Utc::now() - Duration::hours(2)).to_rfc3339();
        assert_eq!(format_distance_to_now(&two_hours), "2 hours ago");
    }

    #[test]
    fn test_days() {
        let three_days = (Utc::now() - Duration::days(3)).to_rfc3339();
        assert_eq!(format_distance_to_now(&three_days), "3 days ago");
    }

    #[test]
    fn test_unparseable_input_is_echoed() {
        assert_eq!(format_distance_to_now("not a timestamp"), "not a timestamp");
    }
}
