//! Relative-time rendering for article timestamps

use chrono::{DateTime, Utc};

/// Render a timestamp relative to `now` ("3 hours ago")
///
/// Future timestamps (bad upstream dates) clamp to "just now".
pub fn format_relative_time(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - published;
    let seconds = elapsed.num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = elapsed.num_days();
    if days < 30 {
        return plural(days, "day");
    }

    let months = days / 30;
    if months < 12 {
        return plural(months, "month");
    }

    // 12 months of 30 days land short of a calendar year; round up to one
    plural((days / 365).max(1), "year")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2025-06-15T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_just_now() {
        let t = now();
        assert_eq!(format_relative_time(t - Duration::seconds(5), t), "just now");
        // Future timestamps clamp rather than panic
        assert_eq!(format_relative_time(t + Duration::hours(2), t), "just now");
    }

    #[test]
    fn test_minutes() {
        let t = now();
        assert_eq!(
            format_relative_time(t - Duration::minutes(1), t),
            "1 minute ago"
        );
        assert_eq!(
            format_relative_time(t - Duration::minutes(45), t),
            "45 minutes ago"
        );
    }

    #[test]
    fn test_hours() {
        let t = now();
        assert_eq!(
            format_relative_time(t - Duration::hours(3), t),
            "3 hours ago"
        );
    }

    #[test]
    fn test_days_and_beyond() {
        let t = now();
        assert_eq!(format_relative_time(t - Duration::days(2), t), "2 days ago");
        assert_eq!(
            format_relative_time(t - Duration::days(70), t),
            "2 months ago"
        );
        assert_eq!(
            format_relative_time(t - Duration::days(360), t),
            "1 year ago"
        );
        assert_eq!(
            format_relative_time(t - Duration::days(800), t),
            "2 years ago"
        );
    }
}
