use chrono::{DateTime, Utc};

/// Human-readable relative timestamp for feed rows ("5m ago", "3h ago").
/// Future timestamps clamp to "just now" rather than counting backwards.
pub fn time_since(moment: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(moment);
    let seconds = elapsed.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = elapsed.num_days();
    if days < 30 {
        return format!("{days}d ago");
    }
    moment.format("%b %-d, %Y").to_string()
}

/// Short absolute date for review cards.
pub fn format_date(moment: DateTime<Utc>) -> String {
    moment.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn buckets_scale_with_elapsed_time() {
        let now = anchor();
        assert_eq!(time_since(now - Duration::seconds(20), now), "just now");
        assert_eq!(time_since(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(time_since(now - Duration::hours(3), now), "3h ago");
        assert_eq!(time_since(now - Duration::days(6), now), "6d ago");
    }

    #[test]
    fn old_and_future_timestamps_degrade_gracefully() {
        let now = anchor();
        assert_eq!(time_since(now - Duration::days(45), now), "Jan 30, 2024");
        assert_eq!(time_since(now + Duration::hours(1), now), "just now");
    }

    #[test]
    fn absolute_dates_render_short_form() {
        assert_eq!(format_date(anchor()), "Mar 15, 2024");
    }
}
