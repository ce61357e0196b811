//! Display Formatting

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse an RFC 3339 timestamp, or a naive ISO one taken as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// "Just now", "5 minutes ago", "2 days ago"; unparseable input is shown as-is
pub fn relative_time(raw: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return "Just now".to_string();
    };
    let Some(at) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let secs = (now - at).num_seconds();
    match secs {
        s if s < 60 => "Just now".to_string(),
        s if s < 3_600 => plural(s / 60, "minute"),
        s if s < 86_400 => plural(s / 3_600, "hour"),
        s if s < 30 * 86_400 => plural(s / 86_400, "day"),
        _ => at.format("%b %-d, %Y").to_string(),
    }
}

/// Card count label, e.g. "1 card" / "12 cards"
pub fn count_label(n: u32, noun: &str) -> String {
    if n == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_missing_or_fresh_timestamp() {
        assert_eq!(relative_time(None, now()), "Just now");
        assert_eq!(relative_time(Some(""), now()), "Just now");
        assert_eq!(relative_time(Some("2025-03-10T11:59:30Z"), now()), "Just now");
    }

    #[test]
    fn test_naive_backend_timestamp() {
        assert_eq!(relative_time(Some("2025-03-10T09:00:00.123456"), now()), "2 hours ago");
        assert_eq!(relative_time(Some("2025-03-10T09:00:00"), now()), "3 hours ago");
        assert_eq!(relative_time(Some("2025-03-08T12:00:00"), now()), "2 days ago");
    }

    #[test]
    fn test_units() {
        let at = |d: Duration| (now() - d).to_rfc3339();
        assert_eq!(relative_time(Some(&at(Duration::minutes(1))), now()), "1 minute ago");
        assert_eq!(relative_time(Some(&at(Duration::minutes(45))), now()), "45 minutes ago");
        assert_eq!(relative_time(Some(&at(Duration::hours(1))), now()), "1 hour ago");
        assert_eq!(relative_time(Some(&at(Duration::days(90))), now()), "Dec 10, 2024");
    }

    #[test]
    fn test_unparseable_is_shown_raw() {
        assert_eq!(relative_time(Some("yesterday"), now()), "yesterday");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1, "card"), "1 card");
        assert_eq!(count_label(0, "card"), "0 cards");
    }
}
