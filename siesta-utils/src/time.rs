use chrono::NaiveTime;

/// Parse a strict `HH:MM` 24-hour time-of-day string.
pub fn parse_hhmm(raw: &str) -> Option<NaiveTime> {
    let value = raw.trim();
    if value.len() != 5 || value.as_bytes()[2] != b':' {
        return None;
    }

    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Check whether `now` falls inside the daily window `[start, end]`.
///
/// Both bounds are inclusive. A window whose start is later than its end
/// wraps past midnight (e.g. 22:00–06:00 covers the late evening and the
/// early morning).
pub fn is_within_window(now: NaiveTime, start: NaiveTime, end: NaiveTime) -> bool {
    if start <= end {
        start <= now && now <= end
    } else {
        now >= start || now <= end
    }
}
