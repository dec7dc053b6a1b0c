//! Display strings for conversation lists, message bubbles and session cards.
//!
//! All formatting is en-US. The plain functions use the machine's local time
//! zone; the `_in` variants take an explicit zone so callers (and tests) can
//! pin it.

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

pub const TODAY: &str = "Today";
pub const YESTERDAY: &str = "Yesterday";

/// Label for the day a message was sent: `Today`, `Yesterday`, or `M/D/YYYY`.
pub fn format_relative_date(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_relative_date_in(timestamp, now, &Local)
}

/// [`format_relative_date`] evaluated on the calendar of `tz`.
pub fn format_relative_date_in<Tz: TimeZone>(
    timestamp: DateTime<Utc>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> String {
    let day = timestamp.with_timezone(tz).date_naive();
    let today = now.with_timezone(tz).date_naive();

    if day == today {
        TODAY.to_string()
    } else if today.pred_opt() == Some(day) {
        YESTERDAY.to_string()
    } else {
        format!("{}/{}/{}", day.month(), day.day(), day.year())
    }
}

/// Hour and minute of a message, e.g. `02:35 PM`.
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    format_time_in(timestamp, &Local)
}

pub fn format_time_in<Tz: TimeZone>(timestamp: DateTime<Utc>, tz: &Tz) -> String {
    timestamp
        .with_timezone(tz)
        .naive_local()
        .format("%I:%M %p")
        .to_string()
}

/// Session card line, e.g. `Tue, Mar 25, 2025 at 02:00 PM`.
pub fn format_session_when(timestamp: DateTime<Utc>) -> String {
    format_session_when_in(timestamp, &Local)
}

pub fn format_session_when_in<Tz: TimeZone>(timestamp: DateTime<Utc>, tz: &Tz) -> String {
    let local = timestamp.with_timezone(tz).naive_local();
    format!(
        "{} at {}",
        local.format("%a, %b %-d, %Y"),
        local.format("%I:%M %p")
    )
}

/// Avatar fallback: the first two characters of a display name.
pub fn initials(name: &str) -> String {
    name.chars().take(2).collect()
}
