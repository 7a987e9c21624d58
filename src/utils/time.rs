//! Time utilities: parsing window bounds and formatting times for display.

use chrono::NaiveTime;

/// Parse "HH:MM:SS", falling back to "HH:MM" (seconds default to :00).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// 12-hour label used on the page and in the window error, e.g. "6:30 PM".
pub fn format_time_12h(t: NaiveTime) -> String {
    t.format("%-I:%M %p").to_string()
}

/// 24-hour label with seconds, e.g. "18:30:00".
pub fn format_time_24h(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}
