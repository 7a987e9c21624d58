use chrono::NaiveDateTime;

/// Timestamp layout used in the log file and on the page.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stored in place of a coordinate when the browser sent none.
pub const COORD_PLACEHOLDER: &str = "N/A";

/// One persisted check-in entry.
/// Fields stay plain strings: a row is validated once when it is written
/// and never re-validated on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinRecord {
    pub name: String,
    pub id_number: String, // "123456" (6 ASCII digits)
    pub timestamp: String, // "YYYY-MM-DD HH:MM:SS", local wall clock
    pub latitude: String,
    pub longitude: String,
}

impl CheckinRecord {
    /// Build a record from already validated input.
    /// Blank or missing coordinates become the `N/A` placeholder.
    pub fn new(
        name: &str,
        id_number: &str,
        stamp: NaiveDateTime,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            id_number: id_number.to_string(),
            timestamp: stamp.format(TIMESTAMP_FORMAT).to_string(),
            latitude: coord_or_placeholder(latitude),
            longitude: coord_or_placeholder(longitude),
        }
    }
}

fn coord_or_placeholder(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => COORD_PLACEHOLDER.to_string(),
    }
}
