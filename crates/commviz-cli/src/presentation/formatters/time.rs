use chrono::{DateTime, Local, Utc};

/// Completion date in local time, minute precision
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
