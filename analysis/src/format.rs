//! Display formatting for backend timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

pub const UNKNOWN_DATE: &str = "Unknown date";

/// Format an upload timestamp as `"Mar 5, 2024"`.
///
/// Accepts RFC 3339 and naive ISO-8601 timestamps (with or without fractional
/// seconds) as well as bare dates. Anything else yields [`UNKNOWN_DATE`].
#[must_use]
pub fn format_upload_date(raw: &str) -> String {
    parse_date(raw.trim())
        .and_then(|date| date.format(format_description!("[month repr:short] [day padding:none], [year]")).ok())
        .unwrap_or_else(|| UNKNOWN_DATE.to_owned())
}

fn parse_date(raw: &str) -> Option<Date> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(stamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(stamp.date());
    }
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let naive_fraction = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    if let Ok(stamp) = PrimitiveDateTime::parse(raw, naive_fraction) {
        return Some(stamp.date());
    }
    if let Ok(stamp) = PrimitiveDateTime::parse(raw, naive) {
        return Some(stamp.date());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}
