//! Lenient timestamp revival for persisted and imported records.
//!
//! Backup files come from hand edits and older app versions, so timestamps
//! arrive as RFC 3339 strings, naive date strings, epoch milliseconds, or
//! garbage. Revival never fails a record: anything unreadable becomes the
//! current instant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a timestamp from whatever shape the record carries.
pub(crate) fn lenient_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(revive(&value))
}

/// Total revival: strings are parsed across the known formats, numbers are
/// taken as epoch milliseconds, anything else falls back to now.
pub(crate) fn revive(value: &Value) -> DateTime<Utc> {
    match value {
        Value::String(text) => parse_text(text).unwrap_or_else(|| {
            log::warn!("unreadable timestamp {text:?}, substituting current time");
            Utc::now()
        }),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|millis| millis as i64))
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or_else(|| {
                log::warn!("timestamp {number} is out of range, substituting current time");
                Utc::now()
            }),
        _ => Utc::now(),
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = text.parse::<DateTime<Utc>>() {
        return Some(parsed);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}
