//! Date formatting and parsing for the fixed `dd.MM.yyyy` display format.
//!
//! The backend speaks ISO `yyyy-MM-dd`, epoch milliseconds or RFC 3339;
//! tables show `dd.MM.yyyy` (and `dd.MM.yy HH:mm` on the engine tab).
//! Parsing is permissive: malformed input yields `None` or is passed through
//! unchanged, never a panic.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

/// Table display format for calendar dates.
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Display format for dates with a time of day.
pub const DISPLAY_DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Engine table format (two-digit year).
pub const SHORT_DATE_TIME_FORMAT: &str = "%d.%m.%y %H:%M";

/// Transmission format expected by the backend.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const ISO_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Format a calendar date as `dd.MM.yyyy`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Format a zoned timestamp as `dd.MM.yyyy` in its own zone.
pub fn to_display_date<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Format a zoned timestamp as `dd.MM.yyyy HH:mm` in its own zone.
pub fn to_display_date_time<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.format(DISPLAY_DATE_TIME_FORMAT).to_string()
}

/// Format a UTC timestamp as `dd.MM.yyyy` in the platform's local zone.
pub fn timestamp_to_local_display_date(ts: &Timestamp) -> String {
    to_display_date(&ts.with_timezone(&Local))
}

/// Calendar date of a timestamp in the platform's local zone.
pub fn local_date(ts: &Timestamp) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

/// Start of `date` in the platform's local zone. Falls back to midnight UTC
/// when local midnight does not exist.
pub fn local_midnight(date: NaiveDate) -> Timestamp {
    let midnight = date.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}

/// Format epoch milliseconds as `dd.MM.yyyy` in the platform's local zone.
///
/// Returns `None` for values outside chrono's representable range.
pub fn epoch_millis_to_display_date(millis: i64) -> Option<String> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|ts| to_display_date(&ts))
}

/// Reshuffle `dd.MM.yyyy` into `yyyy-MM-dd`.
///
/// Pure string manipulation with no validation: missing components become
/// empty strings, so `"bad"` turns into `"--bad"`.
pub fn to_iso_date(display_date: &str) -> String {
    let parts: Vec<&str> = display_date.split('.').collect();
    let part = |i: usize| parts.get(i).copied().unwrap_or("");
    format!("{}-{}-{}", part(2), part(1), part(0))
}

/// Normalise `dd.MM.yyyy HH:mm` to `dd.MM.yy HH:mm`, zero-padding every
/// component. Input that does not split into a date and a time part is
/// returned unchanged.
pub fn shorten_year(input: &str) -> String {
    let Some((date_part, time_part)) = input.trim().split_once(' ') else {
        return input.to_string();
    };
    let date: Vec<&str> = date_part.split('.').collect();
    let time: Vec<&str> = time_part.split(':').collect();
    if date.len() != 3 || time.len() < 2 {
        return input.to_string();
    }
    let Ok(year) = date[2].parse::<u32>() else {
        return input.to_string();
    };

    format!(
        "{:0>2}.{:0>2}.{:02} {}:{}",
        date[0],
        date[1],
        year % 100,
        time[0],
        time[1]
    )
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse `dd.MM.yyyy` into a comparable calendar date.
pub fn parse_display_date(display_date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(display_date.trim(), DISPLAY_DATE_FORMAT).ok()
}

/// Parse `dd.MM.yy HH:mm` or `dd.MM.yyyy HH:mm`.
///
/// Two-digit years use chrono's `%y` pivot (`00-68` → 20xx).
pub fn parse_display_date_time(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    NaiveDateTime::parse_from_str(input, SHORT_DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, DISPLAY_DATE_TIME_FORMAT))
        .ok()
}

/// Sort key for any display-formatted date column: date-time when a time
/// part is present, midnight otherwise.
pub fn parse_sort_key(input: &str) -> Option<NaiveDateTime> {
    parse_display_date_time(input)
        .or_else(|| parse_display_date(input).map(|d| d.and_time(NaiveTime::MIN)))
}

/// Parse a backend date or date-time string into a UTC timestamp.
///
/// Accepts RFC 3339, naive ISO date-times (taken as UTC) and bare
/// `yyyy-MM-dd` (local midnight of that date).
pub fn parse_wire_timestamp(input: &str) -> Option<Timestamp> {
    let input = input.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ISO_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(input, ISO_DATE_FORMAT)
        .ok()
        .map(local_midnight)
}

/// Whole days from `today` to `target`; negative when `target` has passed.
pub fn days_between(today: NaiveDate, target: NaiveDate) -> i64 {
    (target - today).num_days()
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Millis(i64),
    Text(String),
}

/// Deserialize a backend date (epoch millis or ISO string) straight into the
/// `dd.MM.yyyy` display form. Unrecognised text is kept verbatim and `null`
/// becomes an empty string.
pub fn deserialize_display_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawDate>::deserialize(deserializer)?;
    Ok(match raw {
        None => String::new(),
        Some(RawDate::Millis(ms)) => epoch_millis_to_display_date(ms).unwrap_or_default(),
        Some(RawDate::Text(text)) => match parse_wire_timestamp(&text) {
            Some(ts) if text.len() > 10 => timestamp_to_local_display_date(&ts),
            Some(ts) => format_display_date(local_date(&ts)),
            None => text,
        },
    })
}

/// Deserialize an optional backend timestamp (epoch millis or string).
/// Unparseable text deserializes to `None`.
pub fn deserialize_opt_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawDate>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(RawDate::Millis(ms)) => Utc.timestamp_millis_opt(ms).single(),
        Some(RawDate::Text(text)) => parse_wire_timestamp(&text),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
