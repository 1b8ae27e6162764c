//! Engine operating-duration strings (`"H ч, M мин"`).

use crate::dates::parse_display_date_time;
use crate::error::CoreError;

/// Parse `"H ч, M мин"` (or `"H ч M мин"`) into whole minutes.
///
/// The hours and minutes are the first and third whitespace-separated
/// tokens. Returns `None` when either is not an integer.
pub fn parse_duration(duration: &str) -> Option<i64> {
    let tokens: Vec<&str> = duration.split_whitespace().collect();
    let hours: i64 = tokens.first()?.parse().ok()?;
    let minutes: i64 = tokens.get(2)?.parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Format minutes as `"H ч MM мин"` with zero-padded minutes.
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    format!("{hours} ч {mins:02} мин")
}

/// Whole minutes between two `dd.MM.yy HH:mm` stamps.
///
/// Errors when either stamp does not parse or `till` precedes `from`.
pub fn interval_minutes(from: &str, till: &str) -> Result<i64, CoreError> {
    let start = parse_display_date_time(from)
        .ok_or_else(|| CoreError::Validation(format!("Некорректная дата начала: '{from}'")))?;
    let end = parse_display_date_time(till)
        .ok_or_else(|| CoreError::Validation(format!("Некорректная дата окончания: '{till}'")))?;
    let minutes = (end - start).num_minutes();
    if minutes < 0 {
        return Err(CoreError::Validation(
            "Дата окончания раньше даты начала".to_string(),
        ));
    }
    Ok(minutes)
}

/// The duration string stored on an engine record: `"H ч, M мин"`
/// (unpadded minutes, comma after the hours).
pub fn interval_between(from: &str, till: &str) -> Result<String, CoreError> {
    let minutes = interval_minutes(from, till)?;
    Ok(format!("{} ч, {} мин", minutes / 60, minutes % 60))
}
