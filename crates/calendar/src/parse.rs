//! Date parsing for command-line input.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CalendarError;

const DATE_TIME_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS`.
///
/// Date-only input is placed at midnight.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] for any other input, including
/// out-of-range fields such as `2023-02-29`.
pub fn parse_date(input: &str) -> Result<NaiveDateTime, CalendarError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    DATE_TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
        .ok_or_else(|| CalendarError::InvalidDate {
            input: input.to_string(),
        })
}
