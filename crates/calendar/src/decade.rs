//! Decade bucketing.

use std::ops::RangeInclusive;

use chrono::Datelike;

/// Returns the decade a calendar year belongs to (`year - year % 10`).
///
/// `%` truncates toward zero, so negative years bucket upward
/// (`-15` maps to `-10`). Only non-negative years are meaningful here.
pub fn decade_of_year(year: i32) -> i32 {
    year - year % 10
}

/// Returns the decade of `date`'s year.
///
/// # Examples
///
/// ```ignore
/// let date = NaiveDate::from_ymd_opt(1987, 6, 1).unwrap();
/// assert_eq!(decade(&date), 1980);
/// ```
pub fn decade<D: Datelike>(date: &D) -> i32 {
    decade_of_year(date.year())
}

/// Returns the ten years of the decade containing `date`.
pub fn decade_years<D: Datelike>(date: &D) -> RangeInclusive<i32> {
    let start = decade(date);
    start..=start + 9
}
