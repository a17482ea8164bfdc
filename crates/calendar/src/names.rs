//! Weekday and month naming.
//!
//! Names come from a [`WeekdayNamer`] / [`MonthNamer`]. The free functions
//! use [`English`], which reproduces the `en` locale's short and long forms.

use chrono::{Datelike, Month, Weekday};

/// Renders weekday names.
pub trait WeekdayNamer {
    /// Returns the name of `weekday`, abbreviated when `short` is set.
    fn weekday_name(&self, weekday: Weekday, short: bool) -> &str;
}

/// Renders month names.
pub trait MonthNamer {
    /// Returns the name of `month`, abbreviated when `short` is set.
    fn month_name(&self, month: Month, short: bool) -> &str;
}

/// English (`en`) names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct English;

/// Weekday names indexed by days from Monday.
const WEEKDAYS: [(&str, &str); 7] = [
    ("Mon", "Monday"),
    ("Tue", "Tuesday"),
    ("Wed", "Wednesday"),
    ("Thu", "Thursday"),
    ("Fri", "Friday"),
    ("Sat", "Saturday"),
    ("Sun", "Sunday"),
];

/// Month names indexed by zero-based month.
const MONTHS: [(&str, &str); 12] = [
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
    ("Apr", "April"),
    ("May", "May"),
    ("Jun", "June"),
    ("Jul", "July"),
    ("Aug", "August"),
    ("Sep", "September"),
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
];

impl English {
    /// Locale tag these names correspond to.
    pub const LOCALE: &'static str = "en";
}

fn pick(names: (&'static str, &'static str), short: bool) -> &'static str {
    if short { names.0 } else { names.1 }
}

impl WeekdayNamer for English {
    fn weekday_name(&self, weekday: Weekday, short: bool) -> &str {
        pick(WEEKDAYS[weekday.num_days_from_monday() as usize], short)
    }
}

impl MonthNamer for English {
    fn month_name(&self, month: Month, short: bool) -> &str {
        pick(MONTHS[month.number_from_month() as usize - 1], short)
    }
}

/// Returns the weekday name of `date` as rendered by `namer`.
pub fn weekday_name_with<'a, N, D>(namer: &'a N, date: &D, short: bool) -> &'a str
where
    N: WeekdayNamer + ?Sized,
    D: Datelike,
{
    namer.weekday_name(date.weekday(), short)
}

/// Returns the month name of `date` as rendered by `namer`.
pub fn month_name_with<'a, N, D>(namer: &'a N, date: &D, short: bool) -> &'a str
where
    N: MonthNamer + ?Sized,
    D: Datelike,
{
    // Datelike::month() is always 1..=12.
    let month = Month::try_from(date.month() as u8).unwrap_or(Month::January);
    namer.month_name(month, short)
}

/// English weekday name of `date`: `"Mon"` when `short`, else `"Monday"`.
pub fn weekday_name<D: Datelike>(date: &D, short: bool) -> &'static str {
    pick(WEEKDAYS[date.weekday().num_days_from_monday() as usize], short)
}

/// English month name of `date`: `"Jan"` when `short`, else `"January"`.
pub fn month_name<D: Datelike>(date: &D, short: bool) -> &'static str {
    pick(MONTHS[date.month0() as usize], short)
}
