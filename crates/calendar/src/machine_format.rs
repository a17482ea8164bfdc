//! Machine-readable date strings.
//!
//! Output is meant for sorting and parsing (e.g. `data-date` attributes),
//! not for display: numeric parts, zero padded, joined by `-`, always in
//! year-month-day order.

use chrono::Datelike;
use serde::Deserialize;

/// Selects which parts [`machine_format`] includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineFormat {
    /// Include the year (unpadded).
    #[serde(rename = "year")]
    pub include_year: bool,
    /// Include the month, 01..=12.
    #[serde(rename = "month")]
    pub include_month: bool,
    /// Include the day of month, 01..=31.
    #[serde(rename = "day")]
    pub include_day: bool,
}

impl MachineFormat {
    /// No parts; formats to the empty string.
    pub const NONE: Self = Self::new(false, false, false);
    /// `YYYY`
    pub const YEAR: Self = Self::new(true, false, false);
    /// `YYYY-MM`
    pub const YEAR_MONTH: Self = Self::new(true, true, false);
    /// `YYYY-MM-DD`
    pub const FULL: Self = Self::new(true, true, true);
    /// `MM-DD`
    pub const MONTH_DAY: Self = Self::new(false, true, true);

    pub const fn new(include_year: bool, include_month: bool, include_day: bool) -> Self {
        Self {
            include_year,
            include_month,
            include_day,
        }
    }

    pub const fn with_year(mut self, include: bool) -> Self {
        self.include_year = include;
        self
    }

    pub const fn with_month(mut self, include: bool) -> Self {
        self.include_month = include;
        self
    }

    pub const fn with_day(mut self, include: bool) -> Self {
        self.include_day = include;
        self
    }

    /// Returns `true` if no part is selected.
    pub const fn is_empty(&self) -> bool {
        !(self.include_year || self.include_month || self.include_day)
    }

    /// Formats `date` with this selection. Same as [`machine_format`].
    pub fn format<D: Datelike>(&self, date: &D) -> String {
        machine_format(date, *self)
    }
}

/// Left-pads the decimal form of `num` with `0` up to `width` characters.
///
/// Longer values are returned unchanged.
pub fn pad_with_zero(num: u32, width: usize) -> String {
    format!("{num:0>width$}")
}

/// Formats the parts of `date` selected by `format`, joined with `-`.
///
/// Parts always appear as year, month, day. An empty selection yields an
/// empty string.
pub fn machine_format<D: Datelike>(date: &D, format: MachineFormat) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if format.include_year {
        parts.push(date.year().to_string());
    }
    if format.include_month {
        parts.push(pad_with_zero(date.month(), 2));
    }
    if format.include_day {
        parts.push(pad_with_zero(date.day(), 2));
    }
    parts.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn march_5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn full_date() {
        assert_eq!(machine_format(&march_5(), MachineFormat::FULL), "2024-03-05");
    }

    #[test]
    fn month_only() {
        let fmt = MachineFormat::new(false, true, false);
        assert_eq!(machine_format(&march_5(), fmt), "03");
    }

    #[test]
    fn empty_selection() {
        assert_eq!(machine_format(&march_5(), MachineFormat::NONE), "");
        assert_eq!(machine_format(&march_5(), MachineFormat::default()), "");
    }

    #[test]
    fn month_day_keeps_order() {
        assert_eq!(machine_format(&march_5(), MachineFormat::MONTH_DAY), "03-05");
    }

    #[test]
    fn year_day_skips_month() {
        let fmt = MachineFormat::NONE.with_day(true).with_year(true);
        assert_eq!(fmt.format(&march_5()), "2024-05");
    }

    #[test]
    fn year_is_not_padded() {
        let early = NaiveDate::from_ymd_opt(987, 11, 20).unwrap();
        assert_eq!(machine_format(&early, MachineFormat::FULL), "987-11-20");
    }

    #[test]
    fn two_digit_parts_unchanged() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(machine_format(&date, MachineFormat::YEAR_MONTH), "1999-12");
    }

    #[test]
    fn pad_never_truncates() {
        assert_eq!(pad_with_zero(7, 2), "07");
        assert_eq!(pad_with_zero(7, 0), "7");
        assert_eq!(pad_with_zero(1234, 2), "1234");
    }

    #[test]
    fn is_empty() {
        assert!(MachineFormat::NONE.is_empty());
        assert!(!MachineFormat::YEAR.is_empty());
    }
}
