//! Calendar-day equality.

use chrono::Datelike;

/// Returns `true` when both dates are present and fall on the same
/// year, month and day of month.
///
/// A missing date on either side yields `false`. Time of day is ignored,
/// and the two sides may be different [`Datelike`] types.
pub fn is_same_day<A, B>(date1: Option<&A>, date2: Option<&B>) -> bool
where
    A: Datelike,
    B: Datelike,
{
    let (Some(a), Some(b)) = (date1, date2) else {
        return false;
    };
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}
