use almanac_calendar::{English, WeekdayNamer, month_name, weekday_name};
use chrono::{Datelike, NaiveDate, Weekday};

#[test]
fn one_full_week() {
    // 2024-09-01 is a Sunday.
    let expected = [
        ("Sun", "Sunday"),
        ("Mon", "Monday"),
        ("Tue", "Tuesday"),
        ("Wed", "Wednesday"),
        ("Thu", "Thursday"),
        ("Fri", "Friday"),
        ("Sat", "Saturday"),
    ];
    for (offset, &(short, long)) in expected.iter().enumerate() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 1 + offset as u32).unwrap();
        assert_eq!(weekday_name(&date, true), short, "{date}");
        assert_eq!(weekday_name(&date, false), long, "{date}");
    }
}

#[test]
fn all_months() {
    let long = [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ];
    for (i, name) in long.iter().enumerate() {
        let date = NaiveDate::from_ymd_opt(2021, i as u32 + 1, 15).unwrap();
        assert_eq!(month_name(&date, false), *name);
        assert_eq!(month_name(&date, true), &name[..3]);
    }
}

#[test]
fn namer_trait_by_weekday() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert_eq!(date.weekday(), Weekday::Thu);
    assert_eq!(English.weekday_name(Weekday::Thu, false), "Thursday");
}
