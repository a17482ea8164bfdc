//! # almanac-calendar
//!
//! Small date helpers backing a calendar picker: decade bucketing,
//! same-day comparison, machine-readable date strings, English weekday and
//! month names, and component id allocation.
//!
//! Every date argument is any [`chrono::Datelike`] value, read in whatever
//! local time the value already carries.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Datelike value"] -->|"decade()"| B["i32 decade"]
//!     A -->|"is_same_day()"| C["bool"]
//!     A -->|"machine_format()"| D["YYYY-MM-DD"]
//!     A -->|"weekday_name() / month_name()"| E["English name"]
//!     F["&str"] -->|"parse_date()"| A
//!     G["CompIdCounter"] -->|".next_id()"| H["CompId"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_calendar::{CompIdCounter, MachineFormat, decade, machine_format, month_name};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(1987, 3, 5).unwrap();
//! assert_eq!(decade(&date), 1980);
//! assert_eq!(machine_format(&date, MachineFormat::FULL), "1987-03-05");
//! assert_eq!(month_name(&date, true), "Mar");
//!
//! let ids = CompIdCounter::new();
//! assert_eq!(ids.next_id().get(), 0);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `decade` | Decade bucketing |
//! | `same_day` | Calendar-day equality for optional dates |
//! | `machine_format` | Hyphen-joined, zero-padded date strings |
//! | `names` | Weekday and month naming |
//! | `comp_id` | Monotonic component id allocation |
//! | `parse` | Date parsing for command-line input |
//! | `error` | Error types |

mod comp_id;
mod decade;
mod error;
mod machine_format;
mod names;
mod parse;
mod same_day;

pub use comp_id::{CompId, CompIdCounter};
pub use decade::{decade, decade_of_year, decade_years};
pub use error::CalendarError;
pub use machine_format::{MachineFormat, machine_format, pad_with_zero};
pub use names::{
    English, MonthNamer, WeekdayNamer, month_name, month_name_with, weekday_name,
    weekday_name_with,
};
pub use parse::parse_date;
pub use same_day::is_same_day;
