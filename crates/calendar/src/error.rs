//! Error types for the almanac-calendar crate.

/// Error type for the fallible operations in the almanac-calendar crate.
///
/// The date helpers themselves never fail; only turning user input into a
/// date value can.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a string is not one of the accepted date layouts.
    #[error("invalid date: {input:?} (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)")]
    InvalidDate {
        /// The input that could not be parsed.
        input: String,
    },
}
