//! Week-of-month calendar facts for any date type.
//!
//! A month is split into consecutive buckets of seven days starting on the
//! 1st, so week one is always days 1–7 and the last week holds whatever is
//! left over. Weeks never cross month boundaries and ignore which weekday the
//! month starts on.
//!
//! ```
//! use week_of_month::{Date, Language, WeekOfMonth};
//!
//! let date = Date::new(2012, 11, 15).unwrap();
//! assert_eq!(date.week_of_month().unwrap().get(), 3);
//! assert_eq!(date.week_of_month_ordinal(Language::English).unwrap(), "Third");
//! ```

mod calendar;
mod consts;
mod date;
mod ordinal;
mod partition;
mod prelude;
mod types;
mod week;

pub use calendar::CalendarDate;
pub use consts::*;
pub use date::Date;
pub use ordinal::{Language, ordinal, ordinal_for_tag};
pub use partition::{WeekIndex, WeekPartition, partition};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year, month_length};
pub use week::{WeekOfMonth, weeks_between};

use crate::prelude::*;

/// Rejection of a date component at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
}

impl std::error::Error for DateError {}

/// Error type for week partitioning and the queries built on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekError {
    /// Month outside `1..=12` passed to the partitioner.
    #[error("Invalid date: month {month} of year {year} (must be 1-{max})", max = MAX_MONTH)]
    InvalidDate { year: i32, month: u8 },

    /// Day is not part of any week of its month.
    #[error("Day {day} not found in {year}-{month:02}")]
    DayNotFound { year: i32, month: u8, day: u8 },

    /// Language tag outside the supported set.
    #[error("Unknown language: {0} (expected one of eng, fr, ger, jap)")]
    UnknownLanguage(String),

    /// Week index past the end of the ordinal table.
    #[error("Week index {0} has no ordinal name (must be 1-{max})", max = MAX_ORDINAL)]
    OrdinalOutOfRange(u8),

    /// Date arithmetic left the range the host date type can represent.
    #[error("Date out of range: {date} shifted by {days} days")]
    DateOutOfRange { date: String, days: i64 },

    /// Error building a date component.
    #[error(transparent)]
    Date(#[from] DateError),
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::Date;

    pub fn date(year: u16, month: u8, day: u8) -> Date {
        Date::new(year, month, day).unwrap()
    }
}
