//! The capability set a date type must offer before week queries can run on it.

use crate::{
    WeekError,
    types::{Weekday, days_in_month},
};

/// A Gregorian calendar date that week-of-month queries can be computed for.
///
/// Implementors are immutable values: arithmetic returns a new date and
/// `None` when the result cannot be represented by the implementing type.
pub trait CalendarDate: Sized {
    /// Proleptic Gregorian year
    fn year(&self) -> i32;

    /// Month of the year, `1..=12`
    fn month(&self) -> u8;

    /// Day of the month, `1..=days_in_month()`
    fn day(&self) -> u8;

    fn day_of_week(&self) -> Weekday;

    /// Returns the date `days` days later.
    fn add_days(&self, days: u32) -> Option<Self>;

    /// Returns the date `days` days earlier.
    fn subtract_days(&self, days: u32) -> Option<Self>;

    /// Number of days in this date's month.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidDate` if the date reports a month outside `1..=12`.
    fn days_in_month(&self) -> Result<u8, WeekError> {
        days_in_month(self.year(), self.month()).map_err(|_| WeekError::InvalidDate {
            year:  self.year(),
            month: self.month(),
        })
    }
}

#[cfg(feature = "chrono")]
mod chrono_impl {
    use super::CalendarDate;
    use crate::types::Weekday;
    use chrono::{Datelike, Days, NaiveDate};

    impl CalendarDate for NaiveDate {
        fn year(&self) -> i32 {
            Datelike::year(self)
        }

        #[allow(clippy::cast_possible_truncation)]
        fn month(&self) -> u8 {
            // chrono months are always 1..=12
            Datelike::month(self) as u8
        }

        #[allow(clippy::cast_possible_truncation)]
        fn day(&self) -> u8 {
            Datelike::day(self) as u8
        }

        fn day_of_week(&self) -> Weekday {
            match self.weekday() {
                chrono::Weekday::Sun => Weekday::Sunday,
                chrono::Weekday::Mon => Weekday::Monday,
                chrono::Weekday::Tue => Weekday::Tuesday,
                chrono::Weekday::Wed => Weekday::Wednesday,
                chrono::Weekday::Thu => Weekday::Thursday,
                chrono::Weekday::Fri => Weekday::Friday,
                chrono::Weekday::Sat => Weekday::Saturday,
            }
        }

        fn add_days(&self, days: u32) -> Option<Self> {
            self.checked_add_days(Days::new(u64::from(days)))
        }

        fn subtract_days(&self, days: u32) -> Option<Self> {
            self.checked_sub_days(Days::new(u64::from(days)))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_naive_date_capabilities() {
            let date = NaiveDate::from_ymd_opt(2012, 11, 15).unwrap();

            assert_eq!(CalendarDate::year(&date), 2012);
            assert_eq!(CalendarDate::month(&date), 11);
            assert_eq!(CalendarDate::day(&date), 15);
            assert_eq!(date.day_of_week(), Weekday::Thursday);
            assert_eq!(CalendarDate::days_in_month(&date), Ok(30));
            assert_eq!(
                CalendarDate::add_days(&date, 16),
                NaiveDate::from_ymd_opt(2012, 12, 1)
            );
            assert_eq!(
                CalendarDate::subtract_days(&date, 15),
                NaiveDate::from_ymd_opt(2012, 10, 31)
            );
        }
    }
}
