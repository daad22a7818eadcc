use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, DateError,
    consts::{DAYS_PER_ERA, GREGORIAN_CYCLE, MAX_YEAR, MIN_YEAR, UNIX_EPOCH_SHIFT},
    prelude::*,
    types::{Day, Month, Weekday, Year},
};

/// 1970-01-01 fell on a Thursday
const EPOCH_WEEKDAY: i64 = Weekday::Thursday.sunday_index() as i64;

/// Epoch-day bounds of 0001-01-01 and 9999-12-31
const MIN_EPOCH_DAY: i64 = days_from_civil(MIN_YEAR as i64, 1, 1);
const MAX_EPOCH_DAY: i64 = days_from_civil(MAX_YEAR as i64, 12, 31);

/// A validated proleptic Gregorian date between 0001-01-01 and 9999-12-31.
///
/// This is the crate's own [`CalendarDate`] host. Any other date type can
/// take its place by implementing that trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
#[serde(try_from = "(u16, u8, u8)", into = "(u16, u8, u8)")]
pub struct Date {
    year:  Year,
    month: Month,
    day:   Day,
}

impl Date {
    /// Creates a date from its components.
    ///
    /// # Errors
    /// Returns a `DateError` naming the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Days since 1970-01-01 (negative before it).
    pub fn days_since_epoch(&self) -> i64 {
        days_from_civil(
            i64::from(self.year.get()),
            i64::from(self.month.get()),
            i64::from(self.day.get()),
        )
    }

    /// Inverse of [`Date::days_since_epoch`]. Returns `None` outside years 1..=9999.
    pub fn from_days_since_epoch(days: i64) -> Option<Self> {
        if !(MIN_EPOCH_DAY..=MAX_EPOCH_DAY).contains(&days) {
            return None;
        }
        let (year, month, day) = civil_from_days(days);
        let year = u16::try_from(year).ok()?;
        let month = u8::try_from(month).ok()?;
        let day = u8::try_from(day).ok()?;
        Self::new(year, month, day).ok()
    }

    fn shifted(&self, delta: i64) -> Option<Self> {
        self.days_since_epoch()
            .checked_add(delta)
            .and_then(Self::from_days_since_epoch)
    }
}

impl CalendarDate for Date {
    fn year(&self) -> i32 {
        i32::from(self.year.get())
    }

    fn month(&self) -> u8 {
        self.month.get()
    }

    fn day(&self) -> u8 {
        self.day.get()
    }

    fn day_of_week(&self) -> Weekday {
        match (self.days_since_epoch() + EPOCH_WEEKDAY).rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    fn add_days(&self, days: u32) -> Option<Self> {
        self.shifted(i64::from(days))
    }

    fn subtract_days(&self, days: u32) -> Option<Self> {
        self.shifted(-i64::from(days))
    }
}

impl TryFrom<(u16, u8, u8)> for Date {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<Date> for (u16, u8, u8) {
    fn from(date: Date) -> Self {
        (date.year.get(), date.month.get(), date.day.get())
    }
}

// Civil-day conversions over 400-year eras, with years starting in March so
// the leap day falls at the end of the computational year.

const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(GREGORIAN_CYCLE as i64);
    let year_of_era = year - era * GREGORIAN_CYCLE as i64;
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_SHIFT
}

const fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let days = days + UNIX_EPOCH_SHIFT;
    let era = days.div_euclid(DAYS_PER_ERA);
    let day_of_era = days - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * GREGORIAN_CYCLE as i64;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_rejects_invalid_components() {
        assert!(matches!(Date::new(0, 1, 1), Err(DateError::InvalidYear(0))));
        assert!(matches!(Date::new(2012, 13, 1), Err(DateError::InvalidMonth(13))));
        assert!(matches!(Date::new(2012, 1, 32), Err(DateError::InvalidDay { day: 32, .. })));
        assert!(matches!(Date::new(2011, 2, 29), Err(DateError::InvalidDay { .. })));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2012, 11, 5).to_string(), "2012-11-05");
        assert_eq!(date(987, 1, 1).to_string(), "0987-01-01");
    }

    #[test]
    fn test_epoch_days() {
        struct TestCase {
            ymd:  (u16, u8, u8),
            days: i64,
        }

        let cases = [
            TestCase {
                ymd:  (1970, 1, 1),
                days: 0,
            },
            TestCase {
                ymd:  (1969, 12, 31),
                days: -1,
            },
            TestCase {
                ymd:  (2000, 3, 1),
                days: 11_017,
            },
            TestCase {
                ymd:  (2012, 11, 15),
                days: 15_659,
            },
            TestCase {
                ymd:  (1, 1, 1),
                days: -719_162,
            },
        ];

        for case in &cases {
            let (y, m, d) = case.ymd;
            let value = date(y, m, d);
            assert_eq!(value.days_since_epoch(), case.days, "{value}");
            assert_eq!(Date::from_days_since_epoch(case.days), Some(value));
        }
    }

    #[test]
    fn test_from_days_since_epoch_out_of_range() {
        assert_eq!(Date::from_days_since_epoch(i64::MAX), None);
        assert_eq!(Date::from_days_since_epoch(i64::MIN), None);
        assert_eq!(Date::from_days_since_epoch(2_932_897), None);
        assert_eq!(Date::from_days_since_epoch(-719_163), None);
        assert_eq!(Date::from_days_since_epoch(2_932_896), Some(date(9999, 12, 31)));
        assert_eq!(Date::from_days_since_epoch(-719_162), Some(date(1, 1, 1)));
    }

    #[test]
    fn test_day_of_week_covers_every_weekday() {
        // 2012-11-11 was a Sunday
        let sunday = date(2012, 11, 11);
        for n in 0..7_u8 {
            let day = sunday.add_days(u32::from(n)).unwrap();
            assert_eq!(day.day_of_week(), Weekday::from_sunday_index(n).unwrap(), "{day}");
        }
    }

    #[test]
    fn test_day_of_week() {
        assert_eq!(date(1970, 1, 1).day_of_week(), Weekday::Thursday);
        assert_eq!(date(2012, 1, 1).day_of_week(), Weekday::Sunday);
        assert_eq!(date(2012, 11, 15).day_of_week(), Weekday::Thursday);
        assert_eq!(date(2012, 11, 17).day_of_week(), Weekday::Saturday);
        assert_eq!(date(1, 1, 1).day_of_week(), Weekday::Monday);
    }

    #[test]
    fn test_add_and_subtract_days() {
        let base = date(2012, 11, 15);
        assert_eq!(base.add_days(7), Some(date(2012, 11, 22)));
        assert_eq!(base.add_days(16), Some(date(2012, 12, 1)));
        assert_eq!(base.subtract_days(15), Some(date(2012, 10, 31)));
        assert_eq!(date(2012, 2, 28).add_days(1), Some(date(2012, 2, 29)));
        assert_eq!(date(2012, 12, 31).add_days(1), Some(date(2013, 1, 1)));
    }

    #[test]
    fn test_arithmetic_out_of_range() {
        assert_eq!(date(9999, 12, 31).add_days(1), None);
        assert_eq!(date(1, 1, 1).subtract_days(1), None);
    }

    #[test]
    fn test_ordering() {
        assert!(date(2012, 1, 31) < date(2012, 2, 1));
        assert!(date(2011, 12, 31) < date(2012, 1, 1));
    }

    #[test]
    fn test_serde() {
        let value = date(2012, 11, 15);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "[2012,11,15]");

        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);

        assert!(serde_json::from_str::<Date>("[2012,11,31]").is_err());
        assert!(serde_json::from_str::<Date>("[2012,13,1]").is_err());
    }
}
