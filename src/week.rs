use log::debug;

use crate::{
    CalendarDate, WeekError,
    consts::DAYS_IN_WEEK,
    ordinal::{Language, ordinal},
    partition::{WeekIndex, WeekPartition, partition},
};

/// Week-of-month queries, available on every [`CalendarDate`].
///
/// Each query partitions the date's month afresh; nothing is cached between
/// calls.
pub trait WeekOfMonth: CalendarDate {
    /// The date's month split into weeks.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidDate` if the date reports a month outside `1..=12`.
    fn week_split(&self) -> Result<WeekPartition, WeekError> {
        partition(self.year(), self.month())
    }

    /// 1-based week of the month this date falls in.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidDate` or `WeekError::DayNotFound` when the
    /// date reports components outside its calendar.
    fn week_of_month(&self) -> Result<WeekIndex, WeekError> {
        self.week_split()?.locate(self.day())
    }

    /// # Errors
    /// See [`WeekOfMonth::week_of_month`].
    fn first_week(&self) -> Result<bool, WeekError> {
        Ok(self.week_of_month()?.get() == 1)
    }

    /// # Errors
    /// See [`WeekOfMonth::week_of_month`].
    fn second_week(&self) -> Result<bool, WeekError> {
        Ok(self.week_of_month()?.get() == 2)
    }

    /// Whether the date is in the final week of its month, however short.
    ///
    /// # Errors
    /// See [`WeekOfMonth::week_of_month`].
    fn last_week(&self) -> Result<bool, WeekError> {
        let weeks = self.week_split()?;
        let index = weeks.locate(self.day())?;
        Ok(usize::from(index.get()) == weeks.len())
    }

    /// Number of weeks in the date's month, `ceil(days_in_month / 7)`.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidDate` if the date reports a month outside `1..=12`.
    fn total_weeks(&self) -> Result<usize, WeekError> {
        Ok(self.week_split()?.len())
    }

    fn is_weekend(&self) -> bool {
        self.day_of_week().is_weekend()
    }

    fn is_working_day(&self) -> bool {
        !self.is_weekend()
    }

    /// Days counted as elapsed in the current week.
    ///
    /// This is the week-of-month index (1..=5), not the weekday offset of the
    /// date within its week. Kept for compatibility with existing callers.
    ///
    /// # Errors
    /// See [`WeekOfMonth::week_of_month`].
    fn days_elapsed_in_week(&self) -> Result<u8, WeekError> {
        Ok(self.week_of_month()?.get())
    }

    /// `7 - days_elapsed_in_week()`
    ///
    /// # Errors
    /// See [`WeekOfMonth::week_of_month`].
    fn days_remaining_in_week(&self) -> Result<u8, WeekError> {
        Ok(DAYS_IN_WEEK.saturating_sub(self.days_elapsed_in_week()?))
    }

    /// The date moved back by [`WeekOfMonth::days_elapsed_in_week`] days.
    ///
    /// # Errors
    /// Returns `WeekError::DateOutOfRange` if the result cannot be represented.
    fn start_of_week(&self) -> Result<Self, WeekError> {
        let days = self.days_elapsed_in_week()?;
        shift_back(self, u32::from(days))
    }

    /// The date moved forward by [`WeekOfMonth::days_remaining_in_week`] days.
    ///
    /// # Errors
    /// Returns `WeekError::DateOutOfRange` if the result cannot be represented.
    fn end_of_week(&self) -> Result<Self, WeekError> {
        let days = self.days_remaining_in_week()?;
        shift_forward(self, u32::from(days))
    }

    /// Seven days later; may land in the following month.
    ///
    /// # Errors
    /// Returns `WeekError::DateOutOfRange` if the result cannot be represented.
    fn next_week(&self) -> Result<Self, WeekError> {
        shift_forward(self, u32::from(DAYS_IN_WEEK))
    }

    /// Seven days earlier; may land in the previous month.
    ///
    /// # Errors
    /// Returns `WeekError::DateOutOfRange` if the result cannot be represented.
    fn previous_week(&self) -> Result<Self, WeekError> {
        shift_back(self, u32::from(DAYS_IN_WEEK))
    }

    /// Localized ordinal name of this date's week, e.g. "Third".
    ///
    /// # Errors
    /// Returns `WeekError::OrdinalOutOfRange` if the week has no name in the
    /// table, or any error from [`WeekOfMonth::week_of_month`].
    fn week_of_month_ordinal(&self, lang: Language) -> Result<&'static str, WeekError> {
        ordinal(lang, self.week_of_month()?)
    }

    /// Same as [`WeekOfMonth::week_of_month_ordinal`] with a language tag
    /// (`eng`, `fr`, `ger` or `jap`).
    ///
    /// # Errors
    /// Returns `WeekError::UnknownLanguage` for any other tag.
    fn week_of_month_in(&self, tag: &str) -> Result<&'static str, WeekError> {
        let lang = tag.parse::<Language>()?;
        self.week_of_month_ordinal(lang)
    }
}

impl<T: CalendarDate> WeekOfMonth for T {}

/// Distance between the week-of-month indexes of two dates.
///
/// Only the indexes are compared, so dates in different months are measured
/// as if they shared one.
///
/// # Errors
/// See [`WeekOfMonth::week_of_month`].
pub fn weeks_between<A, B>(a: &A, b: &B) -> Result<u8, WeekError>
where
    A: CalendarDate,
    B: CalendarDate,
{
    Ok(a.week_of_month()?.get().abs_diff(b.week_of_month()?.get()))
}

fn shift_forward<D: CalendarDate>(date: &D, days: u32) -> Result<D, WeekError> {
    date.add_days(days)
        .ok_or_else(|| out_of_range(date, i64::from(days)))
}

fn shift_back<D: CalendarDate>(date: &D, days: u32) -> Result<D, WeekError> {
    date.subtract_days(days)
        .ok_or_else(|| out_of_range(date, -i64::from(days)))
}

fn out_of_range<D: CalendarDate>(date: &D, days: i64) -> WeekError {
    let err = WeekError::DateOutOfRange {
        date: format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day()),
        days,
    };
    debug!("{err}");
    err
}
