use std::{fmt, num::NonZeroU8, slice::Iter};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    WeekError,
    consts::{DAYS_IN_WEEK, MIN_DAY},
    types::{Month, month_length},
};

/// 1-based position of a week within its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekIndex(NonZeroU8);

impl WeekIndex {
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Returns `None` for 0.
    pub const fn new(value: u8) -> Option<Self> {
        match NonZeroU8::new(value) {
            Some(non_zero) => Some(Self(non_zero)),
            None => None,
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<WeekIndex> for u8 {
    fn from(index: WeekIndex) -> Self {
        index.get()
    }
}

impl fmt::Display for WeekIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The days of one month split into consecutive weeks of at most seven days.
///
/// Every week holds seven days except possibly the last one, and the weeks
/// concatenated in order give exactly `1..=days_in_month` for the month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WeekPartition {
    year:  i32,
    month: u8,
    weeks: Vec<Vec<u8>>,
}

/// Splits the days of `month` in `year` into weeks, week one starting on the 1st.
///
/// # Errors
/// Returns `WeekError::InvalidDate` if `month` is not in `1..=12`.
pub fn partition(year: i32, month: u8) -> Result<WeekPartition, WeekError> {
    let typed = Month::new(month)
        .map_err(|_| WeekError::InvalidDate { year, month })
        .inspect_err(|e| debug!("refusing to partition: {e}"))?;

    let days: Vec<u8> = (MIN_DAY..=month_length(year, typed)).collect();
    let weeks = days
        .chunks(usize::from(DAYS_IN_WEEK))
        .map(<[u8]>::to_vec)
        .collect();

    Ok(WeekPartition { year, month, weeks })
}

impl WeekPartition {
    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Weeks in order, each an ascending run of day numbers
    pub fn weeks(&self) -> &[Vec<u8>] {
        &self.weeks
    }

    /// Number of weeks, `ceil(days_in_month / 7)`
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Days of the week at the given 1-based index.
    pub fn week(&self, index: WeekIndex) -> Option<&[u8]> {
        self.weeks
            .get(usize::from(index.get()) - 1)
            .map(Vec::as_slice)
    }

    /// Index of the final week, whatever its length.
    pub fn last_index(&self) -> Option<WeekIndex> {
        u8::try_from(self.weeks.len()).ok().and_then(WeekIndex::new)
    }

    pub fn iter(&self) -> Iter<'_, Vec<u8>> {
        self.weeks.iter()
    }

    /// All days of the month in order.
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.weeks.iter().flatten().copied()
    }

    /// Finds the week containing `day`.
    ///
    /// # Errors
    /// Returns `WeekError::DayNotFound` if `day` is not a day of this month.
    pub fn locate(&self, day: u8) -> Result<WeekIndex, WeekError> {
        self.weeks
            .iter()
            .position(|week| week.contains(&day))
            .and_then(|position| u8::try_from(position + 1).ok())
            .and_then(WeekIndex::new)
            .ok_or_else(|| WeekError::DayNotFound {
                year: self.year,
                month: self.month,
                day,
            })
            .inspect_err(|e| debug!("week lookup failed: {e}"))
    }
}

impl<'a> IntoIterator for &'a WeekPartition {
    type Item = &'a Vec<u8>;
    type IntoIter = Iter<'a, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for WeekPartition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year:  i32,
            month: u8,
            weeks: Vec<Vec<u8>>,
        }

        // Rebuild from (year, month) so the weeks can never disagree with the calendar
        let raw = Raw::deserialize(deserializer)?;
        let rebuilt = partition(raw.year, raw.month).map_err(serde::de::Error::custom)?;
        if rebuilt.weeks != raw.weeks {
            return Err(serde::de::Error::custom(format!(
                "weeks do not match the calendar for {}-{:02}",
                raw.year, raw.month
            )));
        }
        Ok(rebuilt)
    }
}
