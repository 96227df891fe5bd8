use chrono::{DateTime, NaiveDateTime, TimeZone};
use serde::Serialize;

use crate::prelude::*;

/// Anything that can be reduced to a calendar day.
///
/// Range and equality checks go through this trait so that a time-of-day
/// component never affects classification.
pub trait CalendarDay {
    /// The calendar date with any time-of-day dropped
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Returns true if both values fall on the same calendar date.
pub fn is_same_day(a: &impl CalendarDay, b: &impl CalendarDay) -> bool {
    a.calendar_day() == b.calendar_day()
}

/// An inclusive range of calendar days.
/// The start date is always less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: NaiveDate,
    end:   NaiveDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range from `before` days ahead of `anchor` to `after` days past it.
    /// Always well ordered since both offsets are non-negative.
    pub(crate) fn around(anchor: NaiveDate, before: u8, after: u8) -> Self {
        Self {
            start: anchor - Days::new(u64::from(before)),
            end:   anchor + Days::new(u64::from(after)),
        }
    }

    /// Returns the first day of the range
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range (inclusive)
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns both ends as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Number of days from start to end; a single-day range spans 0.
    pub fn span_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }

    /// Checks if the range contains a given day, inclusive at both ends.
    pub fn contains(&self, day: &impl CalendarDay) -> bool {
        let day = day.calendar_day();
        self.start <= day && day <= self.end
    }

    /// Iterates every day of the range in ascending order
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
