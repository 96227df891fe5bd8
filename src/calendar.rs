use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::{
    CycleCalculations, DAYS_PER_WEEK, GRID_DAYS, InputError, MAX_YEAR, MIN_YEAR, MONTHS_PER_YEAR,
    WEEKS_PER_GRID, format::format_month_heading, is_same_day, prelude::*,
};

/// A displayable month, identified by year and zero-based month (0 = January).
/// Years are limited to `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// Creates a month from a year and a zero-based month index
    ///
    /// # Errors
    /// Returns `InputError::InvalidMonth` if `month0` is not in 0..=11 and
    /// `InputError::InvalidYear` if the year is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(year: i32, month0: u32) -> Result<Self, InputError> {
        if month0 >= MONTHS_PER_YEAR {
            return Err(InputError::InvalidMonth(month0));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(InputError::InvalidYear(year));
        }
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(InputError::InvalidYear(year))?;
        Ok(Self { first })
    }

    /// The month a given date falls in
    ///
    /// # Errors
    /// Returns `InputError::InvalidYear` if the date's year is unsupported.
    pub fn containing(date: NaiveDate) -> Result<Self, InputError> {
        Self::new(date.year(), date.month0())
    }

    /// The month a calendar opens on: the one holding `today`, whatever the
    /// predicted dates are
    ///
    /// # Errors
    /// Returns `InputError::InvalidYear` if `today` is outside the supported years.
    pub fn opening(today: NaiveDate) -> Result<Self, InputError> {
        Self::containing(today)
    }

    pub const fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Zero-based month (0 = January)
    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    /// The month before this one, or `None` before January of `MIN_YEAR`
    pub fn previous(&self) -> Option<Self> {
        match self.month0() {
            0 => Self::new(self.year() - 1, MONTHS_PER_YEAR - 1).ok(),
            m => Self::new(self.year(), m - 1).ok(),
        }
    }

    /// The month after this one, or `None` past December of `MAX_YEAR`
    pub fn next(&self) -> Option<Self> {
        match self.month0() + 1 {
            MONTHS_PER_YEAR => Self::new(self.year() + 1, 0).ok(),
            m => Self::new(self.year(), m).ok(),
        }
    }

    /// The Sunday on or before the first of the month
    pub fn grid_start(&self) -> NaiveDate {
        let lead = self.first.weekday().num_days_from_sunday();
        self.first - Days::new(u64::from(lead))
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_month_heading(*self))
    }
}

/// One cell of a rendered month, flagged against the predicted ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayStatus {
    pub date:                       NaiveDate,
    pub day_of_month:               u32,
    pub is_current_month:           bool,
    pub is_period_day:              bool,
    pub is_ovulation_day:           bool,
    pub is_fertile_window:          bool,
    pub is_pregnancy_chance_window: bool,
}

impl DayStatus {
    /// Classifies a single day shown while `month` is on screen
    pub fn classify(date: NaiveDate, month: CalendarMonth, calculations: &CycleCalculations) -> Self {
        Self {
            date,
            day_of_month: date.day(),
            is_current_month: date.year() == month.year() && date.month0() == month.month0(),
            is_period_day: calculations.next_period().contains(&date),
            is_ovulation_day: is_same_day(&date, &calculations.ovulation_date()),
            is_fertile_window: calculations.fertile_window().contains(&date),
            is_pregnancy_chance_window: calculations.pregnancy_chance_window().contains(&date),
        }
    }
}

/// Lays out `month` as 42 consecutive days starting on the Sunday on or
/// before the 1st, each classified against `calculations`.
///
/// Leading and trailing days from the neighbouring months are classified
/// too; only `is_current_month` tells them apart.
pub fn calendar_days(month: CalendarMonth, calculations: &CycleCalculations) -> [DayStatus; GRID_DAYS] {
    let start = month.grid_start();
    let grid: [DayStatus; GRID_DAYS] = std::array::from_fn(|offset| {
        DayStatus::classify(start + Days::new(offset as u64), month, calculations)
    });

    debug!(
        month = %month,
        grid_start = %start,
        period_days = grid.iter().filter(|d| d.is_period_day).count(),
        fertile_days = grid.iter().filter(|d| d.is_fertile_window).count(),
        "classified calendar month"
    );

    grid
}

/// [`calendar_days`] split into six Sunday-first rows
pub fn calendar_weeks(
    month: CalendarMonth,
    calculations: &CycleCalculations,
) -> [[DayStatus; DAYS_PER_WEEK]; WEEKS_PER_GRID] {
    let days = calendar_days(month, calculations);
    std::array::from_fn(|row| std::array::from_fn(|col| days[row * DAYS_PER_WEEK + col]))
}
