//! Shared constructors for unit tests.

use crate::{CycleInput, CycleLength, DateRange, PeriodLength};
use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange::new(start, end).expect("well ordered test range")
}

pub fn input(cycle_length: u8, period_length: u8, last_period_start: NaiveDate) -> CycleInput {
    CycleInput::new(
        CycleLength::new(cycle_length).expect("valid test cycle length"),
        PeriodLength::new(period_length).expect("valid test period length"),
        last_period_start,
    )
    .expect("valid test input")
}

/// 28-day cycle, 5-day period, last period starting 2024-01-01
pub fn sample_input() -> CycleInput {
    input(28, 5, date(2024, 1, 1))
}
