//! Cycle predictions and a month calendar overlay.
//!
//! [`calculate`] derives the next period, ovulation day, fertile window and
//! peak-fertility window from a validated [`CycleInput`]. [`calendar_days`]
//! lays a month out as a Sunday-first 6x7 grid and flags every cell against
//! those ranges.

mod calendar;
mod config;
mod consts;
mod format;
mod prelude;
mod range;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{CalendarMonth, DayStatus, calendar_days, calendar_weeks};
pub use config::FormDefaults;
pub use consts::*;
pub use format::{
    format_long, format_month_day, format_month_heading, format_range_short, format_short, format_window,
};
pub use range::{CalendarDay, DateRange, RangeError, is_same_day};
pub use types::{CycleLength, PeriodLength};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors raised while turning raw form values into a [`CycleInput`] or a
/// [`CalendarMonth`]. The calculations themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    #[display(
        fmt = "Invalid cycle length: {} (must be {}-{} days)",
        "_0",
        MIN_CYCLE_LENGTH,
        MAX_CYCLE_LENGTH
    )]
    InvalidCycleLength(u8),
    #[display(
        fmt = "Invalid period length: {} (must be {}-{} days)",
        "_0",
        MIN_PERIOD_LENGTH,
        MAX_PERIOD_LENGTH
    )]
    InvalidPeriodLength(u8),
    #[display(fmt = "Invalid number: {_0}")]
    InvalidNumber(String),
    #[display(fmt = "Invalid date: {_0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[display(fmt = "Date {_0} is outside the supported range")]
    DateOutOfRange(NaiveDate),
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", "MONTHS_PER_YEAR - 1")]
    InvalidMonth(u32),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Empty input")]
    EmptyInput,
}

impl std::error::Error for InputError {}

/// The three values a person enters to get predictions.
///
/// Every date derived from a `CycleInput` lies between 2 and 42 days after
/// `last_period_start`; construction rejects inputs whose derived dates
/// would leave years `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CycleInputFields")]
pub struct CycleInput {
    cycle_length:      CycleLength,
    period_length:     PeriodLength,
    last_period_start: NaiveDate,
}

#[derive(Deserialize)]
struct CycleInputFields {
    cycle_length:      CycleLength,
    period_length:     PeriodLength,
    last_period_start: NaiveDate,
}

impl TryFrom<CycleInputFields> for CycleInput {
    type Error = InputError;

    fn try_from(fields: CycleInputFields) -> Result<Self, Self::Error> {
        Self::new(fields.cycle_length, fields.period_length, fields.last_period_start)
    }
}

impl CycleInput {
    /// Creates a new input (lengths are already validated)
    ///
    /// # Errors
    /// Returns `InputError::DateOutOfRange` if the last period start, or the
    /// end of the predicted next period, falls outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(
        cycle_length: CycleLength,
        period_length: PeriodLength,
        last_period_start: NaiveDate,
    ) -> Result<Self, InputError> {
        let horizon = Days::new(u64::from(cycle_length.get()) + u64::from(period_length.get()));
        let latest = last_period_start
            .checked_add_days(horizon)
            .ok_or(InputError::DateOutOfRange(last_period_start))?;
        if last_period_start.year() < MIN_YEAR || latest.year() > MAX_YEAR {
            return Err(InputError::DateOutOfRange(last_period_start));
        }
        Ok(Self {
            cycle_length,
            period_length,
            last_period_start,
        })
    }

    /// Parses the raw strings of the cycle form.
    /// The date uses the `YYYY-MM-DD` form of an HTML date input.
    ///
    /// # Errors
    /// Returns an `InputError` for empty fields, non-numeric lengths,
    /// out-of-range lengths or an unparseable date.
    pub fn from_form(cycle_length: &str, period_length: &str, last_period_start: &str) -> Result<Self, InputError> {
        let cycle_length = cycle_length.parse::<CycleLength>()?;
        let period_length = period_length.parse::<PeriodLength>()?;

        let trimmed = last_period_start.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyInput);
        }
        let last_period_start = NaiveDate::parse_from_str(trimmed, FORM_DATE_FORMAT)
            .map_err(|_| InputError::InvalidDate(trimmed.to_owned()))?;

        Self::new(cycle_length, period_length, last_period_start)
    }

    /// The values a fresh form starts with, relative to `today`
    ///
    /// # Errors
    /// Returns `InputError::DateOutOfRange` if `today` is too close to either
    /// end of the supported years.
    pub fn prefilled(today: NaiveDate) -> Result<Self, InputError> {
        FormDefaults::default().prefill(today)
    }

    pub const fn cycle_length(&self) -> CycleLength {
        self.cycle_length
    }

    pub const fn period_length(&self) -> PeriodLength {
        self.period_length
    }

    pub const fn last_period_start(&self) -> NaiveDate {
        self.last_period_start
    }

    /// Shorthand for [`calculate`]
    pub fn calculate(&self) -> CycleCalculations {
        calculate(self)
    }
}

/// Predicted dates derived from one [`CycleInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CycleCalculations {
    next_period:             DateRange,
    ovulation_date:          NaiveDate,
    fertile_window:          DateRange,
    pregnancy_chance_window: DateRange,
}

impl CycleCalculations {
    /// First through last day of the next period (inclusive)
    pub const fn next_period(&self) -> DateRange {
        self.next_period
    }

    pub const fn next_period_start(&self) -> NaiveDate {
        self.next_period.start()
    }

    pub const fn next_period_end(&self) -> NaiveDate {
        self.next_period.end()
    }

    pub const fn ovulation_date(&self) -> NaiveDate {
        self.ovulation_date
    }

    pub const fn fertile_window(&self) -> DateRange {
        self.fertile_window
    }

    pub const fn fertile_window_start(&self) -> NaiveDate {
        self.fertile_window.start()
    }

    pub const fn fertile_window_end(&self) -> NaiveDate {
        self.fertile_window.end()
    }

    /// Peak-fertility days: a subset of the fertile window ending on ovulation
    pub const fn pregnancy_chance_window(&self) -> DateRange {
        self.pregnancy_chance_window
    }
}

/// Derives the predicted dates for one cycle.
///
/// Ovulation is placed `LUTEAL_PHASE_DAYS` before the next period whatever
/// the cycle length. The fertile window runs from 5 days before ovulation to
/// 1 day after; the pregnancy-chance window from 5 days before to the
/// ovulation day itself.
pub fn calculate(input: &CycleInput) -> CycleCalculations {
    let next_period_start = input.last_period_start + Days::new(u64::from(input.cycle_length.get()));
    let next_period = DateRange::around(next_period_start, 0, input.period_length.get());

    let ovulation_date = next_period_start - Days::new(u64::from(LUTEAL_PHASE_DAYS));
    let fertile_window = DateRange::around(
        ovulation_date,
        FERTILE_DAYS_BEFORE_OVULATION,
        FERTILE_DAYS_AFTER_OVULATION,
    );
    let pregnancy_chance_window = DateRange::around(ovulation_date, PEAK_DAYS_BEFORE_OVULATION, 0);

    debug!(
        cycle_length = input.cycle_length.get(),
        period_length = input.period_length.get(),
        last_period_start = %input.last_period_start,
        next_period = %next_period,
        ovulation_date = %ovulation_date,
        fertile_window = %fertile_window,
        "calculated cycle predictions"
    );

    CycleCalculations {
        next_period,
        ovulation_date,
        fertile_window,
        pregnancy_chance_window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, input, sample_input};

    #[test]
    fn test_reference_example() {
        let calc = calculate(&sample_input());

        assert_eq!(calc.next_period_start(), date(2024, 1, 29));
        assert_eq!(calc.next_period_end(), date(2024, 2, 3));
        assert_eq!(calc.ovulation_date(), date(2024, 1, 15));
        assert_eq!(calc.fertile_window_start(), date(2024, 1, 10));
        assert_eq!(calc.fertile_window_end(), date(2024, 1, 16));
        assert_eq!(
            calc.pregnancy_chance_window().dates(),
            (date(2024, 1, 10), date(2024, 1, 15))
        );
    }

    #[test]
    fn test_spans_hold_for_every_valid_input() {
        let start = date(2023, 12, 20);
        for cycle in MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH {
            for period in MIN_PERIOD_LENGTH..=MAX_PERIOD_LENGTH {
                let calc = calculate(&input(cycle, period, start));
                let label = format!("cycle {cycle}, period {period}");

                assert_eq!(calc.next_period().span_days(), i64::from(period), "{label}");
                assert_eq!(
                    calc.next_period_start()
                        .signed_duration_since(calc.ovulation_date())
                        .num_days(),
                    14,
                    "{label}"
                );
                assert_eq!(calc.fertile_window().span_days(), 6, "{label}");
                assert_eq!(calc.pregnancy_chance_window().span_days(), 5, "{label}");
            }
        }
    }

    #[test]
    fn test_window_ordering_invariants() {
        for cycle in [21, 28, 35] {
            let calc = calculate(&input(cycle, 5, date(2024, 2, 20)));
            let pregnancy = calc.pregnancy_chance_window();

            assert!(calc.next_period_end() >= calc.next_period_start());
            assert!(calc.fertile_window_start() <= calc.ovulation_date());
            assert!(calc.ovulation_date() <= calc.fertile_window_end());
            assert!(pregnancy.start() <= pregnancy.end());
            assert!(pregnancy.end() <= calc.ovulation_date());
            assert!(pregnancy.start() >= calc.fertile_window_start());
        }
    }

    #[test]
    fn test_ovulation_ignores_cycle_length() {
        let short = calculate(&input(21, 5, date(2024, 1, 1)));
        let long = calculate(&input(35, 5, date(2024, 1, 1)));

        assert_eq!(short.ovulation_date(), date(2024, 1, 8));
        assert_eq!(long.ovulation_date(), date(2024, 1, 22));
    }

    #[test]
    fn test_crosses_leap_day_and_year_end() {
        let calc = calculate(&input(30, 7, date(2024, 2, 10)));
        assert_eq!(calc.next_period_start(), date(2024, 3, 11));
        assert_eq!(calc.ovulation_date(), date(2024, 2, 26));
        assert_eq!(calc.fertile_window_end(), date(2024, 2, 27));

        let calc = calculate(&input(28, 5, date(2024, 12, 20)));
        assert_eq!(calc.next_period_start(), date(2025, 1, 17));
        assert_eq!(calc.next_period_end(), date(2025, 1, 22));
        assert_eq!(calc.fertile_window_start(), date(2024, 12, 29));
    }

    #[test]
    fn test_idempotent_and_input_untouched() {
        let input = sample_input();
        let first = calculate(&input);
        let second = input.calculate();

        assert_eq!(first, second);
        assert_eq!(input, sample_input());
        assert_eq!(input.last_period_start(), date(2024, 1, 1));
    }

    #[test]
    fn test_new_rejects_out_of_range_dates() {
        let cycle = CycleLength::new(35).unwrap();
        let period = PeriodLength::new(7).unwrap();

        let result = CycleInput::new(cycle, period, date(9999, 12, 1));
        assert!(matches!(result, Err(InputError::DateOutOfRange(_))));

        let result = CycleInput::new(cycle, period, date(0, 6, 1));
        assert!(matches!(result, Err(InputError::DateOutOfRange(_))));

        let result = CycleInput::new(cycle, period, date(9999, 11, 1));
        assert!(result.is_ok());
    }

    #[test]
    fn test_from_form() {
        let input = CycleInput::from_form("28", "5", "2024-01-01").unwrap();
        assert_eq!(input, sample_input());

        let input = CycleInput::from_form(" 30 ", " 4", " 2024-03-15 ").unwrap();
        assert_eq!(input.cycle_length().get(), 30);
        assert_eq!(input.period_length().get(), 4);
        assert_eq!(input.last_period_start(), date(2024, 3, 15));
    }

    #[test]
    fn test_from_form_errors() {
        struct TestCase {
            cycle:    &'static str,
            period:   &'static str,
            start:    &'static str,
            expected: InputError,
        }

        let cases = [
            TestCase {
                cycle:    "20",
                period:   "5",
                start:    "2024-01-01",
                expected: InputError::InvalidCycleLength(20),
            },
            TestCase {
                cycle:    "28",
                period:   "8",
                start:    "2024-01-01",
                expected: InputError::InvalidPeriodLength(8),
            },
            TestCase {
                cycle:    "28",
                period:   "5",
                start:    "",
                expected: InputError::EmptyInput,
            },
            TestCase {
                cycle:    "",
                period:   "5",
                start:    "2024-01-01",
                expected: InputError::EmptyInput,
            },
            TestCase {
                cycle:    "twenty",
                period:   "5",
                start:    "2024-01-01",
                expected: InputError::InvalidNumber("twenty".to_owned()),
            },
            TestCase {
                cycle:    "28",
                period:   "5",
                start:    "01/01/2024",
                expected: InputError::InvalidDate("01/01/2024".to_owned()),
            },
            TestCase {
                cycle:    "28",
                period:   "5",
                start:    "2023-02-29",
                expected: InputError::InvalidDate("2023-02-29".to_owned()),
            },
        ];

        for case in &cases {
            let result = CycleInput::from_form(case.cycle, case.period, case.start);
            assert_eq!(
                result,
                Err(case.expected.clone()),
                "cycle={:?} period={:?} start={:?}",
                case.cycle,
                case.period,
                case.start
            );
        }
    }

    #[test]
    fn test_prefilled() {
        let input = CycleInput::prefilled(date(2024, 3, 5)).unwrap();
        assert_eq!(input.cycle_length().get(), DEFAULT_CYCLE_LENGTH);
        assert_eq!(input.period_length().get(), DEFAULT_PERIOD_LENGTH);
        assert_eq!(input.last_period_start(), date(2024, 2, 27));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            InputError::InvalidCycleLength(40).to_string(),
            "Invalid cycle length: 40 (must be 21-35 days)"
        );
        assert_eq!(
            InputError::InvalidPeriodLength(9).to_string(),
            "Invalid period length: 9 (must be 3-7 days)"
        );
        assert_eq!(
            InputError::InvalidMonth(12).to_string(),
            "Invalid month index: 12 (must be 0-11)"
        );
        assert_eq!(InputError::EmptyInput.to_string(), "Empty input");
    }

    #[test]
    fn test_input_serde() {
        let input = sample_input();
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(
            json,
            r#"{"cycle_length":28,"period_length":5,"last_period_start":"2024-01-01"}"#
        );
        let parsed: CycleInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, parsed);
    }

    #[test]
    fn test_input_serde_validation() {
        let json = r#"{"cycle_length":40,"period_length":5,"last_period_start":"2024-01-01"}"#;
        let result: Result<CycleInput, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let json = r#"{"cycle_length":28,"period_length":5,"last_period_start":"9999-12-20"}"#;
        let result: Result<CycleInput, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_calculations_serde() {
        let calc = calculate(&sample_input());
        let value = serde_json::to_value(calc).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "next_period": "2024-01-29/2024-02-03",
                "ovulation_date": "2024-01-15",
                "fertile_window": "2024-01-10/2024-01-16",
                "pregnancy_chance_window": "2024-01-10/2024-01-15",
            })
        );
    }
}
