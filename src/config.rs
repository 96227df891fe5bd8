use serde::{Deserialize, Serialize};

use crate::{CycleInput, CycleLength, DEFAULT_LOOKBACK_DAYS, InputError, PeriodLength, prelude::*};

/// Values a fresh cycle form starts with.
///
/// "Today" is always passed in by the caller; nothing here reads the clock.
/// Missing fields deserialize to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub cycle_length:  CycleLength,
    pub period_length: PeriodLength,
    /// Days before today used as the last period start
    pub lookback_days: u16,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            cycle_length:  CycleLength::TYPICAL,
            period_length: PeriodLength::TYPICAL,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

impl FormDefaults {
    /// Builds the pre-filled input for a form opened on `today`
    ///
    /// # Errors
    /// Returns `InputError::DateOutOfRange` if the resulting last period
    /// start, or the predictions derived from it, leave the supported years.
    pub fn prefill(&self, today: NaiveDate) -> Result<CycleInput, InputError> {
        let last_period_start = today
            .checked_sub_days(Days::new(u64::from(self.lookback_days)))
            .ok_or(InputError::DateOutOfRange(today))?;
        CycleInput::new(self.cycle_length, self.period_length, last_period_start)
    }
}
