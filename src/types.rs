use crate::InputError;
use crate::consts::{
    DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH, MAX_CYCLE_LENGTH, MAX_PERIOD_LENGTH, MIN_CYCLE_LENGTH,
    MIN_PERIOD_LENGTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An average cycle length in days, guaranteed to be in the range
/// `MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH` (21..=35).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CycleLength(u8);

impl CycleLength {
    /// The textbook 28-day cycle
    pub const TYPICAL: Self = Self(DEFAULT_CYCLE_LENGTH);

    /// Creates a new `CycleLength`, validating the accepted range
    ///
    /// # Errors
    /// Returns `InputError::InvalidCycleLength` if the value is outside 21..=35.
    pub fn new(value: u8) -> Result<Self, InputError> {
        if !(MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&value) {
            return Err(InputError::InvalidCycleLength(value));
        }
        Ok(Self(value))
    }

    /// Returns the length in days
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CycleLength {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CycleLength> for u8 {
    fn from(length: CycleLength) -> Self {
        length.0
    }
}

impl FromStr for CycleLength {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_days(s)?)
    }
}

impl fmt::Display for CycleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A period length in days, guaranteed to be in the range
/// `MIN_PERIOD_LENGTH..=MAX_PERIOD_LENGTH` (3..=7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PeriodLength(u8);

impl PeriodLength {
    /// A 5-day period
    pub const TYPICAL: Self = Self(DEFAULT_PERIOD_LENGTH);

    /// Creates a new `PeriodLength`, validating the accepted range
    ///
    /// # Errors
    /// Returns `InputError::InvalidPeriodLength` if the value is outside 3..=7.
    pub fn new(value: u8) -> Result<Self, InputError> {
        if !(MIN_PERIOD_LENGTH..=MAX_PERIOD_LENGTH).contains(&value) {
            return Err(InputError::InvalidPeriodLength(value));
        }
        Ok(Self(value))
    }

    /// Returns the length in days
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PeriodLength {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PeriodLength> for u8 {
    fn from(length: PeriodLength) -> Self {
        length.0
    }
}

impl FromStr for PeriodLength {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_days(s)?)
    }
}

impl fmt::Display for PeriodLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for CycleLength {
    fn default() -> Self {
        Self::TYPICAL
    }
}

impl Default for PeriodLength {
    fn default() -> Self {
        Self::TYPICAL
    }
}

/// Parses a day count typed into a form field
fn parse_days(s: &str) -> Result<u8, InputError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyInput);
    }
    trimmed
        .parse::<u8>()
        .map_err(|_| InputError::InvalidNumber(trimmed.to_owned()))
}
