/// Shortest accepted average cycle length, in days
pub const MIN_CYCLE_LENGTH: u8 = 21;
/// Longest accepted average cycle length, in days
pub const MAX_CYCLE_LENGTH: u8 = 35;

/// Shortest accepted period length, in days
pub const MIN_PERIOD_LENGTH: u8 = 3;
/// Longest accepted period length, in days
pub const MAX_PERIOD_LENGTH: u8 = 7;

/// Days between ovulation and the start of the next period.
///
/// Modeled as a constant luteal phase: the follicular phase absorbs all
/// variation in cycle length, so this does not depend on the cycle length.
pub const LUTEAL_PHASE_DAYS: u8 = 14;

/// Days before ovulation at which the fertile window opens
pub const FERTILE_DAYS_BEFORE_OVULATION: u8 = 5;
/// Days after ovulation at which the fertile window closes
pub const FERTILE_DAYS_AFTER_OVULATION: u8 = 1;
/// Days before ovulation at which the peak-fertility window opens
/// (it closes on the ovulation day itself)
pub const PEAK_DAYS_BEFORE_OVULATION: u8 = 5;

/// Earliest supported year for a last period start
pub const MIN_YEAR: i32 = 1;
/// Latest supported year for a last period start
pub const MAX_YEAR: i32 = 9999;

/// Months per year, used for zero-based month validation
pub const MONTHS_PER_YEAR: u32 = 12;
/// Days per calendar row
pub const DAYS_PER_WEEK: usize = 7;
/// Rows in a rendered month
pub const WEEKS_PER_GRID: usize = 6;
/// Cells in a rendered month (6 rows of 7 days, starting Sunday)
pub const GRID_DAYS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// Cycle length pre-filled in a fresh form
pub const DEFAULT_CYCLE_LENGTH: u8 = 28;
/// Period length pre-filled in a fresh form
pub const DEFAULT_PERIOD_LENGTH: u8 = 5;
/// How many days before "today" the pre-filled last period start lies
pub const DEFAULT_LOOKBACK_DAYS: u16 = 7;

/// Form date input format (ISO 8601 calendar date)
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";
/// Long display format: `Monday, January 15, 2024`
pub const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";
/// Short display format: `01/15/2024`
pub const SHORT_DATE_FORMAT: &str = "%m/%d/%Y";
/// Month and day format: `Jan 10`
pub const MONTH_DAY_FORMAT: &str = "%b %-d";
/// Calendar heading format: `January 2024`
pub const MONTH_HEADING_FORMAT: &str = "%B %Y";
