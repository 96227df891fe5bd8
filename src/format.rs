//! Fixed-locale (`en-US`) renderings of predicted dates.

use crate::{
    CalendarDay, CalendarMonth, DateRange, LONG_DATE_FORMAT, MONTH_DAY_FORMAT, MONTH_HEADING_FORMAT,
    SHORT_DATE_FORMAT,
};

/// `Monday, January 15, 2024`
pub fn format_long(date: &impl CalendarDay) -> String {
    date.calendar_day().format(LONG_DATE_FORMAT).to_string()
}

/// `01/15/2024`
pub fn format_short(date: &impl CalendarDay) -> String {
    date.calendar_day().format(SHORT_DATE_FORMAT).to_string()
}

/// Both ends of a range in short form: `01/29/2024 - 02/03/2024`
pub fn format_range_short(range: &DateRange) -> String {
    format!("{} - {}", format_short(&range.start()), format_short(&range.end()))
}

/// `Jan 10`
pub fn format_month_day(date: &impl CalendarDay) -> String {
    date.calendar_day().format(MONTH_DAY_FORMAT).to_string()
}

/// A window by month and day: `Jan 10 - Jan 16`
pub fn format_window(range: &DateRange) -> String {
    format!("{} - {}", format_month_day(&range.start()), format_month_day(&range.end()))
}

/// Calendar heading: `January 2024`
pub fn format_month_heading(month: CalendarMonth) -> String {
    month.first_day().format(MONTH_HEADING_FORMAT).to_string()
}
