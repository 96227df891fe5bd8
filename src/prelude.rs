//! Prelude module for the cycle_calendar crate.
//!
//! Re-exports the derive macros and chrono traits used across modules.

#[allow(unused_imports)]
pub use chrono::{Datelike, Days, NaiveDate};
pub use derive_more::Display;
