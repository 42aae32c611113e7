//! Canonical daily key resolution.
//!
//! Records are keyed by locale-independent ISO `YYYY-MM-DD` dates. The key
//! for "today" is a pure function of wall-clock time; everything else in
//! the engine takes explicit dates so tests never depend on the clock.

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;

/// ISO date key format used for storage keys and the history feed.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Today's canonical date key in the record owner's local calendar.
#[must_use]
pub fn today_key() -> NaiveDate {
    Local::now().date_naive()
}

/// Render a date as its canonical `YYYY-MM-DD` key.
#[must_use]
pub fn format_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a canonical `YYYY-MM-DD` key back into a date.
///
/// # Errors
///
/// Returns an error when the key is not a valid ISO calendar date.
pub fn parse_key(key: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|_| ValidationError::BadDateKey(key.to_string()))
}

/// First day of an N-day history window ending on `end` (inclusive).
#[must_use]
pub fn window_start(end: NaiveDate, days: usize) -> NaiveDate {
    let back = u64::try_from(days.saturating_sub(1)).unwrap_or(u64::MAX);
    end.checked_sub_days(chrono::Days::new(back))
        .unwrap_or(NaiveDate::MIN)
}
