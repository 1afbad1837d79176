use crate::consts::MAX_YEAR;
use crate::generic::Calendar;
use crate::prelude::*;
use crate::types::AbsoluteDate;

/// A calendar date component outside the range its calendar allows.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid {calendar} month: {month} (must be 1-{max})")]
    InvalidMonth { calendar: Calendar, month: i64, max: i64 },
    #[display(fmt = "Invalid day {day} for {calendar} month {year}-{month:02}")]
    InvalidDay { calendar: Calendar, year: i64, month: i64, day: i64 },
    #[display(fmt = "Invalid ISO week {week} for year {year}")]
    InvalidWeek { year: i64, week: i64 },
    #[display(fmt = "Invalid {calendar} {name}: {value}")]
    InvalidComponent { calendar: Calendar, name: &'static str, value: i64 },
    #[display(fmt = "Invalid weekday: {_0} (must be 0-6)")]
    InvalidWeekday(i64),
    #[display(fmt = "Wrong number of {calendar} components: expected {expected}, found {found}")]
    WrongComponentCount { calendar: Calendar, expected: usize, found: usize },
}

impl std::error::Error for DateError {}

/// Checks a year (or baktun) `value` against `-MAX_YEAR..=MAX_YEAR`.
pub(crate) const fn check_year(calendar: Calendar, name: &'static str, value: i64) -> Result<(), DateError> {
    if value < -MAX_YEAR || value > MAX_YEAR {
        return Err(DateError::InvalidComponent { calendar, name, value });
    }
    Ok(())
}

/// Checks `month` against `1..=max_month` and `day` against `1..=last_day`.
pub(crate) const fn check_month_day(
    calendar: Calendar,
    year: i64,
    month: i64,
    day: i64,
    max_month: i64,
    last_day: i64,
) -> Result<(), DateError> {
    if month < 1 || month > max_month {
        return Err(DateError::InvalidMonth { calendar, month, max: max_month });
    }
    if day < 1 || day > last_day {
        return Err(DateError::InvalidDay { calendar, year, month, day });
    }
    Ok(())
}

/// Error type for conversions between calendars.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The absolute date precedes the first day the calendar can represent.
    #[error("Absolute date {date} precedes the {calendar} epoch ({epoch})")]
    OutOfDomain { calendar: Calendar, date: AbsoluteDate, epoch: AbsoluteDate },

    /// No day carries the requested calendar date.
    #[error("No absolute date matches {calendar} date {wanted}")]
    NoSolution { calendar: Calendar, wanted: String },

    /// Cyclical calendars name a day within a cycle, not a position on the timeline.
    #[error("The {0} calendar is cyclical and has no absolute dates")]
    NotAbsolute(Calendar),

    #[error("Unknown calendar: {0}")]
    UnknownCalendar(String),

    /// Error validating a date component.
    #[error(transparent)]
    InvalidDate(#[from] DateError),
}
