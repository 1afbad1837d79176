//! The arithmetic Hebrew calendar.
//!
//! Months are numbered from Nisan (1), but the year begins on 1 Tishri
//! (month 7). Leap years of the 19-year Metonic cycle add a thirteenth
//! month, Adar II.

use crate::arith::{count_while, floor_div, modulo, sum_while};
use crate::consts::HEBREW_EPOCH_OFFSET;
use crate::error::{DateError, check_month_day, check_year};
use crate::generic::Calendar;
use crate::names::{HEBREW_ADAR_I, HEBREW_MONTHS, lookup};
use crate::prelude::*;
use crate::types::AbsoluteDate;
use serde::{Deserialize, Serialize};

/// First month of the civil year
pub const TISHRI: i64 = 7;
/// Month number of Adar, or Adar I in a leap year
pub const ADAR: i64 = 12;
/// Month number of Adar II
pub const ADAR_II: i64 = 13;

/// Halakim (parts) in an hour
const PARTS_PER_HOUR: i64 = 1080;
/// Noon, in parts after the start of the day at 6 pm
const NOON: i64 = 18 * PARTS_PER_HOUR;

/// A Hebrew date.
///
/// The derived ordering compares month numbers, not position in the year,
/// so it is only meaningful within the same half year. Compare absolute
/// dates for calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{} {} {}", day, "month_name(*month, *year)", year)]
pub struct HebrewDate {
    pub year:  i64,
    pub month: i64,
    pub day:   i64,
}

/// Name of `month` in `year`, distinguishing Adar I and Adar II in leap years.
pub fn month_name(month: i64, year: i64) -> &'static str {
    if month == ADAR && is_leap_year(year) { HEBREW_ADAR_I } else { lookup(&HEBREW_MONTHS, month) }
}

/// Years 3, 6, 8, 11, 14, 17 and 19 of each Metonic cycle are leap years.
pub const fn is_leap_year(year: i64) -> bool {
    modulo(1 + 7 * year, 19) < 7
}

pub const fn last_month_of_year(year: i64) -> i64 {
    if is_leap_year(year) { ADAR_II } else { ADAR }
}

/// Days from the Hebrew epoch to 1 Tishri of `year`, after the postponement rules.
pub const fn elapsed_days(year: i64) -> i64 {
    let prior_years = year - 1;
    let months_elapsed = 235 * floor_div(prior_years, 19)
        + 12 * modulo(prior_years, 19)
        + floor_div(7 * modulo(prior_years, 19) + 1, 19);
    let parts_elapsed = 204 + 793 * modulo(months_elapsed, PARTS_PER_HOUR);
    let hours_elapsed = 5
        + 12 * months_elapsed
        + 793 * floor_div(months_elapsed, PARTS_PER_HOUR)
        + floor_div(parts_elapsed, PARTS_PER_HOUR);
    let day = 1 + 29 * months_elapsed + floor_div(hours_elapsed, 24);
    let parts = PARTS_PER_HOUR * modulo(hours_elapsed, 24) + modulo(parts_elapsed, PARTS_PER_HOUR);

    let postponed = if parts >= NOON
        || (modulo(day, 7) == 2 && parts >= 9924 && !is_leap_year(year))
        || (modulo(day, 7) == 1 && parts >= 16789 && is_leap_year(year - 1))
    {
        day + 1
    } else {
        day
    };

    // 1 Tishri never falls on Sunday, Wednesday or Friday.
    if matches!(modulo(postponed, 7), 0 | 3 | 5) { postponed + 1 } else { postponed }
}

pub const fn days_in_year(year: i64) -> i64 {
    elapsed_days(year + 1) - elapsed_days(year)
}

/// Heshvan has 30 days in a complete year (355 or 385 days).
pub const fn long_heshvan(year: i64) -> bool {
    modulo(days_in_year(year), 10) == 5
}

/// Kislev has 29 days in a deficient year (353 or 383 days).
pub const fn short_kislev(year: i64) -> bool {
    modulo(days_in_year(year), 10) == 3
}

pub const fn last_day_of_month(month: i64, year: i64) -> i64 {
    let short = matches!(month, 2 | 4 | 6 | 10 | 13)
        || (month == ADAR && !is_leap_year(year))
        || (month == 8 && !long_heshvan(year))
        || (month == 9 && short_kislev(year));
    if short { 29 } else { 30 }
}

impl HebrewDate {
    /// Creates a new Hebrew date, validating month and day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for Adar II in a common year or any
    /// month outside `1..=13`, and `DateError::InvalidDay` for a day past the
    /// end of the month.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        check_year(Calendar::Hebrew, "year", year)?;
        check_month_day(
            Calendar::Hebrew,
            year,
            month,
            day,
            last_month_of_year(year),
            last_day_of_month(month, year),
        )?;
        Ok(Self { year, month, day })
    }

    pub fn to_absolute(self) -> AbsoluteDate {
        let Self { year, month, day } = self;
        let month_length = |m| last_day_of_month(m, year);
        let days_in_prior_months = if month < TISHRI {
            sum_while(TISHRI, month_length, |&m| m <= last_month_of_year(year)) + sum_while(1, month_length, |&m| m < month)
        } else {
            sum_while(TISHRI, month_length, |&m| m < month)
        };
        AbsoluteDate::new(day + days_in_prior_months + elapsed_days(year) + HEBREW_EPOCH_OFFSET)
    }

    pub fn from_absolute(date: AbsoluteDate) -> Self {
        let approx = floor_div(date.get() - HEBREW_EPOCH_OFFSET, 366);
        let year = approx + count_while(approx, |&y| date >= Self { year: y + 1, month: TISHRI, day: 1 }.to_absolute());
        let nisan_first = Self { year, month: 1, day: 1 }.to_absolute();
        let start = if date < nisan_first { TISHRI } else { 1 };
        let month = start + count_while(start, |&m| {
            date > Self { year, month: m, day: last_day_of_month(m, year) }.to_absolute()
        });
        let first = Self { year, month, day: 1 }.to_absolute();
        Self { year, month, day: date - first + 1 }
    }
}

impl From<HebrewDate> for AbsoluteDate {
    fn from(date: HebrewDate) -> Self {
        date.to_absolute()
    }
}

impl From<AbsoluteDate> for HebrewDate {
    fn from(date: AbsoluteDate) -> Self {
        Self::from_absolute(date)
    }
}
