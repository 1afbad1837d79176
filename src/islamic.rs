//! The arithmetic Islamic calendar.

use crate::arith::{count_while, floor_div, modulo};
use crate::consts::{DECEMBER, ISLAMIC_EPOCH};
use crate::error::{ConversionError, DateError, check_month_day, check_year};
use crate::generic::Calendar;
use crate::names::{ISLAMIC_MONTHS, lookup};
use crate::prelude::*;
use crate::types::AbsoluteDate;
use serde::{Deserialize, Serialize};

/// An Islamic date. Year 1 begins on the Julian date July 16, 622.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{} {} {}", day, "lookup(&ISLAMIC_MONTHS, *month)", year)]
pub struct IslamicDate {
    pub year:  i64,
    pub month: i64,
    pub day:   i64,
}

/// Eleven years of every thirty are leap years.
pub const fn is_leap_year(year: i64) -> bool {
    modulo(14 + 11 * year, 30) < 11
}

/// Odd months have 30 days, even months 29, and the last month gains a day in leap years.
pub const fn last_day_of_month(month: i64, year: i64) -> i64 {
    if modulo(month, 2) == 1 || (month == DECEMBER && is_leap_year(year)) { 30 } else { 29 }
}

impl IslamicDate {
    /// Creates a new Islamic date, validating month and day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` for a
    /// component outside the calendar.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        check_year(Calendar::Islamic, "year", year)?;
        check_month_day(Calendar::Islamic, year, month, day, DECEMBER, last_day_of_month(month, year))?;
        Ok(Self { year, month, day })
    }

    pub const fn to_absolute(self) -> AbsoluteDate {
        let Self { year, month, day } = self;
        AbsoluteDate::new(
            day + 29 * (month - 1)
                + floor_div(month, 2)
                + 354 * (year - 1)
                + floor_div(3 + 11 * year, 30)
                + ISLAMIC_EPOCH
                - 1,
        )
    }

    /// Converts an absolute date to the Islamic calendar.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfDomain` for dates before the Islamic epoch.
    pub fn from_absolute(date: AbsoluteDate) -> Result<Self, ConversionError> {
        let epoch = AbsoluteDate::new(ISLAMIC_EPOCH);
        if date < epoch {
            return Err(ConversionError::OutOfDomain { calendar: Calendar::Islamic, date, epoch });
        }
        let approx = floor_div(date - epoch + 1, 355);
        let year = approx + count_while(approx, |&y| date >= Self { year: y + 1, month: 1, day: 1 }.to_absolute());
        let month = 1 + count_while(1, |&m| {
            date > Self { year, month: m, day: last_day_of_month(m, year) }.to_absolute()
        });
        let first = Self { year, month, day: 1 }.to_absolute();
        Ok(Self { year, month, day: date - first + 1 })
    }
}

impl From<IslamicDate> for AbsoluteDate {
    fn from(date: IslamicDate) -> Self {
        date.to_absolute()
    }
}

impl TryFrom<AbsoluteDate> for IslamicDate {
    type Error = ConversionError;

    fn try_from(date: AbsoluteDate) -> Result<Self, Self::Error> {
        Self::from_absolute(date)
    }
}
