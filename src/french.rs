//! The French Revolutionary calendar, arithmetic form.
//!
//! Twelve months of thirty days followed by five or six complementary
//! days, counted here as month 13.

use crate::arith::{count_while, floor_div, modulo};
use crate::consts::FRENCH_EPOCH;
use crate::error::{ConversionError, DateError, check_month_day, check_year};
use crate::generic::Calendar;
use crate::names::{FRENCH_MONTHS, lookup};
use crate::prelude::*;
use crate::types::AbsoluteDate;
use serde::{Deserialize, Serialize};

/// Month number of the complementary days
pub const COMPLEMENTARY_DAYS: i64 = 13;

/// A French Revolutionary date. Year 1 began on September 22, 1792.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{} {} an {}", day, "lookup(&FRENCH_MONTHS, *month)", year)]
pub struct FrenchDate {
    pub year:  i64,
    pub month: i64,
    pub day:   i64,
}

/// Years 3, 7, 11, 15 and 20 were leap years as observed; afterwards the
/// Gregorian rule applies, with years divisible by 4000 common.
pub const fn is_leap_year(year: i64) -> bool {
    match year {
        3 | 7 | 11 | 15 | 20 => true,
        ..=20 => false,
        _ => modulo(year, 4) == 0 && !matches!(modulo(year, 400), 100 | 200 | 300) && modulo(year, 4000) != 0,
    }
}

pub const fn last_day_of_month(month: i64, year: i64) -> i64 {
    if month < COMPLEMENTARY_DAYS {
        30
    } else if is_leap_year(year) {
        6
    } else {
        5
    }
}

impl FrenchDate {
    /// Creates a new French Revolutionary date, validating month and day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` for a
    /// component outside the calendar.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        check_year(Calendar::French, "year", year)?;
        check_month_day(Calendar::French, year, month, day, COMPLEMENTARY_DAYS, last_day_of_month(month, year))?;
        Ok(Self { year, month, day })
    }

    pub const fn to_absolute(self) -> AbsoluteDate {
        let Self { year, month, day } = self;
        let prior_years = year - 1;
        let leap_days = if year < 20 {
            floor_div(year, 4)
        } else {
            floor_div(prior_years, 4) - floor_div(prior_years, 100) + floor_div(prior_years, 400)
                - floor_div(prior_years, 4000)
        };
        AbsoluteDate::new(FRENCH_EPOCH - 1 + 365 * prior_years + leap_days + 30 * (month - 1) + day)
    }

    /// Converts an absolute date to the French Revolutionary calendar.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfDomain` for dates before 1 Vendémiaire an 1.
    pub fn from_absolute(date: AbsoluteDate) -> Result<Self, ConversionError> {
        let epoch = AbsoluteDate::new(FRENCH_EPOCH);
        if date < epoch {
            return Err(ConversionError::OutOfDomain { calendar: Calendar::French, date, epoch });
        }
        let approx = floor_div(date - epoch + 1, 366);
        let year = approx + count_while(approx, |&y| date >= Self { year: y + 1, month: 1, day: 1 }.to_absolute());
        let month = 1 + count_while(1, |&m| {
            date > Self { year, month: m, day: last_day_of_month(m, year) }.to_absolute()
        });
        let first = Self { year, month, day: 1 }.to_absolute();
        Ok(Self { year, month, day: date - first + 1 })
    }
}

impl From<FrenchDate> for AbsoluteDate {
    fn from(date: FrenchDate) -> Self {
        date.to_absolute()
    }
}

impl TryFrom<AbsoluteDate> for FrenchDate {
    type Error = ConversionError;

    fn try_from(date: AbsoluteDate) -> Result<Self, Self::Error> {
        Self::from_absolute(date)
    }
}
