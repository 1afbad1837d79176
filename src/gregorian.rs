//! The proleptic Gregorian calendar.

use crate::arith::{count_while, floor_div, modulo, sum_while};
use crate::consts::{
    DAYS_IN_100_YEARS, DAYS_IN_400_YEARS, DAYS_IN_4_YEARS, DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, DECEMBER, FEBRUARY,
    FEBRUARY_DAYS_LEAP,
};
use crate::error::{DateError, check_month_day, check_year};
use crate::generic::Calendar;
use crate::names::{GREGORIAN_MONTHS, lookup};
use crate::prelude::*;
use crate::types::AbsoluteDate;
use serde::{Deserialize, Serialize};

/// A Gregorian date. Years are astronomical: 1 BC is year 0.
///
/// Field order gives the derived ordering calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{} {} {}", day, "lookup(&GREGORIAN_MONTHS, *month)", year)]
pub struct GregorianDate {
    pub year:  i64,
    pub month: i64,
    pub day:   i64,
}

pub const fn is_leap_year(year: i64) -> bool {
    modulo(year, 4) == 0 && !matches!(modulo(year, 400), 100 | 200 | 300)
}

/// Number of days in `month` of `year`; zero for a month outside `1..=12`.
pub fn last_day_of_month(month: i64, year: i64) -> i64 {
    if month == FEBRUARY && is_leap_year(year) {
        return FEBRUARY_DAYS_LEAP;
    }
    usize::try_from(month)
        .ok()
        .and_then(|index| DAYS_IN_MONTH.get(index))
        .copied()
        .unwrap_or(0)
}

impl GregorianDate {
    /// Creates a new Gregorian date, validating month and day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` for a
    /// component outside the calendar.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        check_year(Calendar::Gregorian, "year", year)?;
        check_month_day(Calendar::Gregorian, year, month, day, DECEMBER, last_day_of_month(month, year))?;
        Ok(Self { year, month, day })
    }

    pub fn to_absolute(self) -> AbsoluteDate {
        let Self { year, month, day } = self;
        let prior_years = year - 1;
        let days_in_prior_months = sum_while(1, |m| last_day_of_month(m, year), |&m| m < month);
        AbsoluteDate::new(
            day + days_in_prior_months
                + DAYS_IN_COMMON_YEAR * prior_years
                + floor_div(prior_years, 4)
                - floor_div(prior_years, 100)
                + floor_div(prior_years, 400),
        )
    }

    pub fn from_absolute(date: AbsoluteDate) -> Self {
        let year = year_from_absolute(date);
        let month = 1 + count_while(1, |&m| {
            date > Self { year, month: m, day: last_day_of_month(m, year) }.to_absolute()
        });
        let first = Self { year, month, day: 1 }.to_absolute();
        Self { year, month, day: date - first + 1 }
    }

    /// Day number within the year, starting from 1 on January 1.
    pub fn day_of_year(self) -> i64 {
        self.to_absolute() - Self { year: self.year, month: 1, day: 1 }.to_absolute() + 1
    }
}

/// Gregorian year containing `date`, decoded from the 400/100/4/1-year cycles.
fn year_from_absolute(date: AbsoluteDate) -> i64 {
    let d0 = date.get() - 1;
    let n400 = floor_div(d0, DAYS_IN_400_YEARS);
    let d1 = modulo(d0, DAYS_IN_400_YEARS);
    let n100 = d1 / DAYS_IN_100_YEARS;
    let d2 = d1 % DAYS_IN_100_YEARS;
    let n4 = d2 / DAYS_IN_4_YEARS;
    let d3 = d2 % DAYS_IN_4_YEARS;
    let n1 = d3 / DAYS_IN_COMMON_YEAR;
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    // The last day of a leap cycle belongs to the year that is ending.
    if n100 == 4 || n1 == 4 { year } else { year + 1 }
}

impl From<GregorianDate> for AbsoluteDate {
    fn from(date: GregorianDate) -> Self {
        date.to_absolute()
    }
}

impl From<AbsoluteDate> for GregorianDate {
    fn from(date: AbsoluteDate) -> Self {
        Self::from_absolute(date)
    }
}
