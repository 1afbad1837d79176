//! The Julian calendar: Gregorian months with a leap day every fourth year.

use crate::arith::{count_while, floor_div, modulo, sum_while};
use crate::consts::{DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, JULIAN_EPOCH};
use crate::error::{DateError, check_month_day, check_year};
use crate::generic::Calendar;
use crate::names::{GREGORIAN_MONTHS, lookup};
use crate::prelude::*;
use crate::types::AbsoluteDate;
use serde::{Deserialize, Serialize};

/// A Julian date. Years are astronomical, as for [`GregorianDate`](crate::gregorian::GregorianDate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{} {} {} (Julian)", day, "lookup(&GREGORIAN_MONTHS, *month)", year)]
pub struct JulianDate {
    pub year:  i64,
    pub month: i64,
    pub day:   i64,
}

pub const fn is_leap_year(year: i64) -> bool {
    modulo(year, 4) == 0
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

impl JulianDate {
    /// Creates a new Julian date, validating month and day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` for a
    /// component outside the calendar.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        check_year(Calendar::Julian, "year", year)?;
        check_month_day(Calendar::Julian, year, month, day, DECEMBER, last_day_of_month(month, year))?;
        Ok(Self { year, month, day })
    }

    pub fn to_absolute(self) -> AbsoluteDate {
        let Self { year, month, day } = self;
        let prior_years = year - 1;
        let days_in_prior_months = sum_while(1, |m| last_day_of_month(m, year), |&m| m < month);
        AbsoluteDate::new(
            JULIAN_EPOCH - 1 + DAYS_IN_COMMON_YEAR * prior_years + floor_div(prior_years, 4) + days_in_prior_months + day,
        )
    }

    pub fn from_absolute(date: AbsoluteDate) -> Self {
        let approx = floor_div(date.get() - JULIAN_EPOCH + 1, 366);
        let year = approx + count_while(approx, |&y| date >= Self { year: y + 1, month: 1, day: 1 }.to_absolute());
        let month = 1 + count_while(1, |&m| {
            date > Self { year, month: m, day: last_day_of_month(m, year) }.to_absolute()
        });
        let first = Self { year, month, day: 1 }.to_absolute();
        Self { year, month, day: date - first + 1 }
    }
}

impl From<JulianDate> for AbsoluteDate {
    fn from(date: JulianDate) -> Self {
        date.to_absolute()
    }
}

impl From<AbsoluteDate> for JulianDate {
    fn from(date: AbsoluteDate) -> Self {
        Self::from_absolute(date)
    }
}
