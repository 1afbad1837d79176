//! ISO 8601 week dates.

use crate::arith::{amod, floor_div};
use crate::consts::{DAYS_IN_WEEK, JANUARY};
use crate::error::{DateError, check_year};
use crate::generic::Calendar;
use crate::gregorian::GregorianDate;
use crate::prelude::*;
use crate::types::{AbsoluteDate, Weekday};
use serde::{Deserialize, Serialize};

/// An ISO week date: week-numbering year, week 1-53 and day 1 (Monday) to 7 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{year}-W{week:02}-{day}")]
pub struct IsoDate {
    pub year: i64,
    pub week: i64,
    pub day:  i64,
}

/// Monday of week 1: the Monday on or before January 4.
fn first_monday(year: i64) -> AbsoluteDate {
    GregorianDate { year, month: JANUARY, day: 4 }.to_absolute().k_day_on_or_before(Weekday::Monday)
}

/// Number of ISO weeks (52 or 53) in `year`.
pub fn weeks_in_year(year: i64) -> i64 {
    (first_monday(year + 1) - first_monday(year)) / DAYS_IN_WEEK
}

impl IsoDate {
    /// Creates a new ISO week date, validating week and day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidWeek` for a week past the end of `year`,
    /// or `DateError::InvalidComponent` for a day outside `1..=7`.
    pub fn new(year: i64, week: i64, day: i64) -> Result<Self, DateError> {
        check_year(Calendar::Iso, "year", year)?;
        if !(1..=weeks_in_year(year)).contains(&week) {
            return Err(DateError::InvalidWeek { year, week });
        }
        if !(1..=DAYS_IN_WEEK).contains(&day) {
            return Err(DateError::InvalidComponent { calendar: Calendar::Iso, name: "day", value: day });
        }
        Ok(Self { year, week, day })
    }

    pub fn to_absolute(self) -> AbsoluteDate {
        first_monday(self.year) + DAYS_IN_WEEK * (self.week - 1) + self.day - 1
    }

    pub fn from_absolute(date: AbsoluteDate) -> Self {
        let approx = GregorianDate::from_absolute(date - 3).year;
        let year = if date >= first_monday(approx + 1) { approx + 1 } else { approx };
        let week = 1 + floor_div(date - first_monday(year), DAYS_IN_WEEK);
        // Sunday is day 7 rather than 0.
        let day = amod(date.get(), DAYS_IN_WEEK);
        Self { year, week, day }
    }
}

impl From<IsoDate> for AbsoluteDate {
    fn from(date: IsoDate) -> Self {
        date.to_absolute()
    }
}

impl From<AbsoluteDate> for IsoDate {
    fn from(date: AbsoluteDate) -> Self {
        Self::from_absolute(date)
    }
}
