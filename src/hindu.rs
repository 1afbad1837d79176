//! The Old Hindu (Arya Siddhanta) solar and lunisolar calendars.
//!
//! Both calendars count from the Kali Yuga epoch and use mean motions of
//! the sun and moon. Every period is an exact [`Rational`], so conversions
//! do not drift however far they are from the epoch.
//!
//! Days begin at mean sunrise, a quarter day after midnight.

use crate::arith::{amod, count_while};
use crate::consts::HINDU_DAYS_BEFORE_ABSOLUTE_ZERO;
use crate::error::{ConversionError, DateError, check_month_day, check_year};
use crate::generic::Calendar;
use crate::names::{HINDU_LUNAR_MONTHS, HINDU_SOLAR_MONTHS, lookup};
use crate::prelude::*;
use crate::rational::Rational;
use crate::types::AbsoluteDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Mean sidereal year, 365 279457/1080000 days
pub const SIDEREAL_YEAR: Rational = Rational::mixed(365, 279_457, 1_080_000);
/// One twelfth of a sidereal year
pub const SOLAR_MONTH: Rational = Rational::new(SIDEREAL_YEAR.numer(), SIDEREAL_YEAR.denom() * 12);
/// Mean sidereal month, 27 4644439/14438334 days
pub const SIDEREAL_MONTH: Rational = Rational::mixed(27, 4_644_439, 14_438_334);
/// Mean synodic month, 29 7087771/13358334 days
pub const SYNODIC_MONTH: Rational = Rational::mixed(29, 7_087_771, 13_358_334);

const SUNRISE: Rational = Rational::new(1, 4);
const MONTHS_IN_YEAR: i64 = 12;
/// Mean solar months run 30 or 31 days.
const MAX_SOLAR_DAY: i64 = 31;
const MAX_LUNAR_DAY: i64 = 30;

/// Prefix for an intercalated (leap) lunar month
const LEAP_MONTH_PREFIX: &str = "Adhika ";

/// Midnight starting `date`, in days since the Kali Yuga epoch.
const fn hindu_day_count(date: AbsoluteDate) -> Rational {
    Rational::from_integer(date.get() + HINDU_DAYS_BEFORE_ABSOLUTE_ZERO)
}

/// Mean sidereal longitude of the sun at time `t`, in degrees `[0, 360)`.
pub fn solar_longitude(t: Rational) -> Rational {
    (t / SIDEREAL_YEAR).modulo(Rational::ONE) * 360
}

/// Zodiac sign (1-12) the sun occupies at time `t`.
pub fn zodiac(t: Rational) -> i64 {
    solar_longitude(t).quotient(Rational::from_integer(30)) + 1
}

/// Mean sidereal longitude of the moon at time `t`, in degrees `[0, 360)`.
pub fn lunar_longitude(t: Rational) -> Rational {
    (t / SIDEREAL_MONTH).modulo(Rational::ONE) * 360
}

/// Lunar day (tithi, 1-30) in progress at time `t`: the moon gains 12
/// degrees on the sun per tithi.
pub fn lunar_phase(t: Rational) -> i64 {
    let elongation = (lunar_longitude(t) - solar_longitude(t)).modulo(Rational::from_integer(360));
    elongation.quotient(Rational::from_integer(12)) + 1
}

/// Time of the most recent mean new moon at or before `t`.
pub fn new_moon(t: Rational) -> Rational {
    t - t.modulo(SYNODIC_MONTH)
}

/// An Old Hindu solar date. Each month is the time the sun spends in one
/// zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{} {} {}", day, "lookup(&HINDU_SOLAR_MONTHS, *month)", year)]
pub struct HinduSolarDate {
    pub year:  i64,
    pub month: i64,
    pub day:   i64,
}

impl HinduSolarDate {
    /// Creates a new solar date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for a month outside `1..=12`, and
    /// `DateError::InvalidDay` for a day the month does not reach.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        check_year(Calendar::OldHinduSolar, "year", year)?;
        check_month_day(Calendar::OldHinduSolar, year, month, day, MONTHS_IN_YEAR, MAX_SOLAR_DAY)?;
        let date = Self { year, month, day };
        // Month lengths vary, so a short month overflows into the next one.
        if Self::from_absolute(date.to_absolute()) != date {
            return Err(DateError::InvalidDay { calendar: Calendar::OldHinduSolar, year, month, day });
        }
        Ok(date)
    }

    pub fn to_absolute(self) -> AbsoluteDate {
        let sunrise = SIDEREAL_YEAR * self.year + SOLAR_MONTH * (self.month - 1) + self.day - SUNRISE;
        AbsoluteDate::new(sunrise.floor_i64() - HINDU_DAYS_BEFORE_ABSOLUTE_ZERO)
    }

    pub fn from_absolute(date: AbsoluteDate) -> Self {
        let sunrise = hindu_day_count(date) + SUNRISE;
        Self {
            year:  sunrise.quotient(SIDEREAL_YEAR),
            month: zodiac(sunrise),
            day:   sunrise.modulo(SOLAR_MONTH).floor_i64() + 1,
        }
    }
}

impl From<HinduSolarDate> for AbsoluteDate {
    fn from(date: HinduSolarDate) -> Self {
        date.to_absolute()
    }
}

impl From<AbsoluteDate> for HinduSolarDate {
    fn from(date: AbsoluteDate) -> Self {
        Self::from_absolute(date)
    }
}

/// An Old Hindu lunisolar date.
///
/// Months run from new moon to new moon and are named after the zodiac
/// sign the sun enters during them. A month in which the sun enters no new
/// sign is a leap month and takes the name of the month that follows it.
/// Days are lunar days (tithis), so a day number is occasionally skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{} {}{} {}", day, "leap_prefix(*leap_month)", "lookup(&HINDU_LUNAR_MONTHS, *month)", year)]
pub struct HinduLunarDate {
    pub year:       i64,
    pub month:      i64,
    pub leap_month: bool,
    pub day:        i64,
}

const fn leap_prefix(leap_month: bool) -> &'static str {
    if leap_month { LEAP_MONTH_PREFIX } else { "" }
}

impl HinduLunarDate {
    /// Creates a new lunar date, validating the month and day ranges.
    ///
    /// Whether the day actually occurs (it may be skipped, and the leap
    /// month may not exist that year) is only known on conversion.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` for a
    /// component outside its range.
    pub fn new(year: i64, month: i64, leap_month: bool, day: i64) -> Result<Self, DateError> {
        check_year(Calendar::OldHinduLunar, "year", year)?;
        check_month_day(Calendar::OldHinduLunar, year, month, day, MONTHS_IN_YEAR, MAX_LUNAR_DAY)?;
        Ok(Self { year, month, leap_month, day })
    }

    /// Calendar order: by year, then month, with a leap month before the
    /// regular month of the same name, then day.
    pub fn precedes(self, other: Self) -> bool {
        self < other
    }

    /// Finds the day carrying this date by searching forward from an
    /// estimate one month early.
    ///
    /// # Errors
    /// Returns `ConversionError::NoSolution` for a skipped day or a leap
    /// month that does not occur in this year.
    pub fn to_absolute(self) -> Result<AbsoluteDate, ConversionError> {
        let approx = (SIDEREAL_YEAR * self.year).floor_i64() + (SYNODIC_MONTH * (self.month - 2)).floor_i64()
            - HINDU_DAYS_BEFORE_ABSOLUTE_ZERO;
        let steps = count_while(approx, |&day| Self::from_absolute(AbsoluteDate::new(day)).precedes(self));
        let candidate = AbsoluteDate::new(approx + steps);
        tracing::trace!(date = %self, approx, steps, "searched for lunar date");

        if Self::from_absolute(candidate) == self {
            Ok(candidate)
        } else {
            tracing::debug!(date = %self, %candidate, "lunar date does not occur");
            Err(ConversionError::NoSolution { calendar: Calendar::OldHinduLunar, wanted: self.to_string() })
        }
    }

    pub fn from_absolute(date: AbsoluteDate) -> Self {
        let sunrise = hindu_day_count(date) + SUNRISE;
        let last_new_moon = new_moon(sunrise);
        let next_new_moon = last_new_moon + SYNODIC_MONTH;
        let sign = zodiac(last_new_moon);
        let leap_month = sign == zodiac(next_new_moon);
        // A leap month belongs to the year of the regular month after it.
        let year_marker = if leap_month { next_new_moon + SYNODIC_MONTH } else { next_new_moon };
        Self {
            year: year_marker.quotient(SIDEREAL_YEAR),
            month: amod(sign + 1, MONTHS_IN_YEAR),
            leap_month,
            day: lunar_phase(sunrise),
        }
    }
}

impl PartialOrd for HinduLunarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HinduLunarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, !self.leap_month, self.day).cmp(&(other.year, other.month, !other.leap_month, other.day))
    }
}

impl From<AbsoluteDate> for HinduLunarDate {
    fn from(date: AbsoluteDate) -> Self {
        Self::from_absolute(date)
    }
}

impl TryFrom<HinduLunarDate> for AbsoluteDate {
    type Error = ConversionError;

    fn try_from(date: HinduLunarDate) -> Result<Self, Self::Error> {
        date.to_absolute()
    }
}
