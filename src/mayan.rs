//! Mayan calendars: the long count, and the cyclical haab and tzolkin.
//!
//! The haab (365 days) and tzolkin (260 days) repeat without a year
//! count, so they convert from absolute dates but not back. Going back
//! needs a reference date: the `*_on_or_before` functions find the latest
//! matching day at or before it.

use crate::arith::{amod, floor_div, modulo};
use crate::consts::{
    CALENDAR_ROUND, DAYS_IN_BAKTUN, DAYS_IN_KATUN, DAYS_IN_TUN, DAYS_IN_UINAL, HAAB_CYCLE,
    MAYAN_DAYS_BEFORE_ABSOLUTE_ZERO, TZOLKIN_CYCLE,
};
use crate::error::{ConversionError, DateError, check_year};
use crate::generic::Calendar;
use crate::names::{MAYAN_HAAB_MONTHS, MAYAN_TZOLKIN_NAMES, lookup};
use crate::prelude::*;
use crate::types::AbsoluteDate;
use serde::{Deserialize, Serialize};

/// Month of the five epagomenal days at the end of the haab year
pub const UAYEB: i64 = 19;

/// A long count date, baktun.katun.tun.uinal.kin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{baktun}.{katun}.{tun}.{uinal}.{kin}")]
pub struct MayanLongCount {
    pub baktun: i64,
    pub katun:  i64,
    pub tun:    i64,
    pub uinal:  i64,
    pub kin:    i64,
}

/// A haab date: day 0-19 of month 1-18, or day 0-4 of Uayeb (month 19).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{} {}", day, "lookup(&MAYAN_HAAB_MONTHS, *month)")]
pub struct MayanHaabDate {
    pub day:   i64,
    pub month: i64,
}

/// A tzolkin date: a number 1-13 paired with one of twenty day names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{} {}", number, "lookup(&MAYAN_TZOLKIN_NAMES, *name)")]
pub struct MayanTzolkinDate {
    pub number: i64,
    pub name:   i64,
}

/// Checks a zero-based place value against `0..=max`.
fn check_range(calendar: Calendar, name: &'static str, value: i64, max: i64) -> Result<(), DateError> {
    if !(0..=max).contains(&value) {
        return Err(DateError::InvalidComponent { calendar, name, value });
    }
    Ok(())
}

/// Days since the long count epoch 0.0.0.0.0.
const fn long_count_days(date: AbsoluteDate) -> i64 {
    date.get() + MAYAN_DAYS_BEFORE_ABSOLUTE_ZERO
}

impl MayanLongCount {
    /// Creates a long count date, checking each place against its radix.
    ///
    /// # Errors
    /// Returns `DateError::InvalidComponent` naming the first place out of
    /// range. The baktun may be negative but is bounded like a year.
    pub fn new(baktun: i64, katun: i64, tun: i64, uinal: i64, kin: i64) -> Result<Self, DateError> {
        let calendar = Calendar::MayanLongCount;
        check_year(calendar, "baktun", baktun)?;
        check_range(calendar, "katun", katun, 19)?;
        check_range(calendar, "tun", tun, 19)?;
        check_range(calendar, "uinal", uinal, 17)?;
        check_range(calendar, "kin", kin, 19)?;
        Ok(Self { baktun, katun, tun, uinal, kin })
    }

    pub const fn to_absolute(self) -> AbsoluteDate {
        AbsoluteDate::new(
            self.baktun * DAYS_IN_BAKTUN
                + self.katun * DAYS_IN_KATUN
                + self.tun * DAYS_IN_TUN
                + self.uinal * DAYS_IN_UINAL
                + self.kin
                - MAYAN_DAYS_BEFORE_ABSOLUTE_ZERO,
        )
    }

    pub const fn from_absolute(date: AbsoluteDate) -> Self {
        let days = long_count_days(date);
        let baktun = floor_div(days, DAYS_IN_BAKTUN);
        let day_of_baktun = modulo(days, DAYS_IN_BAKTUN);
        let katun = day_of_baktun / DAYS_IN_KATUN;
        let day_of_katun = day_of_baktun % DAYS_IN_KATUN;
        let tun = day_of_katun / DAYS_IN_TUN;
        let day_of_tun = day_of_katun % DAYS_IN_TUN;
        let uinal = day_of_tun / DAYS_IN_UINAL;
        let kin = day_of_tun % DAYS_IN_UINAL;
        Self { baktun, katun, tun, uinal, kin }
    }
}

impl MayanHaabDate {
    /// Creates a haab date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidComponent` for a month outside `1..=19`,
    /// a day outside `0..=19`, or a day past 4 in Uayeb.
    pub fn new(day: i64, month: i64) -> Result<Self, DateError> {
        let calendar = Calendar::MayanHaab;
        if !(1..=UAYEB).contains(&month) {
            return Err(DateError::InvalidComponent { calendar, name: "month", value: month });
        }
        check_range(calendar, "day", day, if month == UAYEB { 4 } else { 19 })?;
        Ok(Self { day, month })
    }

    pub const fn from_absolute(date: AbsoluteDate) -> Self {
        // The long count epoch fell on 8 Cumku.
        let day_of_haab = modulo(long_count_days(date) + 8 + 20 * (18 - 1), HAAB_CYCLE);
        Self { day: day_of_haab % 20, month: day_of_haab / 20 + 1 }
    }

    /// Position within the 365-day haab year, from 0 Pop.
    const fn day_of_year(self) -> i64 {
        20 * (self.month - 1) + self.day
    }
}

impl MayanTzolkinDate {
    /// Creates a tzolkin date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidComponent` for a number outside `1..=13`
    /// or a name outside `1..=20`.
    pub fn new(number: i64, name: i64) -> Result<Self, DateError> {
        let calendar = Calendar::MayanTzolkin;
        if !(1..=13).contains(&number) {
            return Err(DateError::InvalidComponent { calendar, name: "number", value: number });
        }
        if !(1..=20).contains(&name) {
            return Err(DateError::InvalidComponent { calendar, name: "name", value: name });
        }
        Ok(Self { number, name })
    }

    pub const fn from_absolute(date: AbsoluteDate) -> Self {
        // The long count epoch fell on 4 Ahau.
        let days = long_count_days(date);
        Self { number: amod(days + 4, 13), name: amod(days + 20, 20) }
    }
}

impl From<AbsoluteDate> for MayanLongCount {
    fn from(date: AbsoluteDate) -> Self {
        Self::from_absolute(date)
    }
}

impl From<MayanLongCount> for AbsoluteDate {
    fn from(date: MayanLongCount) -> Self {
        date.to_absolute()
    }
}

impl From<AbsoluteDate> for MayanHaabDate {
    fn from(date: AbsoluteDate) -> Self {
        Self::from_absolute(date)
    }
}

impl From<AbsoluteDate> for MayanTzolkinDate {
    fn from(date: AbsoluteDate) -> Self {
        Self::from_absolute(date)
    }
}

/// Days from `from` forward to the next occurrence of `to`, in `0..365`.
pub const fn haab_difference(from: MayanHaabDate, to: MayanHaabDate) -> i64 {
    modulo(to.day_of_year() - from.day_of_year(), HAAB_CYCLE)
}

/// Days from `from` forward to the next occurrence of `to`, in `0..260`.
///
/// Combines the 13-day number and 20-day name cycles by the Chinese
/// remainder theorem.
pub const fn tzolkin_difference(from: MayanTzolkinDate, to: MayanTzolkinDate) -> i64 {
    let number_difference = to.number - from.number;
    let name_difference = to.name - from.name;
    modulo(number_difference + 13 * modulo(3 * (number_difference - name_difference), 20), TZOLKIN_CYCLE)
}

/// Latest day at or before `date` that falls on `haab`.
pub const fn haab_on_or_before(haab: MayanHaabDate, date: AbsoluteDate) -> AbsoluteDate {
    let zero = AbsoluteDate::new(0);
    let offset = haab_difference(MayanHaabDate::from_absolute(zero), haab);
    AbsoluteDate::new(date.get() - modulo(date.get() - offset, HAAB_CYCLE))
}

/// Latest day at or before `date` that falls on `tzolkin`.
pub const fn tzolkin_on_or_before(tzolkin: MayanTzolkinDate, date: AbsoluteDate) -> AbsoluteDate {
    let zero = AbsoluteDate::new(0);
    let offset = tzolkin_difference(MayanTzolkinDate::from_absolute(zero), tzolkin);
    AbsoluteDate::new(date.get() - modulo(date.get() - offset, TZOLKIN_CYCLE))
}

/// Latest day at or before `date` that falls on both `haab` and `tzolkin`.
///
/// The two cycles share a factor of 5, so only one pair in five ever occurs
/// together within the 18,980-day calendar round.
///
/// # Errors
/// Returns `ConversionError::NoSolution` when the combination never occurs.
pub fn haab_tzolkin_on_or_before(
    haab: MayanHaabDate,
    tzolkin: MayanTzolkinDate,
    date: AbsoluteDate,
) -> Result<AbsoluteDate, ConversionError> {
    let zero = AbsoluteDate::new(0);
    let haab_offset = haab_difference(MayanHaabDate::from_absolute(zero), haab);
    let tzolkin_offset = tzolkin_difference(MayanTzolkinDate::from_absolute(zero), tzolkin);
    let difference = tzolkin_offset - haab_offset;
    if modulo(difference, 5) != 0 {
        tracing::debug!(%haab, %tzolkin, difference, "haab and tzolkin dates never coincide");
        return Err(ConversionError::NoSolution {
            calendar: Calendar::MayanHaab,
            wanted:   format!("{haab} {tzolkin}"),
        });
    }
    let offset = haab_offset + HAAB_CYCLE * difference;
    Ok(date - modulo(date.get() - offset, CALENDAR_ROUND))
}
