use crate::arith::modulo;
use crate::consts::DAYS_IN_WEEK;
use crate::error::DateError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A day on the shared timeline every calendar converts through.
///
/// Day 1 is Gregorian January 1 of year 1 (Rata Die). Any `i64` is a valid
/// absolute date; whether a given calendar can represent it is up to that
/// calendar.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct AbsoluteDate(i64);

impl AbsoluteDate {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the day count as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn weekday(self) -> Weekday {
        Weekday::from_absolute(self)
    }

    /// The `k`-day in the seven-day interval ending on this date.
    pub const fn k_day_on_or_before(self, k: Weekday) -> Self {
        Self(self.0 - modulo(self.0 - k.index(), DAYS_IN_WEEK))
    }

    /// The `k`-day in the seven-day interval starting on this date.
    pub const fn k_day_on_or_after(self, k: Weekday) -> Self {
        Self(self.0 + 6).k_day_on_or_before(k)
    }

    /// The `k`-day nearest to this date (within three days either way).
    pub const fn k_day_nearest(self, k: Weekday) -> Self {
        Self(self.0 + 3).k_day_on_or_before(k)
    }

    /// The `k`-day strictly before this date.
    pub const fn k_day_before(self, k: Weekday) -> Self {
        Self(self.0 - 1).k_day_on_or_before(k)
    }

    /// The `k`-day strictly after this date.
    pub const fn k_day_after(self, k: Weekday) -> Self {
        Self(self.0 + 7).k_day_on_or_before(k)
    }
}

impl Add<i64> for AbsoluteDate {
    type Output = Self;

    fn add(self, days: i64) -> Self {
        Self(self.0 + days)
    }
}

impl Sub<i64> for AbsoluteDate {
    type Output = Self;

    fn sub(self, days: i64) -> Self {
        Self(self.0 - days)
    }
}

impl Sub for AbsoluteDate {
    type Output = i64;

    fn sub(self, other: Self) -> i64 {
        self.0 - other.0
    }
}

/// Day of the week, numbered from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Absolute date 0 is a Sunday, so the weekday is the date mod 7.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn from_absolute(date: AbsoluteDate) -> Self {
        Self::ALL[modulo(date.get(), DAYS_IN_WEEK) as usize]
    }

    pub const fn index(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for Weekday {
    type Error = DateError;

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..DAYS_IN_WEEK).contains(&value) {
            Ok(Self::ALL[value as usize])
        } else {
            Err(DateError::InvalidWeekday(value))
        }
    }
}

impl From<Weekday> for i64 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}
