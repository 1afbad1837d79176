//! Calendar-agnostic dispatch.
//!
//! [`Calendar`] names a calendar, [`CalendarDate`] holds a date in any of
//! them, and [`Date`] is the flat serializable record used at the edges
//! (a calendar tag plus its numeric components).

use crate::error::{ConversionError, DateError};
use crate::french::FrenchDate;
use crate::gregorian::GregorianDate;
use crate::hebrew::HebrewDate;
use crate::hindu::{HinduLunarDate, HinduSolarDate};
use crate::islamic::IslamicDate;
use crate::iso::IsoDate;
use crate::julian::JulianDate;
use crate::mayan::{MayanHaabDate, MayanLongCount, MayanTzolkinDate};
use crate::names::{
    FRENCH_MONTHS, GREGORIAN_MONTHS, HEBREW_MONTHS, HINDU_LUNAR_MONTHS, HINDU_SOLAR_MONTHS, ISLAMIC_MONTHS,
    MAYAN_HAAB_MONTHS, MAYAN_TZOLKIN_NAMES,
};
use crate::prelude::*;
use crate::types::AbsoluteDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const YEAR_MONTH_DAY: &[&str] = &["year", "month", "day"];

/// The calendars this crate converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Calendar {
    Gregorian,
    Iso,
    Julian,
    Islamic,
    Hebrew,
    MayanLongCount,
    MayanHaab,
    MayanTzolkin,
    French,
    OldHinduSolar,
    OldHinduLunar,
}

impl Calendar {
    pub const ALL: [Self; 11] = [
        Self::Gregorian,
        Self::Iso,
        Self::Julian,
        Self::Islamic,
        Self::Hebrew,
        Self::MayanLongCount,
        Self::MayanHaab,
        Self::MayanTzolkin,
        Self::French,
        Self::OldHinduSolar,
        Self::OldHinduLunar,
    ];

    /// The tag used in text and serialized forms.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Iso => "iso",
            Self::Julian => "julian",
            Self::Islamic => "islamic",
            Self::Hebrew => "hebrew",
            Self::MayanLongCount => "mayanLongCount",
            Self::MayanHaab => "mayanHaab",
            Self::MayanTzolkin => "mayanTzolkin",
            Self::French => "french",
            Self::OldHinduSolar => "oldHinduSolar",
            Self::OldHinduLunar => "oldHinduLunar",
        }
    }

    /// Haab and tzolkin dates repeat and cannot be placed on the timeline.
    pub const fn is_absolute(self) -> bool {
        !matches!(self, Self::MayanHaab | Self::MayanTzolkin)
    }

    /// Names of the numeric components, in the order [`CalendarDate::components`] uses.
    pub const fn component_names(self) -> &'static [&'static str] {
        match self {
            Self::Gregorian | Self::Julian | Self::Islamic | Self::Hebrew | Self::French | Self::OldHinduSolar => {
                YEAR_MONTH_DAY
            },
            Self::Iso => &["year", "week", "day"],
            Self::MayanLongCount => &["baktun", "katun", "tun", "uinal", "kin"],
            Self::MayanHaab => &["day", "month"],
            Self::MayanTzolkin => &["number", "name"],
            Self::OldHinduLunar => &["year", "month", "leapMonth", "day"],
        }
    }

    /// Month (or day-name) table, indexed from 1. Empty for calendars
    /// without named months.
    pub const fn month_names(self) -> &'static [&'static str] {
        match self {
            Self::Gregorian | Self::Julian => &GREGORIAN_MONTHS,
            Self::Islamic => &ISLAMIC_MONTHS,
            Self::Hebrew => &HEBREW_MONTHS,
            Self::MayanHaab => &MAYAN_HAAB_MONTHS,
            Self::MayanTzolkin => &MAYAN_TZOLKIN_NAMES,
            Self::French => &FRENCH_MONTHS,
            Self::OldHinduSolar => &HINDU_SOLAR_MONTHS,
            Self::OldHinduLunar => &HINDU_LUNAR_MONTHS,
            Self::Iso | Self::MayanLongCount => &[],
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Calendar {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|calendar| calendar.tag() == s)
            .ok_or_else(|| ConversionError::UnknownCalendar(s.to_owned()))
    }
}

/// A date in any supported calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(tag = "calendar", rename_all = "camelCase")]
pub enum CalendarDate {
    Gregorian(GregorianDate),
    Iso(IsoDate),
    Julian(JulianDate),
    Islamic(IslamicDate),
    Hebrew(HebrewDate),
    MayanLongCount(MayanLongCount),
    MayanHaab(MayanHaabDate),
    MayanTzolkin(MayanTzolkinDate),
    French(FrenchDate),
    OldHinduSolar(HinduSolarDate),
    OldHinduLunar(HinduLunarDate),
}

impl CalendarDate {
    pub const fn calendar(&self) -> Calendar {
        match self {
            Self::Gregorian(_) => Calendar::Gregorian,
            Self::Iso(_) => Calendar::Iso,
            Self::Julian(_) => Calendar::Julian,
            Self::Islamic(_) => Calendar::Islamic,
            Self::Hebrew(_) => Calendar::Hebrew,
            Self::MayanLongCount(_) => Calendar::MayanLongCount,
            Self::MayanHaab(_) => Calendar::MayanHaab,
            Self::MayanTzolkin(_) => Calendar::MayanTzolkin,
            Self::French(_) => Calendar::French,
            Self::OldHinduSolar(_) => Calendar::OldHinduSolar,
            Self::OldHinduLunar(_) => Calendar::OldHinduLunar,
        }
    }

    /// Expresses `date` in `calendar`.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfDomain` for Islamic and French dates
    /// before their epochs.
    pub fn from_absolute(date: AbsoluteDate, calendar: Calendar) -> Result<Self, ConversionError> {
        Ok(match calendar {
            Calendar::Gregorian => Self::Gregorian(date.into()),
            Calendar::Iso => Self::Iso(date.into()),
            Calendar::Julian => Self::Julian(date.into()),
            Calendar::Islamic => Self::Islamic(date.try_into()?),
            Calendar::Hebrew => Self::Hebrew(date.into()),
            Calendar::MayanLongCount => Self::MayanLongCount(date.into()),
            Calendar::MayanHaab => Self::MayanHaab(date.into()),
            Calendar::MayanTzolkin => Self::MayanTzolkin(date.into()),
            Calendar::French => Self::French(date.try_into()?),
            Calendar::OldHinduSolar => Self::OldHinduSolar(date.into()),
            Calendar::OldHinduLunar => Self::OldHinduLunar(date.into()),
        })
    }

    /// # Errors
    /// Returns `ConversionError::NotAbsolute` for haab and tzolkin dates, and
    /// `ConversionError::NoSolution` for a Hindu lunar date that never occurs.
    pub fn to_absolute(&self) -> Result<AbsoluteDate, ConversionError> {
        Ok(match *self {
            Self::Gregorian(date) => date.into(),
            Self::Iso(date) => date.into(),
            Self::Julian(date) => date.into(),
            Self::Islamic(date) => date.into(),
            Self::Hebrew(date) => date.into(),
            Self::MayanLongCount(date) => date.into(),
            Self::French(date) => date.into(),
            Self::OldHinduSolar(date) => date.into(),
            Self::OldHinduLunar(date) => date.to_absolute()?,
            Self::MayanHaab(_) | Self::MayanTzolkin(_) => return Err(ConversionError::NotAbsolute(self.calendar())),
        })
    }

    /// Numeric components in [`Calendar::component_names`] order. The Hindu
    /// leap-month flag is 0 or 1.
    pub fn components(&self) -> Vec<i64> {
        match *self {
            Self::Gregorian(GregorianDate { year, month, day })
            | Self::Julian(JulianDate { year, month, day })
            | Self::Islamic(IslamicDate { year, month, day })
            | Self::Hebrew(HebrewDate { year, month, day })
            | Self::French(FrenchDate { year, month, day })
            | Self::OldHinduSolar(HinduSolarDate { year, month, day }) => vec![year, month, day],
            Self::Iso(IsoDate { year, week, day }) => vec![year, week, day],
            Self::MayanLongCount(MayanLongCount { baktun, katun, tun, uinal, kin }) => {
                vec![baktun, katun, tun, uinal, kin]
            },
            Self::MayanHaab(MayanHaabDate { day, month }) => vec![day, month],
            Self::MayanTzolkin(MayanTzolkinDate { number, name }) => vec![number, name],
            Self::OldHinduLunar(HinduLunarDate { year, month, leap_month, day }) => {
                vec![year, month, i64::from(leap_month), day]
            },
        }
    }

    /// Builds a validated date from its numeric components.
    ///
    /// # Errors
    /// Returns `DateError::WrongComponentCount` when `components` does not
    /// match [`Calendar::component_names`], and the calendar's own
    /// validation error for an out-of-range component.
    pub fn from_components(calendar: Calendar, components: &[i64]) -> Result<Self, DateError> {
        let expected = calendar.component_names().len();
        if components.len() != expected {
            return Err(DateError::WrongComponentCount { calendar, expected, found: components.len() });
        }
        Ok(match (calendar, components) {
            (Calendar::Gregorian, &[year, month, day]) => Self::Gregorian(GregorianDate::new(year, month, day)?),
            (Calendar::Iso, &[year, week, day]) => Self::Iso(IsoDate::new(year, week, day)?),
            (Calendar::Julian, &[year, month, day]) => Self::Julian(JulianDate::new(year, month, day)?),
            (Calendar::Islamic, &[year, month, day]) => Self::Islamic(IslamicDate::new(year, month, day)?),
            (Calendar::Hebrew, &[year, month, day]) => Self::Hebrew(HebrewDate::new(year, month, day)?),
            (Calendar::MayanLongCount, &[baktun, katun, tun, uinal, kin]) => {
                Self::MayanLongCount(MayanLongCount::new(baktun, katun, tun, uinal, kin)?)
            },
            (Calendar::MayanHaab, &[day, month]) => Self::MayanHaab(MayanHaabDate::new(day, month)?),
            (Calendar::MayanTzolkin, &[number, name]) => Self::MayanTzolkin(MayanTzolkinDate::new(number, name)?),
            (Calendar::French, &[year, month, day]) => Self::French(FrenchDate::new(year, month, day)?),
            (Calendar::OldHinduSolar, &[year, month, day]) => {
                Self::OldHinduSolar(HinduSolarDate::new(year, month, day)?)
            },
            (Calendar::OldHinduLunar, &[year, month, leap, day]) => {
                let leap_month = match leap {
                    0 => false,
                    1 => true,
                    value => return Err(DateError::InvalidComponent { calendar, name: "leapMonth", value }),
                };
                Self::OldHinduLunar(HinduLunarDate::new(year, month, leap_month, day)?)
            },
            _ => return Err(DateError::WrongComponentCount { calendar, expected, found: components.len() }),
        })
    }
}

/// Converts `date` to `target` through its absolute date.
///
/// # Errors
/// Propagates the errors of [`CalendarDate::to_absolute`] and
/// [`CalendarDate::from_absolute`].
pub fn convert(date: &CalendarDate, target: Calendar) -> Result<CalendarDate, ConversionError> {
    CalendarDate::from_absolute(date.to_absolute()?, target)
}

/// Like [`convert`], with the target given by its tag.
///
/// # Errors
/// Returns `ConversionError::UnknownCalendar` for an unrecognized tag.
pub fn convert_by_name(date: &CalendarDate, target: &str) -> Result<CalendarDate, ConversionError> {
    let calendar = target.parse::<Calendar>().inspect_err(|_| {
        tracing::debug!(tag = target, "unknown calendar tag");
    })?;
    convert(date, calendar)
}

/// Flat, serializable form of a date: a calendar tag and its components,
/// with the names needed to label them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Date {
    pub calendar:        Calendar,
    pub components:      Vec<i64>,
    #[serde(default)]
    pub component_names: Vec<String>,
    #[serde(default)]
    pub month_names:     Vec<String>,
}

impl From<&CalendarDate> for Date {
    fn from(date: &CalendarDate) -> Self {
        let calendar = date.calendar();
        Self {
            calendar,
            components: date.components(),
            component_names: calendar.component_names().iter().map(|&name| name.to_owned()).collect(),
            month_names: calendar.month_names().iter().map(|&name| name.to_owned()).collect(),
        }
    }
}

impl From<CalendarDate> for Date {
    fn from(date: CalendarDate) -> Self {
        Self::from(&date)
    }
}

impl Date {
    /// Validates this record and converts it to `target`.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidDate` when the components do not
    /// form a valid date, and otherwise the errors of [`convert`].
    pub fn convert_to(&self, target: Calendar) -> Result<Self, ConversionError> {
        let date = CalendarDate::try_from(self)?;
        Ok(Self::from(convert(&date, target)?))
    }
}

impl TryFrom<&Date> for CalendarDate {
    type Error = DateError;

    fn try_from(date: &Date) -> Result<Self, Self::Error> {
        Self::from_components(date.calendar, &date.components)
    }
}

impl TryFrom<Date> for CalendarDate {
    type Error = DateError;

    fn try_from(date: Date) -> Result<Self, Self::Error> {
        Self::try_from(&date)
    }
}
