//! Conversions between calendars through a shared day count.
//!
//! Every calendar converts to and from an [`AbsoluteDate`], the number of
//! days since the Gregorian date December 31 of year 0 (so January 1 of
//! year 1 is day 1). Converting between two calendars goes through that
//! count.
//!
//! ```
//! use calendrical::{AbsoluteDate, Calendar, CalendarDate, GregorianDate, convert};
//!
//! let date = GregorianDate::new(2022, 6, 15)?;
//! assert_eq!(AbsoluteDate::from(date), AbsoluteDate::new(738_321));
//!
//! let hebrew = convert(&CalendarDate::from(date), Calendar::Hebrew)?;
//! assert_eq!(hebrew.to_string(), "16 Sivan 5782");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod arith;
mod consts;
mod error;
pub mod french;
mod generic;
pub mod gregorian;
pub mod hebrew;
pub mod hindu;
pub mod holiday;
pub mod islamic;
pub mod iso;
pub mod julian;
pub mod mayan;
mod names;
mod prelude;
mod range;
mod rational;
mod types;

#[cfg(test)]
mod test_utils;

pub use arith::{amod, floor_div, modulo};
pub use error::{ConversionError, DateError};
pub use french::FrenchDate;
pub use generic::{Calendar, CalendarDate, Date, convert, convert_by_name};
pub use gregorian::GregorianDate;
pub use hebrew::HebrewDate;
pub use hindu::{HinduLunarDate, HinduSolarDate};
pub use islamic::IslamicDate;
pub use iso::IsoDate;
pub use julian::JulianDate;
pub use mayan::{MayanHaabDate, MayanLongCount, MayanTzolkinDate};
pub use rational::Rational;
pub use types::{AbsoluteDate, Weekday};
