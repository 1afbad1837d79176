use crate::consts::{DECEMBER, JANUARY};
use crate::gregorian::GregorianDate;
use crate::types::AbsoluteDate;

/// An inclusive span of absolute dates, used to keep holidays from lunar
/// calendars inside the Gregorian year they were asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DayRange {
    start: AbsoluteDate,
    end:   AbsoluteDate,
}

impl DayRange {
    /// January 1 through December 31 of a Gregorian year.
    pub(crate) fn gregorian_year(year: i64) -> Self {
        Self {
            start: GregorianDate { year, month: JANUARY, day: 1 }.to_absolute(),
            end:   GregorianDate { year, month: DECEMBER, day: 31 }.to_absolute(),
        }
    }

    pub(crate) const fn start(&self) -> AbsoluteDate {
        self.start
    }

    pub(crate) fn contains(&self, date: AbsoluteDate) -> bool {
        self.start <= date && date <= self.end
    }
}
