/// Days in a week
pub const DAYS_IN_WEEK: i64 = 7;

/// Month number for January
pub const JANUARY: i64 = 1;
/// Month number for February
pub const FEBRUARY: i64 = 2;
/// Month number for March
pub const MARCH: i64 = 3;
/// Month number for April
pub const APRIL: i64 = 4;
/// Month number for May
pub const MAY: i64 = 5;
/// Month number for July
pub const JULY: i64 = 7;
/// Month number for September
pub const SEPTEMBER: i64 = 9;
/// Month number for November
pub const NOVEMBER: i64 = 11;
/// Month number for December
pub const DECEMBER: i64 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i64 = 29;

/// Days in each month of the Gregorian and Julian calendars
/// (index 0 is unused, months are 1-indexed).
/// February shows 28 days (non-leap year default).
pub const DAYS_IN_MONTH: [i64; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in the 400-year Gregorian cycle
pub(crate) const DAYS_IN_400_YEARS: i64 = 146_097;
/// Days in a Gregorian century not divisible by 400
pub(crate) const DAYS_IN_100_YEARS: i64 = 36_524;
/// Days in a four-year cycle with one leap day
pub(crate) const DAYS_IN_4_YEARS: i64 = 1_461;
/// Days in a common year
pub(crate) const DAYS_IN_COMMON_YEAR: i64 = 365;

/// Absolute date of Julian (1, 1, 1)
pub const JULIAN_EPOCH: i64 = -1;
/// Absolute date of Islamic (1, 1, 1), Julian July 16, 622
pub const ISLAMIC_EPOCH: i64 = 227_015;
/// Offset from the Hebrew elapsed-day count to the absolute date
pub const HEBREW_EPOCH_OFFSET: i64 = -1_373_429;
/// Absolute date of French Revolutionary (1, 1, 1), Gregorian September 22, 1792
pub const FRENCH_EPOCH: i64 = 654_415;

/// Days of the Mayan long count epoch before absolute day 0, according to
/// the Goodman-Martinez-Thompson correlation.
///
/// The Spinden correlation would be 1_232_041.
pub const MAYAN_DAYS_BEFORE_ABSOLUTE_ZERO: i64 = 1_137_142;
/// Days in a baktun (20 katun)
pub const DAYS_IN_BAKTUN: i64 = 144_000;
/// Days in a katun (20 tun)
pub const DAYS_IN_KATUN: i64 = 7_200;
/// Days in a tun (18 uinal)
pub const DAYS_IN_TUN: i64 = 360;
/// Days in a uinal (20 kin)
pub const DAYS_IN_UINAL: i64 = 20;
/// Length of the haab cycle
pub const HAAB_CYCLE: i64 = 365;
/// Length of the tzolkin cycle
pub const TZOLKIN_CYCLE: i64 = 260;
/// Length of the combined haab and tzolkin cycle (calendar round)
pub const CALENDAR_ROUND: i64 = 18_980;

/// Days of the Old Hindu (Kali Yuga) epoch before absolute day 0
pub const HINDU_DAYS_BEFORE_ABSOLUTE_ZERO: i64 = 1_132_959;

/// Largest year magnitude (and long count baktun) the validating constructors accept
pub const MAX_YEAR: i64 = 1_000_000;
