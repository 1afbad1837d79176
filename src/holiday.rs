//! Holidays of several traditions, as absolute dates.
//!
//! Every function takes a Gregorian year unless it says otherwise. Holidays
//! from lunar calendars can fall zero, one or two times in a Gregorian year
//! and return every occurrence.

use crate::arith::{floor_div, modulo};
use crate::consts::{APRIL, DECEMBER, JULY, MARCH, MAY, NOVEMBER, SEPTEMBER};
use crate::gregorian::{GregorianDate, last_day_of_month};
use crate::hebrew::{self, HebrewDate, TISHRI};
use crate::islamic::IslamicDate;
use crate::julian::JulianDate;
use crate::range::DayRange;
use crate::types::{AbsoluteDate, Weekday};

/// Difference between Hebrew and Gregorian year numbers in spring
const HEBREW_YEAR_OFFSET: i64 = 3760;

const NISAN: i64 = 1;
const AV: i64 = 5;
const HESHVAN: i64 = 8;
const KISLEV: i64 = 9;
const TEVETH: i64 = 10;
const SHEVAT: i64 = 11;
const RABI_I: i64 = 3;

const fn gregorian(year: i64, month: i64, day: i64) -> GregorianDate {
    GregorianDate { year, month, day }
}

/// The `n`th `k`-day of a Gregorian month. Positive `n` counts from the
/// start of the month, negative `n` from the end (-1 is the last).
pub fn nth_k_day(n: i64, k: Weekday, month: i64, year: i64) -> AbsoluteDate {
    if n > 0 {
        gregorian(year, month, 7).to_absolute().k_day_on_or_before(k) + 7 * (n - 1)
    } else {
        let last = gregorian(year, month, last_day_of_month(month, year)).to_absolute();
        last.k_day_on_or_before(k) + 7 * (n + 1)
    }
}

pub fn independence_day(year: i64) -> AbsoluteDate {
    gregorian(year, JULY, 4).to_absolute()
}

/// First Monday in September.
pub fn labor_day(year: i64) -> AbsoluteDate {
    nth_k_day(1, Weekday::Monday, SEPTEMBER, year)
}

/// Last Monday in May.
pub fn memorial_day(year: i64) -> AbsoluteDate {
    nth_k_day(-1, Weekday::Monday, MAY, year)
}

/// Second Sunday in March, the US rule since 2007.
pub fn daylight_saving_start(year: i64) -> AbsoluteDate {
    nth_k_day(2, Weekday::Sunday, MARCH, year)
}

/// First Sunday in November, the US rule since 2007.
pub fn daylight_saving_end(year: i64) -> AbsoluteDate {
    nth_k_day(1, Weekday::Sunday, NOVEMBER, year)
}

pub fn christmas(year: i64) -> AbsoluteDate {
    gregorian(year, DECEMBER, 25).to_absolute()
}

/// The Sunday nearest November 30.
pub fn advent(year: i64) -> AbsoluteDate {
    gregorian(year, DECEMBER, 3).to_absolute().k_day_on_or_before(Weekday::Sunday)
}

/// Twelve days after the Christmas that precedes it, January 6.
pub fn epiphany(year: i64) -> AbsoluteDate {
    christmas(year - 1) + 12
}

/// Julian December 25 falling in the Gregorian year: none, once or twice.
pub fn eastern_orthodox_christmas(year: i64) -> Vec<AbsoluteDate> {
    let range = DayRange::gregorian_year(year);
    let julian_year = JulianDate::from_absolute(range.start()).year;
    [julian_year, julian_year + 1]
        .into_iter()
        .map(|y| JulianDate { year: y, month: DECEMBER, day: 25 }.to_absolute())
        .filter(|&date| range.contains(date))
        .collect()
}

/// Easter by the Julian computus, for a Julian year.
pub fn nicaean_rule_easter(julian_year: i64) -> AbsoluteDate {
    let shifted_epact = modulo(14 + 11 * modulo(julian_year, 19), 30);
    let paschal_moon = JulianDate { year: julian_year, month: APRIL, day: 19 }.to_absolute() - shifted_epact;
    (paschal_moon + 7).k_day_on_or_before(Weekday::Sunday)
}

/// Easter by the Gregorian computus: the Sunday after the ecclesiastical
/// full moon on or after March 21.
pub fn easter(year: i64) -> AbsoluteDate {
    let century = floor_div(year, 100) + 1;
    let shifted_epact = modulo(
        14 + 11 * modulo(year, 19) - floor_div(3 * century, 4) + floor_div(5 + 8 * century, 25) + 30 * century,
        30,
    );
    let adjusted_epact = if shifted_epact == 0 || (shifted_epact == 1 && 10 < modulo(year, 19)) {
        shifted_epact + 1
    } else {
        shifted_epact
    };
    let paschal_moon = gregorian(year, APRIL, 19).to_absolute() - adjusted_epact;
    (paschal_moon + 7).k_day_on_or_before(Weekday::Sunday)
}

pub fn pentecost(year: i64) -> AbsoluteDate {
    easter(year) + 49
}

/// Occurrences of Islamic `month` and `day` within the Gregorian year.
///
/// An Islamic year is eleven days shorter, so one Gregorian year overlaps
/// at most three Islamic years.
pub fn islamic_dates_in_gregorian_year(month: i64, day: i64, year: i64) -> Vec<AbsoluteDate> {
    let range = DayRange::gregorian_year(year);
    // Years ending before the Islamic epoch have no occurrences.
    let islamic_year = IslamicDate::from_absolute(range.start()).map_or(1, |date| date.year);
    (islamic_year..islamic_year + 3)
        .map(|y| IslamicDate { year: y, month, day }.to_absolute())
        .filter(|&date| range.contains(date))
        .collect()
}

/// 12 Rabi I.
pub fn mulad_al_nabi(year: i64) -> Vec<AbsoluteDate> {
    islamic_dates_in_gregorian_year(RABI_I, 12, year)
}

/// 10 Tishri of the Hebrew year beginning in the autumn of `year`.
pub fn yom_kippur(year: i64) -> AbsoluteDate {
    HebrewDate { year: year + HEBREW_YEAR_OFFSET + 1, month: TISHRI, day: 10 }.to_absolute()
}

/// 15 Nisan.
pub fn passover(year: i64) -> AbsoluteDate {
    HebrewDate { year: year + HEBREW_YEAR_OFFSET, month: NISAN, day: 15 }.to_absolute()
}

/// 14 Adar, or 14 Adar II in a leap year.
pub fn purim(year: i64) -> AbsoluteDate {
    let hebrew_year = year + HEBREW_YEAR_OFFSET;
    HebrewDate { year: hebrew_year, month: hebrew::last_month_of_year(hebrew_year), day: 14 }.to_absolute()
}

/// The day before Purim, moved back to Thursday when Purim is on Sunday.
pub fn ta_anit_esther(year: i64) -> AbsoluteDate {
    let purim_date = purim(year);
    if purim_date.weekday() == Weekday::Sunday { purim_date - 3 } else { purim_date - 1 }
}

/// 9 Av, moved to Sunday when it falls on the Sabbath.
pub fn tisha_b_av(year: i64) -> AbsoluteDate {
    let ninth_of_av = HebrewDate { year: year + HEBREW_YEAR_OFFSET, month: AV, day: 9 }.to_absolute();
    if ninth_of_av.weekday() == Weekday::Saturday { ninth_of_av + 1 } else { ninth_of_av }
}

/// Anniversary of `birth_date` in `hebrew_year`.
///
/// A birthday in the last month of the year (Adar, or Adar II) is kept in
/// the last month of the anniversary year.
pub fn hebrew_birthday(birth_date: HebrewDate, hebrew_year: i64) -> AbsoluteDate {
    let month = if birth_date.month == hebrew::last_month_of_year(birth_date.year) {
        hebrew::last_month_of_year(hebrew_year)
    } else {
        birth_date.month
    };
    HebrewDate { year: hebrew_year, month, day: birth_date.day }.to_absolute()
}

/// Anniversary of a death on `death_date`, as observed in `hebrew_year`.
pub fn yahrzeit(death_date: HebrewDate, hebrew_year: i64) -> AbsoluteDate {
    let HebrewDate { year: death_year, month: death_month, day: death_day } = death_date;
    let (month, day) = match (death_month, death_day) {
        // 30 Heshvan whose following year has a short Heshvan: day after 29 Heshvan.
        (HESHVAN, 30) if !hebrew::long_heshvan(death_year + 1) => (KISLEV, 1),
        // 30 Kislev whose following year has a short Kislev: day after 29 Kislev.
        (KISLEV, 30) if hebrew::short_kislev(death_year + 1) => (TEVETH, 1),
        (hebrew::ADAR_II, _) => (hebrew::last_month_of_year(hebrew_year), death_day),
        // 30 Adar I has no counterpart in a common year.
        (hebrew::ADAR, 30) if !hebrew::is_leap_year(hebrew_year) => (SHEVAT, 30),
        _ => (death_month, death_day),
    };
    HebrewDate { year: hebrew_year, month, day }.to_absolute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::JANUARY;
    use crate::test_utils::hebrew;

    fn rd(value: i64) -> AbsoluteDate {
        AbsoluteDate::new(value)
    }

    #[test]
    fn test_fixed_holidays() {
        struct TestCase {
            name:     &'static str,
            holiday:  fn(i64) -> AbsoluteDate,
            expected: [i64; 3],
        }

        let cases = [
            TestCase { name: "easter", holiday: easter, expected: [738_262, 738_619, 738_976] },
            TestCase { name: "nicaean easter", holiday: nicaean_rule_easter, expected: [738_269, 738_626, 739_011] },
            TestCase { name: "labor day", holiday: labor_day, expected: [738_403, 738_767, 739_131] },
            TestCase { name: "memorial day", holiday: memorial_day, expected: [738_305, 738_669, 739_033] },
            TestCase { name: "dst start", holiday: daylight_saving_start, expected: [738_227, 738_591, 738_955] },
            TestCase { name: "dst end", holiday: daylight_saving_end, expected: [738_465, 738_829, 739_193] },
            TestCase { name: "advent", holiday: advent, expected: [738_486, 738_857, 739_221] },
            TestCase { name: "yom kippur", holiday: yom_kippur, expected: [738_433, 738_788, 739_171] },
            TestCase { name: "passover", holiday: passover, expected: [738_261, 738_616, 738_999] },
            TestCase { name: "purim", holiday: purim, expected: [738_231, 738_586, 738_969] },
            TestCase { name: "ta'anit esther", holiday: ta_anit_esther, expected: [738_230, 738_585, 738_966] },
            TestCase { name: "tisha b'av", holiday: tisha_b_av, expected: [738_374, 738_728, 739_111] },
            TestCase { name: "independence day", holiday: independence_day, expected: [738_340, 738_705, 739_071] },
            TestCase { name: "christmas", holiday: christmas, expected: [738_514, 738_879, 739_245] },
        ];

        for case in &cases {
            for (year, expected) in (2022..).zip(case.expected) {
                assert_eq!((case.holiday)(year), rd(expected), "{} {year}", case.name);
            }
        }
    }

    #[test]
    fn test_holiday_weekdays() {
        for year in 1990..2060 {
            assert_eq!(easter(year).weekday(), Weekday::Sunday, "easter {year}");
            assert_eq!(labor_day(year).weekday(), Weekday::Monday, "labor day {year}");
            assert_eq!(memorial_day(year).weekday(), Weekday::Monday, "memorial day {year}");
            assert_eq!(advent(year).weekday(), Weekday::Sunday, "advent {year}");
            assert_ne!(tisha_b_av(year).weekday(), Weekday::Saturday, "tisha b'av {year}");
            assert_ne!(ta_anit_esther(year).weekday(), Weekday::Saturday, "ta'anit esther {year}");
        }
    }

    #[test]
    fn test_easter_known_dates() {
        assert_eq!(easter(2000), gregorian(2000, 4, 23).to_absolute());
        assert_eq!(easter(2019), gregorian(2019, 4, 21).to_absolute());
        assert_eq!(easter(2025), gregorian(2025, 4, 20).to_absolute());
        assert_eq!(pentecost(2022), rd(738_311));
    }

    #[test]
    fn test_nth_k_day() {
        // June 2022 began on a Wednesday.
        assert_eq!(nth_k_day(1, Weekday::Wednesday, 6, 2022), gregorian(2022, 6, 1).to_absolute());
        assert_eq!(nth_k_day(3, Weekday::Wednesday, 6, 2022), gregorian(2022, 6, 15).to_absolute());
        assert_eq!(nth_k_day(-1, Weekday::Thursday, 6, 2022), gregorian(2022, 6, 30).to_absolute());
        assert_eq!(nth_k_day(-2, Weekday::Thursday, 6, 2022), gregorian(2022, 6, 23).to_absolute());
    }

    #[test]
    fn test_epiphany() {
        assert_eq!(epiphany(2022), rd(738_161));
        assert_eq!(GregorianDate::from_absolute(epiphany(2022)), gregorian(2022, JANUARY, 6));
    }

    #[test]
    fn test_eastern_orthodox_christmas() {
        assert_eq!(eastern_orthodox_christmas(2022), vec![rd(738_162)]);
        assert_eq!(eastern_orthodox_christmas(2023), vec![rd(738_527)]);
        assert_eq!(eastern_orthodox_christmas(2024), vec![rd(738_892)]);
        // The calendars agreed in the third century.
        assert_eq!(eastern_orthodox_christmas(200), vec![gregorian(200, DECEMBER, 25).to_absolute()]);
        // Julian Christmas skips Gregorian 1100.
        assert!(eastern_orthodox_christmas(1100).is_empty());
        assert_eq!(eastern_orthodox_christmas(1101), vec![rd(401_767)]);
    }

    #[test]
    fn test_mulad_al_nabi() {
        assert_eq!(mulad_al_nabi(2022), vec![rd(738_436)]);
        assert_eq!(mulad_al_nabi(2023), vec![rd(738_790)]);
        assert_eq!(mulad_al_nabi(2024), vec![rd(739_145)]);
        assert_eq!(mulad_al_nabi(2015), vec![rd(735_601), rd(735_956)]);
        for year in [1917, 1950, 1982, 2047] {
            assert_eq!(mulad_al_nabi(year).len(), 2, "{year}");
        }
    }

    #[test]
    fn test_islamic_dates_before_epoch() {
        assert!(mulad_al_nabi(500).is_empty());
    }

    #[test]
    fn test_hebrew_birthday() {
        // Born 14 Adar II in a leap year: 14 Adar in a common year.
        assert_eq!(hebrew_birthday(hebrew(5784, 13, 14), 5785), rd(739_324));
        // Born 14 Adar in a common year: 14 Adar II in a leap year.
        assert_eq!(hebrew_birthday(hebrew(5783, 12, 14), 5784), rd(738_969));
        assert_eq!(hebrew_birthday(hebrew(5782, 3, 16), 5790), rd(741_245));
    }

    #[test]
    fn test_yahrzeit() {
        struct TestCase {
            death:       HebrewDate,
            year:        i64,
            expected:    i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                death:       hebrew(5771, 8, 30),
                year:        5786,
                expected:    739_576,
                description: "30 Heshvan followed by a short Heshvan",
            },
            TestCase {
                death:       hebrew(5772, 9, 30),
                year:        5786,
                expected:    739_606,
                description: "30 Kislev followed by a short Kislev",
            },
            TestCase {
                death:       hebrew(5784, 13, 14),
                year:        5787,
                expected:    740_063,
                description: "Adar II kept in the last month",
            },
            TestCase {
                death:       hebrew(5784, 12, 30),
                year:        5785,
                expected:    739_310,
                description: "30 Adar I in a common year",
            },
            TestCase {
                death:       hebrew(5784, 12, 30),
                year:        5787,
                expected:    740_049,
                description: "30 Adar I in a leap year",
            },
            TestCase {
                death:       hebrew(5782, 3, 16),
                year:        5790,
                expected:    741_245,
                description: "ordinary date",
            },
        ];

        for case in &cases {
            assert_eq!(yahrzeit(case.death, case.year), rd(case.expected), "{}", case.description);
        }
    }
}
