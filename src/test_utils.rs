//! Shared fixtures for the unit tests.

use crate::french::FrenchDate;
use crate::gregorian::GregorianDate;
use crate::hebrew::HebrewDate;
use crate::islamic::IslamicDate;
use crate::julian::JulianDate;

/// One day expressed in every calendar.
pub(crate) struct Sample {
    pub rd:          i64,
    pub gregorian:   (i64, i64, i64),
    pub julian:      (i64, i64, i64),
    pub iso:         (i64, i64, i64),
    pub islamic:     Option<(i64, i64, i64)>,
    pub hebrew:      (i64, i64, i64),
    pub long_count:  (i64, i64, i64, i64, i64),
    /// (day, month)
    pub haab:        (i64, i64),
    /// (number, name)
    pub tzolkin:     (i64, i64),
    pub french:      Option<(i64, i64, i64)>,
    pub hindu_solar: (i64, i64, i64),
    /// (year, month, leap month, day)
    pub hindu_lunar: (i64, i64, bool, i64),
}

/// Reference days from Reingold and Dershowitz, "Calendrical Calculations",
/// Appendix C, spanning 586 BC to AD 2094.
pub(crate) const SAMPLES: [Sample; 33] = [
    Sample {
        rd: -214193,
        gregorian: (-586, 7, 24),
        julian: (-586, 7, 30),
        iso: (-586, 29, 7),
        islamic: None,
        hebrew: (3174, 5, 10),
        long_count: (6, 8, 3, 13, 9),
        haab: (12, 11),
        tzolkin: (5, 9),
        french: None,
        hindu_solar: (2515, 5, 19),
        hindu_lunar: (2515, 6, false, 11),
    },
    Sample {
        rd: -61387,
        gregorian: (-168, 12, 5),
        julian: (-168, 12, 8),
        iso: (-168, 49, 3),
        islamic: None,
        hebrew: (3593, 9, 25),
        long_count: (7, 9, 8, 3, 15),
        haab: (3, 5),
        tzolkin: (9, 15),
        french: None,
        hindu_solar: (2933, 9, 25),
        hindu_lunar: (2933, 9, false, 26),
    },
    Sample {
        rd: 25469,
        gregorian: (70, 9, 24),
        julian: (70, 9, 26),
        iso: (70, 39, 3),
        islamic: None,
        hebrew: (3831, 7, 3),
        long_count: (8, 1, 9, 8, 11),
        haab: (9, 4),
        tzolkin: (12, 11),
        french: None,
        hindu_solar: (3171, 7, 11),
        hindu_lunar: (3171, 8, false, 3),
    },
    Sample {
        rd: 49217,
        gregorian: (135, 10, 2),
        julian: (135, 10, 3),
        iso: (135, 39, 7),
        islamic: None,
        hebrew: (3896, 7, 9),
        long_count: (8, 4, 15, 7, 19),
        haab: (12, 5),
        tzolkin: (9, 19),
        french: None,
        hindu_solar: (3236, 7, 17),
        hindu_lunar: (3236, 8, false, 8),
    },
    Sample {
        rd: 171307,
        gregorian: (470, 1, 8),
        julian: (470, 1, 7),
        iso: (470, 2, 3),
        islamic: None,
        hebrew: (4230, 10, 18),
        long_count: (9, 1, 14, 10, 9),
        haab: (12, 14),
        tzolkin: (3, 9),
        french: None,
        hindu_solar: (3570, 10, 19),
        hindu_lunar: (3570, 11, true, 19),
    },
    Sample {
        rd: 210155,
        gregorian: (576, 5, 20),
        julian: (576, 5, 18),
        iso: (576, 21, 1),
        islamic: None,
        hebrew: (4336, 3, 4),
        long_count: (9, 7, 2, 8, 17),
        haab: (5, 4),
        tzolkin: (7, 17),
        french: None,
        hindu_solar: (3677, 2, 28),
        hindu_lunar: (3677, 3, false, 5),
    },
    Sample {
        rd: 253427,
        gregorian: (694, 11, 10),
        julian: (694, 11, 7),
        iso: (694, 45, 6),
        islamic: Some((75, 7, 13)),
        hebrew: (4455, 8, 13),
        long_count: (9, 13, 2, 12, 9),
        haab: (7, 14),
        tzolkin: (2, 9),
        french: None,
        hindu_solar: (3795, 8, 17),
        hindu_lunar: (3795, 9, false, 14),
    },
    Sample {
        rd: 369740,
        gregorian: (1013, 4, 25),
        julian: (1013, 4, 19),
        iso: (1013, 16, 7),
        islamic: Some((403, 10, 5)),
        hebrew: (4773, 2, 6),
        long_count: (10, 9, 5, 14, 2),
        haab: (5, 8),
        tzolkin: (4, 2),
        french: None,
        hindu_solar: (4114, 1, 25),
        hindu_lunar: (4114, 2, false, 6),
    },
    Sample {
        rd: 400085,
        gregorian: (1096, 5, 24),
        julian: (1096, 5, 18),
        iso: (1096, 21, 7),
        islamic: Some((489, 5, 22)),
        hebrew: (4856, 2, 23),
        long_count: (10, 13, 10, 1, 7),
        haab: (15, 10),
        tzolkin: (7, 7),
        french: None,
        hindu_solar: (4197, 2, 23),
        hindu_lunar: (4197, 2, false, 24),
    },
    Sample {
        rd: 434355,
        gregorian: (1190, 3, 23),
        julian: (1190, 3, 16),
        iso: (1190, 12, 5),
        islamic: Some((586, 2, 7)),
        hebrew: (4950, 1, 7),
        long_count: (10, 18, 5, 4, 17),
        haab: (15, 8),
        tzolkin: (9, 17),
        french: None,
        hindu_solar: (4290, 12, 20),
        hindu_lunar: (4291, 1, false, 8),
    },
    Sample {
        rd: 452605,
        gregorian: (1240, 3, 10),
        julian: (1240, 3, 3),
        iso: (1240, 10, 6),
        islamic: Some((637, 8, 7)),
        hebrew: (5000, 13, 8),
        long_count: (11, 0, 15, 17, 7),
        haab: (15, 8),
        tzolkin: (7, 7),
        french: None,
        hindu_solar: (4340, 12, 7),
        hindu_lunar: (4340, 12, false, 9),
    },
    Sample {
        rd: 470160,
        gregorian: (1288, 4, 2),
        julian: (1288, 3, 26),
        iso: (1288, 14, 5),
        islamic: Some((687, 2, 20)),
        hebrew: (5048, 1, 21),
        long_count: (11, 3, 4, 13, 2),
        haab: (10, 10),
        tzolkin: (12, 2),
        french: None,
        hindu_solar: (4388, 12, 30),
        hindu_lunar: (4389, 1, false, 23),
    },
    Sample {
        rd: 473837,
        gregorian: (1298, 4, 27),
        julian: (1298, 4, 20),
        iso: (1298, 17, 7),
        islamic: Some((697, 7, 7)),
        hebrew: (5058, 2, 7),
        long_count: (11, 3, 14, 16, 19),
        haab: (17, 11),
        tzolkin: (10, 19),
        french: None,
        hindu_solar: (4399, 1, 23),
        hindu_lunar: (4399, 2, false, 8),
    },
    Sample {
        rd: 507850,
        gregorian: (1391, 6, 12),
        julian: (1391, 6, 4),
        iso: (1391, 23, 7),
        islamic: Some((793, 7, 1)),
        hebrew: (5151, 4, 1),
        long_count: (11, 8, 9, 7, 12),
        haab: (5, 15),
        tzolkin: (2, 12),
        french: None,
        hindu_solar: (4492, 3, 7),
        hindu_lunar: (4492, 4, false, 2),
    },
    Sample {
        rd: 524156,
        gregorian: (1436, 2, 3),
        julian: (1436, 1, 25),
        iso: (1436, 5, 3),
        islamic: Some((839, 7, 6)),
        hebrew: (5196, 11, 7),
        long_count: (11, 10, 14, 12, 18),
        haab: (6, 9),
        tzolkin: (6, 18),
        french: None,
        hindu_solar: (4536, 10, 28),
        hindu_lunar: (4536, 11, false, 7),
    },
    Sample {
        rd: 544676,
        gregorian: (1492, 4, 9),
        julian: (1492, 3, 31),
        iso: (1492, 14, 6),
        islamic: Some((897, 6, 1)),
        hebrew: (5252, 1, 3),
        long_count: (11, 13, 11, 12, 18),
        haab: (6, 13),
        tzolkin: (12, 18),
        french: None,
        hindu_solar: (4593, 1, 2),
        hindu_lunar: (4593, 1, false, 3),
    },
    Sample {
        rd: 567118,
        gregorian: (1553, 9, 19),
        julian: (1553, 9, 9),
        iso: (1553, 38, 6),
        islamic: Some((960, 9, 30)),
        hebrew: (5314, 7, 1),
        long_count: (11, 16, 14, 1, 0),
        haab: (18, 3),
        tzolkin: (3, 20),
        french: None,
        hindu_solar: (4654, 6, 11),
        hindu_lunar: (4654, 7, false, 2),
    },
    Sample {
        rd: 569477,
        gregorian: (1560, 3, 5),
        julian: (1560, 2, 24),
        iso: (1560, 9, 6),
        islamic: Some((967, 5, 27)),
        hebrew: (5320, 12, 27),
        long_count: (11, 17, 0, 10, 19),
        haab: (7, 12),
        tzolkin: (9, 19),
        french: None,
        hindu_solar: (4660, 11, 27),
        hindu_lunar: (4660, 11, false, 28),
    },
    Sample {
        rd: 601716,
        gregorian: (1648, 6, 10),
        julian: (1648, 5, 31),
        iso: (1648, 24, 3),
        islamic: Some((1058, 5, 18)),
        hebrew: (5408, 3, 20),
        long_count: (12, 1, 10, 2, 18),
        haab: (6, 18),
        tzolkin: (8, 18),
        french: None,
        hindu_solar: (4749, 3, 1),
        hindu_lunar: (4749, 3, false, 20),
    },
    Sample {
        rd: 613424,
        gregorian: (1680, 6, 30),
        julian: (1680, 6, 20),
        iso: (1680, 26, 7),
        islamic: Some((1091, 6, 2)),
        hebrew: (5440, 4, 3),
        long_count: (12, 3, 2, 12, 6),
        haab: (9, 1),
        tzolkin: (3, 6),
        french: None,
        hindu_solar: (4781, 3, 21),
        hindu_lunar: (4781, 4, false, 4),
    },
    Sample {
        rd: 626596,
        gregorian: (1716, 7, 24),
        julian: (1716, 7, 13),
        iso: (1716, 30, 5),
        islamic: Some((1128, 8, 4)),
        hebrew: (5476, 5, 5),
        long_count: (12, 4, 19, 4, 18),
        haab: (1, 3),
        tzolkin: (6, 18),
        french: None,
        hindu_solar: (4817, 4, 13),
        hindu_lunar: (4817, 5, false, 5),
    },
    Sample {
        rd: 645554,
        gregorian: (1768, 6, 19),
        julian: (1768, 6, 8),
        iso: (1768, 24, 7),
        islamic: Some((1182, 2, 3)),
        hebrew: (5528, 4, 4),
        long_count: (12, 7, 11, 16, 16),
        haab: (19, 1),
        tzolkin: (10, 16),
        french: None,
        hindu_solar: (4869, 3, 8),
        hindu_lunar: (4869, 4, false, 5),
    },
    Sample {
        rd: 664224,
        gregorian: (1819, 8, 2),
        julian: (1819, 7, 21),
        iso: (1819, 31, 1),
        islamic: Some((1234, 10, 10)),
        hebrew: (5579, 5, 11),
        long_count: (12, 10, 3, 14, 6),
        haab: (14, 4),
        tzolkin: (12, 6),
        french: Some((27, 11, 14)),
        hindu_solar: (4920, 4, 19),
        hindu_lunar: (4920, 5, false, 11),
    },
    Sample {
        rd: 671401,
        gregorian: (1839, 3, 27),
        julian: (1839, 3, 15),
        iso: (1839, 13, 3),
        islamic: Some((1255, 1, 11)),
        hebrew: (5599, 1, 12),
        long_count: (12, 11, 3, 13, 3),
        haab: (16, 16),
        tzolkin: (13, 3),
        french: Some((47, 7, 6)),
        hindu_solar: (4939, 12, 13),
        hindu_lunar: (4940, 1, true, 12),
    },
    Sample {
        rd: 694799,
        gregorian: (1903, 4, 19),
        julian: (1903, 4, 6),
        iso: (1903, 16, 7),
        islamic: Some((1321, 1, 21)),
        hebrew: (5663, 1, 22),
        long_count: (12, 14, 8, 13, 1),
        haab: (14, 18),
        tzolkin: (11, 1),
        french: Some((111, 7, 29)),
        hindu_solar: (5004, 1, 4),
        hindu_lunar: (5004, 1, false, 22),
    },
    Sample {
        rd: 704424,
        gregorian: (1929, 8, 25),
        julian: (1929, 8, 12),
        iso: (1929, 34, 7),
        islamic: Some((1348, 3, 19)),
        hebrew: (5689, 5, 19),
        long_count: (12, 15, 15, 8, 6),
        haab: (4, 7),
        tzolkin: (3, 6),
        french: Some((137, 12, 7)),
        hindu_solar: (5030, 5, 10),
        hindu_lunar: (5030, 5, false, 20),
    },
    Sample {
        rd: 708842,
        gregorian: (1941, 9, 29),
        julian: (1941, 9, 16),
        iso: (1941, 40, 1),
        islamic: Some((1360, 9, 8)),
        hebrew: (5702, 7, 8),
        long_count: (12, 16, 7, 13, 4),
        haab: (2, 9),
        tzolkin: (1, 4),
        french: Some((150, 1, 7)),
        hindu_solar: (5042, 6, 15),
        hindu_lunar: (5042, 7, false, 9),
    },
    Sample {
        rd: 709409,
        gregorian: (1943, 4, 19),
        julian: (1943, 4, 6),
        iso: (1943, 16, 1),
        islamic: Some((1362, 4, 13)),
        hebrew: (5703, 1, 14),
        long_count: (12, 16, 9, 5, 11),
        haab: (4, 19),
        tzolkin: (9, 11),
        french: Some((151, 7, 29)),
        hindu_solar: (5044, 1, 4),
        hindu_lunar: (5044, 1, false, 15),
    },
    Sample {
        rd: 709580,
        gregorian: (1943, 10, 7),
        julian: (1943, 9, 24),
        iso: (1943, 40, 4),
        islamic: Some((1362, 10, 7)),
        hebrew: (5704, 7, 8),
        long_count: (12, 16, 9, 14, 2),
        haab: (10, 9),
        tzolkin: (11, 2),
        french: Some((152, 1, 15)),
        hindu_solar: (5044, 6, 22),
        hindu_lunar: (5044, 7, false, 8),
    },
    Sample {
        rd: 727274,
        gregorian: (1992, 3, 17),
        julian: (1992, 3, 4),
        iso: (1992, 12, 2),
        islamic: Some((1412, 9, 13)),
        hebrew: (5752, 13, 12),
        long_count: (12, 18, 18, 16, 16),
        haab: (4, 18),
        tzolkin: (12, 16),
        french: Some((200, 6, 27)),
        hindu_solar: (5092, 12, 1),
        hindu_lunar: (5092, 12, false, 14),
    },
    Sample {
        rd: 728714,
        gregorian: (1996, 2, 25),
        julian: (1996, 2, 12),
        iso: (1996, 8, 7),
        islamic: Some((1416, 10, 5)),
        hebrew: (5756, 12, 5),
        long_count: (12, 19, 2, 16, 16),
        haab: (4, 17),
        tzolkin: (9, 16),
        french: Some((204, 6, 7)),
        hindu_solar: (5096, 11, 11),
        hindu_lunar: (5096, 12, false, 7),
    },
    Sample {
        rd: 744313,
        gregorian: (2038, 11, 10),
        julian: (2038, 10, 28),
        iso: (2038, 45, 3),
        islamic: Some((1460, 10, 12)),
        hebrew: (5799, 8, 12),
        long_count: (13, 1, 6, 4, 15),
        haab: (8, 12),
        tzolkin: (8, 15),
        french: Some((247, 2, 20)),
        hindu_solar: (5139, 7, 25),
        hindu_lunar: (5139, 8, false, 13),
    },
    Sample {
        rd: 764652,
        gregorian: (2094, 7, 18),
        julian: (2094, 7, 5),
        iso: (2094, 28, 7),
        islamic: Some((1518, 3, 5)),
        hebrew: (5854, 5, 5),
        long_count: (13, 4, 2, 13, 14),
        haab: (7, 7),
        tzolkin: (2, 14),
        french: Some((302, 11, 1)),
        hindu_solar: (5195, 4, 1),
        hindu_lunar: (5195, 4, false, 6),
    },
];

pub(crate) const fn gregorian(year: i64, month: i64, day: i64) -> GregorianDate {
    GregorianDate { year, month, day }
}

pub(crate) const fn julian(year: i64, month: i64, day: i64) -> JulianDate {
    JulianDate { year, month, day }
}

pub(crate) const fn islamic(year: i64, month: i64, day: i64) -> IslamicDate {
    IslamicDate { year, month, day }
}

pub(crate) const fn hebrew(year: i64, month: i64, day: i64) -> HebrewDate {
    HebrewDate { year, month, day }
}

pub(crate) const fn french(year: i64, month: i64, day: i64) -> FrenchDate {
    FrenchDate { year, month, day }
}
