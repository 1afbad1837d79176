//! Month and day names for human-readable output.

pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const ISLAMIC_MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi I",
    "Rabi II",
    "Jumada I",
    "Jumada II",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qada",
    "Dhu al-Hijjah",
];

/// Hebrew months numbered from Nisan. Month 13 only exists in leap years.
pub const HEBREW_MONTHS: [&str; 13] = [
    "Nisan", "Iyyar", "Sivan", "Tammuz", "Av", "Elul", "Tishri", "Heshvan", "Kislev", "Teveth", "Shevat", "Adar",
    "Adar II",
];

/// Name of Adar in a leap year.
pub const HEBREW_ADAR_I: &str = "Adar I";

/// Haab months; the 19th is the five-day Uayeb at the end of the year.
pub const MAYAN_HAAB_MONTHS: [&str; 19] = [
    "Pop", "Uo", "Zip", "Zotz", "Tzec", "Xul", "Yaxkin", "Mol", "Chen", "Yax", "Zac", "Ceh", "Mac", "Kankin", "Muan",
    "Pax", "Kayab", "Cumku", "Uayeb",
];

pub const MAYAN_TZOLKIN_NAMES: [&str; 20] = [
    "Imix", "Ik", "Akbal", "Kan", "Chiccan", "Cimi", "Manik", "Lamat", "Muluc", "Oc", "Chuen", "Eb", "Ben", "Ix", "Men",
    "Cib", "Caban", "Etznab", "Cauac", "Ahau",
];

/// French Revolutionary months; the 13th holds the complementary days.
pub const FRENCH_MONTHS: [&str; 13] = [
    "Vendémiaire",
    "Brumaire",
    "Frimaire",
    "Nivôse",
    "Pluviôse",
    "Ventôse",
    "Germinal",
    "Floréal",
    "Prairial",
    "Messidor",
    "Thermidor",
    "Fructidor",
    "jour complémentaire",
];

pub const HINDU_SOLAR_MONTHS: [&str; 12] = [
    "Mesha",
    "Vrshabha",
    "Mithuna",
    "Karka",
    "Simha",
    "Kanya",
    "Tula",
    "Vrischika",
    "Dhanus",
    "Makara",
    "Kumbha",
    "Mina",
];

pub const HINDU_LUNAR_MONTHS: [&str; 12] = [
    "Chaitra",
    "Vaisakha",
    "Jyaishtha",
    "Ashadha",
    "Sravana",
    "Bhadrapada",
    "Asvina",
    "Kartika",
    "Margasira",
    "Pausha",
    "Magha",
    "Phalguna",
];

/// Looks up a 1-based month or day name, or `"?"` when out of range.
pub fn lookup(table: &[&'static str], number: i64) -> &'static str {
    usize::try_from(number - 1)
        .ok()
        .and_then(|index| table.get(index).copied())
        .unwrap_or("?")
}
