//! Compiled holiday and country reference data.
//!
//! The holiday calendar is static reference data, never edited by the
//! user. Lookups are by date-only key; time-of-day never participates.
//! Country profiles carry the per-country default weekend set used when
//! geolocation picks a country for a fresh install.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

/// One official holiday entry with localized names.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name_en: &'static str,
    pub name_ar: &'static str,
}

/// Ordered, read-only sequence of official holidays for one country.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    entries: Vec<Holiday>,
}

/// (year, month, day, english name, arabic name)
type HolidayRow = (i32, u32, u32, &'static str, &'static str);

/// UAE official holidays, 2024-2026. Islamic dates follow the announced
/// observed dates, not astronomical calculation.
const UAE_HOLIDAYS: &[HolidayRow] = &[
    (2024, 1, 1, "New Year's Day", "رأس السنة الميلادية"),
    (2024, 4, 8, "Eid Al Fitr Holiday", "عطلة عيد الفطر"),
    (2024, 4, 9, "Eid Al Fitr Holiday", "عطلة عيد الفطر"),
    (2024, 4, 10, "Eid Al Fitr", "عيد الفطر"),
    (2024, 4, 11, "Eid Al Fitr Holiday", "عطلة عيد الفطر"),
    (2024, 4, 12, "Eid Al Fitr Holiday", "عطلة عيد الفطر"),
    (2024, 6, 15, "Arafat Day", "يوم عرفة"),
    (2024, 6, 16, "Eid Al Adha", "عيد الأضحى"),
    (2024, 6, 17, "Eid Al Adha Holiday", "عطلة عيد الأضحى"),
    (2024, 6, 18, "Eid Al Adha Holiday", "عطلة عيد الأضحى"),
    (2024, 7, 7, "Islamic New Year", "رأس السنة الهجرية"),
    (2024, 9, 15, "Prophet Muhammad's Birthday", "المولد النبوي الشريف"),
    (2024, 12, 1, "Commemoration Day", "يوم الشهيد"),
    (2024, 12, 2, "National Day", "اليوم الوطني"),
    (2024, 12, 3, "National Day Holiday", "عطلة اليوم الوطني"),
    (2025, 1, 1, "New Year's Day", "رأس السنة الميلادية"),
    (2025, 3, 30, "Eid Al Fitr", "عيد الفطر"),
    (2025, 3, 31, "Eid Al Fitr Holiday", "عطلة عيد الفطر"),
    (2025, 4, 1, "Eid Al Fitr Holiday", "عطلة عيد الفطر"),
    (2025, 6, 5, "Arafat Day", "يوم عرفة"),
    (2025, 6, 6, "Eid Al Adha", "عيد الأضحى"),
    (2025, 6, 7, "Eid Al Adha Holiday", "عطلة عيد الأضحى"),
    (2025, 6, 8, "Eid Al Adha Holiday", "عطلة عيد الأضحى"),
    (2025, 6, 27, "Islamic New Year", "رأس السنة الهجرية"),
    (2025, 9, 5, "Prophet Muhammad's Birthday", "المولد النبوي الشريف"),
    (2025, 12, 1, "Commemoration Day", "يوم الشهيد"),
    (2025, 12, 2, "National Day", "اليوم الوطني"),
    (2025, 12, 3, "National Day Holiday", "عطلة اليوم الوطني"),
    (2026, 1, 1, "New Year's Day", "رأس السنة الميلادية"),
    (2026, 3, 20, "Eid Al Fitr", "عيد الفطر"),
    (2026, 3, 21, "Eid Al Fitr Holiday", "عطلة عيد الفطر"),
    (2026, 3, 22, "Eid Al Fitr Holiday", "عطلة عيد الفطر"),
    (2026, 5, 26, "Arafat Day", "يوم عرفة"),
    (2026, 5, 27, "Eid Al Adha", "عيد الأضحى"),
    (2026, 5, 28, "Eid Al Adha Holiday", "عطلة عيد الأضحى"),
    (2026, 5, 29, "Eid Al Adha Holiday", "عطلة عيد الأضحى"),
    (2026, 6, 17, "Islamic New Year", "رأس السنة الهجرية"),
    (2026, 8, 25, "Prophet Muhammad's Birthday", "المولد النبوي الشريف"),
    (2026, 12, 1, "Commemoration Day", "يوم الشهيد"),
    (2026, 12, 2, "National Day", "اليوم الوطني"),
    (2026, 12, 3, "National Day Holiday", "عطلة اليوم الوطني"),
];

impl HolidayCalendar {
    /// Calendar for a country slug. Countries without compiled data get an
    /// empty calendar, which classifies every day as non-holiday.
    pub fn for_country(country: &str) -> Self {
        let rows: &[HolidayRow] = match country {
            "ae" => UAE_HOLIDAYS,
            _ => &[],
        };
        let entries = rows
            .iter()
            .filter_map(|&(y, m, d, name_en, name_ar)| {
                NaiveDate::from_ymd_opt(y, m, d).map(|date| Holiday { date, name_en, name_ar })
            })
            .collect();
        Self { entries }
    }

    /// Empty calendar.
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.get(date).is_some()
    }

    /// First entry matching the date-only key, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.entries.iter().find(|h| h.date == date)
    }

    pub fn entries(&self) -> &[Holiday] {
        &self.entries
    }

    /// Entries within an inclusive date range, in calendar order.
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = &Holiday> {
        self.entries.iter().filter(move |h| h.date >= start && h.date <= end)
    }
}

/// Country reference entry: localized names and the default weekend set
/// applied when the country is first selected.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CountryProfile {
    pub code: &'static str,
    pub name_en: &'static str,
    pub name_ar: &'static str,
    pub default_weekend: &'static [u8],
}

impl CountryProfile {
    pub fn default_weekend_set(&self) -> BTreeSet<u8> {
        self.default_weekend.iter().copied().collect()
    }
}

/// Compiled country table. Weekend numbers are 0 = Sunday .. 6 = Saturday.
pub const COUNTRIES: &[CountryProfile] = &[
    CountryProfile { code: "ae", name_en: "United Arab Emirates", name_ar: "الإمارات", default_weekend: &[5, 6] },
    CountryProfile { code: "sa", name_en: "Saudi Arabia", name_ar: "السعودية", default_weekend: &[5, 6] },
    CountryProfile { code: "eg", name_en: "Egypt", name_ar: "مصر", default_weekend: &[5, 6] },
    CountryProfile { code: "jo", name_en: "Jordan", name_ar: "الأردن", default_weekend: &[5, 6] },
    CountryProfile { code: "kw", name_en: "Kuwait", name_ar: "الكويت", default_weekend: &[5, 6] },
    CountryProfile { code: "qa", name_en: "Qatar", name_ar: "قطر", default_weekend: &[5, 6] },
    CountryProfile { code: "bh", name_en: "Bahrain", name_ar: "البحرين", default_weekend: &[5, 6] },
    CountryProfile { code: "om", name_en: "Oman", name_ar: "عُمان", default_weekend: &[5, 6] },
    CountryProfile { code: "iq", name_en: "Iraq", name_ar: "العراق", default_weekend: &[5, 6] },
    CountryProfile { code: "lb", name_en: "Lebanon", name_ar: "لبنان", default_weekend: &[0, 6] },
    CountryProfile { code: "ma", name_en: "Morocco", name_ar: "المغرب", default_weekend: &[0, 6] },
    CountryProfile { code: "dz", name_en: "Algeria", name_ar: "الجزائر", default_weekend: &[5, 6] },
    CountryProfile { code: "tn", name_en: "Tunisia", name_ar: "تونس", default_weekend: &[0, 6] },
    CountryProfile { code: "tr", name_en: "Turkey", name_ar: "تركيا", default_weekend: &[0, 6] },
    CountryProfile { code: "us", name_en: "United States", name_ar: "الولايات المتحدة", default_weekend: &[0, 6] },
    CountryProfile { code: "gb", name_en: "United Kingdom", name_ar: "المملكة المتحدة", default_weekend: &[0, 6] },
    CountryProfile { code: "de", name_en: "Germany", name_ar: "ألمانيا", default_weekend: &[0, 6] },
    CountryProfile { code: "fr", name_en: "France", name_ar: "فرنسا", default_weekend: &[0, 6] },
    CountryProfile { code: "in", name_en: "India", name_ar: "الهند", default_weekend: &[0, 6] },
    CountryProfile { code: "pk", name_en: "Pakistan", name_ar: "باكستان", default_weekend: &[0, 6] },
];

/// Look up a country profile by lowercase slug.
pub fn country_profile(code: &str) -> Option<&'static CountryProfile> {
    COUNTRIES.iter().find(|c| c.code == code)
}
