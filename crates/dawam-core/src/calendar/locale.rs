//! Arabic/English display strings for calendar rendering.

use serde::{Deserialize, Serialize};

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ar,
    En,
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Ar
    }
}

const WEEKDAYS_EN: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

const WEEKDAYS_EN_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKDAYS_AR: [&str; 7] = [
    "الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت",
];

const WEEKDAYS_AR_SHORT: [&str; 7] = ["أحد", "اثنين", "ثلاثاء", "أربعاء", "خميس", "جمعة", "سبت"];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const MONTHS_AR: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
    "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];

/// Weekday name, `weekday` 0 = Sunday .. 6 = Saturday.
pub fn weekday_name(lang: Lang, weekday: u8) -> &'static str {
    let idx = weekday as usize % 7;
    match lang {
        Lang::En => WEEKDAYS_EN[idx],
        Lang::Ar => WEEKDAYS_AR[idx],
    }
}

/// Abbreviated weekday name, `weekday` 0 = Sunday .. 6 = Saturday.
pub fn weekday_short_name(lang: Lang, weekday: u8) -> &'static str {
    let idx = weekday as usize % 7;
    match lang {
        Lang::En => WEEKDAYS_EN_SHORT[idx],
        Lang::Ar => WEEKDAYS_AR_SHORT[idx],
    }
}

/// Month name, `month` 1 = January .. 12 = December.
pub fn month_name(lang: Lang, month: u32) -> &'static str {
    let idx = (month.clamp(1, 12) - 1) as usize;
    match lang {
        Lang::En => MONTHS_EN[idx],
        Lang::Ar => MONTHS_AR[idx],
    }
}
