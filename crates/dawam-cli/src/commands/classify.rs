use chrono::{NaiveDate, Utc};
use dawam_core::calendar::{weekday_name, weekday_number, Lang};
use dawam_core::DayClassifier;
use serde_json::json;

use super::{holiday_calendar, load_settings};

pub fn run_today() -> Result<(), Box<dyn std::error::Error>> {
    classify_and_print(Utc::now().date_naive())
}

pub fn run_date(date: &str) -> Result<(), Box<dyn std::error::Error>> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{date}': {e}"))?;
    classify_and_print(date)
}

fn classify_and_print(date: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings()?;
    let holidays = holiday_calendar(&settings);
    let classifier = DayClassifier::new(&settings.work, &holidays, settings.shift_pattern.as_ref());

    let kind = classifier.classify(date);
    let weekday = weekday_number(date);
    let holiday = holidays.get(date);

    let output = json!({
        "date": date,
        "weekday": {
            "en": weekday_name(Lang::En, weekday),
            "ar": weekday_name(Lang::Ar, weekday),
        },
        "kind": kind,
        "label": {
            "en": kind.label(Lang::En),
            "ar": kind.label(Lang::Ar),
        },
        "holiday": holiday.map(|h| json!({ "en": h.name_en, "ar": h.name_ar })),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
