pub mod classify;
pub mod config;
pub mod note;
pub mod shift;
pub mod stats;

use dawam_core::{HolidayCalendar, Settings};

/// Load stored settings, defaulting when absent.
pub fn load_settings() -> Result<Settings, Box<dyn std::error::Error>> {
    Ok(Settings::load()?)
}

/// Holiday calendar for the configured country.
pub fn holiday_calendar(settings: &Settings) -> HolidayCalendar {
    HolidayCalendar::for_country(&settings.work.country)
}
