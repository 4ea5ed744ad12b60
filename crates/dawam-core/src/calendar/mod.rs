//! Calendar domain: work configuration, holiday reference data, and the
//! ordered-rule day classifier.

mod classifier;
mod holidays;
mod locale;
mod types;

pub use classifier::{DayClassification, DayClassifier};
pub use holidays::{CountryProfile, Holiday, HolidayCalendar, country_profile, COUNTRIES};
pub use locale::{month_name, weekday_name, weekday_short_name, Lang};
pub use types::{weekday_number, DayKind, WorkConfiguration, WorkSystem};
