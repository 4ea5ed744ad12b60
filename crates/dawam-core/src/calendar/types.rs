use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::locale::Lang;

/// The single-label categorization of a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    Work,
    Weekend,
    Holiday,
    PersonalLeave,
}

impl DayKind {
    /// Localized display label.
    pub fn label(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (DayKind::Work, Lang::En) => "Work Day",
            (DayKind::Work, Lang::Ar) => "يوم عمل",
            (DayKind::Weekend, Lang::En) => "Weekend",
            (DayKind::Weekend, Lang::Ar) => "عطلة نهاية الأسبوع",
            (DayKind::Holiday, Lang::En) => "Official Holiday",
            (DayKind::Holiday, Lang::Ar) => "إجازة رسمية",
            (DayKind::PersonalLeave, Lang::En) => "Personal Leave",
            (DayKind::PersonalLeave, Lang::Ar) => "إجازة شخصية",
        }
    }
}

/// How the user's work week is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkSystem {
    /// Fixed weekly schedule: every non-weekend, non-holiday day is work.
    Official,
    /// Repeating work/leave cycle on top of the weekly schedule.
    Shift,
}

/// User work configuration consumed by the classifier and aggregator.
///
/// `weekend_days` uses weekday numbers 0 = Sunday .. 6 = Saturday.
/// Set semantics: duplicates collapse, order is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkConfiguration {
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_weekend")]
    pub weekend_days: BTreeSet<u8>,
    #[serde(default = "default_work_system")]
    pub work_system: WorkSystem,
}

fn default_country() -> String {
    "ae".into()
}

fn default_weekend() -> BTreeSet<u8> {
    // Friday, Saturday
    BTreeSet::from([5, 6])
}

fn default_work_system() -> WorkSystem {
    WorkSystem::Official
}

impl Default for WorkConfiguration {
    fn default() -> Self {
        Self {
            country: default_country(),
            weekend_days: default_weekend(),
            work_system: default_work_system(),
        }
    }
}

impl WorkConfiguration {
    pub fn is_weekend_weekday(&self, weekday: u8) -> bool {
        self.weekend_days.contains(&weekday)
    }
}

/// Weekday number of a date, 0 = Sunday .. 6 = Saturday.
pub fn weekday_number(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_numbers_are_sunday_based() {
        // 2024-01-07 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(weekday_number(sunday), 0);
        // 2024-01-05 is a Friday, 2024-01-06 a Saturday
        assert_eq!(weekday_number(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()), 5);
        assert_eq!(weekday_number(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()), 6);
    }

    #[test]
    fn weekend_set_collapses_duplicates() {
        let config: WorkConfiguration =
            serde_json::from_str(r#"{"country":"ae","weekend_days":[5,6,5,6],"work_system":"official"}"#)
                .unwrap();
        assert_eq!(config.weekend_days.len(), 2);
        assert!(config.is_weekend_weekday(5));
        assert!(config.is_weekend_weekday(6));
        assert!(!config.is_weekend_weekday(0));
    }

    #[test]
    fn default_configuration_is_uae_friday_saturday() {
        let config = WorkConfiguration::default();
        assert_eq!(config.country, "ae");
        assert_eq!(config.weekend_days, BTreeSet::from([5, 6]));
        assert_eq!(config.work_system, WorkSystem::Official);
    }
}
