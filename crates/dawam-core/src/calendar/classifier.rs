//! Ordered-rule day classification.
//!
//! The precedence between rules is a behavioral contract, not an accident
//! of branching: weekend beats holiday beats shift-leave beats work. In
//! particular, an official holiday falling on a configured weekend day is
//! reported as `weekend`, never `holiday`.

use chrono::NaiveDate;
use serde::Serialize;

use super::holidays::HolidayCalendar;
use super::types::{weekday_number, DayKind, WorkConfiguration, WorkSystem};
use crate::shift::ShiftPattern;

/// A classified calendar date. Computed fresh per query, never cached
/// across configuration changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayClassification {
    pub date: NaiveDate,
    pub kind: DayKind,
}

/// Labels single dates as work / weekend / holiday / personal leave.
///
/// All inputs are borrowed; the classifier reads no ambient state and is
/// total and deterministic over any calendar date.
#[derive(Debug, Clone, Copy)]
pub struct DayClassifier<'a> {
    config: &'a WorkConfiguration,
    holidays: &'a HolidayCalendar,
    pattern: Option<&'a ShiftPattern>,
}

impl<'a> DayClassifier<'a> {
    pub fn new(
        config: &'a WorkConfiguration,
        holidays: &'a HolidayCalendar,
        pattern: Option<&'a ShiftPattern>,
    ) -> Self {
        Self { config, holidays, pattern }
    }

    /// Rule 1: the date's weekday is in the configured weekend set.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.config.is_weekend_weekday(weekday_number(date))
    }

    /// Rule 2: the date matches a holiday calendar entry (date-only key).
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    /// Rule 3: shift work system and the cycle places the date in its
    /// leave block.
    pub fn is_shift_leave(&self, date: NaiveDate) -> bool {
        self.config.work_system == WorkSystem::Shift
            && self.pattern.is_some_and(|p| p.is_leave_day(date))
    }

    /// Classify a date. First matching rule wins, in this order:
    /// weekend, holiday, shift leave, work.
    pub fn classify(&self, date: NaiveDate) -> DayKind {
        if self.is_weekend(date) {
            DayKind::Weekend
        } else if self.is_holiday(date) {
            DayKind::Holiday
        } else if self.is_shift_leave(date) {
            DayKind::PersonalLeave
        } else {
            DayKind::Work
        }
    }

    pub fn classify_date(&self, date: NaiveDate) -> DayClassification {
        DayClassification { date, kind: self.classify(date) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn config(weekend: &[u8], work_system: WorkSystem) -> WorkConfiguration {
        WorkConfiguration {
            country: "ae".into(),
            weekend_days: weekend.iter().copied().collect::<BTreeSet<u8>>(),
            work_system,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn plain_weekday_is_work() {
        let cfg = config(&[5, 6], WorkSystem::Official);
        let holidays = HolidayCalendar::empty();
        let classifier = DayClassifier::new(&cfg, &holidays, None);
        // 2024-01-08 is a Monday
        assert_eq!(classifier.classify(date(2024, 1, 8)), DayKind::Work);
    }

    #[test]
    fn weekend_beats_holiday() {
        // 2024-12-01 (Commemoration Day) falls on a Sunday; with a
        // Sunday/Saturday weekend it must classify as weekend.
        let cfg = config(&[0, 6], WorkSystem::Official);
        let holidays = HolidayCalendar::for_country("ae");
        let classifier = DayClassifier::new(&cfg, &holidays, None);
        let d = date(2024, 12, 1);
        assert!(classifier.is_holiday(d));
        assert_eq!(classifier.classify(d), DayKind::Weekend);
    }

    #[test]
    fn holiday_on_friday_reports_weekend() {
        // 2025-09-05 (Prophet Muhammad's Birthday) is a Friday; with the
        // default Fri/Sat weekend the weekend rule wins.
        let cfg = config(&[5, 6], WorkSystem::Official);
        let holidays = HolidayCalendar::for_country("ae");
        let classifier = DayClassifier::new(&cfg, &holidays, None);
        let d = date(2025, 9, 5);
        assert!(classifier.is_holiday(d));
        assert_eq!(classifier.classify(d), DayKind::Weekend);
    }

    #[test]
    fn holiday_on_work_weekday() {
        // 2024-12-02 (National Day) is a Monday; Fri/Sat weekend.
        let cfg = config(&[5, 6], WorkSystem::Official);
        let holidays = HolidayCalendar::for_country("ae");
        let classifier = DayClassifier::new(&cfg, &holidays, None);
        assert_eq!(classifier.classify(date(2024, 12, 2)), DayKind::Holiday);
    }

    #[test]
    fn shift_leave_only_under_shift_system() {
        let pattern = ShiftPattern {
            start_date: date(2024, 1, 1),
            work_days: 4,
            leave_days: 2,
            offset: 0,
            start_with_work: true,
        };
        let holidays = HolidayCalendar::empty();
        // 2024-01-05 is day 5 of the cycle: leave.
        let leave_day = date(2024, 1, 5);
        assert!(pattern.is_leave_day(leave_day));

        let official = config(&[], WorkSystem::Official);
        let classifier = DayClassifier::new(&official, &holidays, Some(&pattern));
        assert_eq!(classifier.classify(leave_day), DayKind::Work);

        let shift = config(&[], WorkSystem::Shift);
        let classifier = DayClassifier::new(&shift, &holidays, Some(&pattern));
        assert_eq!(classifier.classify(leave_day), DayKind::PersonalLeave);
    }

    #[test]
    fn classification_is_deterministic() {
        let cfg = config(&[5, 6], WorkSystem::Official);
        let holidays = HolidayCalendar::for_country("ae");
        let classifier = DayClassifier::new(&cfg, &holidays, None);
        let d = date(2025, 6, 6);
        assert_eq!(classifier.classify(d), classifier.classify(d));
    }
}
