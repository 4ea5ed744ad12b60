//! Day-count statistics over calendar windows.
//!
//! Every date in an inclusive range is labeled by the day classifier and
//! accumulated into per-kind counters. The counters always sum to the
//! exact number of days in the range; an inverted range contributes
//! nothing. Derived shares guard the (unreachable for real calendar
//! ranges) zero-total case instead of dividing by zero.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{month_name, DayClassifier, DayKind, Lang};

/// The three fixed aggregation windows, computed relative to a reference
/// "today". The aggregator itself accepts arbitrary ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Month,
    /// 3-month blocks starting January.
    Quarter,
    Year,
}

impl Period {
    /// Inclusive `[start, end]` bounds of the window containing `today`.
    pub fn bounds(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let year = today.year();
        match self {
            Period::Month => {
                let start = first_of_month(year, today.month());
                (start, last_of_month(year, today.month()))
            }
            Period::Quarter => {
                let quarter = (today.month0()) / 3;
                let start_month = quarter * 3 + 1;
                let start = first_of_month(year, start_month);
                (start, last_of_month(year, start_month + 2))
            }
            Period::Year => (first_of_month(year, 1), last_of_month(year, 12)),
        }
    }

    /// Localized window label, e.g. "August 2026", "Q3 2026", "2026".
    pub fn label(self, lang: Lang, today: NaiveDate) -> String {
        match self {
            Period::Month => format!("{} {}", month_name(lang, today.month()), today.year()),
            Period::Quarter => {
                let quarter = today.month0() / 3 + 1;
                match lang {
                    Lang::En => format!("Q{} {}", quarter, today.year()),
                    Lang::Ar => format!("الربع {} - {}", quarter, today.year()),
                }
            }
            Period::Year => today.year().to_string(),
        }
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or(NaiveDate::MIN)
}

fn last_of_month(year: i32, month: u32) -> NaiveDate {
    let next = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    next.pred_opt().unwrap_or(next)
}

/// Per-kind day counts for one aggregation window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStats {
    pub work_days: u32,
    pub weekend_days: u32,
    pub holiday_days: u32,
    pub personal_leave_days: u32,
}

impl PeriodStats {
    pub fn total(&self) -> u32 {
        self.work_days + self.weekend_days + self.holiday_days + self.personal_leave_days
    }

    pub fn count(&self, kind: DayKind) -> u32 {
        match kind {
            DayKind::Work => self.work_days,
            DayKind::Weekend => self.weekend_days,
            DayKind::Holiday => self.holiday_days,
            DayKind::PersonalLeave => self.personal_leave_days,
        }
    }

    /// Fraction of the window labeled `kind`, 0.0 when the window is
    /// empty.
    pub fn share(&self, kind: DayKind) -> f64 {
        ratio(self.count(kind), self.total())
    }

    /// Fraction of the window spent working.
    pub fn work_ratio(&self) -> f64 {
        self.share(DayKind::Work)
    }

    /// Fraction of the window not spent working (weekend + holiday +
    /// personal leave combined).
    pub fn break_ratio(&self) -> f64 {
        let breaks = self.weekend_days + self.holiday_days + self.personal_leave_days;
        ratio(breaks, self.total())
    }

    /// Non-zero kinds as labeled chart rows, in fixed kind order.
    pub fn breakdown(&self, lang: Lang) -> Vec<BreakdownEntry> {
        [DayKind::Work, DayKind::Weekend, DayKind::Holiday, DayKind::PersonalLeave]
            .into_iter()
            .map(|kind| BreakdownEntry {
                kind,
                label: kind.label(lang),
                count: self.count(kind),
                share: self.share(kind),
            })
            .filter(|entry| entry.count > 0)
            .collect()
    }
}

fn ratio(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(count) / f64::from(total)
    }
}

/// One row of a day-distribution chart.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownEntry {
    pub kind: DayKind,
    pub label: &'static str,
    pub count: u32,
    pub share: f64,
}

/// Classify every date in `[start, end]` and accumulate per-kind counts.
///
/// `start > end` yields all-zero counts.
pub fn aggregate(start: NaiveDate, end: NaiveDate, classifier: &DayClassifier<'_>) -> PeriodStats {
    let mut stats = PeriodStats::default();
    let mut current = start;
    while current <= end {
        match classifier.classify(current) {
            DayKind::Work => stats.work_days += 1,
            DayKind::Weekend => stats.weekend_days += 1,
            DayKind::Holiday => stats.holiday_days += 1,
            DayKind::PersonalLeave => stats.personal_leave_days += 1,
        }
        current = match current.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{HolidayCalendar, WorkConfiguration, WorkSystem};
    use crate::shift::ShiftPattern;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config(weekend: &[u8], work_system: WorkSystem) -> WorkConfiguration {
        WorkConfiguration {
            country: "ae".into(),
            weekend_days: weekend.iter().copied().collect::<BTreeSet<u8>>(),
            work_system,
        }
    }

    #[test]
    fn month_bounds_cover_whole_month() {
        let (start, end) = Period::Month.bounds(date(2024, 2, 15));
        assert_eq!(start, date(2024, 2, 1));
        assert_eq!(end, date(2024, 2, 29)); // leap year
    }

    #[test]
    fn quarter_bounds_are_january_anchored() {
        let (start, end) = Period::Quarter.bounds(date(2024, 8, 6));
        assert_eq!(start, date(2024, 7, 1));
        assert_eq!(end, date(2024, 9, 30));
        let (start, end) = Period::Quarter.bounds(date(2024, 12, 31));
        assert_eq!(start, date(2024, 10, 1));
        assert_eq!(end, date(2024, 12, 31));
    }

    #[test]
    fn year_bounds() {
        let (start, end) = Period::Year.bounds(date(2025, 7, 1));
        assert_eq!(start, date(2025, 1, 1));
        assert_eq!(end, date(2025, 12, 31));
    }

    #[test]
    fn period_labels() {
        let today = date(2026, 8, 6);
        assert_eq!(Period::Month.label(Lang::En, today), "August 2026");
        assert_eq!(Period::Quarter.label(Lang::En, today), "Q3 2026");
        assert_eq!(Period::Quarter.label(Lang::Ar, today), "الربع 3 - 2026");
        assert_eq!(Period::Year.label(Lang::En, today), "2026");
    }

    #[test]
    fn counters_sum_to_range_length() {
        let cfg = config(&[5, 6], WorkSystem::Official);
        let holidays = HolidayCalendar::for_country("ae");
        let classifier = DayClassifier::new(&cfg, &holidays, None);
        let stats = aggregate(date(2024, 1, 1), date(2024, 1, 31), &classifier);
        assert_eq!(stats.total(), 31);
        // January 2024: 8 Fri/Sat days; Jan 1 is a holiday on a Monday.
        assert_eq!(stats.weekend_days, 8);
        assert_eq!(stats.holiday_days, 1);
        assert_eq!(stats.work_days, 22);
    }

    #[test]
    fn inverted_range_yields_zeros() {
        let cfg = config(&[5, 6], WorkSystem::Official);
        let holidays = HolidayCalendar::empty();
        let classifier = DayClassifier::new(&cfg, &holidays, None);
        let stats = aggregate(date(2024, 2, 1), date(2024, 1, 1), &classifier);
        assert_eq!(stats, PeriodStats::default());
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn empty_stats_shares_are_zero() {
        let stats = PeriodStats::default();
        assert_eq!(stats.work_ratio(), 0.0);
        assert_eq!(stats.break_ratio(), 0.0);
        assert_eq!(stats.share(DayKind::Holiday), 0.0);
        assert!(stats.breakdown(Lang::En).is_empty());
    }

    #[test]
    fn shift_leave_shows_up_in_counts() {
        let cfg = config(&[], WorkSystem::Shift);
        let holidays = HolidayCalendar::empty();
        let pattern = ShiftPattern {
            start_date: date(2024, 1, 1),
            work_days: 4,
            leave_days: 2,
            offset: 0,
            start_with_work: true,
        };
        let classifier = DayClassifier::new(&cfg, &holidays, Some(&pattern));
        // Two full cycles.
        let stats = aggregate(date(2024, 1, 1), date(2024, 1, 12), &classifier);
        assert_eq!(stats.work_days, 8);
        assert_eq!(stats.personal_leave_days, 4);
        assert_eq!(stats.total(), 12);
    }

    #[test]
    fn breakdown_drops_zero_rows_and_shares_sum_to_one() {
        let cfg = config(&[5, 6], WorkSystem::Official);
        let holidays = HolidayCalendar::empty();
        let classifier = DayClassifier::new(&cfg, &holidays, None);
        let stats = aggregate(date(2024, 1, 1), date(2024, 1, 7), &classifier);
        let rows = stats.breakdown(Lang::En);
        assert_eq!(rows.len(), 2); // work + weekend only
        let total_share: f64 = rows.iter().map(|r| r.share).sum();
        assert!((total_share - 1.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn sum_invariant_holds_for_arbitrary_ranges(
            start_delta in 0i64..=730,
            len in 0i64..=120,
            weekend in proptest::collection::btree_set(0u8..=6, 0..=3),
        ) {
            let cfg = WorkConfiguration {
                country: "ae".into(),
                weekend_days: weekend,
                work_system: WorkSystem::Official,
            };
            let holidays = HolidayCalendar::for_country("ae");
            let classifier = DayClassifier::new(&cfg, &holidays, None);
            let start = date(2024, 1, 1) + chrono::Duration::days(start_delta);
            let end = start + chrono::Duration::days(len);
            let stats = aggregate(start, end, &classifier);
            prop_assert_eq!(i64::from(stats.total()), len + 1);
        }
    }
}
