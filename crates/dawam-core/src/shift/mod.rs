//! Repeating work/leave cycle calculator.
//!
//! A shift pattern is a strictly periodic labeling of calendar days,
//! anchored at `start_date + offset` and repeating every
//! `work_days + leave_days` days, independent of month and year
//! boundaries. Cycle position uses Euclidean modulo so dates before the
//! anchor get the same well-defined, cycle-consistent answer as dates
//! after it.

use chrono::{Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A repeating work/leave pattern definition.
///
/// `work_days` and `leave_days` are positive; the editing surface bounds
/// them to 1..=14 but the calculator tolerates any positive values. Both
/// zero is a caller contract violation (the cycle length must be
/// positive) and is not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPattern {
    pub start_date: NaiveDate,
    pub work_days: u32,
    pub leave_days: u32,
    /// Days to shift the anchor before computing cycle position. May be
    /// negative.
    #[serde(default)]
    pub offset: i64,
    /// Whether the cycle begins with the work block or the leave block.
    #[serde(default = "default_start_with_work")]
    pub start_with_work: bool,
}

fn default_start_with_work() -> bool {
    true
}

impl Default for ShiftPattern {
    fn default() -> Self {
        Self::starting(Utc::now().date_naive())
    }
}

impl ShiftPattern {
    /// The 4-on/2-off work-first pattern anchored at `start_date`.
    pub fn starting(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            work_days: 4,
            leave_days: 2,
            offset: 0,
            start_with_work: true,
        }
    }

    /// Full cycle length in days.
    pub fn cycle_length(&self) -> i64 {
        i64::from(self.work_days) + i64::from(self.leave_days)
    }

    /// The offset-adjusted reference date cycle positions are computed
    /// from.
    pub fn anchor(&self) -> NaiveDate {
        if self.offset >= 0 {
            self.start_date
                .checked_add_days(Days::new(self.offset as u64))
                .unwrap_or(self.start_date)
        } else {
            self.start_date
                .checked_sub_days(Days::new(self.offset.unsigned_abs()))
                .unwrap_or(self.start_date)
        }
    }

    /// Zero-based position of `date` within the cycle, always in
    /// `[0, cycle_length)` even for dates before the anchor.
    pub fn position_in_cycle(&self, date: NaiveDate) -> i64 {
        let days_since_anchor = (date - self.anchor()).num_days();
        days_since_anchor.rem_euclid(self.cycle_length())
    }

    /// One-based cycle number, counting from the anchor's cycle. Dates
    /// before the anchor get zero or negative numbers.
    pub fn cycle_number(&self, date: NaiveDate) -> i64 {
        let days_since_anchor = (date - self.anchor()).num_days();
        days_since_anchor.div_euclid(self.cycle_length()) + 1
    }

    /// Whether the pattern places `date` in its work block.
    pub fn is_work_day(&self, date: NaiveDate) -> bool {
        let position = self.position_in_cycle(date);
        if self.start_with_work {
            position < i64::from(self.work_days)
        } else {
            position >= i64::from(self.leave_days)
        }
    }

    /// Whether the pattern places `date` in its leave block.
    pub fn is_leave_day(&self, date: NaiveDate) -> bool {
        !self.is_work_day(date)
    }

    /// Classify `date` against the pattern.
    pub fn day_at(&self, date: NaiveDate) -> ShiftDay {
        ShiftDay {
            date,
            is_work_day: self.is_work_day(date),
            day_in_cycle: self.position_in_cycle(date) as u32 + 1,
            cycle_number: self.cycle_number(date),
        }
    }

    /// Lazy, finite, restartable sequence of `count` classified days
    /// starting at `from`. A pure function of its inputs; no state is
    /// carried between calls.
    pub fn preview(&self, from: NaiveDate, count: usize) -> Preview<'_> {
        Preview { pattern: self, next: from, remaining: count }
    }
}

/// One classified day of a pattern preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDay {
    pub date: NaiveDate,
    pub is_work_day: bool,
    /// One-based position within the cycle.
    pub day_in_cycle: u32,
    /// One-based cycle number relative to the anchor.
    pub cycle_number: i64,
}

/// Iterator over consecutive classified days. See
/// [`ShiftPattern::preview`].
#[derive(Debug, Clone)]
pub struct Preview<'a> {
    pattern: &'a ShiftPattern,
    next: NaiveDate,
    remaining: usize,
}

impl Iterator for Preview<'_> {
    type Item = ShiftDay;

    fn next(&mut self) -> Option<ShiftDay> {
        if self.remaining == 0 {
            return None;
        }
        let day = self.pattern.day_at(self.next);
        self.remaining -= 1;
        match self.next.succ_opt() {
            Some(next) => self.next = next,
            // Calendar ceiling reached; end the sequence after this day.
            None => self.remaining = 0,
        }
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Preview<'_> {}

/// Preview days grouped by calendar month, with per-month tallies.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGroup {
    pub year: i32,
    /// 1 = January .. 12 = December.
    pub month: u32,
    pub days: Vec<ShiftDay>,
    pub work_count: u32,
    pub leave_count: u32,
}

/// Group consecutive preview days by calendar month, preserving order.
pub fn group_by_month<I: IntoIterator<Item = ShiftDay>>(days: I) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for day in days {
        let (year, month) = (day.date.year(), day.date.month());
        let matches_last = groups
            .last()
            .is_some_and(|g| g.year == year && g.month == month);
        if !matches_last {
            groups.push(MonthGroup { year, month, days: Vec::new(), work_count: 0, leave_count: 0 });
        }
        let group = groups.last_mut().expect("group pushed above");
        if day.is_work_day {
            group.work_count += 1;
        } else {
            group.leave_count += 1;
        }
        group.days.push(day);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pattern_4_2(start_with_work: bool) -> ShiftPattern {
        ShiftPattern {
            start_date: date(2024, 1, 1),
            work_days: 4,
            leave_days: 2,
            offset: 0,
            start_with_work,
        }
    }

    #[test]
    fn work_first_cycle_layout() {
        let p = pattern_4_2(true);
        for d in 1..=4 {
            assert!(p.is_work_day(date(2024, 1, d)), "day {d} should be work");
        }
        assert!(p.is_leave_day(date(2024, 1, 5)));
        assert!(p.is_leave_day(date(2024, 1, 6)));
        for d in 7..=10 {
            assert!(p.is_work_day(date(2024, 1, d)), "day {d} should be work");
        }
    }

    #[test]
    fn leave_first_cycle_layout() {
        let p = pattern_4_2(false);
        assert!(p.is_leave_day(date(2024, 1, 1)));
        assert!(p.is_leave_day(date(2024, 1, 2)));
        for d in 3..=6 {
            assert!(p.is_work_day(date(2024, 1, d)), "day {d} should be work");
        }
        assert!(p.is_leave_day(date(2024, 1, 7)));
    }

    #[test]
    fn dates_before_anchor_are_cycle_consistent() {
        let p = pattern_4_2(true);
        // 2023-12-31 is one day before the anchor: last day of the
        // previous cycle, i.e. position 5, a leave day.
        assert_eq!(p.position_in_cycle(date(2023, 12, 31)), 5);
        assert!(p.is_leave_day(date(2023, 12, 31)));
        assert_eq!(p.position_in_cycle(date(2023, 12, 30)), 4);
        assert!(p.is_leave_day(date(2023, 12, 30)));
        assert!(p.is_work_day(date(2023, 12, 29)));
    }

    #[test]
    fn negative_offset_shifts_anchor_back() {
        let mut p = pattern_4_2(true);
        p.offset = -2;
        assert_eq!(p.anchor(), date(2023, 12, 30));
        // 2024-01-01 is now position 2: still inside the work block.
        assert_eq!(p.position_in_cycle(date(2024, 1, 1)), 2);
        assert!(p.is_work_day(date(2024, 1, 1)));
        assert!(p.is_leave_day(date(2024, 1, 3)));
    }

    #[test]
    fn preview_is_restartable_and_finite() {
        let p = pattern_4_2(true);
        let first: Vec<_> = p.preview(date(2024, 1, 1), 12).collect();
        let second: Vec<_> = p.preview(date(2024, 1, 1), 12).collect();
        assert_eq!(first.len(), 12);
        assert_eq!(first, second);
        assert_eq!(first[0].day_in_cycle, 1);
        assert_eq!(first[5].day_in_cycle, 6);
        assert_eq!(first[6].day_in_cycle, 1);
        assert_eq!(first[6].cycle_number, 2);
    }

    #[test]
    fn preview_groups_by_month() {
        let p = pattern_4_2(true);
        let groups = group_by_month(p.preview(date(2024, 1, 25), 14));
        assert_eq!(groups.len(), 2);
        assert_eq!((groups[0].year, groups[0].month), (2024, 1));
        assert_eq!((groups[1].year, groups[1].month), (2024, 2));
        assert_eq!(groups[0].days.len(), 7);
        assert_eq!(groups[1].days.len(), 7);
        let tallied: u32 = groups.iter().map(|g| g.work_count + g.leave_count).sum();
        assert_eq!(tallied, 14);
    }

    proptest! {
        #[test]
        fn cycle_is_periodic(
            work_days in 1u32..=14,
            leave_days in 1u32..=14,
            offset in -400i64..=400,
            start_with_work: bool,
            day_delta in -1000i64..=1000,
        ) {
            let p = ShiftPattern {
                start_date: date(2024, 1, 1),
                work_days,
                leave_days,
                offset,
                start_with_work,
            };
            let base = date(2024, 1, 1) + chrono::Duration::days(day_delta);
            let shifted = base + chrono::Duration::days(p.cycle_length());
            prop_assert_eq!(p.is_leave_day(base), p.is_leave_day(shifted));
        }

        #[test]
        fn position_is_always_in_range(
            work_days in 1u32..=14,
            leave_days in 1u32..=14,
            offset in -400i64..=400,
            day_delta in -1000i64..=1000,
        ) {
            let p = ShiftPattern {
                start_date: date(2024, 1, 1),
                work_days,
                leave_days,
                offset,
                start_with_work: true,
            };
            let d = date(2024, 1, 1) + chrono::Duration::days(day_delta);
            let position = p.position_in_cycle(d);
            prop_assert!(position >= 0);
            prop_assert!(position < p.cycle_length());
        }
    }
}
