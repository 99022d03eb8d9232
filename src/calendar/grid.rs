use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};

use super::lesson::LessonRecord;
use super::month::YearMonth;

/// Six full weeks, whatever the month length or starting weekday.
pub const GRID_DAYS: usize = 42;
pub const DAYS_IN_WEEK: usize = 7;

pub type DateBuckets = HashMap<NaiveDate, Vec<LessonRecord>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub lessons: Vec<LessonRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonthView {
    pub reference_month: YearMonth,
    /// Always [`GRID_DAYS`] consecutive days starting on a Sunday.
    pub days: Vec<CalendarDay>,
}

impl CalendarMonthView {
    pub fn grid_start(&self) -> NaiveDate {
        grid_start(self.reference_month)
    }

    pub fn grid_end(&self) -> NaiveDate {
        self.grid_start() + Days::new(GRID_DAYS as u64 - 1)
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(DAYS_IN_WEEK)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        let offset = date.signed_duration_since(self.grid_start()).num_days();
        usize::try_from(offset).ok().and_then(|index| self.days.get(index))
    }

    pub fn lesson_count(&self) -> usize {
        self.days.iter().map(|day| day.lessons.len()).sum()
    }

    /// Lessons of the displayed month itself, leading and trailing cells excluded.
    pub fn month_lessons(&self) -> impl Iterator<Item = &LessonRecord> {
        self.days
            .iter()
            .filter(|day| day.in_current_month)
            .flat_map(|day| day.lessons.iter())
    }
}

/// The Sunday on or before the first day of `month`.
pub fn grid_start(month: YearMonth) -> NaiveDate {
    let first = month.first_day();
    first - Days::new(u64::from(first.weekday().num_days_from_sunday()))
}

/// Groups lessons by calendar day, each bucket ordered by time of day.
///
/// The sort is stable: lessons sharing a time keep their input order.
/// Records whose date cannot be resolved are left out.
pub fn bucket_by_date(lessons: &[LessonRecord]) -> DateBuckets {
    let mut buckets = DateBuckets::new();
    for lesson in lessons {
        if let Some(day) = lesson.day() {
            buckets.entry(day).or_default().push(lesson.clone());
        }
    }
    for bucket in buckets.values_mut() {
        bucket.sort_by_key(LessonRecord::time_key);
    }
    buckets
}

/// Records that [`bucket_by_date`] skips, for the caller to report.
pub fn invalid_records(lessons: &[LessonRecord]) -> Vec<&LessonRecord> {
    lessons.iter().filter(|lesson| lesson.day().is_none()).collect()
}

pub fn build_month_view(
    reference_month: YearMonth,
    lessons: &[LessonRecord],
    today: NaiveDate,
) -> CalendarMonthView {
    let mut buckets = bucket_by_date(lessons);

    let days = grid_start(reference_month)
        .iter_days()
        .take(GRID_DAYS)
        .map(|date| CalendarDay {
            date,
            in_current_month: reference_month.contains(date),
            is_today: date == today,
            lessons: buckets.remove(&date).unwrap_or_default(),
        })
        .collect();

    CalendarMonthView {
        reference_month,
        days,
    }
}
